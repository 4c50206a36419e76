use serde::Deserialize;
use std::collections::HashMap;
use tracing::debug;

use crate::config::TmdbConfig;
use crate::error::Result;
use crate::models::{CastMember, CrewMember, Movie};

use super::read_json;

/// Client for the TMDB movie-metadata API.
///
/// Translates TMDB's wire shapes into the [`Movie`] view model: the 0-10
/// vote average becomes a 0-5 rating, genre id arrays are resolved to
/// names, and relative image paths are expanded against the configured
/// image base. Each call re-fetches; there is no cross-call cache.
#[derive(Clone)]
pub struct TmdbClient {
    http: reqwest::Client,
    base_url: String,
    image_base: String,
    api_key: String,
}

// --- TMDB wire shapes ---

#[derive(Debug, Deserialize)]
struct ListResponse {
    results: Vec<ListMovie>,
}

#[derive(Debug, Deserialize)]
struct ListMovie {
    id: i64,
    title: String,
    #[serde(default)]
    overview: String,
    vote_average: f64,
    #[serde(default)]
    genre_ids: Vec<i64>,
    poster_path: Option<String>,
    backdrop_path: Option<String>,
    original_language: Option<String>,
    release_date: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenreListResponse {
    genres: Vec<Genre>,
}

#[derive(Debug, Deserialize)]
struct Genre {
    id: i64,
    name: String,
}

#[derive(Debug, Deserialize)]
struct MovieDetail {
    id: i64,
    title: String,
    #[serde(default)]
    overview: String,
    vote_average: f64,
    #[serde(default)]
    genres: Vec<Genre>,
    runtime: Option<u32>,
    poster_path: Option<String>,
    backdrop_path: Option<String>,
    original_language: Option<String>,
    release_date: Option<String>,
    credits: Option<Credits>,
}

#[derive(Debug, Default, Deserialize)]
struct Credits {
    #[serde(default)]
    cast: Vec<CastCredit>,
    #[serde(default)]
    crew: Vec<CrewCredit>,
}

#[derive(Debug, Deserialize)]
struct CastCredit {
    name: String,
    character: Option<String>,
    profile_path: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CrewCredit {
    name: String,
    job: String,
}

/// TMDB rates 0-10; the storefront renders 0-5 stars, one decimal.
pub fn five_point_rating(vote_average: f64) -> f32 {
    ((vote_average / 2.0) * 10.0).round() as f32 / 10.0
}

impl TmdbClient {
    pub fn from_config(config: &TmdbConfig, http: reqwest::Client) -> Self {
        Self {
            http,
            base_url: config.base_url.clone(),
            image_base: config.image_base.clone(),
            api_key: config.api_key.clone(),
        }
    }

    fn image_url(&self, path: Option<&str>) -> Option<String> {
        path.map(|p| format!("{}{}", self.image_base, p))
    }

    async fn genre_table(&self) -> Result<HashMap<i64, String>> {
        let response = self
            .http
            .get(format!("{}/genre/movie/list", self.base_url))
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await?;
        let list: GenreListResponse = read_json(response).await?;
        Ok(list.genres.into_iter().map(|g| (g.id, g.name)).collect())
    }

    async fn fetch_list(&self, path: &str, extra: &[(&str, &str)]) -> Result<Vec<Movie>> {
        let genres = self.genre_table().await?;
        let mut query: Vec<(&str, &str)> = vec![("api_key", self.api_key.as_str())];
        query.extend_from_slice(extra);

        let response = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .query(&query)
            .send()
            .await?;
        let list: ListResponse = read_json(response).await?;
        debug!("tmdb {}: {} movies", path, list.results.len());

        Ok(list
            .results
            .into_iter()
            .map(|m| Movie {
                id: m.id,
                title: m.title,
                overview: m.overview,
                rating: five_point_rating(m.vote_average),
                genres: m
                    .genre_ids
                    .iter()
                    .filter_map(|id| genres.get(id).cloned())
                    .collect(),
                duration_minutes: None,
                language: m.original_language,
                release_date: m.release_date,
                poster_url: self.image_url(m.poster_path.as_deref()),
                backdrop_url: self.image_url(m.backdrop_path.as_deref()),
                cast: Vec::new(),
                crew: Vec::new(),
            })
            .collect())
    }

    pub async fn now_playing(&self) -> Result<Vec<Movie>> {
        self.fetch_list("/movie/now_playing", &[]).await
    }

    pub async fn popular(&self) -> Result<Vec<Movie>> {
        self.fetch_list("/movie/popular", &[]).await
    }

    pub async fn search(&self, query: &str) -> Result<Vec<Movie>> {
        self.fetch_list("/search/movie", &[("query", query)]).await
    }

    /// Full movie detail with credits in a single request.
    pub async fn movie(&self, id: i64) -> Result<Movie> {
        let response = self
            .http
            .get(format!("{}/movie/{}", self.base_url, id))
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("append_to_response", "credits"),
            ])
            .send()
            .await?;
        let detail: MovieDetail = read_json(response).await?;
        let credits = detail.credits.unwrap_or_default();

        Ok(Movie {
            id: detail.id,
            title: detail.title,
            overview: detail.overview,
            rating: five_point_rating(detail.vote_average),
            genres: detail.genres.into_iter().map(|g| g.name).collect(),
            duration_minutes: detail.runtime,
            language: detail.original_language,
            release_date: detail.release_date,
            poster_url: self.image_url(detail.poster_path.as_deref()),
            backdrop_url: self.image_url(detail.backdrop_path.as_deref()),
            cast: credits
                .cast
                .into_iter()
                .map(|c| CastMember {
                    name: c.name,
                    character: c.character,
                    profile_url: c
                        .profile_path
                        .map(|p| format!("{}{}", self.image_base, p)),
                })
                .collect(),
            crew: credits
                .crew
                .into_iter()
                .map(|c| CrewMember {
                    name: c.name,
                    job: c.job,
                })
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_is_halved_to_five_point_scale() {
        assert_eq!(five_point_rating(8.4), 4.2);
        assert_eq!(five_point_rating(10.0), 5.0);
        assert_eq!(five_point_rating(0.0), 0.0);
    }

    #[test]
    fn rating_rounds_to_one_decimal() {
        assert_eq!(five_point_rating(7.25), 3.6);
    }
}

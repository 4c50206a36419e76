use serde::{Deserialize, Serialize};

/// Movie view model, already translated from the TMDB wire shape:
/// rating on the 0-5 scale, genre ids resolved to names, image paths
/// expanded to full URLs. Read-only; never mutated after fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub overview: String,
    /// 0-5, derived from TMDB's 0-10 vote average.
    pub rating: f32,
    pub genres: Vec<String>,
    pub duration_minutes: Option<u32>,
    pub language: Option<String>,
    pub release_date: Option<String>,
    pub poster_url: Option<String>,
    pub backdrop_url: Option<String>,
    #[serde(default)]
    pub cast: Vec<CastMember>,
    #[serde(default)]
    pub crew: Vec<CrewMember>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CastMember {
    pub name: String,
    pub character: Option<String>,
    pub profile_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrewMember {
    pub name: String,
    pub job: String,
}

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use boxoffice::{config::Config, Storefront};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.app.rust_log))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting boxoffice storefront client");

    let storefront = Storefront::new(config)?;
    match storefront.current_user() {
        Some(user) => info!("resumed session for {}", user.email),
        None => info!("no stored session, browsing anonymously"),
    }

    // Smoke pass over both catalogs.
    let movies = storefront.tmdb.now_playing().await?;
    info!("{} movies now playing", movies.len());
    for movie in movies.iter().take(5) {
        info!("  {} ({} / 5)", movie.title, movie.rating);
    }

    match storefront.catalog.events().await {
        Ok(events) => info!("{} upcoming events", events.len()),
        Err(e) => info!("event catalog unavailable: {}", e),
    }

    Ok(())
}

use serde::Deserialize;
use std::env;

// Top-level configuration container for the storefront client.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub backend: BackendConfig,
    pub tmdb: TmdbConfig,
    pub storage: StorageConfig,
    pub payment: PaymentConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Base URL of the public-facing frontend, used to build shareable
    /// ticket links (`{frontend_base}/ticket/{code}`).
    pub frontend_base: String,
    pub rust_log: String,
}

// Booking/auth/venue backend settings.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
}

// TMDB movie-metadata API settings.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbConfig {
    pub base_url: String,
    pub image_base: String,
    pub api_key: String,
}

// Local persistent store (the browser localStorage analog).
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    pub path: String,
}

// Simulated payment settings. No real gateway exists behind this.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentConfig {
    pub processing_delay_ms: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            app: AppConfig {
                frontend_base: env::var("FRONTEND_BASE_URL")
                    .unwrap_or_else(|_| "http://localhost:3000".to_string()),
                rust_log: env::var("RUST_LOG")
                    .unwrap_or_else(|_| "boxoffice=debug".to_string()),
            },
            backend: BackendConfig {
                base_url: env::var("BACKEND_BASE_URL")
                    .unwrap_or_else(|_| "http://localhost:8000/api".to_string()),
                timeout_seconds: env::var("BACKEND_TIMEOUT_SECONDS")
                    .unwrap_or_else(|_| "30".to_string())
                    .parse()
                    .expect("BACKEND_TIMEOUT_SECONDS must be a valid number"),
            },
            tmdb: TmdbConfig {
                base_url: env::var("TMDB_BASE_URL")
                    .unwrap_or_else(|_| "https://api.themoviedb.org/3".to_string()),
                image_base: env::var("TMDB_IMAGE_BASE")
                    .unwrap_or_else(|_| "https://image.tmdb.org/t/p/w500".to_string()),
                api_key: env::var("TMDB_API_KEY").expect("TMDB_API_KEY must be set"),
            },
            storage: StorageConfig {
                path: env::var("STORE_PATH")
                    .unwrap_or_else(|_| ".boxoffice/store.json".to_string()),
            },
            payment: PaymentConfig {
                processing_delay_ms: env::var("PAYMENT_PROCESSING_DELAY_MS")
                    .unwrap_or_else(|_| "1500".to_string())
                    .parse()
                    .expect("PAYMENT_PROCESSING_DELAY_MS must be a valid number"),
            },
        }
    }
}

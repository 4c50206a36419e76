use thiserror::Error;

/// Errors surfaced by the storefront client.
///
/// Every network or decode failure becomes a value here; nothing in the
/// library panics on a bad response. View code decides whether an error
/// renders as an empty state, an inline message, or a notification.
#[derive(Debug, Error)]
pub enum StorefrontError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("backend returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("{0} not found")]
    NotFound(String),

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("local store error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("ticket rendering failed: {0}")]
    Ticket(String),
}

pub type Result<T> = std::result::Result<T, StorefrontError>;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GrapherError {
    #[cfg(feature = "http")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Scryfall API error: {message}")]
    Api { message: String },

    #[error("Unknown graph preset: {0}")]
    UnknownPreset(String),
}

pub type Result<T> = std::result::Result<T, GrapherError>;

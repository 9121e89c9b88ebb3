use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScreeningError {
    #[error("Upstream search failed with status {status}: {reason}")]
    Upstream { status: u16, reason: String },

    #[error("Upstream transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ScreeningError>;

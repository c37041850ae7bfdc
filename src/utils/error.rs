use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("API request failed: {0}")]
    Api(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid configuration value for {field}: {reason}")]
    InvalidConfigValue { field: String, reason: String },
}

pub type Result<T> = std::result::Result<T, ContentError>;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Response from {url} (page {page}) must be a list, instead got {found}")]
    NotAList {
        url: String,
        page: u32,
        found: &'static str,
    },

    #[error("Record {index} is missing required field `{field}`")]
    MissingField { field: &'static str, index: usize },

    #[error("GitHub API returned {status} for {url} (page {page})")]
    PageFailed { url: String, page: u32, status: u16 },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn is_schema_error(&self) -> bool {
        matches!(self, Error::NotAList { .. } | Error::MissingField { .. })
    }
}

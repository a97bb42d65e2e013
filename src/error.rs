use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Input is missing required column: {column}")]
    Schema { column: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn is_schema(&self) -> bool {
        matches!(self, Error::Schema { .. })
    }
}

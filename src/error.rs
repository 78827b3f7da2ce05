use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Pattern error: {0}")]
    PatternError(#[from] regex::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Notification error: {0}")]
    NotificationError(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
}

pub type Result<T> = std::result::Result<T, TrackerError>;

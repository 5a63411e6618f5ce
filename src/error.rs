use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Launch table is missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("Invalid payload range: {0}")]
    InvalidRange(String),
}

pub type DashResult<T> = Result<T, DashError>;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlowError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Config error: {0}")]
    ConfigError(#[from] serde_json::Error),
    #[error("Script error: {0}")]
    ScriptError(String),
}

pub type Result<T> = std::result::Result<T, FlowError>;

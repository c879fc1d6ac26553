use thiserror::Error;

#[derive(Debug, Error)]
pub enum CensusError {
    #[error("dictionary columns missing from data: {}", .columns.join(", "))]
    MissingColumns { columns: Vec<String> },
    #[error("unknown column: {0}")]
    UnknownColumn(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CensusError>;

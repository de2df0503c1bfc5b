use thiserror::Error;

#[derive(Debug, Error)]
pub enum CsvSourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV parse error ({context}): {message}")]
    Csv {
        context: &'static str,
        message: String,
    },
    #[error("missing column '{column}' in CSV header")]
    MissingColumn { column: &'static str },
    #[error("invalid time '{value}' at row {row}")]
    InvalidTime { row: u64, value: String },
}

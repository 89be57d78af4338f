use thiserror::Error;

#[derive(Debug, Error)]
pub enum CleanError {
    #[error("required column '{0}' is missing from the input table")]
    MissingColumn(String),
    #[error("column '{0}' is declared more than once")]
    DuplicateColumn(String),
    #[error("encode rule for '{column}' has an empty value mapping")]
    EmptyMapping { column: String },
    #[error("encode rule for '{column}' targets source column '{target}'")]
    EncodeTargetCollision { column: String, target: String },
    #[error("no candidate date formats configured")]
    NoDateFormats,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CleanError>;

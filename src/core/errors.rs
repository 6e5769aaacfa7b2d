use thiserror::Error;

#[derive(Error, Debug)]
pub enum LexmineError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Word not found: {0}")]
    WordNotFound(String),

    #[error("LexmineError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for LexmineError {
    fn from(error: std::io::Error) -> Self {
        LexmineError::Io(Box::new(error))
    }
}

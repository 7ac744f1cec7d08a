use scenematch_parse::InvalidName;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("parse failed: {0}")]
    Parse(#[from] InvalidName),

    #[cfg(feature = "storage")]
    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("invalid release filter pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("scene exceptions line {line}: {message}")]
    Exceptions { line: usize, message: String },

    #[error("config error: {0}")]
    Config(String),

    #[error("unknown show id {0}")]
    UnknownShow(i64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

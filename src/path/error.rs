use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("invalid percent-encoding at byte {index} in '{input}'")]
    InvalidPercentEncoding { input: String, index: usize },
    #[error("percent-decoded '{input}' is not valid UTF-8")]
    InvalidUtf8AfterDecoding { input: String },
}

pub type PathResult<T> = Result<T, PathError>;

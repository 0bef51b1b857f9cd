use thiserror::Error;

#[derive(Error, Debug)]
pub enum StackError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid image: {0}")]
    InvalidImage(String),

    #[error("insufficient stars: no input frame yielded a constellation")]
    InsufficientStars,

    #[error("bad usage: {0}")]
    UsageError(String),
}

pub type Result<T> = std::result::Result<T, StackError>;

use thiserror::Error;

/// Core-level errors
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Hour {0} is outside 0..=23")]
    HourOutOfRange(u32),

    #[error("Minute {0} is outside 0..=59")]
    MinuteOutOfRange(u32),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;

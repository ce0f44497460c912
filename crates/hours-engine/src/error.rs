//! Error types for hours-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HoursError {
    #[error("Unparseable time token: {0}")]
    UnparseableTime(String),

    #[error("Unknown day label: {0}")]
    UnknownDay(String),
}

pub type Result<T> = std::result::Result<T, HoursError>;

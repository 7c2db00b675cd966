use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LeapYearError {
    #[error("Year input is empty")]
    EmptyInput,

    #[error("Invalid year '{value}': {source}")]
    InvalidYear {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Logger error: {message}")]
    LoggerError { message: String },
}

pub type Result<T> = std::result::Result<T, LeapYearError>;

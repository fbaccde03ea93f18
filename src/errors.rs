use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    Network(String),
    Storage(String),
    Serialization(String),
    Busy,
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Storage(message) => write!(formatter, "Storage error: {message}"),
            AppError::Serialization(message) => {
                write!(formatter, "Serialization error: {message}")
            }
            AppError::Busy => write!(formatter, "A submission is already in progress"),
        }
    }
}

impl std::error::Error for AppError {}

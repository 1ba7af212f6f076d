use thiserror::Error as ThisError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Resource exhausted: requested {requested} bytes, limit is {limit} bytes")]
    ResourceExhausted { requested: usize, limit: usize },

    #[error("Index {index} out of range for length {size}")]
    OutOfRange { index: i64, size: i64 },

    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Error::InvalidArgument(message.into())
    }

    pub fn resource_exhausted(requested: usize, limit: usize) -> Self {
        Error::ResourceExhausted { requested, limit }
    }

    pub fn out_of_range(index: i64, size: i64) -> Self {
        Error::OutOfRange { index, size }
    }

    pub fn unsupported_type(message: impl Into<String>) -> Self {
        Error::UnsupportedType(message.into())
    }

    pub fn config(message: impl Into<String>) -> Self {
        Error::Config(message.into())
    }

    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Error::OutOfRange { .. })
    }
}

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum AmortizeError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

use thiserror::Error;

pub const INVALID_INPUT_MESSAGE: &str = "Input must be a number";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("{}", INVALID_INPUT_MESSAGE)]
    InvalidInput,

    #[error("task canceled")]
    Canceled,

    #[error("scheduler already initialized")]
    AlreadyInitialized,
}

impl From<tokio::sync::watch::error::RecvError> for Error {
    fn from(_: tokio::sync::watch::error::RecvError) -> Self {
        Error::Canceled
    }
}

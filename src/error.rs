//! Errors surfaced by the fallible pipeline operations.
//!
//! The pipeline itself has no failure modes. Every error originates in a
//! caller-supplied closure; the fallible operations stop at the first one
//! and hand it back unchanged.

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("{0}")]
    Message(String),

    #[error(transparent)]
    Other(Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    pub fn new_message(message: impl Into<String>) -> Self {
        Error::Message(message.into())
    }

    pub fn new_other<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Other(Box::new(error))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

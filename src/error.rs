use thiserror::Error;

use crate::Face;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("face {0} is not on the die")]
    NotFound(Face),
    #[error("illegal state: {0}")]
    IllegalState(&'static str),
}

impl Error {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Error::InvalidArgument(message.into())
    }
}

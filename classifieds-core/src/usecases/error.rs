use thiserror::Error;

use crate::{gateways, version::InvalidState};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    InvalidState(#[from] InvalidState),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object has been modified concurrently, please reload")]
    Conflict,
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error(transparent)]
    Gateway(anyhow::Error),
}

/// Invalid input that the user can correct and resubmit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("A rejection requires a reason")]
    EmptyRejectionReason,
    #[error("The ad has no pending version")]
    NoPendingVersion,
    #[error("Missing email")]
    Email,
    #[error("Missing password")]
    Password,
    #[error("Missing first name")]
    FirstName,
    #[error("Missing last name")]
    LastName,
    #[error("Missing name")]
    Name,
    #[error("Missing category")]
    Category,
    #[error("{0}")]
    Rejected(String),
}

impl From<gateways::Error> for Error {
    fn from(err: gateways::Error) -> Self {
        match err {
            gateways::Error::NotFound => Self::NotFound,
            gateways::Error::Conflict => Self::Conflict,
            gateways::Error::Unauthorized => Self::Unauthorized,
            gateways::Error::Validation(msg) => Self::Validation(ValidationError::Rejected(msg)),
            gateways::Error::Other(err) => Self::Gateway(err),
        }
    }
}

//! Access to the backend of the classifieds platform.
//!
//! Each gateway covers a single resource of the backend API.
//! Related resources are only referenced by their id.

use thiserror::Error;

mod ads;
mod auth;
mod categories;
mod users;

pub use self::{ads::*, auth::*, categories::*, users::*};

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object has been modified concurrently")]
    Conflict,
    #[error("Not authorized")]
    Unauthorized,
    #[error("Invalid request: {0}")]
    Validation(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

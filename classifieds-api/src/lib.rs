//! Blocking client of the classifieds backend REST API.
//!
//! The [`AdminApi`] keeps the session cookies of a logged in
//! manager and implements the gateways of `classifieds-core`.

use reqwest::blocking::Response;
use serde::de::DeserializeOwned;
use thiserror::Error;

mod admin;
mod gateways;

pub use self::admin::*;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    #[error("{0}")]
    Fetch(String),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("{0}")]
    Api(#[from] classifieds_boundary::Error),
}

impl Error {
    /// The HTTP status of an error response.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api(err) => Some(err.status_code),
            Self::Fetch(_) | Self::Url(_) => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Fetch(format!("{err}"))
    }
}

pub fn into_json<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    // ensure we've got 2xx status
    if response.status().is_success() {
        Ok(response.json()?)
    } else {
        Err(into_api_error(response).into())
    }
}

/// Like [`into_json`] but ignores the body of successful responses.
pub fn into_empty(response: Response) -> Result<()> {
    if response.status().is_success() {
        Ok(())
    } else {
        Err(into_api_error(response).into())
    }
}

fn into_api_error(response: Response) -> classifieds_boundary::Error {
    let status = response.status();
    let body = response.text().unwrap_or_default();
    match serde_json::from_str::<classifieds_boundary::Error>(&body) {
        Ok(mut err) => {
            // The status line is authoritative
            err.status_code = status.as_u16();
            err
        }
        Err(_) => {
            log::debug!("Unexpected error response ({status}): {body}");
            let message = status.canonical_reason().unwrap_or("Unknown error");
            classifieds_boundary::Error {
                status_code: status.as_u16(),
                message: classifieds_boundary::ErrorMessage::Single(message.to_owned()),
                error: None,
            }
        }
    }
}

//! Error type for the Github Client

use serde::Deserialize;
use std::{borrow::Cow, io};
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    /// A required string argument was empty or all whitespace. Raised before
    /// any request is issued.
    #[error("argument `{0}` must not be empty or whitespace")]
    BlankArgument(&'static str),

    /// A numeric identifier was zero; `0` is never a valid id in this API.
    #[error("argument `{0}` must be a positive id")]
    InvalidId(&'static str),

    /// A required collection argument contained no elements.
    #[error("argument `{0}` must not be an empty collection")]
    EmptyList(&'static str),

    #[error("Io error")]
    Io(#[from] io::Error),

    #[error("reqwest error")]
    Reqwest(#[from] reqwest::Error),

    #[error("json error")]
    Json(#[from] serde_json::Error),

    #[error("`{0}`")]
    Message(Cow<'static, str>),

    /// The remote call completed with an unexpected status code; carries the
    /// status and Github's decoded error body.
    #[error("`{0}` `{1:?}`")]
    GithubClientError(reqwest::StatusCode, GithubClientError),

    #[error("RateLimit")]
    RateLimit,
}

impl From<&'static str> for Error {
    fn from(error: &'static str) -> Self {
        Error::Message(error.into())
    }
}

impl From<String> for Error {
    fn from(error: String) -> Self {
        Error::Message(error.into())
    }
}

// Github Error Responses
// https://developer.github.com/v3/#client-errors
#[derive(Debug, Default, Deserialize)]
pub struct GithubClientError {
    pub message: Option<String>,
    pub errors: Option<Vec<GithubClientErrorType>>,
    pub documentation_url: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum GithubClientErrorType {
    Message(String),
    Code {
        resource: String,
        field: String,
        code: String,
    },
}

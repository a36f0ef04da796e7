//! Errors for this crate.

use crate::query::Query;
use reqwest::StatusCode;

#[derive(thiserror::Error, Debug)]
pub enum InvalidPhenoDbUrl {
    #[error("Given URL does not end with \"/\": {0}")]
    TrailingSlash(String),

    #[error("Given URL does not start with \"http://\" or \"https://\": {0}")]
    Protocol(String),
}

aliri_braid::from_infallible!(InvalidPhenoDbUrl);

/// Reasons why `authenticate` did not produce a session.
#[derive(thiserror::Error, Debug)]
pub enum AuthenticationError {
    /// The server refused the user name and password.
    #[error("authentication refused ({status:?} {reason:?}): {text}")]
    Refused {
        status: StatusCode,
        reason: &'static str,
        text: String,
    },

    /// The request did not complete, or the body was not the expected JSON.
    #[error(transparent)]
    Raw(#[from] reqwest::Error),
}

/// Errors representing failed interactions with the Phenotype Database.
#[derive(thiserror::Error, Debug)]
pub enum PhenoDbError {
    /// The client has no session because authentication failed.
    #[error("not authenticated")]
    NotAuthenticated,

    /// The session's sequence number reached its maximum, so no further
    /// validation hash can be computed.
    #[error("session sequence number exhausted")]
    SequenceOverflow,

    /// HTTP 403: the server rejected the validation hash or device ID.
    #[error("authentication error: validation rejected by server")]
    ValidationRejected,

    /// Any other non-200 response.
    #[error("unknown error ({status:?} {reason:?}): {text}")]
    Status {
        status: StatusCode,
        reason: &'static str,
        text: String,
    },

    /// Error response without explanation, or failure before a response arrived.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The response body was not valid JSON.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// The response was JSON, but did not contain the expected top-level key.
    #[error("response to {query} has no \"{key}\" field")]
    MissingKey { query: Query, key: &'static str },

    #[error("{query} requires a {param}")]
    MissingToken { query: Query, param: &'static str },

    #[error("{query} does not take a token")]
    UnexpectedToken { query: Query },
}

/// Turn a non-200 response into the matching [PhenoDbError].
pub(crate) fn check(
    res: reqwest::blocking::Response,
) -> Result<reqwest::blocking::Response, PhenoDbError> {
    let status = res.status();
    if status == StatusCode::OK {
        return Ok(res);
    }
    if status == StatusCode::FORBIDDEN {
        return Err(PhenoDbError::ValidationRejected);
    }
    let reason = status.canonical_reason().unwrap_or("unknown reason");
    let text = res.text()?;
    Err(PhenoDbError::Status {
        status,
        reason,
        text,
    })
}

/// Like [check], for the `authenticate` call, where every failure is a refusal.
pub(crate) fn check_auth(
    res: reqwest::blocking::Response,
) -> Result<reqwest::blocking::Response, AuthenticationError> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }
    let reason = status.canonical_reason().unwrap_or("unknown reason");
    let text = res.text()?;
    Err(AuthenticationError::Refused {
        status,
        reason,
        text,
    })
}

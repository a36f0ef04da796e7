//! Session state and the per-request validation hash.

use crate::device::md5_digest;
use crate::types::{ApiToken, Validation};
use std::fmt::{Debug, Formatter};

/// An authenticated session: the token issued by `authenticate` and a
/// sequence number which is incremented before every request.
#[derive(Clone)]
pub struct Session {
    api_token: ApiToken,
    sequence: u64,
    last_validation: Option<Validation>,
}

impl Session {
    pub fn new(api_token: ApiToken, sequence: u64) -> Self {
        Self {
            api_token,
            sequence,
            last_validation: None,
        }
    }

    pub fn api_token(&self) -> &ApiToken {
        &self.api_token
    }

    /// Sequence number of the most recent request, or the value returned by
    /// `authenticate` if no request was made yet.
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn last_validation(&self) -> Option<&Validation> {
        self.last_validation.as_ref()
    }

    /// Advance the sequence number and compute the validation hash for it.
    ///
    /// There is no rollback: the sequence number stays advanced even if the
    /// request using the hash fails. Returns `None`, leaving the session
    /// unchanged, once the sequence number cannot be advanced any further.
    pub fn next_validation(&mut self, api_key: &str) -> Option<Validation> {
        self.sequence = self.sequence.checked_add(1)?;
        let validation = validation_hash(self.api_token.as_str(), self.sequence, api_key);
        self.last_validation = Some(validation.clone());
        Some(validation)
    }
}

impl Debug for Session {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("api_token", &"***")
            .field("sequence", &self.sequence)
            .field("last_validation", &self.last_validation)
            .finish()
    }
}

/// `md5(api_token + sequence + api_key)`, with the sequence number in decimal.
pub fn validation_hash(api_token: &str, sequence: u64, api_key: &str) -> Validation {
    Validation::new(md5_digest(&format!("{}{}{}", api_token, sequence, api_key)))
}

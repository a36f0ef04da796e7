//! Account credentials and the `authenticate` call which exchanges them
//! for a [Session].

use crate::errors::{check_auth, AuthenticationError};
use crate::session::Session;
use crate::types::{ApiToken, DeviceId, PhenoDbUrl, Username};
use serde::Deserialize;
use serde_with::{serde_as, TryFromInto};
use std::fmt::{Debug, Formatter};

/// Phenotype Database account user name, password, and user API key.
#[derive(Clone)]
pub struct Credentials {
    pub username: Username,
    password: String,
    api_key: String,
}

impl Credentials {
    pub fn new(username: Username, password: String, api_key: String) -> Self {
        Self {
            username,
            password,
            api_key,
        }
    }

    pub(crate) fn password(&self) -> &str {
        &self.password
    }

    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .field("api_key", &"***")
            .finish()
    }
}

/// Body of a successful `authenticate` response.
#[serde_as]
#[derive(Deserialize)]
pub(crate) struct AuthenticateResponse {
    token: ApiToken,
    #[serde_as(as = "TryFromInto<WireSequence>")]
    sequence: u64,
}

/// Encodings of the sequence number seen in `authenticate` responses.
#[derive(Deserialize)]
#[serde(untagged)]
enum WireSequence {
    Integer(u64),
    Float(f64),
    Text(String),
}

/// 2^64, the smallest float which does not fit in a `u64`.
const U64_LIMIT: f64 = 18446744073709551616.0;

impl TryFrom<WireSequence> for u64 {
    type Error = String;

    fn try_from(value: WireSequence) -> Result<Self, Self::Error> {
        match value {
            WireSequence::Integer(n) => Ok(n),
            WireSequence::Float(f)
                if f.is_finite() && f.fract() == 0.0 && f >= 0.0 && f < U64_LIMIT =>
            {
                Ok(f as u64)
            }
            WireSequence::Float(f) => {
                Err(format!("sequence is not a non-negative integer: {}", f))
            }
            WireSequence::Text(s) => s
                .parse()
                .map_err(|_| format!("sequence is not a decimal integer: {:?}", s)),
        }
    }
}

impl From<AuthenticateResponse> for Session {
    fn from(value: AuthenticateResponse) -> Self {
        Session::new(value.token, value.sequence)
    }
}

/// `GET <url>/authenticate?deviceID=...` with HTTP Basic authentication.
pub(crate) fn authenticate(
    client: &reqwest::blocking::Client,
    url: &PhenoDbUrl,
    credentials: &Credentials,
    device_id: &DeviceId,
) -> Result<Session, AuthenticationError> {
    let res = client
        .get(url.endpoint("authenticate"))
        .query(&[("deviceID", device_id.as_str())])
        .basic_auth(credentials.username.as_str(), Some(credentials.password()))
        .send()?;
    let body: AuthenticateResponse = check_auth(res)?.json()?;
    Ok(body.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case(r#"{"token": "tok", "sequence": 41}"#)]
    #[case(r#"{"token": "tok", "sequence": "41"}"#)]
    #[case(r#"{"token": "tok", "sequence": 41.0}"#)]
    fn test_parse_authenticate_response(#[case] body: &str) {
        let res: AuthenticateResponse = serde_json::from_str(body).unwrap();
        let session = Session::from(res);
        assert_eq!(session.api_token().as_str(), "tok");
        assert_eq!(session.sequence(), 41);
        assert!(session.last_validation().is_none());
    }

    #[rstest]
    #[case(r#"{"sequence": 41}"#)]
    #[case(r#"{"token": "tok"}"#)]
    #[case(r#"{"token": "tok", "sequence": "forty-one"}"#)]
    #[case(r#"{"token": "tok", "sequence": 41.5}"#)]
    #[case(r#"{"token": "tok", "sequence": -1}"#)]
    #[case(r#"{"token": "tok", "sequence": 1e20}"#)]
    #[case(r#"{"token": "tok", "sequence": "41.0"}"#)]
    #[case(r#"{"token": "tok", "sequence": null}"#)]
    fn test_reject_bad_authenticate_response(#[case] body: &str) {
        assert!(serde_json::from_str::<AuthenticateResponse>(body).is_err());
    }

    #[test]
    fn test_parse_largest_sequence() {
        let body = format!(r#"{{"token": "tok", "sequence": {}}}"#, u64::MAX);
        let res: AuthenticateResponse = serde_json::from_str(&body).unwrap();
        assert_eq!(res.sequence, u64::MAX);
    }

    #[test]
    fn test_debug_hides_secrets() {
        let credentials = Credentials::new(
            Username::from_static("alice"),
            "hunter2".to_string(),
            "secret-key".to_string(),
        );
        let debug = format!("{:?}", credentials);
        assert!(debug.contains("alice"));
        assert!(!debug.contains("hunter2"));
        assert!(!debug.contains("secret-key"));
    }
}

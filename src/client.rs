mod resources;

use crate::auth::{authenticate, Credentials};
use crate::constants::DEFAULT_URL;
use crate::device::MachineFingerprint;
use crate::errors::{check, AuthenticationError, PhenoDbError};
use crate::query::Query;
use crate::session::Session;
use crate::types::{DeviceId, PhenoDbUrl, Username};
use log::{debug, error, info, warn};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde_json::Value;
use std::collections::BTreeMap;

/// Phenotype Database client.
///
/// Authenticates once, when it is connected. If authentication fails, the
/// client is still created, but every query returns
/// [PhenoDbError::NotAuthenticated]. Queries take `&mut self` because each
/// one advances the session's sequence number.
#[derive(Debug)]
pub struct PhenoDbClient {
    client: reqwest::blocking::Client,
    url: PhenoDbUrl,
    credentials: Credentials,
    device_id: DeviceId,
    session: Option<Session>,
    auth_error: Option<AuthenticationError>,
}

pub struct PhenoDbClientBuilder {
    client: reqwest::blocking::Client,
    url: PhenoDbUrl,
    credentials: Credentials,
    fingerprint: Option<MachineFingerprint>,
}

impl PhenoDbClientBuilder {
    pub(crate) fn new(url: PhenoDbUrl, credentials: Credentials) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::ClientBuilder::new()
            .default_headers(accept_json())
            .build()?;
        Ok(Self {
            client,
            url,
            credentials,
            fingerprint: None,
        })
    }

    /// Use the given machine descriptors instead of this machine's to derive the device ID.
    pub fn fingerprint(self, fingerprint: MachineFingerprint) -> Self {
        Self {
            fingerprint: Some(fingerprint),
            ..self
        }
    }

    /// Use a preconfigured HTTP client.
    pub fn http_client(self, client: reqwest::blocking::Client) -> Self {
        Self { client, ..self }
    }

    /// Derive the device ID and authenticate. Does not fail: see [PhenoDbClient].
    pub fn connect(self) -> PhenoDbClient {
        let fingerprint = self.fingerprint.unwrap_or_else(MachineFingerprint::local);
        let device_id = DeviceId::derive(&fingerprint, self.credentials.username.as_str());
        let (session, auth_error) =
            match authenticate(&self.client, &self.url, &self.credentials, &device_id) {
                Ok(session) => {
                    info!("Authentication successful.");
                    (Some(session), None)
                }
                Err(e) => {
                    error!("Authentication to {} failed: {}", &self.url, e);
                    (None, Some(e))
                }
            };
        PhenoDbClient {
            client: self.client,
            url: self.url,
            credentials: self.credentials,
            device_id,
            session,
            auth_error,
        }
    }
}

impl PhenoDbClient {
    /// Create a client builder.
    pub fn build(
        url: PhenoDbUrl,
        credentials: Credentials,
    ) -> Result<PhenoDbClientBuilder, reqwest::Error> {
        PhenoDbClientBuilder::new(url, credentials)
    }

    /// Connect to the public Phenotype Database.
    pub fn new(credentials: Credentials) -> Result<Self, reqwest::Error> {
        Ok(Self::build(DEFAULT_URL.clone(), credentials)?.connect())
    }

    /// Get the URL this client is connected to.
    pub fn url(&self) -> &PhenoDbUrl {
        &self.url
    }

    pub fn username(&self) -> &Username {
        &self.credentials.username
    }

    pub fn device_id(&self) -> &DeviceId {
        &self.device_id
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Why authentication failed, if it did.
    pub fn auth_error(&self) -> Option<&AuthenticationError> {
        self.auth_error.as_ref()
    }

    /// Call a remote operation and return its whole JSON response body.
    ///
    /// `validation` and `deviceID` are added to `parameters`, replacing any
    /// values given for those names.
    pub fn execute_query(
        &mut self,
        query: Query,
        parameters: &[(&str, &str)],
    ) -> Result<Value, PhenoDbError> {
        let Some(session) = self.session.as_mut() else {
            error!("{}: not authenticated", query);
            return Err(PhenoDbError::NotAuthenticated);
        };
        let Some(validation) = session.next_validation(self.credentials.api_key()) else {
            error!("{}: sequence number {} cannot be advanced", query, session.sequence());
            return Err(PhenoDbError::SequenceOverflow);
        };
        debug!("{} (sequence {})", query, session.sequence());

        let mut params: BTreeMap<&str, &str> = parameters.iter().copied().collect();
        params.insert("validation", validation.as_str());
        params.insert("deviceID", self.device_id.as_str());

        let result = send_query(&self.client, &self.url, query, &params);
        if let Err(e) = &result {
            match e {
                PhenoDbError::ValidationRejected => warn!("Authentication error. ({})", query),
                PhenoDbError::Status { .. } => warn!("Unknown error. {}: {}", query, e),
                _ => error!("{}: {}", query, e),
            }
        }
        result
    }

    /// Call a remote operation and extract its result key.
    ///
    /// `token` is the study or assay token for scoped queries, and must be
    /// `None` for [Query::Studies].
    pub fn fetch(&mut self, query: Query, token: Option<&str>) -> Result<Value, PhenoDbError> {
        let data = match (query.scope().param(), token) {
            (None, None) => self.execute_query(query, &[])?,
            (Some(param), Some(token)) => self.execute_query(query, &[(param, token)])?,
            (Some(param), None) => return Err(PhenoDbError::MissingToken { query, param }),
            (None, Some(_)) => return Err(PhenoDbError::UnexpectedToken { query }),
        };
        extract(query, data)
    }
}

fn send_query(
    client: &reqwest::blocking::Client,
    url: &PhenoDbUrl,
    query: Query,
    params: &BTreeMap<&str, &str>,
) -> Result<Value, PhenoDbError> {
    let res = client.get(url.endpoint(query.name())).query(params).send()?;
    let body = check(res)?.text()?;
    Ok(serde_json::from_str(&body)?)
}

fn extract(query: Query, data: Value) -> Result<Value, PhenoDbError> {
    let key = query.result_key();
    let value = match data {
        Value::Object(mut map) => map.remove(key),
        _ => None,
    };
    value.ok_or(PhenoDbError::MissingKey { query, key })
}

fn accept_json() -> HeaderMap {
    HeaderMap::from_iter([(ACCEPT, HeaderValue::from_static("application/json"))])
}

#![allow(dead_code)]

use httpmock::prelude::*;
use httpmock::Mock;
use phenodb::types::{DeviceId, PhenoDbUrl, Username, Validation};
use phenodb::{validation_hash, Credentials, MachineFingerprint, PhenoDbClient};
use serde_json::json;

pub const USERNAME: &str = "alice";
pub const PASSWORD: &str = "hunter2";
/// base64 of `alice:hunter2`
pub const BASIC_AUTH: &str = "Basic YWxpY2U6aHVudGVyMg==";
pub const API_KEY: &str = "key";
pub const API_TOKEN: &str = "tok";
pub const START_SEQUENCE: u64 = 41;

pub fn fingerprint() -> MachineFingerprint {
    MachineFingerprint::new(["Linux", "lab-pc", "6.1.0", "#1 SMP", "x86_64"])
}

pub fn device_id() -> DeviceId {
    DeviceId::derive(&fingerprint(), USERNAME)
}

pub fn credentials() -> Credentials {
    Credentials::new(
        Username::from_static(USERNAME),
        PASSWORD.to_string(),
        API_KEY.to_string(),
    )
}

pub fn api_url(server: &MockServer) -> PhenoDbUrl {
    PhenoDbUrl::new(server.url("/api/")).unwrap()
}

/// Validation hash the client should send with the request numbered `sequence`.
pub fn expected_validation(sequence: u64) -> Validation {
    validation_hash(API_TOKEN, sequence, API_KEY)
}

pub fn mock_authenticate(server: &MockServer) -> Mock<'_> {
    server.mock(|when, then| {
        when.method(GET)
            .path("/api/authenticate")
            .query_param("deviceID", device_id().as_str())
            .header("authorization", BASIC_AUTH);
        then.status(200)
            .json_body(json!({"token": API_TOKEN, "sequence": START_SEQUENCE}));
    })
}

/// Connect a client to a mock server which was already set up to answer `authenticate`.
pub fn connect(server: &MockServer) -> PhenoDbClient {
    PhenoDbClient::build(api_url(server), credentials())
        .unwrap()
        .fingerprint(fingerprint())
        .connect()
}

/// Set up `authenticate` and connect.
pub fn authenticated_client(server: &MockServer) -> PhenoDbClient {
    mock_authenticate(server);
    let client = connect(server);
    assert!(client.is_authenticated(), "{:?}", client.auth_error());
    client
}

use crate::cli::config::PhenoDbConfig;
use color_eyre::eyre::{self, bail, eyre, OptionExt};
use color_eyre::owo_colors::OwoColorize;
use phenodb::types::{PhenoDbUrl, Username};
use phenodb::{Credentials, PhenoDbClient, DEFAULT_URL};
use std::path::PathBuf;

/// Command-line options of `phenodb` which identify the account and server.
///
/// Each option falls back to its environment variable (handled by clap),
/// then to the saved configuration.
#[derive(Debug, Clone, Default)]
pub struct GivenCredentials {
    pub url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub api_key: Option<String>,
    /// Name of configuration file.
    ///
    /// - `None`: use default configuration file (for main use)
    /// - `Some(_)`: custom configuration file (for testing purposes only)
    pub config_path: Option<PathBuf>,
}

impl GivenCredentials {
    /// API URL and user name after applying saved defaults.
    pub fn resolve(&self) -> eyre::Result<(PhenoDbUrl, Option<Username>)> {
        let config = PhenoDbConfig::load(self.config_path.as_deref())?;
        let url = match &self.url {
            Some(url) => PhenoDbUrl::new(url.clone())?,
            None => config.url.unwrap_or_else(|| DEFAULT_URL.clone()),
        };
        let username = self.username.clone().map(Username::new).or(config.username);
        Ok((url, username))
    }

    /// Authenticate and return a client. Unlike the library, fails if
    /// authentication does not succeed.
    pub fn into_client(self) -> eyre::Result<PhenoDbClient> {
        let (url, username) = self.resolve()?;
        let username = require_username(username)?;
        let password = self.password.ok_or_eyre("--password is required")?;
        let api_key = self.api_key.ok_or_eyre("--api-key is required")?;
        let credentials = Credentials::new(username, password, api_key);
        let client = PhenoDbClient::build(url, credentials)?.connect();
        if let Some(e) = client.auth_error() {
            bail!("Could not log in to {}: {}", client.url(), e);
        }
        Ok(client)
    }
}

/// The user name is part of the device ID, so every command which talks to
/// the server needs one.
pub fn require_username(username: Option<Username>) -> eyre::Result<Username> {
    username.ok_or_else(|| {
        eyre!(
            "--username is required. Set a default with `{}`",
            "phenodb config --username".bold()
        )
    })
}

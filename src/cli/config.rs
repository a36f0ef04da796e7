//! `phenodb` application configuration: defaults for the API URL and user name,
//! so they need not be given every time.
//!
//! The file is stored by [confy] in the platform's configuration directory,
//! e.g. `~/.config/phenodb/default-config.ron`. Passwords and API keys are
//! never saved.

use color_eyre::eyre::{Result, WrapErr};
use color_eyre::owo_colors::OwoColorize;
use phenodb::types::{PhenoDbUrl, Username};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const APP_NAME: &str = "phenodb";

#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
pub struct PhenoDbConfig {
    pub url: Option<PhenoDbUrl>,
    pub username: Option<Username>,
}

impl PhenoDbConfig {
    /// Load config from file.
    ///
    /// - `None`: default configuration file
    /// - `Some(_)`: custom configuration file (for testing purposes only)
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let c: Result<Self, confy::ConfyError> = match path {
            Some(p) => confy::load_path(p),
            None => confy::load(APP_NAME, None),
        };
        c.wrap_err_with(|| {
            format!(
                "Could not load config file. To reset it, run `{}`",
                "phenodb config --reset".bold()
            )
        })
    }

    /// Write config to file.
    pub fn store(&self, path: Option<&Path>) -> Result<()> {
        match path {
            Some(p) => confy::store_path(p, self),
            None => confy::store(APP_NAME, None, self),
        }
        .wrap_err("Couldn't write config file")
    }

    pub fn file_path(path: Option<&Path>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(p.to_path_buf()),
            None => confy::get_configuration_file_path(APP_NAME, None)
                .wrap_err("Could not determine location of config file"),
        }
    }
}

/// `phenodb config`: update the saved defaults, then print them.
pub fn config(
    url: Option<String>,
    username: Option<String>,
    reset: bool,
    path: Option<&Path>,
) -> Result<()> {
    let url = url.map(PhenoDbUrl::new).transpose()?;
    let username = username.map(Username::new);
    let changed = reset || url.is_some() || username.is_some();
    let mut config = if reset {
        PhenoDbConfig::default()
    } else {
        PhenoDbConfig::load(path)?
    };
    if url.is_some() {
        config.url = url;
    }
    if username.is_some() {
        config.username = username;
    }
    if changed {
        config.store(path)?;
    }
    println!("{}", PhenoDbConfig::file_path(path)?.display().dimmed());
    println!(
        "url:      {}",
        config.url.as_ref().map(|u| u.as_str()).unwrap_or("(default)")
    );
    println!(
        "username: {}",
        config.username.as_ref().map(|u| u.as_str()).unwrap_or("(none)")
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("phenodb.ron");
        let config = PhenoDbConfig::load(Some(&path)).unwrap();
        assert_eq!(config, PhenoDbConfig::default());
    }

    #[test]
    fn test_store_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("phenodb.ron");
        let config = PhenoDbConfig {
            url: Some(PhenoDbUrl::from_static("http://localhost:8080/api/")),
            username: Some(Username::from_static("alice")),
        };
        config.store(Some(&path)).unwrap();
        assert_eq!(PhenoDbConfig::load(Some(&path)).unwrap(), config);
    }

    #[test]
    fn test_config_command_updates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("phenodb.ron");
        config(None, Some("bob".to_string()), false, Some(&path)).unwrap();
        config(
            Some("https://example.org/api/".to_string()),
            None,
            false,
            Some(&path),
        )
        .unwrap();
        let saved = PhenoDbConfig::load(Some(&path)).unwrap();
        assert_eq!(saved.username.unwrap().as_str(), "bob");
        assert_eq!(saved.url.unwrap().as_str(), "https://example.org/api/");

        config(None, None, true, Some(&path)).unwrap();
        assert_eq!(
            PhenoDbConfig::load(Some(&path)).unwrap(),
            PhenoDbConfig::default()
        );
    }

    #[test]
    fn test_config_command_rejects_bad_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("phenodb.ron");
        assert!(config(Some("localhost/api".to_string()), None, false, Some(&path)).is_err());
        assert!(!path.exists());
    }
}

//! Client for the Phenotype Database REST API.
//!
//! ```no_run
//! use phenodb::{Credentials, PhenoDbClient};
//! use phenodb::types::Username;
//!
//! let credentials = Credentials::new(
//!     Username::from_static("alice"),
//!     "password".to_string(),
//!     "api key".to_string(),
//! );
//! let mut client = PhenoDbClient::new(credentials).unwrap();
//! let studies = client.get_studies().unwrap();
//! println!("{}", studies);
//! ```

mod auth;
mod client;
mod constants;
pub mod device;
pub mod errors;
mod query;
mod session;
pub mod types;

pub use auth::Credentials;
pub use client::{PhenoDbClient, PhenoDbClientBuilder};
pub use constants::DEFAULT_URL;
pub use device::{derive_device_id, MachineFingerprint};
pub use query::{Query, Scope};
pub use session::{validation_hash, Session};

/// Re-export
pub use reqwest;

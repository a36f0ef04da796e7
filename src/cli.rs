//! Modules of the `phenodb` command-line program.

pub mod config;
pub mod credentials;
pub mod get;

mod cli;

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use color_eyre::eyre::Result;
use phenodb::derive_device_id;

use crate::cli::config::config;
use crate::cli::credentials::{require_username, GivenCredentials};
use crate::cli::get::{get, QueryArg};

#[derive(Parser)]
#[clap(
    author, version, about, long_about = None,
    propagate_version = false, disable_help_subcommand = true
)]
struct Cli {
    /// Configuration file (default: platform configuration directory)
    #[clap(long, global = true, hide = true)]
    config_file: Option<PathBuf>,

    /// Log more (repeat for even more)
    #[clap(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[clap(subcommand)]
    command: Commands,
}

/// Account and server, for commands which need them.
#[derive(Args)]
struct AccountArgs {
    /// Phenotype Database API URL
    #[clap(long, env = "PHENODB_URL")]
    url: Option<String>,

    /// account username
    #[clap(short, long, env = "PHENODB_USERNAME")]
    username: Option<String>,

    /// account password
    #[clap(long, env = "PHENODB_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// user API key
    #[clap(long, env = "PHENODB_API_KEY", hide_env_values = true)]
    api_key: Option<String>,
}

impl AccountArgs {
    fn into_credentials(self, config_path: Option<PathBuf>) -> GivenCredentials {
        GivenCredentials {
            url: self.url,
            username: self.username,
            password: self.password,
            api_key: self.api_key,
            config_path,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Run a query and print its result as JSON
    Get {
        /// Query to run
        #[clap(value_enum)]
        query: QueryArg,

        /// Study token or assay token, for queries which are about a study or an assay
        token: Option<String>,

        #[clap(flatten)]
        account: AccountArgs,
    },

    /// Print the device ID of this machine
    DeviceId {
        #[clap(flatten)]
        account: AccountArgs,
    },

    /// Show or change saved defaults
    Config {
        /// Save this Phenotype Database API URL as the default
        #[clap(long)]
        url: Option<String>,

        /// Save this username as the default
        #[clap(short, long)]
        username: Option<String>,

        /// Forget all saved defaults
        #[clap(long)]
        reset: bool,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Cli = Cli::parse();

    let level = match args.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match args.command {
        Commands::Get {
            query,
            token,
            account,
        } => {
            let mut client = account.into_credentials(args.config_file).into_client()?;
            get(&mut client, query, token)
        }
        Commands::DeviceId { account } => {
            let (_, username) = account.into_credentials(args.config_file).resolve()?;
            let username = require_username(username)?;
            println!("{}", derive_device_id(username.as_str()));
            Ok(())
        }
        Commands::Config {
            url,
            username,
            reset,
        } => config(url, username, reset, args.config_file.as_deref()),
    }
}

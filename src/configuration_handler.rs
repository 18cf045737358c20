use crate::configuration::Configuration;
use clap::Parser;
use std::env;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "slot_admin", about = "Owner admin surface for bookable appointment slots")]
pub struct Args {
    /// Port the admin surface listens on
    #[arg(long, default_value_t = 3000)]
    pub port: u16,

    /// Base URL of the tabular-storage API
    #[arg(long, default_value = "https://sheetdb.io/api/v1")]
    pub api_base_url: String,

    /// Base URL of the client-facing booking interface
    #[arg(long, default_value = "https://client-interface-pearl.vercel.app")]
    pub client_base_url: String,

    /// Store identifier; omit to enter it through the admin page instead
    #[arg(long)]
    pub store_id: Option<String>,

    /// Path to the admin page html
    #[arg(long, default_value = "frontend/index.html")]
    pub frontend_path: PathBuf,
}

#[derive(Clone)]
pub struct ConfigurationHandler {
    args: Args,
}

impl ConfigurationHandler {
    pub fn from_args() -> Self {
        Self {
            args: Args::parse(),
        }
    }

    #[cfg(test)]
    pub fn from_parsed(args: Args) -> Self {
        Self { args }
    }
}

impl Configuration for ConfigurationHandler {
    fn port(&self) -> u16 {
        self.args.port
    }

    fn api_base_url(&self) -> String {
        self.args.api_base_url.clone()
    }

    fn client_base_url(&self) -> String {
        self.args.client_base_url.clone()
    }

    fn frontend_path(&self) -> PathBuf {
        self.args.frontend_path.clone()
    }

    fn initial_store_id(&self) -> Option<String> {
        // CLI flag wins; otherwise fall back to the environment (dotenv is
        // loaded by main before parsing).
        self.args
            .store_id
            .clone()
            .or_else(|| env::var("STORE_ID").ok())
    }
}

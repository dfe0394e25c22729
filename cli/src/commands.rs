pub mod lookup;

use clap::Parser;
use macvendor_common::config::{Config, DEFAULT_API_URL, parse_api_url};

#[derive(Parser)]
#[command(name = "macvendor")]
#[command(version, about = "Lookup vendor information for a given MAC address.")]
pub struct CommandLine {
    /// The MAC address to lookup (e.g., 00:1A:2B:3C:4D:5E).
    pub mac_address: String,

    /// Enable verbose logging (DEBUG level).
    #[arg(short, long)]
    pub verbose: bool,

    /// URL template of the vendor-lookup service; `{mac_address}` is replaced by the address.
    #[arg(
        long,
        env = "MACVENDOR_API_URL",
        default_value = DEFAULT_API_URL,
        value_parser = parse_api_url
    )]
    pub api_url: String,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            api_url: self.api_url.clone(),
        }
    }
}

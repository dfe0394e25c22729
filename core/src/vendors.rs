//! # Remote Vendor Resolver
//!
//! Resolves the manufacturer of a MAC address through a public HTTP
//! vendor-lookup service. One request per lookup, no retries and no
//! timeout beyond what the HTTP client applies by default.

use macvendor_common::config::{Config, MAC_PLACEHOLDER};
use macvendor_common::network::mac::MacAddress;
use macvendor_common::vendors::{LookupError, VendorLookup, VendorRepository};
use serde_json::Value;
use tracing::{debug, error, warn};
use ureq::Agent;

pub struct HttpVendorRepo {
    agent: Agent,
    api_url: String,
}

impl HttpVendorRepo {
    pub fn new(cfg: &Config) -> Self {
        Self {
            agent: ureq::AgentBuilder::new().build(),
            api_url: cfg.api_url.clone(),
        }
    }

    /// Builds the request URL by substituting `mac` into the configured template.
    pub fn url_for(&self, mac: &MacAddress) -> String {
        self.api_url.replace(MAC_PLACEHOLDER, mac.as_str())
    }

    fn fetch(&self, url: &str) -> Result<String, LookupError> {
        let response = self
            .agent
            .get(url)
            .set("Accept", "application/json")
            .call()
            .map_err(|e| match e {
                ureq::Error::Status(status, _) => LookupError::Status { status },
                ureq::Error::Transport(transport) => LookupError::Transport(transport.to_string()),
            })?;

        // ureq only reports 4xx/5xx as errors, anything else outside 2xx lands here
        let status = response.status();
        if !(200..300).contains(&status) {
            return Err(LookupError::Status { status });
        }

        response
            .into_string()
            .map_err(|e| LookupError::Transport(e.to_string()))
    }
}

impl VendorRepository for HttpVendorRepo {
    fn lookup(&self, mac: &MacAddress) -> VendorLookup {
        let url = self.url_for(mac);
        debug!("Sending request to {url}");

        match self.fetch(&url) {
            Ok(body) => interpret_body(mac, &body),
            Err(e) => {
                error!("An error occurred during the request: {e}");
                VendorLookup::Failed(e)
            }
        }
    }
}

/// Extracts `result.company` from a successful response body.
///
/// Valid JSON without a usable company is a miss, not a failure.
pub fn interpret_body(mac: &MacAddress, body: &str) -> VendorLookup {
    let data: Value = match serde_json::from_str(body) {
        Ok(data) => data,
        Err(e) => {
            error!("Failed to parse JSON response: {e}");
            return VendorLookup::Failed(LookupError::InvalidJson(e.to_string()));
        }
    };

    let company = data
        .get("result")
        .and_then(|result| result.get("company"))
        .and_then(Value::as_str)
        .filter(|company| !company.is_empty());

    match company {
        Some(company) => VendorLookup::Found(company.to_string()),
        None => {
            warn!("Vendor information not found for MAC address: {mac}");
            VendorLookup::NotFound
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

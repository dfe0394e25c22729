use std::io::Write;

use anyhow::Context;
use macvendor_common::network::mac::MacAddress;
use macvendor_common::vendors::{VendorLookup, VendorRepository};
use tracing::{debug, error, info};

use crate::terminal::print;

/// Terminal state of a single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A vendor name was printed.
    Resolved,
    /// The lookup ran but produced no vendor.
    Unresolved,
    /// The input was not a MAC address. Nothing was printed.
    Rejected,
}

impl Outcome {
    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::Resolved | Outcome::Unresolved => 0,
            Outcome::Rejected => 1,
        }
    }
}

/// Validates `raw`, asks `repo` for the vendor and prints the answer to `out`.
///
/// Only a write failure on `out` is returned as an error.
pub fn lookup<R, W>(raw: &str, repo: &R, out: &mut W) -> anyhow::Result<Outcome>
where
    R: VendorRepository,
    W: Write,
{
    let mac = match MacAddress::parse(raw) {
        Ok(mac) => mac,
        Err(e) => {
            debug!("Rejected input '{}': {e}", raw.trim());
            error!("Invalid MAC address format. Please use the format XX:XX:XX:XX:XX:XX.");
            return Ok(Outcome::Rejected);
        }
    };

    info!("Looking up vendor for MAC address: {mac}");
    let [a, b, c] = mac.oui();
    debug!("OUI is {a:02X}:{b:02X}:{c:02X}");

    let result = repo.lookup(&mac);
    print::print_result(out, &result).context("failed to write lookup result")?;

    Ok(match result {
        VendorLookup::Found(_) => Outcome::Resolved,
        VendorLookup::NotFound | VendorLookup::Failed(_) => Outcome::Unresolved,
    })
}

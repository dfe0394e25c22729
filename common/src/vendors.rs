use thiserror::Error;

use crate::network::mac::MacAddress;

/// Why a lookup could not produce an answer from the vendor service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The service answered with a status outside `2xx`.
    #[error("vendor service answered with HTTP status {status}")]
    Status { status: u16 },
    /// DNS, connection, TLS or I/O failure while talking to the service.
    #[error("{0}")]
    Transport(String),
    /// The response body could not be decoded as JSON.
    #[error("vendor service response is not valid JSON: {0}")]
    InvalidJson(String),
}

/// Outcome of a single vendor lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VendorLookup {
    /// The service knows the OUI. Never empty.
    Found(String),
    /// The service answered, but without a company for this address.
    NotFound,
    /// The lookup itself went wrong.
    Failed(LookupError),
}

impl VendorLookup {
    /// The vendor name, if one was found.
    pub fn vendor(&self) -> Option<&str> {
        match self {
            VendorLookup::Found(name) => Some(name),
            VendorLookup::NotFound | VendorLookup::Failed(_) => None,
        }
    }
}

/// Defines the contract for resolving device manufacturers from MAC addresses.
pub trait VendorRepository {
    /// Retrieves the vendor name for a given MAC address.
    ///
    /// # Arguments
    /// * `mac` - The validated MAC address to lookup.
    ///
    /// # Returns
    /// * `VendorLookup::Found` - The name of the vendor.
    /// * `VendorLookup::NotFound` - If the OUI is unknown to the service.
    /// * `VendorLookup::Failed` - If the service could not be queried.
    fn lookup(&self, mac: &MacAddress) -> VendorLookup;
}

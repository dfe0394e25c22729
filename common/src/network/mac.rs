//! # MAC Address Model
//!
//! Syntactic validation of user supplied hardware addresses.
//!
//! Only the colon separated notation is accepted (e.g. `00:1A:2B:3C:4D:5E`).
//! Hex digits are case-insensitive. Reserved, multicast and broadcast ranges
//! are not treated specially.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub const OCTET_COUNT: usize = 6;
const OCTET_WIDTH: usize = 2;
const SEPARATOR: char = ':';

/// Reasons a string was rejected as a MAC address.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MacParseError {
    /// The input did not split into exactly six colon separated parts.
    #[error("expected 6 colon separated octets, found {found}")]
    OctetCount { found: usize },
    /// An octet was not exactly two characters long.
    #[error("octet {index} has {len} characters, expected 2")]
    OctetLength { index: usize, len: usize },
    /// An octet contained something other than hex digits.
    #[error("octet {index} ('{octet}') is not hexadecimal")]
    NonHexOctet { index: usize, octet: String },
}

/// A validated MAC address.
///
/// Keeps the trimmed text as typed so it can be forwarded verbatim to the
/// lookup service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacAddress {
    text: String,
    octets: [u8; OCTET_COUNT],
}

impl MacAddress {
    pub fn parse(input: &str) -> Result<Self, MacParseError> {
        let text = input.trim();
        let parts: Vec<&str> = text.split(SEPARATOR).collect();

        if parts.len() != OCTET_COUNT {
            return Err(MacParseError::OctetCount { found: parts.len() });
        }

        let mut octets = [0u8; OCTET_COUNT];
        for (index, part) in parts.iter().enumerate() {
            // chars() so that a multi-byte character counts once
            let len = part.chars().count();
            if len != OCTET_WIDTH {
                return Err(MacParseError::OctetLength { index, len });
            }
            if !part.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(MacParseError::NonHexOctet {
                    index,
                    octet: part.to_string(),
                });
            }
            octets[index] = u8::from_str_radix(part, 16).map_err(|_| MacParseError::NonHexOctet {
                index,
                octet: part.to_string(),
            })?;
        }

        Ok(Self {
            text: text.to_string(),
            octets,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The six octets in transmission order.
    pub fn octets(&self) -> [u8; OCTET_COUNT] {
        self.octets
    }

    /// The organizationally unique identifier (first three octets).
    pub fn oui(&self) -> [u8; 3] {
        [self.octets[0], self.octets[1], self.octets[2]]
    }
}

impl FromStr for MacAddress {
    type Err = MacParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Checks whether `input` is a six octet, colon separated MAC address.
pub fn validate(input: &str) -> bool {
    MacAddress::parse(input).is_ok()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

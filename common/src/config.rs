use thiserror::Error;

/// Placeholder replaced by the MAC address when building a lookup URL.
pub const MAC_PLACEHOLDER: &str = "{mac_address}";

/// Public vendor-lookup endpoint used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "https://macvendors.co/api/{mac_address}";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("API URL template '{0}' does not contain {{mac_address}}")]
    MissingPlaceholder(String),
}

pub struct Config {
    /// URL template of the vendor-lookup service.
    ///
    /// Contains [`MAC_PLACEHOLDER`]; see [`parse_api_url`].
    pub api_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

/// Accepts a URL template only if it has somewhere to put the MAC address.
pub fn parse_api_url(template: &str) -> Result<String, ConfigError> {
    if !template.contains(MAC_PLACEHOLDER) {
        return Err(ConfigError::MissingPlaceholder(template.to_string()));
    }
    Ok(template.to_string())
}

use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_VIA_CEP_ENDPOINT: &str = "https://viacep.com.br";
pub const DEFAULT_CONNECT_TIMEOUT_SEC: u64 = 10;
pub const DEFAULT_TIMEOUT_SEC: u64 = 5;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ViaCepConfig {
    // Override the public ViaCEP endpoint for testing
    pub endpoint: String,
    pub connect_timeout: Duration,
    // Covers the whole request, connection included
    pub timeout: Duration,
}

impl Default for ViaCepConfig {
    fn default() -> Self {
        ViaCepConfig {
            endpoint: DEFAULT_VIA_CEP_ENDPOINT.to_string(),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SEC),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SEC),
        }
    }
}

impl ViaCepConfig {
    pub fn with_endpoint(mut self, endpoint: String) -> Self {
        self.endpoint = endpoint;
        self
    }

    pub fn with_connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// URL of the JSON lookup for an 8-digit postal code.
    pub fn lookup_url(&self, postal_code: &str) -> String {
        format!(
            "{}/ws/{}/json/",
            self.endpoint.trim_end_matches('/'),
            postal_code
        )
    }
}

//! Gateway connection settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Connection and pacing settings for a Tradfri gateway.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use tradfri_rs::GatewayConfig;
///
/// let config = GatewayConfig::new("192.168.1.50", "tradfri-rs", "s3cr3t")
///     .with_flood_protection(Duration::ZERO);
/// assert_eq!(config.port, 5684);
/// assert_eq!(config.flood_protection(), Duration::ZERO);
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GatewayConfig {
    /// IP address or hostname of the gateway.
    pub host: String,
    /// Identity registered with the gateway for the pre-shared key.
    pub identity: String,
    /// Pre-shared key issued for `identity`.
    pub psk: String,
    #[serde(default = "GatewayConfig::default_port")]
    pub port: u16,
    /// CoAP client binary used to reach the gateway.
    #[serde(default = "GatewayConfig::default_coap_client")]
    pub coap_client: String,
    /// Pause between consecutive device fetches, in microseconds. 0 disables it.
    #[serde(default = "GatewayConfig::default_flood_protection_us")]
    pub flood_protection_us: u64,
}

impl GatewayConfig {
    pub const DEFAULT_PORT: u16 = 5684;
    pub const DEFAULT_COAP_CLIENT: &'static str = "coap-client";
    pub const DEFAULT_FLOOD_PROTECTION_US: u64 = 250_000;

    pub fn new(host: &str, identity: &str, psk: &str) -> Self {
        GatewayConfig {
            host: host.to_string(),
            identity: identity.to_string(),
            psk: psk.to_string(),
            port: Self::DEFAULT_PORT,
            coap_client: Self::DEFAULT_COAP_CLIENT.to_string(),
            flood_protection_us: Self::DEFAULT_FLOOD_PROTECTION_US,
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_coap_client(mut self, binary: &str) -> Self {
        self.coap_client = binary.to_string();
        self
    }

    /// Sub-microsecond precision is dropped.
    pub fn with_flood_protection(mut self, delay: Duration) -> Self {
        self.flood_protection_us = u64::try_from(delay.as_micros()).unwrap_or(u64::MAX);
        self
    }

    pub fn flood_protection(&self) -> Duration {
        Duration::from_micros(self.flood_protection_us)
    }

    fn default_port() -> u16 {
        Self::DEFAULT_PORT
    }

    fn default_coap_client() -> String {
        Self::DEFAULT_COAP_CLIENT.to_string()
    }

    fn default_flood_protection_us() -> u64 {
        Self::DEFAULT_FLOOD_PROTECTION_US
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_fills_defaults() {
        let config: GatewayConfig = serde_json::from_str(
            r#"{"host": "10.0.0.2", "identity": "me", "psk": "key"}"#,
        )
        .unwrap();

        assert_eq!(config, GatewayConfig::new("10.0.0.2", "me", "key"));
        assert_eq!(config.flood_protection(), Duration::from_millis(250));
    }

    #[test]
    fn test_deserialize_camel_case_overrides() {
        let config: GatewayConfig = serde_json::from_str(
            r#"{
                "host": "10.0.0.2",
                "identity": "me",
                "psk": "key",
                "port": 5685,
                "coapClient": "/opt/libcoap/bin/coap-client",
                "floodProtectionUs": 0
            }"#,
        )
        .unwrap();

        assert_eq!(config.port, 5685);
        assert_eq!(config.coap_client, "/opt/libcoap/bin/coap-client");
        assert_eq!(config.flood_protection(), Duration::ZERO);
    }
}

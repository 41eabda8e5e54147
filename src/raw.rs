//! Raw payload shapes reported by the gateway.
//!
//! Field names are the hub's numeric attribute ids (see [`crate::keys`]).
//! A record that does not deserialize into these shapes is structurally
//! invalid and is dropped by the mappers.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A device as returned by `GET 15001/<id>`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub(crate) struct RawDevice {
    #[serde(rename = "9003")]
    pub id: u64,
    #[serde(rename = "9001")]
    pub name: String,
    #[serde(rename = "3")]
    pub info: RawDeviceInfo,
    #[serde(rename = "3311", default)]
    pub light_control: Vec<RawLightControl>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub(crate) struct RawDeviceInfo {
    #[serde(rename = "0", default)]
    pub manufacturer: String,
    #[serde(rename = "1")]
    pub device_type: String,
    #[serde(rename = "3", default)]
    pub version: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub(crate) struct RawLightControl {
    #[serde(rename = "5851", default)]
    pub dimmer: u16,
    #[serde(rename = "5706", default)]
    pub color_hex: Option<String>,
    #[serde(rename = "5850", default)]
    pub state: u8,
}

/// A group as returned by `GET 15004/<id>`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub(crate) struct RawGroup {
    #[serde(rename = "9003")]
    pub id: u64,
    #[serde(rename = "9001")]
    pub name: String,
    #[serde(rename = "9018", default)]
    pub members: RawGroupMembers,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub(crate) struct RawGroupMembers {
    #[serde(rename = "15002", default)]
    pub linked: RawLinkedDevices,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub(crate) struct RawLinkedDevices {
    #[serde(rename = "9003", default)]
    pub ids: Vec<u64>,
}

impl RawDevice {
    /// Returns `None` unless the record carries an id, a name and a type.
    pub fn validate(value: &Value) -> Option<Self> {
        Self::deserialize(value).ok()
    }
}

impl RawGroup {
    /// Returns `None` unless the record carries an id and a name.
    pub fn validate(value: &Value) -> Option<Self> {
        Self::deserialize(value).ok()
    }

    pub fn member_ids(&self) -> &[u64] {
        &self.members.linked.ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_lightbulb_record() {
        let raw = RawDevice::validate(&json!({
            "9003": 65537,
            "9001": "Desk",
            "3": {"0": "IKEA of Sweden", "1": "TRADFRI bulb E27 WS opal 980lm", "3": "1.2.214"},
            "3311": [{"5850": 1, "5851": 200, "5706": "f5faf6"}],
        }))
        .unwrap();

        assert_eq!(raw.id, 65537);
        assert_eq!(raw.info.manufacturer, "IKEA of Sweden");
        assert_eq!(raw.light_control[0].dimmer, 200);
        assert_eq!(raw.light_control[0].color_hex.as_deref(), Some("f5faf6"));
        assert_eq!(raw.light_control[0].state, 1);
    }

    #[test]
    fn test_device_requires_id_name_and_type() {
        assert!(RawDevice::validate(&json!({"9001": "x", "3": {"1": "t"}})).is_none());
        assert!(RawDevice::validate(&json!({"9003": 1, "3": {"1": "t"}})).is_none());
        assert!(RawDevice::validate(&json!({"9003": 1, "9001": "x", "3": {}})).is_none());
        assert!(RawDevice::validate(&json!("not an object")).is_none());
        assert!(RawDevice::validate(&json!({"9003": 1, "9001": "x", "3": {"1": "t"}})).is_some());
    }

    #[test]
    fn test_group_member_ids() {
        let raw = RawGroup::validate(&json!({
            "9003": 131073,
            "9001": "Living room",
            "9018": {"15002": {"9003": [65537, 65538]}},
        }))
        .unwrap();
        assert_eq!(raw.member_ids(), &[65537, 65538]);

        let lonely = RawGroup::validate(&json!({"9003": 131074, "9001": "Empty"})).unwrap();
        assert!(lonely.member_ids().is_empty());
    }
}

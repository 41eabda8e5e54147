//! Command payloads sent with PUT requests.

use serde::{Deserialize, Serialize};

use crate::errors::Error;
use crate::types::{Brightness, PowerMode};

type Result<T> = std::result::Result<T, Error>;

/// Attributes to change on a light or group, keyed by hub attribute id.
///
/// Groups take the payload as-is; light bulbs expect it nested inside the
/// light-control list, see [`Payload::light_body`].
///
/// # Examples
///
/// ```
/// use tradfri_rs::{Brightness, Payload, PowerMode};
///
/// let mut payload = Payload::from(&PowerMode::On);
/// payload.brightness(&Brightness::create(100).unwrap());
/// assert_eq!(payload.group_body().unwrap(), r#"{"5850":1,"5851":100}"#);
/// assert_eq!(
///     payload.light_body().unwrap(),
///     r#"{"3311":[{"5850":1,"5851":100}]}"#
/// );
/// ```
#[serde_with::skip_serializing_none]
#[derive(Default, Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Payload {
    #[serde(rename = "5850")]
    pub(crate) state: Option<u8>,
    #[serde(rename = "5851")]
    pub(crate) dimmer: Option<u8>,
}

#[derive(Serialize)]
struct LightControl<'a> {
    #[serde(rename = "3311")]
    light_control: [&'a Payload; 1],
}

impl Payload {
    /// Create a new empty payload.
    ///
    /// At least one attribute must be set for the payload to be valid.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.state.is_some() || self.dimmer.is_some()
    }

    pub fn power(&mut self, power: &PowerMode) {
        self.state = Some(power.value());
    }

    pub fn brightness(&mut self, brightness: &Brightness) {
        self.dimmer = Some(brightness.value());
    }

    /// JSON body for a group resource.
    pub fn group_body(&self) -> Result<String> {
        self.ensure_valid()?;
        serde_json::to_string(self).map_err(Error::JsonDump)
    }

    /// JSON body for a light bulb resource.
    pub fn light_body(&self) -> Result<String> {
        self.ensure_valid()?;
        serde_json::to_string(&LightControl {
            light_control: [self],
        })
        .map_err(Error::JsonDump)
    }

    fn ensure_valid(&self) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(Error::NoAttribute)
        }
    }
}

impl From<&PowerMode> for Payload {
    fn from(power: &PowerMode) -> Self {
        let mut p = Payload::new();
        p.power(power);
        p
    }
}

impl From<&Brightness> for Payload {
    fn from(brightness: &Brightness) -> Self {
        let mut p = Payload::new();
        p.brightness(brightness);
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switch_bodies() {
        let off = Payload::from(&PowerMode::Off);
        assert_eq!(off.group_body().unwrap(), r#"{"5850":0}"#);
        assert_eq!(off.light_body().unwrap(), r#"{"3311":[{"5850":0}]}"#);
    }

    #[test]
    fn test_dimmer_bodies() {
        let dim = Payload::from(&Brightness::saturating(20));
        assert_eq!(dim.group_body().unwrap(), r#"{"5851":20}"#);
        assert_eq!(dim.light_body().unwrap(), r#"{"3311":[{"5851":20}]}"#);
    }

    #[test]
    fn test_empty_payload_is_rejected() {
        let payload = Payload::new();
        assert!(!payload.is_valid());
        assert!(payload.group_body().is_err());
        assert!(payload.light_body().is_err());
    }
}

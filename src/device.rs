//! Typed device models.

use serde::{Deserialize, Serialize};

use crate::classifier;
use crate::status::LightState;
use crate::types::{Brightness, DeviceType, PowerMode};

/// Kind-specific data of a device.
///
/// Only light bulbs carry state; the other kinds are inert from the
/// gateway's point of view.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum DeviceKind {
    LightBulb(LightState),
    MotionSensor,
    Remote,
    Dimmer,
    Unknown,
}

impl DeviceKind {
    pub fn device_type(&self) -> DeviceType {
        match self {
            DeviceKind::LightBulb(_) => DeviceType::LightBulb,
            DeviceKind::MotionSensor => DeviceType::MotionSensor,
            DeviceKind::Remote => DeviceType::Remote,
            DeviceKind::Dimmer => DeviceType::Dimmer,
            DeviceKind::Unknown => DeviceType::Unknown,
        }
    }
}

impl From<DeviceType> for DeviceKind {
    fn from(device_type: DeviceType) -> Self {
        match device_type {
            DeviceType::LightBulb => DeviceKind::LightBulb(LightState::default()),
            DeviceType::MotionSensor => DeviceKind::MotionSensor,
            DeviceType::Remote => DeviceKind::Remote,
            DeviceType::Dimmer => DeviceKind::Dimmer,
            DeviceType::Unknown => DeviceKind::Unknown,
        }
    }
}

/// A device paired with the gateway.
///
/// Devices are rebuilt from scratch on every discovery; the hub-assigned id
/// is the only identity that carries over between fetches.
///
/// # Example
///
/// ```
/// use tradfri_rs::{Device, DeviceType};
///
/// let mut bulb = Device::classify(65537, "TRADFRI bulb E27 W opal 1000lm");
/// assert_eq!(bulb.device_type(), DeviceType::LightBulb);
/// assert!(!bulb.is_on());
///
/// bulb.light_mut().unwrap().set_on(true);
/// assert!(bulb.is_on());
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Device {
    id: u64,
    type_name: String,
    name: String,
    manufacturer: String,
    version: String,
    kind: DeviceKind,
}

impl Device {
    pub fn new(id: u64, device_type: DeviceType, type_name: &str) -> Self {
        Device {
            id,
            type_name: type_name.to_string(),
            name: String::new(),
            manufacturer: String::new(),
            version: String::new(),
            kind: DeviceKind::from(device_type),
        }
    }

    /// Create a device whose kind is derived from its raw type string.
    pub fn classify(id: u64, type_name: &str) -> Self {
        Self::new(id, classifier::classify(type_name), type_name)
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// The raw type string reported by the hub.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn device_type(&self) -> DeviceType {
        self.kind.device_type()
    }

    /// The hub's type string, or the kind's name when the hub gave none.
    pub fn type_label(&self) -> String {
        if self.type_name.is_empty() {
            self.device_type().to_string()
        } else {
            self.type_name.clone()
        }
    }

    pub fn kind(&self) -> &DeviceKind {
        &self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn manufacturer(&self) -> &str {
        &self.manufacturer
    }

    /// Firmware version.
    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub fn set_manufacturer(&mut self, manufacturer: &str) {
        self.manufacturer = manufacturer.to_string();
    }

    pub fn set_version(&mut self, version: &str) {
        self.version = version.to_string();
    }

    pub fn is_lightbulb(&self) -> bool {
        matches!(self.kind, DeviceKind::LightBulb(_))
    }

    pub fn light(&self) -> Option<&LightState> {
        match &self.kind {
            DeviceKind::LightBulb(state) => Some(state),
            _ => None,
        }
    }

    pub fn light_mut(&mut self) -> Option<&mut LightState> {
        match &mut self.kind {
            DeviceKind::LightBulb(state) => Some(state),
            _ => None,
        }
    }

    /// Last known on/off state; always false for devices without a light.
    pub fn is_on(&self) -> bool {
        self.light().is_some_and(LightState::is_on)
    }

    /// Replace the light state. Ignored for devices without a light.
    pub fn set_light_state(&mut self, state: LightState) {
        if let Some(current) = self.light_mut() {
            *current = state;
        }
    }

    pub(crate) fn update_from_power(&mut self, power: PowerMode) {
        if let Some(state) = self.light_mut() {
            state.update_from_power(power);
        }
    }

    pub(crate) fn update_brightness(&mut self, brightness: Brightness) {
        if let Some(state) = self.light_mut() {
            state.set_brightness(brightness);
        }
    }
}

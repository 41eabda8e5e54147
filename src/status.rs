//! Light status tracking.

use serde::{Deserialize, Serialize};

use crate::raw::RawLightControl;
use crate::types::{Brightness, PowerMode};

/// Last known state of a light bulb.
///
/// This is whatever the hub reported at discovery time, updated locally when
/// a command succeeds. It is never polled again on its own.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct LightState {
    brightness: Brightness,
    color_hex: String,
    on: bool,
}

impl LightState {
    pub fn brightness(&self) -> Brightness {
        self.brightness
    }

    /// Hex color, empty when the bulb does not report one.
    pub fn color_hex(&self) -> &str {
        &self.color_hex
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn set_brightness(&mut self, brightness: Brightness) {
        self.brightness = brightness;
    }

    pub fn set_color_hex(&mut self, color_hex: &str) {
        self.color_hex = color_hex.to_string();
    }

    pub fn set_on(&mut self, on: bool) {
        self.on = on;
    }

    pub(crate) fn update_from_power(&mut self, power: PowerMode) {
        self.on = power.is_on();
    }
}

impl From<&RawLightControl> for LightState {
    fn from(raw: &RawLightControl) -> Self {
        LightState {
            brightness: Brightness::saturating(raw.dimmer),
            color_hex: raw.color_hex.clone().unwrap_or_default(),
            on: raw.state != 0,
        }
    }
}

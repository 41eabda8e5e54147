//! Power mode for light control.

use serde::{Deserialize, Serialize};

/// Power state for a light or group.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum PowerMode {
    /// Turn the light on
    On,
    /// Turn the light off
    Off,
}

impl PowerMode {
    /// The value the hub expects under its state attribute.
    pub fn value(&self) -> u8 {
        match self {
            PowerMode::On => 1,
            PowerMode::Off => 0,
        }
    }

    pub fn is_on(&self) -> bool {
        matches!(self, PowerMode::On)
    }
}

impl From<bool> for PowerMode {
    fn from(on: bool) -> Self {
        if on { PowerMode::On } else { PowerMode::Off }
    }
}

//! Closed classification of hub devices.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// The kind of a device, as decided by [`crate::classifier::classify`].
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum DeviceType {
    LightBulb,
    MotionSensor,
    Remote,
    Dimmer,
    Unknown,
}

impl DeviceType {
    /// Whether the device accepts switch and dim commands.
    pub fn is_controllable(&self) -> bool {
        matches!(self, DeviceType::LightBulb)
    }
}

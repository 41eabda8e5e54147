//! Brightness control on the gateway's native dimmer scale.

use serde::{Deserialize, Serialize};

/// Brightness level from 0 to 254, the hub's native dimmer scale.
#[derive(Default, Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(transparent)]
pub struct Brightness {
    pub(crate) value: u8,
}

impl Brightness {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 254;

    /// Full brightness.
    pub fn new() -> Self {
        Brightness { value: Self::MAX }
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    /// Returns None if value is outside valid range (0-254).
    ///
    /// # Examples
    ///
    /// ```
    /// use tradfri_rs::Brightness;
    ///
    /// assert_eq!(Brightness::create(128).unwrap().value(), 128);
    /// assert!(Brightness::create(255).is_none());
    /// ```
    pub fn create(value: u8) -> Option<Self> {
        if Self::is_valid(value) {
            Some(Brightness { value })
        } else {
            None
        }
    }

    /// Clamps any level into the valid range.
    ///
    /// # Examples
    ///
    /// ```
    /// use tradfri_rs::Brightness;
    ///
    /// assert_eq!(Brightness::saturating(1000).value(), 254);
    /// assert_eq!(Brightness::saturating(20).value(), 20);
    /// ```
    pub fn saturating(value: u16) -> Self {
        let value = value.min(u16::from(Self::MAX));
        Brightness { value: value as u8 }
    }

    fn is_valid(value: u8) -> bool {
        (Self::MIN..=Self::MAX).contains(&value)
    }
}

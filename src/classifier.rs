//! Device type classification.
//!
//! Maps the raw type string reported under the device info attribute to a
//! [`DeviceType`]. Matching is exact against the catalog in [`crate::keys`];
//! anything else is [`DeviceType::Unknown`].

use crate::keys::{self, LIGHTBULB_TYPES};
use crate::types::DeviceType;

pub fn is_lightbulb(type_name: &str) -> bool {
    LIGHTBULB_TYPES.contains(&type_name)
}

pub fn is_motion_sensor(type_name: &str) -> bool {
    type_name == keys::TYPE_MOTION_SENSOR
}

pub fn is_remote(type_name: &str) -> bool {
    type_name == keys::TYPE_REMOTE_CONTROL
}

pub fn is_dimmer(type_name: &str) -> bool {
    type_name == keys::TYPE_DIMMER
}

/// True iff any of the specific predicates matches.
pub fn is_known_device_type(type_name: &str) -> bool {
    is_lightbulb(type_name)
        || is_motion_sensor(type_name)
        || is_remote(type_name)
        || is_dimmer(type_name)
}

/// Classify a raw type string.
///
/// # Examples
///
/// ```
/// use tradfri_rs::{DeviceType, classify};
///
/// assert_eq!(classify("TRADFRI remote control"), DeviceType::Remote);
/// assert_eq!(classify("Philips Hue"), DeviceType::Unknown);
/// ```
pub fn classify(type_name: &str) -> DeviceType {
    if is_lightbulb(type_name) {
        DeviceType::LightBulb
    } else if is_motion_sensor(type_name) {
        DeviceType::MotionSensor
    } else if is_remote(type_name) {
        DeviceType::Remote
    } else if is_dimmer(type_name) {
        DeviceType::Dimmer
    } else {
        DeviceType::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &[(&str, DeviceType)] = &[
        (keys::TYPE_BULB_E27_W, DeviceType::LightBulb),
        (keys::TYPE_BULB_E27_WS, DeviceType::LightBulb),
        (keys::TYPE_BULB_E27_CWS, DeviceType::LightBulb),
        (keys::TYPE_BULB_E14_WS, DeviceType::LightBulb),
        (keys::TYPE_BULB_GU10_W, DeviceType::LightBulb),
        (keys::TYPE_BULB_GU10_WS, DeviceType::LightBulb),
        (keys::TYPE_MOTION_SENSOR, DeviceType::MotionSensor),
        (keys::TYPE_REMOTE_CONTROL, DeviceType::Remote),
        (keys::TYPE_DIMMER, DeviceType::Dimmer),
    ];

    #[test]
    fn test_known_types_classify_to_their_kind() {
        for (type_name, expected) in CATALOG {
            assert_eq!(classify(type_name), *expected, "type: {type_name}");
            assert!(is_known_device_type(type_name), "type: {type_name}");
        }
    }

    #[test]
    fn test_predicates_are_exclusive() {
        for (type_name, expected) in CATALOG {
            assert_eq!(is_lightbulb(type_name), *expected == DeviceType::LightBulb);
            assert_eq!(
                is_motion_sensor(type_name),
                *expected == DeviceType::MotionSensor
            );
            assert_eq!(is_remote(type_name), *expected == DeviceType::Remote);
            assert_eq!(is_dimmer(type_name), *expected == DeviceType::Dimmer);
        }
    }

    #[test]
    fn test_unrecognized_types_are_unknown() {
        for type_name in [
            "invalidStringValue",
            "",
            "tradfri dimmer",
            "TRADFRI bulb E27 W opal 1000lm ",
        ] {
            assert_eq!(classify(type_name), DeviceType::Unknown);
            assert!(!is_known_device_type(type_name));
        }
    }
}

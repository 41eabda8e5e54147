//! Hub resource roots, attribute keys and the catalog of known device types.
//!
//! The gateway speaks LwM2M-style numeric attribute ids. Record fields are
//! read through serde renames in the raw payload structs; the constants here
//! cover lookups done on untyped JSON.

/// Resource root listing all paired devices.
pub const ROOT_DEVICES: &str = "15001";
/// Resource root listing all groups.
pub const ROOT_GROUPS: &str = "15004";

/// Device info object, holding manufacturer, type and firmware version.
pub const ATTR_DEVICE_INFO: &str = "3";
pub const ATTR_DEVICE_MANUFACTURER: &str = "0";
pub const ATTR_DEVICE_TYPE: &str = "1";

pub const TYPE_BULB_E27_W: &str = "TRADFRI bulb E27 W opal 1000lm";
pub const TYPE_BULB_E27_WS: &str = "TRADFRI bulb E27 WS opal 980lm";
pub const TYPE_BULB_E27_CWS: &str = "TRADFRI bulb E27 CWS opal 600lm";
pub const TYPE_BULB_E14_WS: &str = "TRADFRI bulb E14 WS opal 400lm";
pub const TYPE_BULB_GU10_W: &str = "TRADFRI bulb GU10 W 400lm";
pub const TYPE_BULB_GU10_WS: &str = "TRADFRI bulb GU10 WS 400lm";
pub const TYPE_MOTION_SENSOR: &str = "TRADFRI motion sensor";
pub const TYPE_REMOTE_CONTROL: &str = "TRADFRI remote control";
pub const TYPE_DIMMER: &str = "TRADFRI dimmer";

pub(crate) const LIGHTBULB_TYPES: &[&str] = &[
    TYPE_BULB_E27_W,
    TYPE_BULB_E27_WS,
    TYPE_BULB_E27_CWS,
    TYPE_BULB_E14_WS,
    TYPE_BULB_GU10_W,
    TYPE_BULB_GU10_WS,
];

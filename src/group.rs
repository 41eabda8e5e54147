//! Light groups as configured on the gateway.

use serde::{Deserialize, Serialize};

use crate::collections::Devices;
use crate::device::Device;
use crate::types::{Brightness, PowerMode};

/// A group of devices configured on the gateway.
///
/// The hub only reports member ids for a group; the member devices are
/// fetched separately and attached with [`Group::set_devices`]. Whether the
/// group is on is not stored, it is derived from the members.
///
/// # Example
///
/// ```
/// use tradfri_rs::{Device, Devices, Group};
///
/// let mut group = Group::new(131073, "Living room");
/// assert!(!group.is_on());
///
/// let mut bulb = Device::classify(65537, "TRADFRI bulb E27 W opal 1000lm");
/// bulb.light_mut().unwrap().set_on(true);
/// group.set_devices(Devices::from_iter([bulb]));
/// assert!(group.is_on());
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Group {
    id: u64,
    name: String,
    member_ids: Vec<u64>,
    devices: Devices,
}

impl Group {
    pub fn new(id: u64, name: &str) -> Self {
        Group {
            id,
            name: name.to_string(),
            member_ids: Vec::new(),
            devices: Devices::new(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    /// Ids of the member devices as reported by the hub.
    pub fn member_ids(&self) -> &[u64] {
        &self.member_ids
    }

    pub fn set_member_ids(&mut self, ids: Vec<u64>) {
        self.member_ids = ids;
    }

    pub fn devices(&self) -> &Devices {
        &self.devices
    }

    pub fn devices_mut(&mut self) -> &mut Devices {
        &mut self.devices
    }

    pub fn set_devices(&mut self, devices: Devices) {
        self.devices = devices;
    }

    /// True iff at least one member device is on.
    pub fn is_on(&self) -> bool {
        self.devices.iter().any(Device::is_on)
    }

    pub(crate) fn update_from_power(&mut self, power: PowerMode) {
        for device in self.devices.iter_mut() {
            device.update_from_power(power);
        }
    }

    pub(crate) fn update_brightness(&mut self, brightness: Brightness) {
        for device in self.devices.iter_mut() {
            device.update_brightness(brightness);
        }
    }
}

//! Mapping of raw hub records onto typed models.

use log::{debug, warn};
use serde_json::Value;

use crate::classifier;
use crate::collections::{Devices, Groups};
use crate::device::Device;
use crate::errors::Error;
use crate::group::Group;
use crate::raw::{RawDevice, RawGroup};
use crate::status::LightState;

type Result<T> = std::result::Result<T, Error>;

/// Raw records in fetch order, keyed by the id they were requested with.
pub type RawRecords = Vec<(u64, Value)>;

/// Turns a batch of raw records into a typed collection.
///
/// Structurally invalid records are dropped; an empty batch is an error.
pub trait Mapper {
    type Output;

    fn map(&self, records: &[(u64, Value)]) -> Result<Self::Output>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DeviceDataMapper;

impl DeviceDataMapper {
    fn model(raw: &RawDevice) -> Device {
        let type_name = raw.info.device_type.as_str();
        let mut device = Device::new(raw.id, classifier::classify(type_name), type_name);
        device.set_name(&raw.name);
        device.set_manufacturer(&raw.info.manufacturer);
        device.set_version(&raw.info.version);

        if device.is_lightbulb() {
            if let Some(control) = raw.light_control.first() {
                device.set_light_state(LightState::from(control));
            } else {
                debug!("light bulb {} reported no light control", raw.id);
            }
        }
        device
    }
}

impl Mapper for DeviceDataMapper {
    type Output = Devices;

    fn map(&self, records: &[(u64, Value)]) -> Result<Devices> {
        if records.is_empty() {
            return Err(Error::NoData);
        }

        let mut devices = Devices::new();
        for (key, record) in records {
            let Some(raw) = RawDevice::validate(record) else {
                warn!("dropping invalid device record {key}");
                continue;
            };
            devices.set(Self::model(&raw));
        }
        Ok(devices)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GroupDataMapper;

impl Mapper for GroupDataMapper {
    type Output = Groups;

    fn map(&self, records: &[(u64, Value)]) -> Result<Groups> {
        if records.is_empty() {
            return Err(Error::NoData);
        }

        let mut groups = Groups::new();
        for (key, record) in records {
            let Some(raw) = RawGroup::validate(record) else {
                warn!("dropping invalid group record {key}");
                continue;
            };
            let mut group = Group::new(raw.id, &raw.name);
            group.set_member_ids(raw.member_ids().to_vec());
            groups.set(group);
        }
        Ok(groups)
    }
}

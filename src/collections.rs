//! Ordered, id-keyed collections of devices and groups.

use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::device::Device;
use crate::group::Group;

/// Anything stored in a [`Collection`].
pub trait Identified {
    fn id(&self) -> u64;
}

impl Identified for Device {
    fn id(&self) -> u64 {
        Device::id(self)
    }
}

impl Identified for Group {
    fn id(&self) -> u64 {
        Group::id(self)
    }
}

/// Entities keyed by hub id, iterated in insertion (discovery) order.
///
/// # Example
///
/// ```
/// use tradfri_rs::{Device, Devices};
///
/// let mut devices = Devices::new();
/// devices.set(Device::classify(3, "TRADFRI dimmer"));
/// devices.set(Device::classify(1, "TRADFRI remote control"));
/// devices.set(Device::classify(3, "TRADFRI motion sensor"));
///
/// assert_eq!(devices.ids(), vec![3, 1]);
/// assert_eq!(devices.get(3).unwrap().type_name(), "TRADFRI motion sensor");
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Collection<T> {
    items: Vec<T>,
}

pub type Devices = Collection<Device>;
pub type Groups = Collection<Group>;

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Collection { items: Vec::new() }
    }
}

impl<T: Identified> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `item`, replacing (in place) any entry with the same id.
    ///
    /// Returns the replaced entry.
    pub fn set(&mut self, item: T) -> Option<T> {
        match self.position(item.id()) {
            Some(index) => Some(std::mem::replace(&mut self.items[index], item)),
            None => {
                self.items.push(item);
                None
            }
        }
    }

    pub fn get(&self, id: u64) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut T> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: u64) -> bool {
        self.position(id).is_some()
    }

    pub fn remove(&mut self, id: u64) -> Option<T> {
        self.position(id).map(|index| self.items.remove(index))
    }

    pub fn ids(&self) -> Vec<u64> {
        self.items.iter().map(Identified::id).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    fn position(&self, id: u64) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }
}

impl Collection<Device> {
    /// Copy the light bulbs out into their own collection.
    pub fn lightbulbs(&self) -> Lightbulbs {
        self.iter()
            .filter(|device| device.is_lightbulb())
            .cloned()
            .fold(Lightbulbs::new(), |mut lights, device| {
                lights.add(device);
                lights
            })
    }
}

impl<T: Identified> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut collection = Collection::new();
        for item in iter {
            collection.set(item);
        }
        collection
    }
}

impl<T> IntoIterator for Collection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Collection<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}

/// A [`Devices`] collection restricted to light bulbs.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Lightbulbs {
    devices: Devices,
}

impl Lightbulbs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a light bulb.
    ///
    /// # Panics
    ///
    /// Panics if `device` is not a light bulb.
    pub fn add(&mut self, device: Device) {
        assert!(
            device.is_lightbulb(),
            "only light bulbs can be added, got {} ({})",
            device.device_type(),
            device.type_name()
        );
        self.devices.set(device);
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut Device> {
        self.devices.get_mut(id)
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Device> {
        self.devices.iter_mut()
    }

    pub fn sort_by_name(&mut self) {
        self.devices.items.sort_by(|a, b| a.name().cmp(b.name()));
    }
}

impl Deref for Lightbulbs {
    type Target = Devices;

    fn deref(&self) -> &Self::Target {
        &self.devices
    }
}

impl<'a> IntoIterator for &'a mut Lightbulbs {
    type Item = &'a mut Device;
    type IntoIter = std::slice::IterMut<'a, Device>;

    fn into_iter(self) -> Self::IntoIter {
        self.devices.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys;

    #[test]
    fn test_set_keeps_insertion_order_and_unique_ids() {
        let mut devices = Devices::new();
        assert!(devices.set(Device::classify(5, keys::TYPE_DIMMER)).is_none());
        devices.set(Device::classify(2, keys::TYPE_BULB_E27_W));
        let replaced = devices.set(Device::classify(5, keys::TYPE_REMOTE_CONTROL));

        assert_eq!(replaced.unwrap().type_name(), keys::TYPE_DIMMER);
        assert_eq!(devices.ids(), vec![5, 2]);
        assert_eq!(devices.len(), 2);
    }

    #[test]
    fn test_remove() {
        let mut devices: Devices = [1, 2, 3]
            .into_iter()
            .map(|id| Device::classify(id, keys::TYPE_BULB_E27_W))
            .collect();
        assert_eq!(devices.remove(2).unwrap().id(), 2);
        assert!(devices.remove(2).is_none());
        assert_eq!(devices.ids(), vec![1, 3]);
    }

    #[test]
    fn test_lightbulbs_view_filters_other_kinds() {
        let devices: Devices = [
            Device::classify(1, keys::TYPE_BULB_E27_W),
            Device::classify(2, keys::TYPE_REMOTE_CONTROL),
            Device::classify(3, keys::TYPE_BULB_GU10_W),
            Device::classify(4, "unknown thing"),
        ]
        .into_iter()
        .collect();

        assert_eq!(devices.lightbulbs().ids(), vec![1, 3]);
    }

    #[test]
    #[should_panic(expected = "only light bulbs can be added")]
    fn test_lightbulbs_rejects_other_kinds() {
        Lightbulbs::new().add(Device::classify(1, keys::TYPE_MOTION_SENSOR));
    }

    #[test]
    fn test_sort_by_name() {
        let mut lights = Lightbulbs::new();
        for (id, name) in [(1, "Kitchen"), (2, "Bath"), (3, "Desk")] {
            let mut bulb = Device::classify(id, keys::TYPE_BULB_E27_WS);
            bulb.set_name(name);
            lights.add(bulb);
        }
        lights.sort_by_name();
        assert_eq!(lights.ids(), vec![2, 3, 1]);
    }
}

//! High level control of lights and groups.

use log::{debug, warn};

use crate::adapter::{Gateway, HubAdapter};
use crate::collections::{Devices, Groups, Lightbulbs};
use crate::device::Device;
use crate::errors::Error;
use crate::group::Group;
use crate::types::{Brightness, PowerMode};

type Result<T> = std::result::Result<T, Error>;

/// Something that can be switched or dimmed.
#[derive(Debug)]
pub enum Target<'a> {
    Device(&'a mut Device),
    Group(&'a mut Group),
}

impl<'a> From<&'a mut Device> for Target<'a> {
    fn from(device: &'a mut Device) -> Self {
        Target::Device(device)
    }
}

impl<'a> From<&'a mut Group> for Target<'a> {
    fn from(group: &'a mut Group) -> Self {
        Target::Group(group)
    }
}

/// Entry point for callers.
///
/// Switch and dim operations are guarded locally: only light bulbs and groups
/// can be controlled, and switching something that is already in the
/// requested state does not reach the gateway. The model passed in is
/// updated once the gateway confirms a change.
///
/// # Example
///
/// ```no_run
/// use tradfri_rs::{GatewayConfig, HubAdapter, Service};
///
/// # async fn run() -> Result<(), tradfri_rs::Error> {
/// let config = GatewayConfig::new("192.168.1.50", "tradfri-rs", "s3cr3t");
/// let service = Service::new(HubAdapter::new(&config));
///
/// let mut lights = service.get_lights().await?;
/// if let Some(light) = lights.get_mut(65537) {
///     service.dim(light, 127).await?;
/// }
/// service.all_lights_off(&mut lights).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Service<G = HubAdapter> {
    gateway: G,
}

impl<G: Gateway> Service<G> {
    pub fn new(gateway: G) -> Self {
        Service { gateway }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub async fn get_devices(&self) -> Result<Devices> {
        self.gateway.device_collection().await
    }

    pub async fn get_lights(&self) -> Result<Lightbulbs> {
        Ok(self.get_devices().await?.lightbulbs())
    }

    /// All groups, each with its member devices attached.
    pub async fn get_groups(&self) -> Result<Groups> {
        self.gateway.group_collection().await
    }

    pub async fn on<'a>(&self, target: impl Into<Target<'a>>) -> Result<bool> {
        self.switch(target.into(), PowerMode::On).await
    }

    pub async fn off<'a>(&self, target: impl Into<Target<'a>>) -> Result<bool> {
        self.switch(target.into(), PowerMode::Off).await
    }

    /// Dim a light or group; `level` is clamped to the hub's range.
    pub async fn dim<'a>(&self, target: impl Into<Target<'a>>, level: u16) -> Result<bool> {
        let level = Brightness::saturating(level);
        match target.into() {
            Target::Device(device) => {
                ensure_lightbulb(device)?;
                let dimmed = self
                    .gateway
                    .set_light_brightness(device.id(), level)
                    .await?;
                if dimmed {
                    device.update_brightness(level);
                }
                Ok(dimmed)
            }
            Target::Group(group) => {
                let dimmed = self.gateway.set_group_brightness(group.id(), level).await?;
                if dimmed {
                    group.update_brightness(level);
                }
                Ok(dimmed)
            }
        }
    }

    /// Switch off every target.
    ///
    /// All targets are attempted. The first error is returned if any call
    /// failed, otherwise whether every call succeeded.
    pub async fn all_off<'a, I, T>(&self, targets: I) -> Result<bool>
    where
        I: IntoIterator<Item = T>,
        T: Into<Target<'a>>,
    {
        let mut all = true;
        let mut first_error = None;
        for target in targets {
            match self.off(target).await {
                Ok(switched) => all &= switched,
                Err(e) => {
                    warn!("switching off failed: {e}");
                    all = false;
                    first_error.get_or_insert(e);
                }
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(all),
        }
    }

    pub async fn all_lights_off(&self, lights: &mut Lightbulbs) -> Result<bool> {
        self.all_off(lights).await
    }

    async fn switch(&self, target: Target<'_>, power: PowerMode) -> Result<bool> {
        match target {
            Target::Device(device) => {
                ensure_lightbulb(device)?;
                if device.is_on() == power.is_on() {
                    debug!("device {} already {power:?}", device.id());
                    return Ok(true);
                }
                let switched = self.gateway.change_light_state(device.id(), power).await?;
                if switched {
                    device.update_from_power(power);
                }
                Ok(switched)
            }
            Target::Group(group) => {
                if group.is_on() == power.is_on() {
                    debug!("group {} already {power:?}", group.id());
                    return Ok(true);
                }
                let switched = self.gateway.change_group_state(group.id(), power).await?;
                if switched {
                    group.update_from_power(power);
                }
                Ok(switched)
            }
        }
    }
}

fn ensure_lightbulb(device: &Device) -> Result<()> {
    if device.is_lightbulb() {
        Ok(())
    } else {
        Err(Error::InvalidDeviceType(device.type_label()))
    }
}

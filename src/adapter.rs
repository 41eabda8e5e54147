//! Gateway access over CoAP.
//!
//! [`HubAdapter`] glues the command builder, a [`CommandRunner`] and the
//! response parser together. Requests are issued strictly one after the
//! other; bulk device fetches pause between requests because the gateway
//! drops requests that arrive too quickly.

use std::future::Future;
use std::time::Duration;

use log::{debug, warn};
use serde_json::Value;

use crate::collections::{Devices, Groups};
use crate::command::{CoapCommands, Resource};
use crate::config::GatewayConfig;
use crate::errors::Error;
use crate::keys;
use crate::mapper::{DeviceDataMapper, GroupDataMapper, Mapper, RawRecords};
use crate::response::{decode, id_list, parse_result};
use crate::runner::{CommandRunner, RunOptions, RunOutput, ShellRunner};
use crate::runtime::{Sleeper, TokioSleeper};
use crate::types::{Brightness, PowerMode};

type Result<T> = std::result::Result<T, Error>;

/// The hub operations the [`crate::Service`] relies on.
pub trait Gateway: Send + Sync {
    fn device_collection(&self) -> impl Future<Output = Result<Devices>> + Send;

    fn group_collection(&self) -> impl Future<Output = Result<Groups>> + Send;

    fn change_light_state(
        &self,
        id: u64,
        power: PowerMode,
    ) -> impl Future<Output = Result<bool>> + Send;

    fn change_group_state(
        &self,
        id: u64,
        power: PowerMode,
    ) -> impl Future<Output = Result<bool>> + Send;

    fn set_light_brightness(
        &self,
        id: u64,
        level: Brightness,
    ) -> impl Future<Output = Result<bool>> + Send;

    fn set_group_brightness(
        &self,
        id: u64,
        level: Brightness,
    ) -> impl Future<Output = Result<bool>> + Send;
}

/// Talks to one Tradfri gateway through a CoAP command-line client.
///
/// # Example
///
/// ```no_run
/// use tradfri_rs::{GatewayConfig, HubAdapter};
///
/// # async fn run() -> Result<(), tradfri_rs::Error> {
/// let adapter = HubAdapter::new(&GatewayConfig::new("192.168.1.50", "tradfri-rs", "s3cr3t"));
/// for id in adapter.get_device_ids().await? {
///     println!("{id}: {}", adapter.get_type(id).await?);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct HubAdapter<R = ShellRunner, S = TokioSleeper> {
    commands: CoapCommands,
    runner: R,
    sleeper: S,
    flood_protection: Duration,
    online: bool,
    device_mapper: DeviceDataMapper,
    group_mapper: GroupDataMapper,
}

impl HubAdapter {
    pub fn new(config: &GatewayConfig) -> Self {
        Self::with_runner(config, ShellRunner, TokioSleeper)
    }
}

impl<R: CommandRunner, S: Sleeper> HubAdapter<R, S> {
    pub const READ_TIMEOUT: Duration = Duration::from_secs(1);
    pub const WRITE_TIMEOUT: Duration = Duration::from_secs(2);
    /// Line count of the gateway's acknowledgement for group and dimmer
    /// commands. Observed on current firmware, not documented by IKEA.
    const ACK_LINES: usize = 4;

    pub fn with_runner(config: &GatewayConfig, runner: R, sleeper: S) -> Self {
        let mut adapter = HubAdapter {
            commands: CoapCommands::new(config),
            runner,
            sleeper,
            flood_protection: config.flood_protection(),
            online: false,
            device_mapper: DeviceDataMapper,
            group_mapper: GroupDataMapper,
        };
        adapter.check_online();
        adapter
    }

    /// Legacy reachability probe.
    ///
    /// The gateway no longer answers pings, so this always marks the adapter
    /// online. Kept so the offline guard in front of every request stays.
    pub fn check_online(&mut self) -> bool {
        self.set_online(true);
        true
    }

    pub fn set_online(&mut self, online: bool) {
        self.online = online;
    }

    pub fn is_online(&self) -> bool {
        self.online
    }

    pub async fn get_device_ids(&self) -> Result<Vec<u64>> {
        let data = self.get_data(Resource::Device, None).await?;
        id_list(&data).ok_or_else(|| Error::invalid_response("device listing is not a list of ids"))
    }

    pub async fn get_device_data(&self, id: u64) -> Result<Value> {
        self.get_data(Resource::Device, Some(id)).await
    }

    /// Fetch raw data for `ids`, or for every paired device when `None`.
    ///
    /// Each fetch is followed by the configured flood-protection pause.
    pub async fn get_devices_data(&self, ids: Option<&[u64]>) -> Result<RawRecords> {
        let ids = match ids {
            Some(ids) => ids.to_vec(),
            None => self.get_device_ids().await?,
        };

        let mut records = Vec::with_capacity(ids.len());
        for id in ids {
            records.push((id, self.get_device_data(id).await?));
            if !self.flood_protection.is_zero() {
                self.sleeper.sleep(self.flood_protection).await;
            }
        }
        Ok(records)
    }

    pub async fn get_group_ids(&self) -> Result<Vec<u64>> {
        let data = self.get_data(Resource::Group, None).await?;
        id_list(&data).ok_or_else(|| Error::invalid_response("group listing is not a list of ids"))
    }

    pub async fn get_groups_data(&self) -> Result<RawRecords> {
        let mut records = Vec::new();
        for id in self.get_group_ids().await? {
            records.push((id, self.get_data(Resource::Group, Some(id)).await?));
        }
        Ok(records)
    }

    /// The raw type string of a single device.
    pub async fn get_type(&self, id: u64) -> Result<String> {
        self.device_info_field(id, keys::ATTR_DEVICE_TYPE).await
    }

    pub async fn get_manufacturer(&self, id: u64) -> Result<String> {
        self.device_info_field(id, keys::ATTR_DEVICE_MANUFACTURER).await
    }

    pub async fn get_device_collection(&self) -> Result<Devices> {
        let records = self.get_devices_data(None).await?;
        self.device_mapper.map(&records)
    }

    /// Fetch all groups, then the member devices of each group.
    ///
    /// A group without member ids gets an empty device collection and no
    /// member fetch is issued for it.
    pub async fn get_group_collection(&self) -> Result<Groups> {
        let records = self.get_groups_data().await?;
        let mut groups = self.group_mapper.map(&records)?;

        for group in groups.iter_mut() {
            let member_ids = group.member_ids().to_vec();
            if member_ids.is_empty() {
                debug!("group {} has no members", group.id());
                continue;
            }
            let records = self.get_devices_data(Some(&member_ids)).await?;
            group.set_devices(self.device_mapper.map(&records)?);
        }
        Ok(groups)
    }

    /// Switch a light bulb.
    ///
    /// Since a gateway firmware update the hub answers with an empty body;
    /// an empty first output line is the success signal.
    pub async fn change_light_state(&self, id: u64, power: PowerMode) -> Result<bool> {
        let command = self.commands.light_switch(id, power)?;
        debug!("switching device {id} to {power:?}");

        let options = RunOptions::lines(Self::WRITE_TIMEOUT).suppress_errors();
        match self.runner.run(&command, options).await {
            Ok(RunOutput::Lines(lines)) if lines.first().is_none_or(|l| l.trim().is_empty()) => {
                Ok(true)
            }
            Ok(output) => {
                warn!("device {id} rejected state change: {output:?}");
                Err(Error::state_change_failed(Resource::Device, id))
            }
            Err(e) => {
                warn!("device {id} state change failed: {e}");
                Err(Error::state_change_failed(Resource::Device, id))
            }
        }
    }

    pub async fn change_group_state(&self, id: u64, power: PowerMode) -> Result<bool> {
        let command = self.commands.group_switch(id, power)?;
        debug!("switching group {id} to {power:?}");
        self.run_acknowledged(Resource::Group, id, &command).await
    }

    pub async fn set_light_brightness(&self, id: u64, level: Brightness) -> Result<bool> {
        let command = self.commands.light_dimmer(id, level)?;
        debug!("dimming device {id} to {}", level.value());
        self.run_acknowledged(Resource::Device, id, &command).await
    }

    pub async fn set_group_brightness(&self, id: u64, level: Brightness) -> Result<bool> {
        let command = self.commands.group_dimmer(id, level)?;
        debug!("dimming group {id} to {}", level.value());
        self.run_acknowledged(Resource::Group, id, &command).await
    }

    async fn get_data(&self, resource: Resource, id: Option<u64>) -> Result<Value> {
        if !self.is_online() {
            return Err(Error::Offline);
        }

        let command = self.commands.get(resource, id);
        debug!("GET {}", self.commands.url(resource, id));

        let output = self
            .runner
            .run(&command, RunOptions::text(Self::READ_TIMEOUT))
            .await
            .map_err(|e| Error::invalid_response(e.to_string()))?;

        let text = match output {
            RunOutput::Text(text) => text,
            RunOutput::Lines(lines) => lines.join("\n"),
        };
        let body = parse_result(&text).ok_or_else(|| Error::invalid_response("empty response"))?;
        debug!("response: {body}");
        Ok(decode(body))
    }

    async fn device_info_field(&self, id: u64, field: &str) -> Result<String> {
        let data = self.get_device_data(id).await?;
        data.get(keys::ATTR_DEVICE_INFO)
            .and_then(|info| info.get(field))
            .and_then(Value::as_str)
            .map(String::from)
            .ok_or_else(|| Error::invalid_response(format!("device {id} has no info field {field}")))
    }

    async fn run_acknowledged(&self, resource: Resource, id: u64, command: &str) -> Result<bool> {
        match self.runner.run(command, RunOptions::lines(Self::WRITE_TIMEOUT)).await {
            Ok(RunOutput::Lines(lines)) if lines.len() == Self::ACK_LINES => Ok(true),
            Ok(output) => {
                warn!("{resource} {id} returned an unexpected acknowledgement: {output:?}");
                Err(Error::state_change_failed(resource, id))
            }
            Err(e) => {
                warn!("{resource} {id} command failed: {e}");
                Err(Error::state_change_failed(resource, id))
            }
        }
    }
}

impl<R: CommandRunner, S: Sleeper> Gateway for HubAdapter<R, S> {
    async fn device_collection(&self) -> Result<Devices> {
        self.get_device_collection().await
    }

    async fn group_collection(&self) -> Result<Groups> {
        self.get_group_collection().await
    }

    async fn change_light_state(&self, id: u64, power: PowerMode) -> Result<bool> {
        HubAdapter::<R, S>::change_light_state(self, id, power).await
    }

    async fn change_group_state(&self, id: u64, power: PowerMode) -> Result<bool> {
        HubAdapter::<R, S>::change_group_state(self, id, power).await
    }

    async fn set_light_brightness(&self, id: u64, level: Brightness) -> Result<bool> {
        HubAdapter::<R, S>::set_light_brightness(self, id, level).await
    }

    async fn set_group_brightness(&self, id: u64, level: Brightness) -> Result<bool> {
        HubAdapter::<R, S>::set_group_brightness(self, id, level).await
    }
}

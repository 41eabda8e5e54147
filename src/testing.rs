//! Test doubles for the runner, sleeper and gateway seams.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::adapter::Gateway;
use crate::collections::{Devices, Groups};
use crate::command::Resource;
use crate::errors::Error;
use crate::runner::{CommandRunner, RunError, RunOptions, RunOutput};
use crate::runtime::Sleeper;
use crate::types::{Brightness, PowerMode};

type Result<T> = std::result::Result<T, Error>;

/// Replays canned outputs in order and records every command it was given.
#[derive(Debug, Clone, Default)]
pub(crate) struct ScriptedRunner {
    replies: Arc<Mutex<VecDeque<std::result::Result<RunOutput, RunError>>>>,
    calls: Arc<Mutex<Vec<(String, RunOptions)>>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(self, body: &str) -> Self {
        self.reply(Ok(RunOutput::Text(body.to_string())))
    }

    pub fn lines(self, lines: &[&str]) -> Self {
        self.reply(Ok(RunOutput::Lines(
            lines.iter().map(|l| l.to_string()).collect(),
        )))
    }

    pub fn fail(self, err: RunError) -> Self {
        self.reply(Err(err))
    }

    pub fn reply(self, reply: std::result::Result<RunOutput, RunError>) -> Self {
        self.replies.lock().unwrap().push_back(reply);
        self
    }

    pub fn calls(&self) -> Vec<(String, RunOptions)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn commands(&self) -> Vec<String> {
        self.calls().into_iter().map(|(command, _)| command).collect()
    }
}

impl CommandRunner for ScriptedRunner {
    async fn run(
        &self,
        command: &str,
        options: RunOptions,
    ) -> std::result::Result<RunOutput, RunError> {
        self.calls
            .lock()
            .unwrap()
            .push((command.to_string(), options));
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(RunError::ExitStatus(Some(1))))
    }
}

/// Records requested pauses instead of sleeping.
#[derive(Debug, Clone, Default)]
pub(crate) struct RecordingSleeper {
    pauses: Arc<Mutex<Vec<Duration>>>,
}

impl RecordingSleeper {
    pub fn pauses(&self) -> Vec<Duration> {
        self.pauses.lock().unwrap().clone()
    }
}

impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.pauses.lock().unwrap().push(duration);
    }
}

/// A hub call observed by [`FakeGateway`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Call {
    LightState(u64, PowerMode),
    GroupState(u64, PowerMode),
    LightBrightness(u64, u8),
    GroupBrightness(u64, u8),
}

/// Gateway that answers every command with `answer`, except for ids listed
/// in `failing`, which fail with a state change error.
#[derive(Debug, Clone)]
pub(crate) struct FakeGateway {
    pub devices: Devices,
    pub groups: Groups,
    pub answer: bool,
    pub failing: Vec<u64>,
    calls: Arc<Mutex<Vec<Call>>>,
}

impl Default for FakeGateway {
    fn default() -> Self {
        FakeGateway {
            devices: Devices::new(),
            groups: Groups::new(),
            answer: true,
            failing: Vec::new(),
            calls: Arc::default(),
        }
    }
}

impl FakeGateway {
    pub fn answering(answer: bool) -> Self {
        FakeGateway {
            answer,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call, resource: Resource, id: u64) -> Result<bool> {
        self.calls.lock().unwrap().push(call);
        if self.failing.contains(&id) {
            Err(Error::state_change_failed(resource, id))
        } else {
            Ok(self.answer)
        }
    }
}

impl Gateway for FakeGateway {
    async fn device_collection(&self) -> Result<Devices> {
        Ok(self.devices.clone())
    }

    async fn group_collection(&self) -> Result<Groups> {
        Ok(self.groups.clone())
    }

    async fn change_light_state(&self, id: u64, power: PowerMode) -> Result<bool> {
        self.record(Call::LightState(id, power), Resource::Device, id)
    }

    async fn change_group_state(&self, id: u64, power: PowerMode) -> Result<bool> {
        self.record(Call::GroupState(id, power), Resource::Group, id)
    }

    async fn set_light_brightness(&self, id: u64, level: Brightness) -> Result<bool> {
        self.record(Call::LightBrightness(id, level.value()), Resource::Device, id)
    }

    async fn set_group_brightness(&self, id: u64, level: Brightness) -> Result<bool> {
        self.record(Call::GroupBrightness(id, level.value()), Resource::Group, id)
    }
}

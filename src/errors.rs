use crate::command::Resource;

/// All error types that can occur when talking to a Tradfri gateway.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The adapter is not connected; every hub call short-circuits.
    #[error("api is offline")]
    Offline,

    /// A command failed to run or the hub answered with an unexpected shape.
    #[error("invalid hub response: {0}")]
    InvalidResponse(String),

    /// The hub accepted the command but did not acknowledge the change.
    #[error("could not switch state of {resource} {id}")]
    StateChangeFailed { resource: Resource, id: u64 },

    /// A control operation was attempted on a device that does not support it.
    #[error("invalid device type: {0}")]
    InvalidDeviceType(String),

    /// A mapping operation received no records at all.
    #[error("no data")]
    NoData,

    /// Attempted to send a [`crate::Payload`] with no attributes set.
    #[error("invalid payload; no attributes set")]
    NoAttribute,

    /// Failed to serialize a command payload to JSON.
    #[error("failed to dump json: {0:?}")]
    JsonDump(serde_json::Error),
}

impl Error {
    /// Create a new invalid response error
    pub fn invalid_response(reason: impl Into<String>) -> Self {
        Error::InvalidResponse(reason.into())
    }

    /// Create a new state change error
    pub fn state_change_failed(resource: Resource, id: u64) -> Self {
        Error::StateChangeFailed { resource, id }
    }
}

/// Hacky implementation of PartialEq for testing
#[cfg(test)]
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

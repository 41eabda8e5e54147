//! # tradfri_rs
//!
//! An async Rust library for controlling IKEA Tradfri lights through the
//! Tradfri gateway.
//!
//! The gateway speaks CoAP over DTLS. This crate drives it through an
//! external `coap-client` binary (from libcoap), parses its output and maps
//! the gateway's numeric-keyed JSON onto typed devices and groups.
//!
//! ## Quick Start
//!
//! ```no_run
//! use tradfri_rs::{GatewayConfig, HubAdapter, Service};
//!
//! async fn lights_out() -> Result<(), tradfri_rs::Error> {
//!     let config = GatewayConfig::new("192.168.1.50", "tradfri-rs", "s3cr3t");
//!     let service = Service::new(HubAdapter::new(&config));
//!
//!     for mut group in service.get_groups().await? {
//!         println!("{} is {}", group.name(), if group.is_on() { "on" } else { "off" });
//!         service.off(&mut group).await?;
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Layers
//!
//! - [`CoapCommands`] formats `coap-client` invocations
//! - [`CommandRunner`] runs them with a timeout ([`ShellRunner`] by default)
//! - [`HubAdapter`] parses responses, paces bulk reads and judges whether a
//!   write was acknowledged
//! - [`DeviceDataMapper`] and [`GroupDataMapper`] turn raw records into
//!   [`Devices`] and [`Groups`]
//! - [`Service`] guards state transitions and keeps the models in sync
//!
//! ## Flood protection
//!
//! The gateway silently drops requests that arrive too quickly. Device
//! fetches are therefore issued one at a time with a pause after each one,
//! 250ms unless configured otherwise through
//! [`GatewayConfig::with_flood_protection`].

mod adapter;
mod classifier;
mod collections;
mod command;
mod config;
mod device;
mod errors;
mod group;
pub mod keys;
mod mapper;
mod payload;
mod raw;
mod response;
mod runner;
pub mod runtime;
mod service;
mod status;
#[cfg(test)]
pub(crate) mod testing;
mod types;

// Re-export public API
pub use adapter::{Gateway, HubAdapter};
pub use classifier::{
    classify, is_dimmer, is_known_device_type, is_lightbulb, is_motion_sensor, is_remote,
};
pub use collections::{Collection, Devices, Groups, Identified, Lightbulbs};
pub use command::{CoapCommands, Resource};
pub use config::GatewayConfig;
pub use device::{Device, DeviceKind};
pub use errors::Error;
pub use group::Group;
pub use mapper::{DeviceDataMapper, GroupDataMapper, Mapper, RawRecords};
pub use payload::Payload;
pub use response::{decode, parse_result};
pub use runner::{Capture, CommandRunner, RunError, RunOptions, RunOutput, ShellRunner};
pub use service::{Service, Target};
pub use status::LightState;
pub use types::{Brightness, DeviceType, PowerMode};

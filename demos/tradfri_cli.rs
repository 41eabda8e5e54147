//! CLI application for controlling Tradfri lights.
//!
//! Needs `coap-client` (libcoap, built with DTLS support) on the PATH.
//!
//! Run with: cargo run --example tradfri_cli -- --help

use clap::{Parser, Subcommand};
use std::time::Duration;
use tradfri_rs::{Device, Error, GatewayConfig, Group, HubAdapter, Service};

#[derive(Parser)]
#[command(name = "tradfri-cli")]
#[command(about = "Control IKEA Tradfri lights from the command line", long_about = None)]
struct Cli {
    /// Address of the Tradfri gateway
    #[arg(long, global = true, default_value = "192.168.1.50")]
    host: String,

    /// Pre-shared key identity registered on the gateway
    #[arg(short, long, global = true, default_value = "tradfri-rs")]
    identity: String,

    /// Pre-shared key for the identity
    #[arg(short, long, global = true, default_value = "")]
    psk: String,

    /// Pause after each device request, in microseconds (0 disables)
    #[arg(long, global = true, default_value = "250000")]
    flood_protection_us: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all devices paired with the gateway
    Devices,

    /// List all groups and their members
    Groups,

    /// Turn a light on
    On { id: u64 },

    /// Turn a light off
    Off { id: u64 },

    /// Dim a light (0-254)
    Dim { id: u64, level: u16 },

    /// Turn a group on
    GroupOn { id: u64 },

    /// Turn a group off
    GroupOff { id: u64 },

    /// Dim a group (0-254)
    GroupDim { id: u64, level: u16 },

    /// Turn every light off
    AllOff,
}

fn describe(device: &Device) -> String {
    let state = match device.light() {
        Some(light) => format!(
            "{} brightness {} color {}",
            if light.is_on() { "ON " } else { "OFF" },
            light.brightness().value(),
            if light.color_hex().is_empty() { "-" } else { light.color_hex() },
        ),
        None => String::from("-"),
    };
    format!(
        "{:>6}  {:<24} {:<14} {:<32} {}",
        device.id(),
        device.name(),
        device.device_type().to_string(),
        device.type_name(),
        state
    )
}

async fn find_light(service: &Service, id: u64) -> Result<Device, Box<dyn std::error::Error>> {
    let devices = service.get_devices().await?;
    let device = devices.get(id).ok_or(format!("no device with id {id}"))?;
    Ok(device.clone())
}

async fn find_group(service: &Service, id: u64) -> Result<Group, Box<dyn std::error::Error>> {
    let mut groups = service.get_groups().await?;
    let group = groups.remove(id).ok_or(format!("no group with id {id}"))?;
    Ok(group)
}

fn report(action: &str, result: Result<bool, Error>) {
    match result {
        Ok(true) => println!("{action}: done"),
        Ok(false) => println!("{action}: not confirmed by the gateway"),
        Err(e) => eprintln!("{action}: {e}"),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = GatewayConfig::new(&cli.host, &cli.identity, &cli.psk)
        .with_flood_protection(Duration::from_micros(cli.flood_protection_us));
    let service = Service::new(HubAdapter::new(&config));

    match cli.command {
        Commands::Devices => {
            println!("Fetching devices from {}...", cli.host);
            let devices = service.get_devices().await?;
            println!("\nFound {} device(s):", devices.len());
            for device in &devices {
                println!("{}", describe(device));
            }
        }

        Commands::Groups => {
            println!("Fetching groups from {}...", cli.host);
            for group in service.get_groups().await? {
                println!(
                    "\n{} {} ({})",
                    group.id(),
                    group.name(),
                    if group.is_on() { "ON" } else { "OFF" }
                );
                for device in group.devices() {
                    println!("  {}", describe(device));
                }
            }
        }

        Commands::On { id } => {
            let mut light = find_light(&service, id).await?;
            report(&format!("Turning {} on", light.name()), service.on(&mut light).await);
        }

        Commands::Off { id } => {
            let mut light = find_light(&service, id).await?;
            report(&format!("Turning {} off", light.name()), service.off(&mut light).await);
        }

        Commands::Dim { id, level } => {
            let mut light = find_light(&service, id).await?;
            report(
                &format!("Dimming {} to {level}", light.name()),
                service.dim(&mut light, level).await,
            );
        }

        Commands::GroupOn { id } => {
            let mut group = find_group(&service, id).await?;
            report(&format!("Turning {} on", group.name()), service.on(&mut group).await);
        }

        Commands::GroupOff { id } => {
            let mut group = find_group(&service, id).await?;
            report(&format!("Turning {} off", group.name()), service.off(&mut group).await);
        }

        Commands::GroupDim { id, level } => {
            let mut group = find_group(&service, id).await?;
            report(
                &format!("Dimming {} to {level}", group.name()),
                service.dim(&mut group, level).await,
            );
        }

        Commands::AllOff => {
            let mut lights = service.get_lights().await?;
            println!("Switching off {} light(s)...", lights.len());
            report("All lights off", service.all_lights_off(&mut lights).await);
        }
    }

    Ok(())
}

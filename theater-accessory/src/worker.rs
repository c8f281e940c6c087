//! Background device worker
//!
//! Owns the entire device side of one accessory: the bootstrap chain (parse
//! credentials, scan, connect), the bridge state machine, and subscription
//! management. Runs on its own thread with a current-thread tokio runtime so
//! the accessory facade stays fully synchronous.

use std::sync::mpsc;
use std::thread::{self, JoinHandle};

use tokio::sync::mpsc::UnboundedReceiver;

use atv_client::{
    AppleTvClient, AppleTvConnection, ClientError, Credentials, DeviceEvent, DeviceEvents,
    EventStream,
};
use theater_state::{SubscriptionChange, SwitchEvent, TheaterBridge};

use crate::AccessoryConfig;

/// Commands sent from the accessory facade to its worker
#[derive(Debug)]
pub enum Command {
    /// Toggle theater mode and move the device subscriptions accordingly.
    /// The worker signals `ack` once the change is in force.
    SetEnabled {
        enabled: bool,
        ack: mpsc::Sender<()>,
    },
    /// Shut the worker down
    Shutdown,
}

/// Spawn the device worker for one accessory
///
/// The worker runs the bootstrap once; if any stage fails it logs the error
/// and exits, leaving the accessory permanently inert. There is no retry and
/// no abort path for an in-flight bootstrap.
pub fn spawn_device_worker(
    client: Box<dyn AppleTvClient>,
    config: AccessoryConfig,
    command_rx: UnboundedReceiver<Command>,
    event_tx: mpsc::Sender<SwitchEvent>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let rt = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(rt) => rt,
            Err(e) => {
                tracing::error!("failed to create runtime for device worker: {}", e);
                return;
            }
        };

        rt.block_on(run_worker(client, config, command_rx, event_tx));
    })
}

async fn run_worker(
    client: Box<dyn AppleTvClient>,
    config: AccessoryConfig,
    mut command_rx: UnboundedReceiver<Command>,
    event_tx: mpsc::Sender<SwitchEvent>,
) {
    // Bootstrap failures are terminal: log once and go inert.
    let (mut connection, mut events) = match bootstrap(client.as_ref(), &config).await {
        Ok(pair) => pair,
        Err(e) => {
            tracing::error!("{}: {}", config.name, e);
            return;
        }
    };
    tracing::info!("opened connection to {}", config.name);

    let mut bridge = TheaterBridge::new();

    loop {
        tokio::select! {
            // Pending toggle writes win over queued device events, so a
            // disable is in force before the next notification is read.
            biased;

            command = command_rx.recv() => {
                match command {
                    Some(Command::SetEnabled { enabled, ack }) => {
                        apply_toggle(&mut bridge, connection.as_mut(), enabled);
                        let _ = ack.send(());
                    }
                    Some(Command::Shutdown) | None => {
                        tracing::debug!("worker for {} shutting down", config.name);
                        return;
                    }
                }
            }

            event = events.next() => {
                match event {
                    Some(event) => {
                        if let Some(switch_event) = handle_device_event(&mut bridge, &config.name, event) {
                            if event_tx.send(switch_event).is_err() {
                                tracing::debug!("accessory dropped, shutting down worker");
                                break;
                            }
                        }
                    }
                    None => {
                        tracing::info!("device event stream ended for {}", config.name);
                        break;
                    }
                }
            }
        }
    }
}

/// Resolve credentials into a live connection
///
/// Takes the first scan result; more than one match for a unique identifier
/// has no defined tie-break, so it is logged and the first wins.
async fn bootstrap(
    client: &dyn AppleTvClient,
    config: &AccessoryConfig,
) -> Result<(Box<dyn AppleTvConnection>, DeviceEvents), ClientError> {
    let credentials = Credentials::parse(&config.credentials)?;

    let devices = client.scan(credentials.unique_identifier()).await?;
    if devices.len() > 1 {
        tracing::warn!(
            "scan returned {} devices for {}, taking the first",
            devices.len(),
            credentials.unique_identifier()
        );
    }
    let device = devices
        .into_iter()
        .next()
        .ok_or_else(|| ClientError::NoDeviceFound(credentials.unique_identifier().to_string()))?;

    client.open_connection(&device, &credentials).await
}

/// Run one device event through the bridge
///
/// Runtime errors are logged (message plus backtrace when present) and never
/// tear the connection down; reconnection is the device library's business.
fn handle_device_event(
    bridge: &mut TheaterBridge,
    name: &str,
    event: DeviceEvent,
) -> Option<SwitchEvent> {
    match event {
        DeviceEvent::SupportedCommands(commands) => bridge.handle_supported_commands(&commands),
        DeviceEvent::NowPlaying(info) => bridge.handle_now_playing(info.as_ref()),
        DeviceEvent::Error { message, backtrace } => {
            tracing::error!("device error on {}: {}", name, message);
            if let Some(backtrace) = backtrace {
                tracing::error!("{}", backtrace);
            }
            None
        }
    }
}

/// Apply a toggle change to the bridge and the device subscriptions
///
/// Subscribing always clears prior listeners first so a repeated enable
/// cannot stack duplicate deliveries.
fn apply_toggle(bridge: &mut TheaterBridge, connection: &mut dyn AppleTvConnection, enabled: bool) {
    match bridge.set_enabled(enabled) {
        SubscriptionChange::Subscribe => {
            for stream in EventStream::ALL {
                connection.remove_listeners(stream);
                connection.subscribe(stream);
            }
        }
        SubscriptionChange::Unsubscribe => {
            for stream in EventStream::ALL {
                connection.remove_listeners(stream);
            }
        }
    }
}

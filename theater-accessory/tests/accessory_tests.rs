//! End-to-end accessory tests over the scripted in-memory device

use std::time::Duration;

use atv_client::{
    Command, DeviceHandle, EventStream, FakeAppleTv, FakeController, MediaState, NowPlayingInfo,
};
use theater_accessory::{AccessoryConfig, SwitchEvent, TheaterModeAccessory};

const CREDENTIALS: &str = "ATV01:a1b2:c3d4:e5f6:0011";
const RECV_TIMEOUT: Duration = Duration::from_secs(5);
const SETTLE: Duration = Duration::from_millis(300);

fn paired_fake() -> FakeAppleTv {
    init_test_logging();
    FakeAppleTv::new().with_device(DeviceHandle::new("ATV01", "Living Room", "Apple TV 4K"))
}

fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .compact()
        .try_init();
}

fn accessory_with_fake(fake: FakeAppleTv) -> (TheaterModeAccessory, FakeController) {
    let controller = fake.controller();
    let accessory = TheaterModeAccessory::new(
        Box::new(fake),
        AccessoryConfig::new("Living Room", CREDENTIALS),
    );
    (accessory, controller)
}

fn enable_and_wait(accessory: &TheaterModeAccessory, controller: &FakeController) {
    accessory.set_enabled(true);
    assert!(
        controller.wait_subscribed(EventStream::NowPlaying, RECV_TIMEOUT),
        "worker never subscribed to the now-playing stream"
    );
    assert!(controller.wait_subscribed(EventStream::SupportedCommands, RECV_TIMEOUT));
}

#[test]
fn play_pause_stop_flow() {
    let (accessory, controller) = accessory_with_fake(paired_fake());
    let events = accessory.iter();
    enable_and_wait(&accessory, &controller);

    controller.push_now_playing(Some(NowPlayingInfo::with_state(MediaState::Playing)));
    assert_eq!(events.recv_timeout(RECV_TIMEOUT), Some(SwitchEvent::Play));

    // Steady-state repetition is not an edge.
    controller.push_now_playing(Some(NowPlayingInfo::with_state(MediaState::Playing)));
    assert_eq!(events.recv_timeout(SETTLE), None);

    controller.push_now_playing(Some(NowPlayingInfo::with_state(MediaState::Paused)));
    assert_eq!(events.recv_timeout(RECV_TIMEOUT), Some(SwitchEvent::Pause));

    // Session goes away: empty supported-command set.
    controller.push_supported_commands(vec![]);
    assert_eq!(events.recv_timeout(RECV_TIMEOUT), Some(SwitchEvent::Stop));

    // Already stopped: a second empty set is silent.
    controller.push_supported_commands(vec![]);
    assert_eq!(events.recv_timeout(SETTLE), None);
}

#[test]
fn null_now_playing_is_ignored() {
    let (accessory, controller) = accessory_with_fake(paired_fake());
    let events = accessory.iter();
    enable_and_wait(&accessory, &controller);

    controller.push_now_playing(None);
    controller.push_supported_commands(vec![Command::Play, Command::Pause]);
    assert_eq!(events.recv_timeout(SETTLE), None);
}

#[test]
fn paused_from_stopped_does_not_fire() {
    let (accessory, controller) = accessory_with_fake(paired_fake());
    let events = accessory.iter();
    enable_and_wait(&accessory, &controller);

    controller.push_now_playing(Some(NowPlayingInfo::with_state(MediaState::Paused)));
    assert_eq!(events.recv_timeout(SETTLE), None);
}

#[test]
fn disabled_accessory_never_fires() {
    let (accessory, controller) = accessory_with_fake(paired_fake());
    let events = accessory.iter();

    // Never enabled: nothing is subscribed, so the device side drops these.
    std::thread::sleep(SETTLE);
    controller.push_now_playing(Some(NowPlayingInfo::with_state(MediaState::Playing)));
    controller.push_supported_commands(vec![]);
    assert_eq!(events.recv_timeout(SETTLE), None);
    assert!(!accessory.is_enabled());
}

#[test]
fn disable_unsubscribes_and_preserves_state() {
    let (accessory, controller) = accessory_with_fake(paired_fake());
    let events = accessory.iter();
    enable_and_wait(&accessory, &controller);

    controller.push_now_playing(Some(NowPlayingInfo::with_state(MediaState::Playing)));
    assert_eq!(events.recv_timeout(RECV_TIMEOUT), Some(SwitchEvent::Play));

    accessory.set_enabled(false);
    assert!(controller.wait_unsubscribed(EventStream::NowPlaying, RECV_TIMEOUT));
    assert!(controller.wait_unsubscribed(EventStream::SupportedCommands, RECV_TIMEOUT));

    // While disabled nothing is delivered at all.
    controller.push_now_playing(Some(NowPlayingInfo::with_state(MediaState::Paused)));
    assert_eq!(events.recv_timeout(SETTLE), None);

    // Re-enable: the tracked state is still Playing, so a Paused observation
    // fires the direct Playing -> Paused edge.
    enable_and_wait(&accessory, &controller);
    controller.push_now_playing(Some(NowPlayingInfo::with_state(MediaState::Paused)));
    assert_eq!(events.recv_timeout(RECV_TIMEOUT), Some(SwitchEvent::Pause));
}

#[test]
fn disable_suppresses_in_flight_events() {
    let (accessory, controller) = accessory_with_fake(paired_fake());
    let events = accessory.iter();
    enable_and_wait(&accessory, &controller);

    // A notification already on the wire when the toggle flips off must not
    // surface once set_enabled has returned.
    controller.push_now_playing(Some(NowPlayingInfo::with_state(MediaState::Playing)));
    accessory.set_enabled(false);
    assert!(!accessory.is_enabled());
    assert_eq!(events.recv_timeout(SETTLE), None);
}

#[test]
fn duplicate_scan_results_connect_to_first() {
    // Two scan hits for the same identifier: the first one wins and the
    // accessory keeps working against it.
    let fake = paired_fake().with_device(DeviceHandle::new("ATV01", "Bedroom", "Apple TV HD"));
    let (accessory, controller) = accessory_with_fake(fake);
    let events = accessory.iter();
    enable_and_wait(&accessory, &controller);

    assert_eq!(controller.connected_device().as_deref(), Some("Living Room"));
    controller.push_now_playing(Some(NowPlayingInfo::with_state(MediaState::Playing)));
    assert_eq!(events.recv_timeout(RECV_TIMEOUT), Some(SwitchEvent::Play));
}

#[test]
fn repeated_enable_does_not_duplicate_events() {
    let (accessory, controller) = accessory_with_fake(paired_fake());
    let events = accessory.iter();
    enable_and_wait(&accessory, &controller);
    enable_and_wait(&accessory, &controller);

    controller.push_now_playing(Some(NowPlayingInfo::with_state(MediaState::Playing)));
    assert_eq!(events.recv_timeout(RECV_TIMEOUT), Some(SwitchEvent::Play));
    assert_eq!(events.recv_timeout(SETTLE), None);
}

#[test]
fn device_errors_do_not_fire_or_kill() {
    let (accessory, controller) = accessory_with_fake(paired_fake());
    let events = accessory.iter();
    enable_and_wait(&accessory, &controller);

    controller.push_error("connection hiccup", Some("stack trace".to_string()));
    assert_eq!(events.recv_timeout(SETTLE), None);

    // The worker is still alive and translating.
    controller.push_now_playing(Some(NowPlayingInfo::with_state(MediaState::Playing)));
    assert_eq!(events.recv_timeout(RECV_TIMEOUT), Some(SwitchEvent::Play));
}

#[test]
fn scan_failure_leaves_accessory_inert() {
    let fake = FakeAppleTv::new().with_scan_failure("network unreachable");
    let (accessory, _controller) = accessory_with_fake(fake);

    std::thread::sleep(SETTLE);
    accessory.set_enabled(true);
    assert!(accessory.is_enabled());
    assert_eq!(accessory.iter().recv_timeout(SETTLE), None);
}

#[test]
fn connection_failure_leaves_accessory_inert() {
    let fake = paired_fake().with_connection_failure("pairing rejected");
    let (accessory, controller) = accessory_with_fake(fake);

    std::thread::sleep(SETTLE);
    accessory.set_enabled(true);
    assert!(!controller.wait_subscribed(EventStream::NowPlaying, SETTLE));
    assert_eq!(accessory.iter().recv_timeout(SETTLE), None);
}

#[test]
fn bad_credentials_leave_accessory_inert() {
    let fake = paired_fake();
    let controller = fake.controller();
    let accessory = TheaterModeAccessory::new(
        Box::new(fake),
        AccessoryConfig::new("Living Room", "not-a-credential-string"),
    );

    std::thread::sleep(SETTLE);
    accessory.set_enabled(true);
    assert!(!controller.is_connected());
    assert_eq!(accessory.iter().recv_timeout(SETTLE), None);
}

#[test]
fn toggle_before_connection_is_deferred() {
    let (accessory, controller) = accessory_with_fake(paired_fake());

    // Sent immediately, possibly before the worker finished its bootstrap;
    // the command queues and applies once the connection is up.
    accessory.set_enabled(true);
    assert!(controller.wait_subscribed(EventStream::NowPlaying, RECV_TIMEOUT));
}

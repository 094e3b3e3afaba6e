use loupe_core::config::WidgetConfig;
use loupe_core::controller::{InputEvent, ZoomController};
use loupe_core::error::LoupeError;
use loupe_core::host::manual::PassiveSupport;
use loupe_core::host::{ListenerOptions, ManualHost};

mod common;
use common::{click, ms};

#[test]
fn test_mount_registers_non_passive_listeners_when_supported() {
    let c = common::mount_with(
        WidgetConfig::default(),
        ManualHost::new().with_passive_support(PassiveSupport::Supported),
    );
    assert_eq!(c.listener_options(), ListenerOptions::NonPassive);
    assert_eq!(c.host().region_listeners(), Some(ListenerOptions::NonPassive));
}

#[test]
fn test_mount_falls_back_when_unsupported() {
    let c = common::mount_with(
        WidgetConfig::default(),
        ManualHost::new().with_passive_support(PassiveSupport::Unsupported),
    );
    assert_eq!(c.listener_options(), ListenerOptions::Legacy);
}

#[test]
fn test_mount_falls_back_silently_when_detection_fails() {
    let c = common::mount_with(
        WidgetConfig::default(),
        ManualHost::new().with_passive_support(PassiveSupport::Broken),
    );
    assert_eq!(c.host().region_listeners(), Some(ListenerOptions::Legacy));
}

#[test]
fn test_global_listeners_use_detected_options() {
    let mut c = common::mount_with(
        WidgetConfig::default(),
        ManualHost::new().with_passive_support(PassiveSupport::Unsupported),
    );
    common::zoom_in_settled(&mut c, 300.0, 400.0);
    assert_eq!(c.host().global_listeners(), Some(ListenerOptions::Legacy));
}

#[test]
fn test_mount_rejects_invalid_config() {
    let config = WidgetConfig {
        map_scale_factor: 0.0,
        ..WidgetConfig::default()
    };
    let result = ZoomController::mount(common::image_set(), config, ManualHost::new());
    assert!(matches!(result, Err(LoupeError::InvalidConfig(_))));
}

#[test]
fn test_unmount_releases_listeners_and_timers() {
    let mut c = common::mount();
    common::zoom_in_settled(&mut c, 300.0, 400.0);
    c.handle(&InputEvent::TouchStart(common::touch(10.0, 10.0)));
    assert!(c.host().global_listeners().is_some());
    assert!(c.host().pending_timers() > 0);

    c.unmount();
    assert!(!c.is_mounted());
    assert!(c.host().global_listeners().is_none());
    assert!(c.host().region_listeners().is_none());
    assert_eq!(c.host().pending_timers(), 0);
}

#[test]
fn test_unmount_mid_transition_cancels_pending_attach() {
    let mut c = common::mount();
    c.handle(&click(300.0, 400.0));
    c.unmount();
    c.advance(ms(1000));
    assert_eq!(c.host().global_attach_count(), 0);
}

#[test]
fn test_events_after_unmount_are_ignored() {
    let mut c = common::mount();
    c.unmount();
    let outcome = c.handle(&click(300.0, 400.0));
    assert!(!outcome.default_prevented);
    assert!(!c.state().is_zoomed);
    c.unmount();
}

#[test]
fn test_custom_transition_time() {
    let config = WidgetConfig {
        zoom_transition_ms: 50,
        ..WidgetConfig::default()
    };
    let mut c = common::mount_with(config, ManualHost::new());
    c.handle(&click(300.0, 400.0));
    c.advance(ms(50));
    assert!(c.host().global_listeners().is_some());
}

#[test]
fn test_instances_do_not_share_listeners() {
    let mut a = common::mount();
    let b = common::mount();
    common::zoom_in_settled(&mut a, 300.0, 400.0);
    assert!(a.host().global_listeners().is_some());
    assert!(b.host().global_listeners().is_none());
    assert!(!b.state().is_zoomed);
}

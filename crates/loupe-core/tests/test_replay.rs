use approx::assert_abs_diff_eq;

use loupe_core::error::LoupeError;
use loupe_core::geometry::Point;
use loupe_core::replay::ReplayScript;

const HEADER: &str = r#"
[base]
alt = "Base"
src = "base.jpg"
width = 350
height = 550

[large]
alt = "Large"
src = "large.jpg"
width = 450
height = 707

[thumbnail]
alt = "Thumb"
src = "thumb.jpg"
"#;

fn script(steps: &str) -> ReplayScript {
    ReplayScript::from_toml_str(&format!("{HEADER}\n{steps}")).unwrap()
}

#[test]
fn test_click_then_hover_then_dismiss() {
    let s = script(
        r#"
[[steps]]
at_ms = 0
event = { type = "click", offset = { x = 300, y = 400 } }

[[steps]]
at_ms = 400
event = { type = "pointer_move", offset = { x = 175, y = 275 } }

[[steps]]
at_ms = 420
event = { type = "document_click", inside_zoom_region = false }
"#,
    );
    let snaps = s.run().unwrap();
    assert_eq!(snaps.len(), 4);

    assert!(snaps[0].is_zoomed);
    assert_eq!(snaps[0].background_position, Point::new(85.7, 72.7));

    // The hover is committed by the frame that runs before the next step.
    assert_eq!(snaps[1].focus, Point::new(300.0, 400.0));
    assert!(!snaps[2].is_zoomed);
    assert_eq!(snaps[2].focus, Point::new(175.0, 275.0));
    assert!(snaps[2].default_prevented);

    let settled = snaps.last().unwrap();
    assert_eq!(settled.label, "settled");
    assert_abs_diff_eq!(settled.zoom_level, 350.0 / 450.0);
}

#[test]
fn test_touch_script() {
    let s = script(
        r#"
[[steps]]
at_ms = 0
event = { type = "touch_start", touches = [{ x = 300, y = 400 }] }

[[steps]]
at_ms = 80
event = { type = "touch_end", touches = [{ x = 300, y = 400 }] }

[[steps]]
at_ms = 500
event = { type = "pinch", kind = "pinch_out" }
"#,
    );
    let snaps = s.run().unwrap();
    assert!(snaps[1].is_zoomed);
    assert!(snaps[1].drag_derived);
    assert_abs_diff_eq!(snaps[2].zoom_level, 1.3, epsilon = 1e-12);
}

#[test]
fn test_config_overrides_are_applied() {
    let s = script(
        r#"
[config]
display_map = false
zoom_transition_ms = 10
"#,
    );
    assert!(!s.config.display_map);
    assert_eq!(s.config.map_border_color, "grey");
    let snaps = s.run().unwrap();
    assert_eq!(snaps.len(), 1);
}

#[test]
fn test_out_of_order_steps_rejected() {
    let s = script(
        r#"
[[steps]]
at_ms = 100
event = { type = "wheel", delta_y = 1 }

[[steps]]
at_ms = 50
event = { type = "wheel", delta_y = 1 }
"#,
    );
    assert!(matches!(s.run(), Err(LoupeError::Script(_))));
}

#[test]
fn test_invalid_images_rejected() {
    let s = ReplayScript::from_toml_str(
        r#"
[base]
alt = "Base"
src = "base.jpg"
width = 0
height = 550

[large]
alt = "Large"
src = "large.jpg"
width = 450
height = 707
"#,
    )
    .unwrap();
    assert!(matches!(s.run(), Err(LoupeError::InvalidDimensions { .. })));
}

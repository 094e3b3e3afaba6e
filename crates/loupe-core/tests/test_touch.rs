use approx::assert_abs_diff_eq;

use loupe_core::controller::transition::{self, Effect};
use loupe_core::controller::{InputEvent, TouchEvent, ViewState};
use loupe_core::geometry::Point;

mod common;
use common::{ms, touch};

fn zoomed_drag_state(focus: Point, zoom_level: f64) -> ViewState {
    let mut s = ViewState::initial(&common::image_set());
    s.is_zoomed = true;
    s.is_dragging = true;
    s.is_drag_derived = true;
    s.zoom_level = zoom_level;
    s.viewport_focus = focus;
    s.previous_drag_point = Some(Point::new(100.0, 200.0));
    s
}

fn cx_drag(state: ViewState, to: Point) -> transition::Transition {
    let images = common::image_set();
    let config = Default::default();
    let cx = transition::WidgetContext {
        images: &images,
        config: &config,
    };
    transition::drag(state, cx, &TouchEvent::single(to, Point::ORIGIN))
}

#[test]
fn test_tap_zooms_in_large_image_space() {
    let mut c = common::mount();
    c.handle(&InputEvent::TouchStart(touch(300.0, 400.0)));
    assert!(c.state().is_awaiting_tap_confirmation);
    let outcome = c.handle(&InputEvent::TouchEnd(touch(300.0, 400.0)));

    assert!(outcome.default_prevented);
    let s = c.state();
    assert!(s.is_zoomed);
    assert!(s.is_drag_derived);
    assert_abs_diff_eq!(s.viewport_focus.x, 385.714286, epsilon = 1e-6);
    assert_abs_diff_eq!(s.viewport_focus.y, 514.285714, epsilon = 1e-6);
    assert_eq!(c.presentation().background_position_css(), "85.7% 72.7%");
}

#[test]
fn test_tap_uses_widget_local_coordinates() {
    let mut c = common::mount();
    let origin = Point::new(10.0, 20.0);
    let at = Point::new(310.0, 420.0);
    c.handle(&InputEvent::TouchStart(TouchEvent::single(at, origin)));
    c.handle(&InputEvent::TouchEnd(TouchEvent::single(at, origin)));
    assert_eq!(c.state().last_click_point, Some(Point::new(300.0, 400.0)));
}

#[test]
fn test_tap_past_the_edge_is_clamped() {
    let mut c = common::mount();
    c.handle(&InputEvent::TouchStart(touch(350.0, 560.0)));
    c.handle(&InputEvent::TouchEnd(touch(350.0, 560.0)));
    assert_eq!(c.state().viewport_focus, Point::new(450.0, 707.0));
}

#[test]
fn test_tap_left_of_widget_keeps_negative_coordinate() {
    let mut c = common::mount();
    c.handle(&InputEvent::TouchStart(touch(-10.0, 100.0)));
    c.handle(&InputEvent::TouchEnd(touch(-10.0, 100.0)));
    let focus = c.state().viewport_focus;
    assert!(focus.x < 0.0, "lower side is not clamped: {focus:?}");
    assert_abs_diff_eq!(focus.y, 128.571429, epsilon = 1e-6);
}

#[test]
fn test_held_touch_is_not_a_tap() {
    let mut c = common::mount();
    c.handle(&InputEvent::TouchStart(touch(300.0, 400.0)));
    c.advance(ms(250));
    assert!(!c.state().is_awaiting_tap_confirmation);
    c.handle(&InputEvent::TouchEnd(touch(300.0, 400.0)));
    assert!(!c.state().is_zoomed);
}

#[test]
fn test_rearmed_tap_window_ignores_stale_timer() {
    let mut c = common::mount();
    c.handle(&InputEvent::TouchStart(touch(300.0, 400.0)));
    c.advance(ms(200));
    c.handle(&InputEvent::TouchStart(touch(300.0, 400.0)));
    c.advance(ms(100));
    assert!(c.state().is_awaiting_tap_confirmation);
    c.handle(&InputEvent::TouchEnd(touch(300.0, 400.0)));
    assert!(c.state().is_zoomed);
}

#[test]
fn test_empty_touch_lists_are_ignored() {
    let mut c = common::mount();
    let empty = TouchEvent::default();
    let before = c.state().clone();
    c.handle(&InputEvent::TouchStart(empty.clone()));
    c.handle(&InputEvent::TouchMove(empty.clone()));
    let outcome = c.handle(&InputEvent::TouchEnd(empty));
    assert!(!outcome.default_prevented);
    assert_eq!(c.state(), &before);
}

#[test]
fn test_drag_moves_focus_against_finger() {
    let state = zoomed_drag_state(Point::new(100.0, 100.0), 1.2);
    let t = cx_drag(state, Point::new(110.0, 210.0));

    let pending = t.state.pending_focus.expect("drag queued a focus");
    assert_abs_diff_eq!(pending.x, 100.0 - 20.833333, epsilon = 1e-6);
    assert_abs_diff_eq!(pending.y, 100.0 - 20.833333, epsilon = 1e-6);
    assert_eq!(t.state.previous_drag_point, Some(Point::new(110.0, 210.0)));
    assert!(t.effects.contains(&Effect::RequestAnimationFrame));
    assert!(t.effects.contains(&Effect::SuppressDefault));

    let committed = transition::animation_frame(t.state);
    assert_eq!(committed.state.viewport_focus, pending);
}

#[test]
fn test_drag_out_of_bounds_is_dropped() {
    let images = common::image_set();
    let state = zoomed_drag_state(Point::new(450.0, 707.0), images.unzoomed_level());
    let t = cx_drag(state, Point::new(90.0, 190.0));

    assert!(t.state.pending_focus.is_none());
    assert_eq!(t.state.viewport_focus, Point::new(450.0, 707.0));
    assert_eq!(t.state.previous_drag_point, Some(Point::new(90.0, 190.0)));
    assert!(t.state.is_drag_derived);
}

#[test]
fn test_drag_from_the_corner_moves_inward() {
    let state = zoomed_drag_state(Point::new(450.0, 707.0), 1.2);
    let t = cx_drag(state, Point::new(110.0, 210.0));
    let pending = t.state.pending_focus.expect("inward drag accepted");
    assert_abs_diff_eq!(pending.x, 429.166667, epsilon = 1e-6);
    assert_abs_diff_eq!(pending.y, 686.166667, epsilon = 1e-6);
}

#[test]
fn test_consecutive_drags_in_one_frame_accumulate() {
    let state = zoomed_drag_state(Point::new(200.0, 300.0), 1.0);
    let first = cx_drag(state, Point::new(101.0, 200.0));
    let second = cx_drag(first.state, Point::new(102.0, 200.0));
    let p = second.state.pending_focus.expect("both accepted");
    assert_abs_diff_eq!(p.x, 194.0, epsilon = 1e-9);
    assert_eq!(second.effects.iter().filter(|e| **e == Effect::RequestAnimationFrame).count(), 0);
}

#[test]
fn test_drag_after_tap_zoom() {
    let mut c = common::mount();
    common::tap_zoom_settled(&mut c, 300.0, 400.0);
    let start = c.state().viewport_focus;

    c.handle(&InputEvent::TouchStart(touch(200.0, 200.0)));
    assert!(c.state().is_dragging);
    c.handle(&InputEvent::TouchMove(touch(210.0, 210.0)));
    c.advance(ms(250));
    c.handle(&InputEvent::TouchEnd(touch(210.0, 210.0)));

    let s = c.state();
    assert!(s.is_zoomed, "a held drag does not dismiss");
    assert!(!s.is_dragging);
    assert_abs_diff_eq!(s.viewport_focus.x, start.x - 20.833333, epsilon = 1e-6);
    assert_abs_diff_eq!(s.viewport_focus.y, start.y - 20.833333, epsilon = 1e-6);
}

#[test]
fn test_pointer_move_ignored_while_dragging() {
    let mut c = common::mount();
    common::tap_zoom_settled(&mut c, 300.0, 400.0);
    let focus = c.state().viewport_focus;

    c.handle(&InputEvent::TouchStart(touch(200.0, 200.0)));
    c.handle(&InputEvent::PointerMove {
        offset: Point::new(5.0, 5.0),
    });
    c.flush_frame();
    assert_eq!(c.state().viewport_focus, focus);
    assert!(c.state().is_drag_derived);
}

#[test]
fn test_tap_on_zoomed_view_dismisses() {
    let mut c = common::mount();
    common::tap_zoom_settled(&mut c, 300.0, 400.0);
    c.handle(&InputEvent::TouchStart(touch(100.0, 100.0)));
    c.handle(&InputEvent::TouchEnd(touch(100.0, 100.0)));
    assert!(!c.state().is_zoomed);
    assert!(c.host().global_listeners().is_none());
}

#[test]
fn test_page_tap_outside_dismisses() {
    let mut c = common::mount();
    common::tap_zoom_settled(&mut c, 300.0, 400.0);

    c.handle(&InputEvent::DocumentTouchEnd {
        inside_zoom_region: false,
    });
    assert!(c.state().is_zoomed, "touch end without a start is not a tap");

    c.handle(&InputEvent::DocumentTouchStart {
        inside_zoom_region: false,
    });
    c.handle(&InputEvent::DocumentTouchEnd {
        inside_zoom_region: false,
    });
    assert!(!c.state().is_zoomed);
}

#[test]
fn test_page_hold_outside_does_not_dismiss() {
    let mut c = common::mount();
    common::tap_zoom_settled(&mut c, 300.0, 400.0);
    c.handle(&InputEvent::DocumentTouchStart {
        inside_zoom_region: false,
    });
    c.advance(ms(250));
    c.handle(&InputEvent::DocumentTouchEnd {
        inside_zoom_region: false,
    });
    assert!(c.state().is_zoomed);
}

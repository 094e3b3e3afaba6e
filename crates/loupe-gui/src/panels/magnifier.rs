use loupe_core::controller::{InputEvent, PinchEvent, PinchKind, TouchEvent, ZoomController};
use loupe_core::geometry::{background_offset, Point, Size};
use loupe_core::presentation::{CursorIcon, OverviewMap, Presentation};

use crate::app::LoupeApp;
use crate::convert::parse_css_color;
use crate::host::EguiHost;
use crate::states::{ImageSlots, UIState};

const FULL_UV: egui::Rect = egui::Rect {
    min: egui::pos2(0.0, 0.0),
    max: egui::pos2(1.0, 1.0),
};

pub fn show(ctx: &egui::Context, app: &mut LoupeApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        paint_background(ui, rect);

        let LoupeApp {
            controller,
            images,
            ui_state,
            ..
        } = app;
        let Some(controller) = controller.as_mut() else {
            show_placeholder(ui, images);
            return;
        };

        let size = controller.images().base_size();
        let widget_rect = egui::Rect::from_center_size(
            rect.center(),
            egui::vec2(size.width as f32, size.height as f32),
        );
        let response = ui.allocate_rect(widget_rect, egui::Sense::click());

        route_input(ui, &response, controller, ui_state);

        let pres = controller.presentation();
        paint_widget(ui, widget_rect, &pres, images);

        if response.hovered() {
            ctx.set_cursor_icon(match pres.cursor {
                CursorIcon::ZoomIn => egui::CursorIcon::ZoomIn,
                CursorIcon::ZoomOut => egui::CursorIcon::ZoomOut,
            });
        }
    });
}

fn to_point(pos: egui::Pos2) -> Point {
    Point::new(f64::from(pos.x), f64::from(pos.y))
}

fn dispatch(controller: &mut ZoomController<EguiHost>, ui_state: &mut UIState, event: InputEvent) {
    let outcome = controller.handle(&event);
    ui_state.record_event(&event, outcome.default_prevented);
}

/// Translate this frame's egui input into controller events.
fn route_input(
    ui: &egui::Ui,
    response: &egui::Response,
    controller: &mut ZoomController<EguiHost>,
    ui_state: &mut UIState,
) {
    if !controller.host().is_region_listening() {
        return;
    }
    let rect = response.rect;
    let origin = to_point(rect.min);
    let outside = controller.host().is_listening_globally();

    let (touches, pointer_moved, scroll_y, zoom_delta, outside_click) = ui.input(|i| {
        let touches: Vec<(egui::TouchId, egui::TouchPhase, egui::Pos2)> = i
            .events
            .iter()
            .filter_map(|e| match e {
                egui::Event::Touch { id, phase, pos, .. } => Some((*id, *phase, *pos)),
                _ => None,
            })
            .collect();
        let outside_click = i.pointer.primary_clicked()
            && i.pointer.interact_pos().is_some_and(|p| !rect.contains(p));
        (
            touches,
            i.pointer.delta() != egui::Vec2::ZERO,
            i.raw_scroll_delta.y,
            i.zoom_delta(),
            outside_click,
        )
    });

    if !touches.is_empty() {
        ui_state.touch_mode = true;
    } else if pointer_moved {
        ui_state.touch_mode = false;
    }

    for (id, phase, pos) in touches {
        let inside = rect.contains(pos);
        let owned = ui_state.active_touch == Some(id);
        let touch = TouchEvent::single(to_point(pos), origin);
        let event = match phase {
            egui::TouchPhase::Start if inside && ui_state.active_touch.is_none() => {
                ui_state.active_touch = Some(id);
                Some(InputEvent::TouchStart(touch))
            }
            egui::TouchPhase::Start if outside && !inside => {
                Some(InputEvent::DocumentTouchStart {
                    inside_zoom_region: false,
                })
            }
            egui::TouchPhase::Move if owned => Some(InputEvent::TouchMove(touch)),
            egui::TouchPhase::End | egui::TouchPhase::Cancel if owned => {
                ui_state.active_touch = None;
                Some(InputEvent::TouchEnd(touch))
            }
            egui::TouchPhase::End | egui::TouchPhase::Cancel if outside => {
                Some(InputEvent::DocumentTouchEnd {
                    inside_zoom_region: inside,
                })
            }
            _ => None,
        };
        if let Some(event) = event {
            dispatch(controller, ui_state, event);
        }
    }

    // egui also emulates the pointer from touches; only real mouse input
    // gets here.
    if !ui_state.touch_mode {
        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let offset = to_point(pos) - origin;
                dispatch(controller, ui_state, InputEvent::Click { offset });
            }
        } else if pointer_moved {
            if let Some(pos) = response.hover_pos() {
                let offset = to_point(pos) - origin;
                dispatch(controller, ui_state, InputEvent::PointerMove { offset });
            }
        }
        if outside && outside_click {
            dispatch(
                controller,
                ui_state,
                InputEvent::DocumentClick {
                    inside_zoom_region: false,
                },
            );
        }
    }

    if !response.contains_pointer() {
        return;
    }
    if scroll_y != 0.0 {
        // egui scrolls up with positive y; wheel deltas are the other way round.
        dispatch(
            controller,
            ui_state,
            InputEvent::Wheel {
                delta_y: -f64::from(scroll_y),
            },
        );
    }
    if zoom_delta != 1.0 {
        let kind = if zoom_delta > 1.0 {
            PinchKind::PinchOut
        } else {
            PinchKind::PinchIn
        };
        dispatch(
            controller,
            ui_state,
            InputEvent::Pinch(PinchEvent {
                kind,
                delta: f64::from(zoom_delta) - 1.0,
            }),
        );
    }
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

fn paint_widget(ui: &egui::Ui, rect: egui::Rect, pres: &Presentation, images: &ImageSlots) {
    let painter = ui.painter_at(rect);

    if let Some(base) = images.base.as_ref() {
        painter.image(base.texture.id(), rect, FULL_UV, egui::Color32::WHITE);
    }

    let seconds = pres
        .background_transition
        .map_or(0.0, |d| d.as_secs_f32());
    let id = ui.id().with("zoom_layer");
    let ctx = ui.ctx();
    let target = pres.background_size;
    let width = ctx.animate_value_with_time(id.with("w"), target.width as f32, seconds);
    let height = ctx.animate_value_with_time(id.with("h"), target.height as f32, seconds);

    // The base image stays on top until the zoom-out animation finishes.
    let still_shrinking = width > rect.width() + 0.5;
    if pres.shows_zoom_layer() || still_shrinking {
        if let Some(large) = images.large.as_ref() {
            let size = egui::vec2(width, height);
            let offset = layer_offset(pres.widget_size, size, pres.background_position);
            let layer = egui::Rect::from_min_size(rect.min + offset, size);
            painter.image(large.texture.id(), layer, FULL_UV, egui::Color32::WHITE);
        }
    }

    if let Some(ref map) = pres.map {
        if map.z_index > 0 {
            paint_map(&painter, rect, map, images);
        }
    }
}

/// Top-left of a background of `size` placed at `position` percent inside
/// `widget`.
fn layer_offset(widget: Size, size: egui::Vec2, position: Point) -> egui::Vec2 {
    egui::vec2(
        background_offset(widget.width, f64::from(size.x), position.x) as f32,
        background_offset(widget.height, f64::from(size.y), position.y) as f32,
    )
}

fn paint_map(painter: &egui::Painter, rect: egui::Rect, map: &OverviewMap, images: &ImageSlots) {
    let map_rect = egui::Rect::from_min_size(
        rect.min + egui::vec2(map.inset.x as f32, map.inset.y as f32),
        egui::vec2(map.size.width as f32, map.size.height as f32),
    );
    if let Some(texture) = images.map_texture() {
        painter.image(texture.id(), map_rect, FULL_UV, egui::Color32::WHITE);
    }

    let h = &map.highlight;
    let percent = |extent: f32, p: f64| extent * p as f32 / 100.0;
    let highlight = egui::Rect::from_min_size(
        map_rect.min
            + egui::vec2(
                percent(map_rect.width(), h.left_percent),
                percent(map_rect.height(), h.top_percent),
            ),
        egui::vec2(
            percent(map_rect.width(), h.width_percent),
            percent(map_rect.height(), h.height_percent),
        ),
    );
    let [r, g, b, a] = h.rgba;
    painter.rect_filled(highlight, 0.0, egui::Color32::from_rgba_unmultiplied(r, g, b, a));

    let border = parse_css_color(&map.border_color).unwrap_or(egui::Color32::GRAY);
    painter.rect_stroke(
        map_rect,
        0.0,
        egui::Stroke::new(map.border_width as f32, border),
        egui::epaint::StrokeKind::Outside,
    );
}

fn show_placeholder(ui: &mut egui::Ui, images: &ImageSlots) {
    let text = match (images.base.is_some(), images.large.is_some()) {
        (false, false) => "Open a base and a large image to begin",
        (true, false) => "Open the large image",
        (false, true) => "Open the base image",
        (true, true) => "Images could not be used, see the log",
    };
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new(text)
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_offset_follows_css_positioning() {
        let widget = Size::new(350.0, 550.0);
        let offset = layer_offset(widget, egui::vec2(540.0, 848.4), Point::new(85.7, 72.7));
        assert!((offset.x - (-162.83)).abs() < 0.01, "{offset:?}");
        assert!((offset.y - (-216.93)).abs() < 0.01, "{offset:?}");
    }

    #[test]
    fn layer_offset_is_zero_when_layer_fills_widget() {
        let widget = Size::new(350.0, 550.0);
        let offset = layer_offset(widget, egui::vec2(350.0, 550.0), Point::new(40.0, 90.0));
        assert_eq!(offset, egui::Vec2::ZERO);
    }
}

use loupe_core::controller::ZoomTransition;

use crate::app::LoupeApp;

pub fn show(ctx: &egui::Context, app: &mut LoupeApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area, fixed at 4 lines.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 4.0 + spacing * 3.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    for _ in 0..4 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        ui.horizontal(|ui| {
            let Some(controller) = app.controller.as_ref() else {
                ui.label("No image");
                return;
            };
            let state = controller.state();

            let phase = match (state.is_zoomed, state.transition) {
                (true, ZoomTransition::Entering) => "Zooming in",
                (true, _) => "Zoomed",
                (false, ZoomTransition::Exiting) => "Zooming out",
                (false, _) => "Idle",
            };
            ui.label(phase);
            ui.separator();
            ui.label(format!("Zoom: {:.0}%", state.zoom_level * 100.0));
            ui.separator();
            let space = if state.is_drag_derived { "large" } else { "base" };
            ui.label(format!(
                "Focus: {:.0}, {:.0} ({space})",
                state.viewport_focus.x, state.viewport_focus.y
            ));
            if controller.host().is_listening_globally() {
                ui.separator();
                ui.label("Click outside to dismiss");
            }
            if let Some(ref event) = app.ui_state.last_event {
                ui.separator();
                ui.weak(event);
            }
        });

        ui.add_space(2.0);
    });
}

use loupe_core::image::ImageRole;

use crate::app::LoupeApp;
use crate::panels::menu_bar::open_image;

const LEFT_PANEL_WIDTH: f32 = 240.0;

pub fn show(ctx: &egui::Context, app: &mut LoupeApp) {
    egui::SidePanel::left("controls")
        .default_width(LEFT_PANEL_WIDTH)
        .resizable(true)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.set_min_width(LEFT_PANEL_WIDTH - 20.0);

                images_section(ctx, ui, app);
                ui.separator();
                widget_section(ctx, ui, app);
            });
        });
}

fn section_header(ui: &mut egui::Ui, label: &str, status: Option<&str>) {
    ui.horizontal(|ui| {
        ui.strong(label);
        if let Some(s) = status {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.small(s);
            });
        }
    });
}

fn images_section(ctx: &egui::Context, ui: &mut egui::Ui, app: &mut LoupeApp) {
    let ready = app.has_image(ImageRole::Base) && app.has_image(ImageRole::Large);
    section_header(ui, "Images", Some(if ready { "ready" } else { "incomplete" }));
    ui.add_space(4.0);

    for role in [ImageRole::Base, ImageRole::Large, ImageRole::Thumbnail] {
        ui.horizontal(|ui| {
            if ui.button(format!("Open {role}...")).clicked() {
                open_image(ctx, app, role);
            }
            match app.images.get(role) {
                Some(image) => {
                    let [w, h] = image.size();
                    ui.label(format!("{} ({w}x{h})", image.file_name()))
                        .on_hover_text(image.path.display().to_string());
                }
                None if role == ImageRole::Thumbnail => {
                    ui.weak("optional");
                }
                None => {
                    ui.weak("none");
                }
            }
        });
    }
}

fn widget_section(ctx: &egui::Context, ui: &mut egui::Ui, app: &mut LoupeApp) {
    let status = app.config.is_dirty().then_some("modified");
    section_header(ui, "Widget", status);
    ui.add_space(4.0);

    let widget = &mut app.config.widget;
    let mut changed = false;

    ui.label("Zoom transition (ms)");
    changed |= ui
        .add(egui::DragValue::new(&mut widget.zoom_transition_ms).range(0..=2000).speed(10))
        .changed();

    changed |= ui.checkbox(&mut widget.display_map, "Show overview map").changed();

    ui.add_enabled_ui(widget.display_map, |ui| {
        ui.label("Map scale");
        changed |= ui
            .add(egui::Slider::new(&mut widget.map_scale_factor, 0.05..=1.0))
            .changed();

        ui.label("Map border colour");
        let response = ui.text_edit_singleline(&mut widget.map_border_color);
        let edited = app.config.applied.map_border_color != widget.map_border_color;
        changed |= response.lost_focus() && edited;
    });

    if let Some(ref error) = app.config.error {
        ui.colored_label(egui::Color32::from_rgb(230, 80, 80), error);
    }

    if changed {
        app.remount(ctx);
    }
}

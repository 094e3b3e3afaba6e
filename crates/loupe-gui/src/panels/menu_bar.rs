use loupe_core::config::WidgetConfig;
use loupe_core::image::ImageRole;

use crate::app::LoupeApp;
use crate::convert::load_color_image;
use crate::messages::LoadResult;

const OPEN_SHORTCUT: egui::KeyboardShortcut =
    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
const QUIT_SHORTCUT: egui::KeyboardShortcut =
    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);

pub fn show(ctx: &egui::Context, app: &mut LoupeApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let open = egui::Button::new("Open Base Image...")
                    .shortcut_text(ctx.format_shortcut(&OPEN_SHORTCUT));
                if ui.add(open).clicked() {
                    ui.close();
                    open_image(ctx, app, ImageRole::Base);
                }
                if ui.button("Open Large Image...").clicked() {
                    ui.close();
                    open_image(ctx, app, ImageRole::Large);
                }
                if ui.button("Open Thumbnail...").clicked() {
                    ui.close();
                    open_image(ctx, app, ImageRole::Thumbnail);
                }

                ui.separator();

                if ui.button("Import Config...").clicked() {
                    ui.close();
                    import_config(ctx, app);
                }

                if ui.button("Export Config...").clicked() {
                    ui.close();
                    export_config(ctx, app);
                }

                ui.separator();

                let quit = egui::Button::new("Quit")
                    .shortcut_text(ctx.format_shortcut(&QUIT_SHORTCUT));
                if ui.add(quit).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Edit", |ui| {
                if ui.button("Reset Defaults").clicked() {
                    ui.close();
                    app.config.replace(WidgetConfig::default());
                    app.ui_state.add_log("Config reset to defaults".into());
                    app.remount(ctx);
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.ui_state.show_about = true;
                }
            });
        });

        if ctx.input_mut(|i| i.consume_shortcut(&OPEN_SHORTCUT)) {
            open_image(ctx, app, ImageRole::Base);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&QUIT_SHORTCUT)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

/// Pick and decode an image off the UI thread.
pub(crate) fn open_image(ctx: &egui::Context, app: &LoupeApp, role: ImageRole) {
    let result_tx = app.result_tx.clone();
    let ctx = ctx.clone();
    std::thread::spawn(move || {
        let Some(path) = rfd::FileDialog::new()
            .set_title(format!("Open {role} image"))
            .add_filter("Images", &["png", "jpg", "jpeg", "webp", "bmp", "gif", "tif", "tiff"])
            .add_filter("All files", &["*"])
            .pick_file()
        else {
            return;
        };
        let result = match load_color_image(&path) {
            Ok(image) => LoadResult::ImageLoaded { role, path, image },
            Err(e) => LoadResult::Error {
                message: format!("{e:#}"),
            },
        };
        let _ = result_tx.send(result);
        ctx.request_repaint();
    });
}

fn import_config(ctx: &egui::Context, app: &LoupeApp) {
    let result_tx = app.result_tx.clone();
    let ctx = ctx.clone();
    std::thread::spawn(move || {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .pick_file()
        else {
            return;
        };
        let result = match WidgetConfig::load(&path) {
            Ok(config) => LoadResult::ConfigImported { path, config },
            Err(e) => LoadResult::Error {
                message: format!("Import failed: {e}"),
            },
        };
        let _ = result_tx.send(result);
        ctx.request_repaint();
    });
}

fn export_config(ctx: &egui::Context, app: &LoupeApp) {
    let config = app.config.widget.clone();
    let result_tx = app.result_tx.clone();
    let ctx = ctx.clone();

    std::thread::spawn(move || {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .set_file_name("loupe.toml")
            .save_file()
        else {
            return;
        };
        let result = match config.save(&path) {
            Ok(()) => LoadResult::Log {
                message: format!("Config exported to {}", path.display()),
            },
            Err(e) => LoadResult::Error {
                message: format!("Export failed: {e}"),
            },
        };
        let _ = result_tx.send(result);
        ctx.request_repaint();
    });
}

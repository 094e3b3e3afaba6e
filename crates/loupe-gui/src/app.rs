use std::sync::mpsc;
use std::time::Instant;

use loupe_core::controller::ZoomController;
use loupe_core::image::ImageRole;
use tracing::{info, warn};

use crate::host::EguiHost;
use crate::messages::LoadResult;
use crate::panels;
use crate::states::{ConfigState, ImageSlots, LoadedImage, UIState};

pub struct LoupeApp {
    pub result_tx: mpsc::Sender<LoadResult>,
    pub result_rx: mpsc::Receiver<LoadResult>,
    pub images: ImageSlots,
    pub config: ConfigState,
    pub ui_state: UIState,
    pub controller: Option<ZoomController<EguiHost>>,
}

impl LoupeApp {
    pub fn new() -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        Self {
            result_tx,
            result_rx,
            images: ImageSlots::default(),
            config: ConfigState::default(),
            ui_state: UIState::default(),
            controller: None,
        }
    }

    /// Drain everything the dialog threads sent back.
    fn poll_results(&mut self, ctx: &egui::Context) {
        let mut remount = false;
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                LoadResult::ImageLoaded { role, path, image } => {
                    let [w, h] = image.size;
                    let texture = ctx.load_texture(
                        format!("loupe-{role}"),
                        image,
                        egui::TextureOptions::LINEAR,
                    );
                    self.ui_state
                        .add_log(format!("Opened {role}: {} ({w}x{h})", path.display()));
                    self.images.set(role, LoadedImage { path, texture });
                    remount = true;
                }
                LoadResult::ConfigImported { path, config } => {
                    self.ui_state
                        .add_log(format!("Config imported from {}", path.display()));
                    self.config.replace(config);
                    remount = true;
                }
                LoadResult::Error { message } => {
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
                LoadResult::Log { message } => {
                    self.ui_state.add_log(message);
                }
            }
        }
        if remount {
            self.remount(ctx);
        }
    }

    /// Tear down the running widget and build a new one from the current
    /// images and config.
    pub fn remount(&mut self, ctx: &egui::Context) {
        // Dropping the controller unmounts it.
        self.controller = None;

        if let Err(e) = self.config.widget.validate() {
            self.config.error = Some(e.to_string());
            return;
        }
        self.config.error = None;

        let Some(images) = self.images.to_image_set() else {
            return;
        };
        let mounted = images.and_then(|images| {
            ZoomController::mount(
                images,
                self.config.widget.clone(),
                EguiHost::new(ctx.clone()),
            )
        });

        match mounted {
            Ok(controller) => {
                info!(zoom_level = controller.state().zoom_level, "Viewer ready");
                self.config.applied = self.config.widget.clone();
                self.controller = Some(controller);
            }
            Err(e) => {
                warn!(error = %e, "Could not mount viewer");
                self.ui_state.add_log(format!("ERROR: {e}"));
            }
        }
    }

    /// Fire due timers, then run the requested animation frame, if any.
    fn pump_controller(&mut self, ctx: &egui::Context) {
        let Some(controller) = self.controller.as_mut() else {
            return;
        };
        let now = Instant::now();

        let due = controller.host_mut().take_due(now);
        for (id, timer) in due {
            controller.on_timer(id, timer);
        }
        if controller.host_mut().take_frame_request() {
            controller.on_animation_frame();
        }
        if let Some(wait) = controller.host().next_deadline(now) {
            ctx.request_repaint_after(wait);
        }
    }

    pub fn has_image(&self, role: ImageRole) -> bool {
        self.images.get(role).is_some()
    }
}

impl eframe::App for LoupeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);
        self.pump_controller(ctx);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::controls::show(ctx, self);
        panels::magnifier::show(ctx, self);

        if self.ui_state.show_about {
            egui::Window::new("About Loupe")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Loupe");
                        ui.label("Click or tap to magnify");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.ui_state.show_about = false;
                        }
                    });
                });
        }
    }
}

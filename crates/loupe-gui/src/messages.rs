use std::path::PathBuf;

use loupe_core::config::WidgetConfig;
use loupe_core::image::ImageRole;

/// Results sent back from file-dialog threads.
pub enum LoadResult {
    ImageLoaded {
        role: ImageRole,
        path: PathBuf,
        image: egui::ColorImage,
    },
    ConfigImported {
        path: PathBuf,
        config: WidgetConfig,
    },
    Error {
        message: String,
    },
    Log {
        message: String,
    },
}

pub mod config;
pub mod images;
pub mod ui;

pub use config::ConfigState;
pub use images::{ImageSlots, LoadedImage};
pub use ui::UIState;

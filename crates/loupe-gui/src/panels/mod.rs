pub mod controls;
pub mod magnifier;
pub mod menu_bar;
pub mod status;

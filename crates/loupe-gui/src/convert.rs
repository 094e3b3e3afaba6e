use std::path::Path;

use anyhow::{Context, Result};

/// Decode an image file into an egui ColorImage.
pub fn load_color_image(path: &Path) -> Result<egui::ColorImage> {
    let decoded = image::open(path)
        .with_context(|| format!("Failed to decode {}", path.display()))?
        .to_rgba8();
    let size = [decoded.width() as usize, decoded.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(
        size,
        decoded.as_raw(),
    ))
}

/// Parse the small set of CSS colours accepted for the map border: a handful
/// of names plus `#rgb` / `#rrggbb`.
pub fn parse_css_color(s: &str) -> Option<egui::Color32> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex);
    }
    let color = match s.to_ascii_lowercase().as_str() {
        "grey" | "gray" => egui::Color32::from_rgb(128, 128, 128),
        "lightgrey" | "lightgray" => egui::Color32::from_rgb(211, 211, 211),
        "darkgrey" | "darkgray" => egui::Color32::from_rgb(169, 169, 169),
        "black" => egui::Color32::BLACK,
        "white" => egui::Color32::WHITE,
        "red" => egui::Color32::from_rgb(255, 0, 0),
        "green" => egui::Color32::from_rgb(0, 128, 0),
        "blue" => egui::Color32::from_rgb(0, 0, 255),
        "yellow" => egui::Color32::from_rgb(255, 255, 0),
        "orange" => egui::Color32::from_rgb(255, 165, 0),
        _ => return None,
    };
    Some(color)
}

fn parse_hex(hex: &str) -> Option<egui::Color32> {
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => {
            let mut c = hex.chars().map(|ch| channel(&ch.to_string()).map(|v| v * 17));
            Some(egui::Color32::from_rgb(c.next()??, c.next()??, c.next()??))
        }
        6 => Some(egui::Color32::from_rgb(
            channel(hex.get(0..2)?)?,
            channel(hex.get(2..4)?)?,
            channel(hex.get(4..6)?)?,
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_hex() {
        assert_eq!(parse_css_color("grey"), Some(egui::Color32::from_rgb(128, 128, 128)));
        assert_eq!(parse_css_color(" Gray "), parse_css_color("grey"));
        assert_eq!(parse_css_color("#ff8000"), Some(egui::Color32::from_rgb(255, 128, 0)));
        assert_eq!(parse_css_color("#0f0"), Some(egui::Color32::from_rgb(0, 255, 0)));
    }

    #[test]
    fn rejects_unknown_colours() {
        assert_eq!(parse_css_color("chartreuse-ish"), None);
        assert_eq!(parse_css_color("#12345"), None);
        assert_eq!(parse_css_color("#gg0000"), None);
    }
}

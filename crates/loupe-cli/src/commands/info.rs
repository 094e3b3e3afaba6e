use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use loupe_core::config::WidgetConfig;
use loupe_core::image::{ImageDescriptor, ImageSet};

use crate::summary;

#[derive(Clone, Copy, Debug)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

#[derive(Args)]
pub struct InfoArgs {
    /// Base image size, WIDTHxHEIGHT
    #[arg(long, value_parser = parse_size)]
    pub base: Dimensions,

    /// Large image size, WIDTHxHEIGHT
    #[arg(long, value_parser = parse_size)]
    pub large: Dimensions,

    /// Widget config (TOML); defaults are used when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let config = match args.config {
        Some(ref path) => WidgetConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => WidgetConfig::default(),
    };

    let images = ImageSet::new(
        ImageDescriptor::new("base", "base").with_size(args.base.width, args.base.height),
        ImageDescriptor::new("large", "large").with_size(args.large.width, args.large.height),
        None,
    )?;

    summary::print_geometry_summary(&images, &config);
    Ok(())
}

fn parse_size(s: &str) -> std::result::Result<Dimensions, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let w: f64 = w.trim().parse().map_err(|e| format!("bad width '{w}': {e}"))?;
    let h: f64 = h.trim().parse().map_err(|e| format!("bad height '{h}': {e}"))?;
    Ok(Dimensions {
        width: w,
        height: h,
    })
}

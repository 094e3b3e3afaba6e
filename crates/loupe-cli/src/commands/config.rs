use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use loupe_core::config::WidgetConfig;

#[derive(Args)]
pub struct ConfigArgs {
    /// Write config to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Validate an existing config file instead of printing the default
    #[arg(long, conflicts_with = "output")]
    pub check: Option<PathBuf>,
}

/// Print or save the default WidgetConfig as TOML, or validate a file.
pub fn run(args: &ConfigArgs) -> Result<()> {
    if let Some(ref path) = args.check {
        let config = WidgetConfig::load(path)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        println!("{} is valid", path.display());
        print!("{}", config.to_toml_string()?);
        return Ok(());
    }

    let toml_str = WidgetConfig::default().to_toml_string()?;

    if let Some(ref path) = args.output {
        std::fs::write(path, &toml_str)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        println!("Default config saved to {}", path.display());
    } else {
        print!("{}", toml_str);
    }

    Ok(())
}

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use loupe_core::replay::{ReplayScript, Snapshot};
use serde::Serialize;
use tracing::info;

use crate::summary;

#[derive(Clone, ValueEnum)]
pub enum FormatArg {
    Text,
    Toml,
}

#[derive(Args)]
pub struct ReplayArgs {
    /// Input script (TOML)
    pub script: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: FormatArg,
}

#[derive(Serialize)]
struct Report<'a> {
    snapshots: &'a [Snapshot],
}

pub fn run(args: &ReplayArgs) -> Result<()> {
    let script = ReplayScript::load(&args.script)
        .with_context(|| format!("Failed to load script {}", args.script.display()))?;
    info!(steps = script.steps.len(), "Replaying script");

    let snapshots = script.run()?;

    match args.format {
        FormatArg::Text => summary::print_replay(&args.script, &snapshots),
        FormatArg::Toml => print!("{}", toml::to_string_pretty(&Report { snapshots: &snapshots })?),
    }
    Ok(())
}

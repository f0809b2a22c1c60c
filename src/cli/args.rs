//! Command-line interface definitions.

use clap::{ColorChoice, Parser};
use std::path::PathBuf;

use crate::config::Profile;

/// Package a BlankEngine project into a deployable output tree
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Input project root (required by profiles without a default input)
    #[arg(value_hint = clap::ValueHint::DirPath)]
    pub input: Option<PathBuf>,

    /// Packaging profile
    #[arg(short, long, value_enum)]
    pub profile: Option<Profile>,

    /// Output directory, destroyed and rebuilt on every run
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Directory holding cached static files (index.html, ...)
    #[arg(long, value_hint = clap::ValueHint::DirPath)]
    pub cached: Option<PathBuf>,

    /// Config file path
    #[arg(short = 'C', long, default_value = "pack.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    /// Log every mirrored file
    #[arg(short, long)]
    pub verbose: bool,
}

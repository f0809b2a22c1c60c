//! blank-pack - packaging pipeline for BlankEngine projects.

mod asset;
mod cli;
mod config;
mod core;
mod deps;
mod library;
mod logger;
mod manifest;
mod pipeline;
mod script;
mod utils;

use clap::{ColorChoice, Parser};
use cli::Cli;
use config::PackConfig;

fn main() {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = match PackConfig::load(&cli) {
        Ok(config) => config,
        Err(e) => {
            log!("error"; "{}", e);
            if let Some(hint) = e.hint() {
                log!("hint"; "{}", hint);
            }
            std::process::exit(1);
        }
    };

    debug!(
        "config";
        "profile={} input={} output={} cached={}",
        config.profile.name(),
        config.input.display(),
        config.output.display(),
        config.cached.display()
    );

    if let Err(e) = pipeline::pack(&config) {
        log!("error"; "{:#}", e);
        std::process::exit(1);
    }
}

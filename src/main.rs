//! Themekit - scroll state markers and inline svg logos for a site theme.

#![allow(dead_code)]

mod cli;
mod config;
mod inline;
mod logger;
mod scroll;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::ThemeConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = ThemeConfig::load(&cli)?;

    match &cli.command {
        Commands::Inline { args } => cli::inline::run_inline(args, &config),
        Commands::Scroll { args } => cli::scroll::run_scroll(args, &config),
    }
}

//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

use crate::config::OutputMode;

/// Theme utilities: scroll state markers and inline svg logos
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: themekit.toml)
    #[arg(short = 'C', long, global = true, default_value = "themekit.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Replace the <img> of a rendered fragment with the inline logo svg
    #[command(visible_alias = "i")]
    Inline {
        #[command(flatten)]
        args: InlineArgs,
    },

    /// Replay scroll offsets and print the annotated element after each frame
    #[command(visible_alias = "s")]
    Scroll {
        #[command(flatten)]
        args: ScrollArgs,
    },
}

/// Inline command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct InlineArgs {
    /// Rendered HTML fragment. Reads stdin when omitted or `-`.
    #[arg(value_name = "FRAGMENT", value_hint = clap::ValueHint::FilePath)]
    pub fragment: Option<PathBuf>,

    /// Svg file to inline (overrides `[logo] path`)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub logo: Option<PathBuf>,

    /// Treat the fragment as this rendered block (e.g. core/site-logo)
    #[arg(short, long)]
    pub block: Option<String>,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

/// Scroll command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ScrollArgs {
    /// Viewport height in pixels
    #[arg(long, default_value_t = 800.0)]
    pub viewport: f64,

    /// Total content height in pixels
    #[arg(long, default_value_t = 3000.0)]
    pub content: f64,

    /// Output mode (overrides `[scroll] mode`)
    #[arg(short, long)]
    pub mode: Option<OutputMode>,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Frames of scroll offsets. Each frame is a comma-separated burst,
    /// e.g. `0 120,140,175 150`. The first offset is the initial position.
    #[arg(value_name = "FRAME", required = true, allow_negative_numbers = true)]
    pub frames: Vec<Burst>,
}

/// Scroll offsets delivered within one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Burst(pub Vec<f64>);

impl FromStr for Burst {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let offsets = s
            .split(',')
            .map(|part| {
                let part = part.trim();
                part.parse::<f64>()
                    .map_err(|_| format!("invalid offset `{part}`"))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self(offsets))
    }
}

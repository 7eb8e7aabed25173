//! Theme configuration management for `themekit.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── logo       # [logo]
//! │   └── scroll     # [scroll] and [scroll.features]
//! ├── error          # ConfigError
//! ├── util           # Config file discovery
//! └── mod.rs         # ThemeConfig (this file)
//! ```
//!
//! The config file is optional. When none is found upward from the current
//! directory every section falls back to its defaults.

mod error;
pub mod section;
mod util;

pub use error::ConfigError;
pub use section::{LogoConfig, OutputMode, ScrollConfig, ScrollFeatures};

use crate::{
    cli::{Cli, Commands},
    debug, log,
    utils::path::{normalize_path, resolve_under},
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use util::find_config_file;

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing themekit.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Theme root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Scroll state annotator settings
    #[serde(default)]
    pub scroll: ScrollConfig,

    /// Inline logo settings
    #[serde(default)]
    pub logo: LogoConfig,
}

impl ThemeConfig {
    /// Load configuration for the given CLI invocation.
    ///
    /// Searches upward from cwd for the config file. File paths are resolved
    /// against the config file's directory, then CLI overrides are applied.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let mut config = match find_config_file(&cli.config, &cwd) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                config.root = path
                    .parent()
                    .map(normalize_path)
                    .unwrap_or_else(|| cwd.clone());
                config
            }
            None => {
                debug!("config"; "`{}` not found, using defaults", cli.config.display());
                Self {
                    root: cwd.clone(),
                    ..Self::default()
                }
            }
        };

        config.normalize_paths();
        config.apply_command_options(cli);
        Ok(config)
    }

    /// Load configuration from file path, warning about unknown fields.
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {} are ignored: {}", display_path, fields.join(", "));
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) {
        match &cli.command {
            Commands::Inline { args } => {
                // CLI paths are relative to cwd, not to the config file
                if let Some(logo) = &args.logo {
                    self.logo.path = Some(normalize_path(logo));
                }
            }
            Commands::Scroll { args } => {
                Self::update_option(&mut self.scroll.mode, args.mode.as_ref());
            }
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Resolve file paths relative to the theme root.
    fn normalize_paths(&mut self) {
        if let Some(path) = self.logo.path.take() {
            self.logo.path = Some(resolve_under(&path, &self.root));
        }
    }
}

/// Parse a config snippet for tests, failing on unknown fields.
#[cfg(test)]
pub fn test_parse_config(content: &str) -> ThemeConfig {
    let (parsed, ignored) = ThemeConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

//! `[logo]` section configuration.
//!
//! Source file for the inline svg logo substitution.
//!
//! # Example
//!
//! ```toml
//! [logo]
//! path = "assets/logo.svg"      # Relative to the config file
//! blocks = ["core/site-logo"]   # Rendered blocks the substitution applies to
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Block name used when none is configured.
pub const SITE_LOGO_BLOCK: &str = "core/site-logo";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoConfig {
    /// Vector file to inline. Unset means the substitution never runs.
    pub path: Option<PathBuf>,

    /// Names of rendered blocks whose `<img>` gets replaced.
    pub blocks: Vec<String>,
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            path: None,
            blocks: vec![SITE_LOGO_BLOCK.to_string()],
        }
    }
}

impl LogoConfig {
    /// Configured logo path, if any.
    pub fn source(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Whether a rendered block with this name is a substitution target.
    pub fn handles_block(&self, name: &str) -> bool {
        self.blocks.iter().any(|block| block == name)
    }
}

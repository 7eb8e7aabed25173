//! Configuration section definitions.
//!
//! Each module corresponds to a section in `themekit.toml`:
//!
//! | Module   | TOML Section | Purpose                                |
//! |----------|--------------|----------------------------------------|
//! | `logo`   | `[logo]`     | Inline svg logo source and block names |
//! | `scroll` | `[scroll]`   | Scroll annotator thresholds and output |

mod logo;
mod scroll;

pub use logo::LogoConfig;
pub use scroll::{OutputMode, ScrollConfig, ScrollFeatures};

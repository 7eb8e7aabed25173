//! `[scroll]` section configuration.
//!
//! Thresholds and toggles for the scroll state annotator.
//!
//! # Example
//!
//! ```toml
//! [scroll]
//! hide_after_px = 120       # Below this offset direction is always "up"
//! up_intent_px = 42         # Upward travel needed before flipping to "up"
//! down_intent_px = 42       # Downward travel needed before flipping to "down"
//! min_delta_px = 20         # Smaller movements are ignored
//! edge_threshold_px = 2     # Distance from an edge counted as "at" it
//! zone_threshold = 0.5      # Viewport fraction counted as "near" an edge
//! mode = "attributes"       # attributes | classes
//! target = ":root"          # Element receiving the markers
//!
//! [scroll.features]
//! near_bottom = false       # Skip computing and writing `nearBottom`
//! ```
//!
//! Values are taken as-is: negative thresholds are not rejected, they only
//! produce degenerate markers.

use serde::{Deserialize, Serialize};

/// How derived state is written onto the target element.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// `data-*` attributes with `true`/`false` or `up`/`down` values.
    #[default]
    Attributes,
    /// Class names toggled on and off.
    Classes,
}

impl OutputMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Attributes => "attributes",
            Self::Classes => "classes",
        }
    }
}

impl std::str::FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "attributes" | "attrs" => Ok(Self::Attributes),
            "classes" => Ok(Self::Classes),
            other => Err(format!("unknown mode `{other}` (expected attributes | classes)")),
        }
    }
}

/// Per-marker toggles. A disabled marker is neither computed nor written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollFeatures {
    pub direction: bool,
    pub departing_top: bool,
    pub at_top: bool,
    pub at_bottom: bool,
    pub near_top: bool,
    pub near_bottom: bool,
}

impl Default for ScrollFeatures {
    fn default() -> Self {
        Self {
            direction: true,
            departing_top: true,
            at_top: true,
            at_bottom: true,
            near_top: true,
            near_bottom: true,
        }
    }
}

impl ScrollFeatures {
    /// Whether the intent accumulators need to run at all.
    ///
    /// `departing_top` depends on direction flips, so it keeps them alive
    /// even when `direction` itself is not published.
    pub fn tracks_intent(&self) -> bool {
        self.direction || self.departing_top
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// At or below this offset the direction is forced to "up".
    pub hide_after_px: f64,

    /// Cumulative upward travel required before flipping to "up".
    pub up_intent_px: f64,

    /// Cumulative downward travel required before flipping to "down".
    pub down_intent_px: f64,

    /// Samples moving less than this are discarded.
    pub min_delta_px: f64,

    /// Pixel distance from top/bottom counted as "at" that edge.
    pub edge_threshold_px: f64,

    /// Fraction of the viewport height counted as "near" an edge.
    pub zone_threshold: f64,

    /// Attribute or class output.
    pub mode: OutputMode,

    /// Element receiving the markers. `:root` means the document element.
    pub target: String,

    pub features: ScrollFeatures,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            hide_after_px: 120.0,
            up_intent_px: 42.0,
            down_intent_px: 42.0,
            min_delta_px: 20.0,
            edge_threshold_px: 2.0,
            zone_threshold: 0.5,
            mode: OutputMode::Attributes,
            target: ":root".to_string(),
            features: ScrollFeatures::default(),
        }
    }
}

impl ScrollConfig {
    /// Tag name of the element the markers land on.
    pub fn target_tag(&self) -> &str {
        match self.target.trim() {
            "" | ":root" | "html" => "html",
            other => other,
        }
    }
}

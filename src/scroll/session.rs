//! Per-observation scroll state.
//!
//! A [`Session`] owns every mutable field of one observation: the last
//! accepted offset, the two intent accumulators, the published direction and
//! the revealed/at-top flags. It turns accepted samples into a
//! [`ScrollState`] snapshot; writing that snapshot anywhere is the caller's
//! job.

use serde::Serialize;

use crate::config::ScrollConfig;

/// One reading of the host's scroll position and dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScrollSample {
    /// Vertical scroll offset. May be negative during overscroll.
    pub offset: f64,
    /// Height of the visible viewport.
    pub viewport_height: f64,
    /// Total height of the scrollable content.
    pub content_height: f64,
}

impl ScrollSample {
    pub const fn new(offset: f64, viewport_height: f64, content_height: f64) -> Self {
        Self {
            offset,
            viewport_height,
            content_height,
        }
    }

    /// Largest reachable offset. Zero when the content fits the viewport.
    #[inline]
    pub fn max_scroll(&self) -> f64 {
        (self.content_height - self.viewport_height).max(0.0)
    }

    #[inline]
    pub fn is_at_or_above_top(&self) -> bool {
        self.offset <= 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

/// Derived markers for one accepted sample.
///
/// `None` means the marker is disabled and must not be written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollState {
    pub scroll_dir: Option<Direction>,
    pub departing_top: Option<bool>,
    pub at_top: Option<bool>,
    pub at_bottom: Option<bool>,
    pub near_top: Option<bool>,
    pub near_bottom: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct Session {
    last_offset: f64,
    up_intent: f64,
    down_intent: f64,
    direction: Direction,
    /// Set once upward intent flips the direction; cleared when leaving the top.
    revealed: bool,
    was_at_top: bool,
}

impl Session {
    /// Open a session on the initial sample and derive its first state.
    pub fn start(initial: &ScrollSample, config: &ScrollConfig) -> (Self, ScrollState) {
        let mut session = Self {
            last_offset: initial.offset,
            up_intent: 0.0,
            down_intent: 0.0,
            direction: Direction::Up,
            revealed: false,
            was_at_top: false,
        };
        if initial.is_at_or_above_top() {
            session.arrive_at_top(initial.offset);
        }
        let state = session.derive(initial, config);
        (session, state)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn last_offset(&self) -> f64 {
        self.last_offset
    }

    /// Feed one sample. Returns `None` when it is filtered out as jitter or
    /// its offset is not a finite number.
    ///
    /// Offsets at or above the top are never filtered.
    pub fn advance(&mut self, sample: &ScrollSample, config: &ScrollConfig) -> Option<ScrollState> {
        if !sample.offset.is_finite() {
            return None;
        }
        if sample.is_at_or_above_top() {
            self.arrive_at_top(sample.offset);
            return Some(self.derive(sample, config));
        }

        let delta = sample.offset - self.last_offset;
        if delta.abs() < config.min_delta_px {
            return None;
        }

        if config.features.tracks_intent() {
            self.accumulate(delta, sample.offset, config);
        }
        self.last_offset = sample.offset;

        Some(self.derive(sample, config))
    }

    /// Record arrival at the top: direction is "up" and intent starts over.
    ///
    /// `revealed` is left alone here; it is only reset by the next accepted
    /// downward movement.
    fn arrive_at_top(&mut self, offset: f64) {
        self.was_at_top = true;
        self.direction = Direction::Up;
        self.up_intent = 0.0;
        self.down_intent = 0.0;
        self.last_offset = offset;
    }

    fn accumulate(&mut self, delta: f64, offset: f64, config: &ScrollConfig) {
        if delta > 0.0 {
            if self.was_at_top {
                self.was_at_top = false;
                self.revealed = false;
            }
            self.up_intent = 0.0;

            if offset > config.hide_after_px {
                self.down_intent += delta;
                if self.down_intent >= config.down_intent_px {
                    self.direction = Direction::Down;
                }
            } else {
                self.down_intent = 0.0;
                self.direction = Direction::Up;
            }
        } else if delta < 0.0 {
            self.down_intent = 0.0;
            self.up_intent += -delta;
            if self.up_intent >= config.up_intent_px {
                self.direction = Direction::Up;
                self.revealed = true;
            }
        }
    }

    fn derive(&self, sample: &ScrollSample, config: &ScrollConfig) -> ScrollState {
        let features = &config.features;
        let y = sample.offset;
        let max_scroll = sample.max_scroll();
        let zone = sample.viewport_height * config.zone_threshold;
        let edge = config.edge_threshold_px;

        ScrollState {
            scroll_dir: features.direction.then_some(self.direction),
            departing_top: features.departing_top.then_some(!self.revealed),
            at_top: features.at_top.then(|| y <= edge),
            at_bottom: features.at_bottom.then(|| y >= max_scroll - edge),
            near_top: features.near_top.then(|| y < zone),
            near_bottom: features.near_bottom.then(|| y > max_scroll - zone),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScrollFeatures;

    const VIEWPORT: f64 = 800.0;
    const CONTENT: f64 = 4000.0;

    fn sample(offset: f64) -> ScrollSample {
        ScrollSample::new(offset, VIEWPORT, CONTENT)
    }

    fn start_at(offset: f64, config: &ScrollConfig) -> (Session, ScrollState) {
        Session::start(&sample(offset), config)
    }

    #[test]
    fn test_scenario_down_then_up() {
        let config = ScrollConfig::default();
        let (mut session, state) = start_at(0.0, &config);
        assert_eq!(state.scroll_dir, Some(Direction::Up));

        let state = session.advance(&sample(200.0), &config).unwrap();
        assert_eq!(state.scroll_dir, Some(Direction::Down));
        assert_eq!(state.departing_top, Some(true));

        let state = session.advance(&sample(150.0), &config).unwrap();
        assert_eq!(state.scroll_dir, Some(Direction::Up));
        assert_eq!(state.departing_top, Some(false));
    }

    #[test]
    fn test_small_delta_is_discarded() {
        let config = ScrollConfig::default();
        let (mut session, _) = start_at(500.0, &config);
        assert!(session.advance(&sample(519.0), &config).is_none());
        assert!(session.advance(&sample(481.5), &config).is_none());
        assert_eq!(session.last_offset(), 500.0);
        assert_eq!(session.direction(), Direction::Up);
    }

    #[test]
    fn test_delta_equal_to_min_is_accepted() {
        let config = ScrollConfig::default();
        let (mut session, _) = start_at(500.0, &config);
        assert!(session.advance(&sample(520.0), &config).is_some());
        assert!(session.advance(&sample(500.0), &config).is_some());
        assert_eq!(session.last_offset(), 500.0);
    }

    #[test]
    fn test_intent_flips_exactly_at_threshold() {
        let config = ScrollConfig::default();
        let (mut session, _) = start_at(500.0, &config);

        // 41 px of downward travel is one short
        session.advance(&sample(520.0), &config).unwrap();
        let state = session.advance(&sample(541.0), &config).unwrap();
        assert_eq!(state.scroll_dir, Some(Direction::Up));

        let (mut session, _) = start_at(500.0, &config);
        session.advance(&sample(521.0), &config).unwrap();
        let state = session.advance(&sample(542.0), &config).unwrap();
        assert_eq!(state.scroll_dir, Some(Direction::Down));

        session.advance(&sample(521.0), &config).unwrap();
        let state = session.advance(&sample(500.0), &config).unwrap();
        assert_eq!(state.scroll_dir, Some(Direction::Up));
        assert_eq!(state.departing_top, Some(false));
    }

    #[test]
    fn test_non_finite_offsets_are_ignored() {
        let config = ScrollConfig::default();
        let (mut session, _) = start_at(500.0, &config);
        for offset in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(session.advance(&sample(offset), &config).is_none());
        }
        assert_eq!(session.last_offset(), 500.0);

        // jitter is still filtered afterwards
        assert!(session.advance(&sample(505.0), &config).is_none());
        assert!(session.advance(&sample(540.0), &config).is_some());
    }

    #[test]
    fn test_down_requires_cumulative_intent() {
        let config = ScrollConfig {
            down_intent_px: 100.0,
            ..ScrollConfig::default()
        };
        let (mut session, _) = start_at(500.0, &config);

        let state = session.advance(&sample(560.0), &config).unwrap();
        assert_eq!(state.scroll_dir, Some(Direction::Up));

        let state = session.advance(&sample(610.0), &config).unwrap();
        assert_eq!(state.scroll_dir, Some(Direction::Down));
    }

    #[test]
    fn test_up_requires_cumulative_intent() {
        let config = ScrollConfig {
            up_intent_px: 100.0,
            ..ScrollConfig::default()
        };
        let (mut session, _) = start_at(500.0, &config);
        session.advance(&sample(1000.0), &config).unwrap();
        assert_eq!(session.direction(), Direction::Down);

        let state = session.advance(&sample(940.0), &config).unwrap();
        assert_eq!(state.scroll_dir, Some(Direction::Down));

        let state = session.advance(&sample(880.0), &config).unwrap();
        assert_eq!(state.scroll_dir, Some(Direction::Up));
    }

    #[test]
    fn test_reversal_resets_opposite_accumulator() {
        let config = ScrollConfig {
            down_intent_px: 100.0,
            ..ScrollConfig::default()
        };
        let (mut session, _) = start_at(500.0, &config);
        session.advance(&sample(570.0), &config).unwrap();
        session.advance(&sample(545.0), &config).unwrap();
        // 70 down, reversed, then 70 down again: never 100 in one run
        let state = session.advance(&sample(615.0), &config).unwrap();
        assert_eq!(state.scroll_dir, Some(Direction::Up));
    }

    #[test]
    fn test_below_hide_after_forces_up() {
        let config = ScrollConfig::default();
        let (mut session, _) = start_at(0.0, &config);
        let state = session.advance(&sample(100.0), &config).unwrap();
        assert_eq!(state.scroll_dir, Some(Direction::Up));

        // the travel below the threshold does not count toward "down"
        let state = session.advance(&sample(130.0), &config).unwrap();
        assert_eq!(state.scroll_dir, Some(Direction::Up));
        let state = session.advance(&sample(160.0), &config).unwrap();
        assert_eq!(state.scroll_dir, Some(Direction::Down));
    }

    #[test]
    fn test_top_bypasses_min_delta() {
        let config = ScrollConfig::default();
        let (mut session, _) = start_at(10.0, &config);
        let state = session.advance(&sample(0.0), &config).unwrap();
        assert_eq!(state.at_top, Some(true));
        assert_eq!(state.scroll_dir, Some(Direction::Up));
        assert_eq!(session.last_offset(), 0.0);
    }

    #[test]
    fn test_leaving_top_resets_revealed() {
        let config = ScrollConfig::default();
        let (mut session, _) = start_at(600.0, &config);
        let state = session.advance(&sample(500.0), &config).unwrap();
        assert_eq!(state.departing_top, Some(false));

        // arriving at the top keeps the revealed flag
        let state = session.advance(&sample(0.0), &config).unwrap();
        assert_eq!(state.departing_top, Some(false));

        // the first accepted downward move clears it, before any hysteresis
        let state = session.advance(&sample(30.0), &config).unwrap();
        assert_eq!(state.departing_top, Some(true));
        assert_eq!(state.scroll_dir, Some(Direction::Up));
    }

    #[test]
    fn test_hovering_near_top_keeps_revealed_until_accepted_delta() {
        let config = ScrollConfig::default();
        let (mut session, _) = start_at(600.0, &config);
        session.advance(&sample(500.0), &config).unwrap();
        session.advance(&sample(0.0), &config).unwrap();

        // jitter below min delta never reaches the accumulators
        assert!(session.advance(&sample(5.0), &config).is_none());
        let state = session.advance(&sample(0.0), &config).unwrap();
        assert_eq!(state.departing_top, Some(false));
    }

    #[test]
    fn test_edges() {
        let config = ScrollConfig::default();
        let max_scroll = CONTENT - VIEWPORT;
        let (mut session, state) = start_at(0.0, &config);
        assert_eq!(state.at_top, Some(true));
        assert_eq!(state.at_bottom, Some(false));

        let state = session.advance(&sample(2.0 + 40.0), &config).unwrap();
        assert_eq!(state.at_top, Some(false));

        let state = session.advance(&sample(max_scroll - 2.0), &config).unwrap();
        assert_eq!(state.at_bottom, Some(true));

        let state = session.advance(&sample(max_scroll - 30.0), &config).unwrap();
        assert_eq!(state.at_bottom, Some(false));
    }

    #[test]
    fn test_edge_threshold_boundary() {
        let config = ScrollConfig {
            edge_threshold_px: 50.0,
            min_delta_px: 0.0,
            ..ScrollConfig::default()
        };
        let (mut session, _) = start_at(100.0, &config);
        assert_eq!(session.advance(&sample(50.0), &config).unwrap().at_top, Some(true));
        assert_eq!(session.advance(&sample(50.5), &config).unwrap().at_top, Some(false));
    }

    #[test]
    fn test_zones() {
        let config = ScrollConfig::default();
        let max_scroll = CONTENT - VIEWPORT;
        let (mut session, state) = start_at(0.0, &config);
        assert_eq!(state.near_top, Some(true));
        assert_eq!(state.near_bottom, Some(false));

        let state = session.advance(&sample(399.0), &config).unwrap();
        assert_eq!(state.near_top, Some(true));
        let state = session.advance(&sample(1000.0), &config).unwrap();
        assert_eq!(state.near_top, Some(false));
        assert_eq!(state.near_bottom, Some(false));

        let state = session.advance(&sample(max_scroll - 399.0), &config).unwrap();
        assert_eq!(state.near_bottom, Some(true));
    }

    #[test]
    fn test_short_content_is_at_both_edges() {
        let config = ScrollConfig::default();
        let (_, state) = Session::start(&ScrollSample::new(0.0, 800.0, 600.0), &config);
        assert_eq!(state.at_top, Some(true));
        assert_eq!(state.at_bottom, Some(true));
    }

    #[test]
    fn test_disabled_features_are_omitted() {
        let config = ScrollConfig {
            features: ScrollFeatures {
                direction: false,
                near_top: false,
                near_bottom: false,
                ..ScrollFeatures::default()
            },
            ..ScrollConfig::default()
        };
        let (mut session, _) = start_at(0.0, &config);
        let state = session.advance(&sample(300.0), &config).unwrap();
        assert_eq!(state.scroll_dir, None);
        assert_eq!(state.near_top, None);
        assert_eq!(state.near_bottom, None);
        assert_eq!(state.departing_top, Some(true));
        assert_eq!(state.at_top, Some(false));
    }

    #[test]
    fn test_intent_skipped_when_untracked() {
        let config = ScrollConfig {
            features: ScrollFeatures {
                direction: false,
                departing_top: false,
                ..ScrollFeatures::default()
            },
            ..ScrollConfig::default()
        };
        let (mut session, _) = start_at(0.0, &config);
        session.advance(&sample(900.0), &config).unwrap();
        assert_eq!(session.direction(), Direction::Up);
    }

    #[test]
    fn test_negative_thresholds_do_not_panic() {
        let config = ScrollConfig {
            hide_after_px: -10.0,
            up_intent_px: -1.0,
            down_intent_px: -1.0,
            min_delta_px: -5.0,
            edge_threshold_px: -3.0,
            zone_threshold: -0.5,
            ..ScrollConfig::default()
        };
        let (mut session, _) = start_at(0.0, &config);
        for offset in [10.0, 10.0, 5.0, -20.0, 3000.0] {
            assert!(session.advance(&sample(offset), &config).is_some());
        }
    }

    #[test]
    fn test_state_serializes_camel_case() {
        let config = ScrollConfig::default();
        let (_, state) = start_at(0.0, &config);
        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains("\"scrollDir\":\"up\""));
        assert!(json.contains("\"departingTop\":true"));
    }
}

//! Scroll state annotator.
//!
//! Turns a stream of scroll notifications into markers on a target element
//! (direction, departing the top, at/near an edge) for CSS hooks.
//!
//! # Frame coalescing
//!
//! The host calls [`ScrollObserver::notify`] on every scroll event and
//! [`ScrollObserver::frame`] from its next render callback. Only the first
//! notification of a burst asks for a frame; the rest overwrite the pending
//! sample. So at most one recomputation happens per frame:
//!
//! ```text
//! notify(120) -> true    schedule a frame
//! notify(140) -> false   already pending, sample replaced
//! notify(175) -> false
//! frame()                recompute once with 175
//! ```
//!
//! Offsets at or above the top skip this and are applied on the spot.
//!
//! # Example
//!
//! ```ignore
//! let mut observer = ScrollObserver::start(config, Element::new("html"), initial);
//! if observer.notify(sample) {
//!     host.request_frame();
//! }
//! // ... in the frame callback
//! observer.frame();
//! observer.stop();
//! ```

mod element;
mod marker;
mod session;

pub use element::Element;
pub use marker::MarkerSink;
pub use session::{Direction, ScrollSample, ScrollState};

use session::Session;

use crate::config::ScrollConfig;
use crate::debug;

/// One running observation writing into `S`.
pub struct ScrollObserver<S: MarkerSink> {
    config: ScrollConfig,
    target: S,
    /// `None` once stopped.
    session: Option<Session>,
    frame_requested: bool,
    latest: Option<ScrollSample>,
}

impl<S: MarkerSink> ScrollObserver<S> {
    /// Start observing and publish the state of the initial sample.
    pub fn start(config: ScrollConfig, mut target: S, initial: ScrollSample) -> Self {
        let (session, state) = Session::start(&initial, &config);
        marker::write(&state, config.mode, &mut target);
        debug!("scroll"; "started at {} ({} mode)", initial.offset, config.mode.as_str());

        Self {
            config,
            target,
            session: Some(session),
            frame_requested: false,
            latest: None,
        }
    }

    /// Record a scroll notification.
    ///
    /// Returns `true` when the host must schedule a frame callback. Always
    /// `false` after [`stop`](Self::stop).
    pub fn notify(&mut self, sample: ScrollSample) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        if !sample.offset.is_finite() {
            debug!("scroll"; "ignored non-finite offset {}", sample.offset);
            return false;
        }

        if sample.is_at_or_above_top() {
            // supersedes whatever the pending frame would have processed
            self.latest = None;
            if let Some(state) = session.advance(&sample, &self.config) {
                marker::write(&state, self.config.mode, &mut self.target);
            }
            return false;
        }

        self.latest = Some(sample);
        if self.frame_requested {
            return false;
        }
        self.frame_requested = true;
        true
    }

    /// Frame callback: recompute once from the latest pending sample.
    ///
    /// Returns the published state, or `None` when nothing was pending, the
    /// sample was filtered as jitter, or the observer is stopped.
    pub fn frame(&mut self) -> Option<ScrollState> {
        self.frame_requested = false;
        let sample = self.latest.take()?;
        let session = self.session.as_mut()?;

        let state = session.advance(&sample, &self.config)?;
        marker::write(&state, self.config.mode, &mut self.target);
        Some(state)
    }

    /// Stop observing and remove every marker. Safe to call repeatedly.
    pub fn stop(&mut self) {
        if self.session.take().is_some() {
            debug!("scroll"; "stopped");
        }
        self.frame_requested = false;
        self.latest = None;
        marker::clear(&mut self.target);
    }

    pub fn is_running(&self) -> bool {
        self.session.is_some()
    }

    /// Whether a frame callback is outstanding.
    pub fn is_frame_pending(&self) -> bool {
        self.frame_requested
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    pub fn target(&self) -> &S {
        &self.target
    }

    /// Stop and hand the target back.
    pub fn into_target(mut self) -> S {
        self.stop();
        self.target
    }
}

//! State markers and the seam to the element that carries them.
//!
//! | Marker       | attribute mode       | class mode                          |
//! |--------------|----------------------|-------------------------------------|
//! | scrollDir    | `data-scroll-dir`    | `scroll-dir-up` / `scroll-dir-down` |
//! | departingTop | `data-departing-top` | `departing-top`                     |
//! | atTop        | `data-at-top`        | `at-top`                            |
//! | atBottom     | `data-at-bottom`     | `at-bottom`                         |
//! | nearTop      | `data-near-top`      | `near-top`                          |
//! | nearBottom   | `data-near-bottom`   | `near-bottom`                       |

use super::session::{Direction, ScrollState};
use crate::config::OutputMode;

/// Something that can hold attributes and classes, usually a DOM element.
///
/// All operations must be idempotent: removing a missing attribute or
/// toggling a class into its current state is a no-op.
pub trait MarkerSink {
    fn set_attribute(&mut self, name: &str, value: &str);
    fn remove_attribute(&mut self, name: &str);
    fn toggle_class(&mut self, name: &str, on: bool);
}

impl<T: MarkerSink + ?Sized> MarkerSink for &mut T {
    fn set_attribute(&mut self, name: &str, value: &str) {
        (**self).set_attribute(name, value);
    }

    fn remove_attribute(&mut self, name: &str) {
        (**self).remove_attribute(name);
    }

    fn toggle_class(&mut self, name: &str, on: bool) {
        (**self).toggle_class(name, on);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    ScrollDir,
    DepartingTop,
    AtTop,
    AtBottom,
    NearTop,
    NearBottom,
}

impl Marker {
    pub const ALL: [Self; 6] = [
        Self::ScrollDir,
        Self::DepartingTop,
        Self::AtTop,
        Self::AtBottom,
        Self::NearTop,
        Self::NearBottom,
    ];

    pub const fn attribute(self) -> &'static str {
        match self {
            Self::ScrollDir => "data-scroll-dir",
            Self::DepartingTop => "data-departing-top",
            Self::AtTop => "data-at-top",
            Self::AtBottom => "data-at-bottom",
            Self::NearTop => "data-near-top",
            Self::NearBottom => "data-near-bottom",
        }
    }

    /// Class name for boolean markers. `ScrollDir` has no single class.
    pub const fn class(self) -> Option<&'static str> {
        match self {
            Self::ScrollDir => None,
            Self::DepartingTop => Some("departing-top"),
            Self::AtTop => Some("at-top"),
            Self::AtBottom => Some("at-bottom"),
            Self::NearTop => Some("near-top"),
            Self::NearBottom => Some("near-bottom"),
        }
    }
}

/// Direction classes, one per [`Direction`].
pub const fn direction_class(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => "scroll-dir-up",
        Direction::Down => "scroll-dir-down",
    }
}

impl ScrollState {
    fn flag(&self, marker: Marker) -> Option<bool> {
        match marker {
            Marker::ScrollDir => None,
            Marker::DepartingTop => self.departing_top,
            Marker::AtTop => self.at_top,
            Marker::AtBottom => self.at_bottom,
            Marker::NearTop => self.near_top,
            Marker::NearBottom => self.near_bottom,
        }
    }
}

/// Write every enabled marker of `state` onto `sink`.
pub fn write(state: &ScrollState, mode: OutputMode, sink: &mut impl MarkerSink) {
    if let Some(direction) = state.scroll_dir {
        match mode {
            OutputMode::Attributes => {
                sink.set_attribute(Marker::ScrollDir.attribute(), direction.as_str());
            }
            OutputMode::Classes => {
                for other in [Direction::Up, Direction::Down] {
                    sink.toggle_class(direction_class(other), other == direction);
                }
            }
        }
    }

    for marker in Marker::ALL {
        let Some(on) = state.flag(marker) else {
            continue;
        };
        match (mode, marker.class()) {
            (OutputMode::Attributes, _) => {
                sink.set_attribute(marker.attribute(), if on { "true" } else { "false" });
            }
            (OutputMode::Classes, Some(class)) => sink.toggle_class(class, on),
            (OutputMode::Classes, None) => {}
        }
    }
}

/// Remove every marker this module can write, in both encodings.
pub fn clear(sink: &mut impl MarkerSink) {
    for marker in Marker::ALL {
        sink.remove_attribute(marker.attribute());
        if let Some(class) = marker.class() {
            sink.toggle_class(class, false);
        }
    }
    for direction in [Direction::Up, Direction::Down] {
        sink.toggle_class(direction_class(direction), false);
    }
}

//! Attributes carried over from `<img>` to the inlined `<svg>`.

use crate::utils::html::{escape_attr, parse_attributes, unescape};

/// The fixed allow-list of transplanted attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transplant {
    Class,
    Id,
    Style,
    Width,
    Height,
    /// Accessibility text, written as `aria-label`.
    Alt,
}

impl Transplant {
    pub const ALL: [Self; 6] = [
        Self::Class,
        Self::Id,
        Self::Style,
        Self::Width,
        Self::Height,
        Self::Alt,
    ];

    /// Attribute name on the `<img>` tag.
    pub const fn source(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Id => "id",
            Self::Style => "style",
            Self::Width => "width",
            Self::Height => "height",
            Self::Alt => "alt",
        }
    }

    /// Attribute name on the `<svg>` root.
    pub const fn target(self) -> &'static str {
        match self {
            Self::Alt => "aria-label",
            other => other.source(),
        }
    }

    fn from_source(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.source().eq_ignore_ascii_case(name))
    }
}

/// Attribute always set on the inlined root.
pub const ROLE: (&str, &str) = ("role", "img");

/// Pull the allow-listed attributes out of an `<img>` attribute string.
///
/// The first occurrence of a name wins, as in HTML parsing. Values come
/// back entity-decoded.
pub fn extract(img_attrs: &str) -> Vec<(Transplant, String)> {
    let mut found: Vec<(Transplant, String)> = Vec::new();
    for (name, value) in parse_attributes(img_attrs) {
        let Some(transplant) = Transplant::from_source(&name) else {
            continue;
        };
        if found.iter().any(|(t, _)| *t == transplant) {
            continue;
        }
        found.push((transplant, unescape(&value).into_owned()));
    }
    found
}

/// Rendered `name="value"` pairs to put on the `<svg>` root.
///
/// An empty `alt` marks a decorative image and yields no `aria-label`.
pub fn svg_overrides(transplants: &[(Transplant, String)]) -> Vec<(&'static str, String)> {
    let mut overrides: Vec<(&'static str, String)> = transplants
        .iter()
        .filter(|(t, value)| !(*t == Transplant::Alt && value.trim().is_empty()))
        .map(|(t, value)| (t.target(), escape_attr(value).into_owned()))
        .collect();
    overrides.push((ROLE.0, ROLE.1.to_string()));
    overrides
}

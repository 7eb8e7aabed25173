//! Shared helpers for HTML text and filesystem paths.

pub mod html;
pub mod path;

//! Command-line interface module.

mod args;
pub mod inline;
pub mod scroll;

pub use args::{Burst, Cli, Commands, InlineArgs, ScrollArgs};

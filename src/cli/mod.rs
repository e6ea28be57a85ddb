//! Command-line interface module.

mod args;
pub mod build;
pub mod common;
pub mod list;

pub use args::{BuildArgs, Cli, Commands, DEFAULT_CONFIG, ListArgs, SourceArgs};

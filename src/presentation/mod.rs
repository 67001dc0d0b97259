//! Presentation layer for the demo binary.

pub mod cli;

pub use cli::{Cli, ColorWhen, MenuKind};

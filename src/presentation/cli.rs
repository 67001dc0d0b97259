//! CLI Argument Parsing
//!
//! This module defines the demo CLI interface using clap.

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use crate::ui::terminal::TerminalCapabilities;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuKind {
    Select,
    #[default]
    Multi,
    Confirm,
}

/// pullycat - pick options from an interactive terminal menu
#[derive(Parser, Debug)]
#[command(name = "pullycat")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Menu kind to show
    #[arg(long, value_enum, default_value_t = MenuKind::default())]
    pub mode: MenuKind,

    /// Fewest options a multi-select accepts
    #[arg(long)]
    pub min: Option<usize>,

    /// Most options a multi-select accepts
    #[arg(long)]
    pub max: Option<usize>,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Reject `--min`/`--max` for menus that have no selection bounds
    pub fn check_bounds(&self) -> Result<(), clap::Error> {
        if self.mode == MenuKind::Multi || (self.min.is_none() && self.max.is_none()) {
            return Ok(());
        }
        let mode = match self.mode {
            MenuKind::Select => "select",
            _ => "confirm",
        };
        Err(Cli::command().error(
            ErrorKind::ArgumentConflict,
            format!("--min/--max only apply to --mode multi, not --mode {mode}"),
        ))
    }

    /// Resolve `--color` against what the terminal supports
    pub fn color_enabled(&self, caps: &TerminalCapabilities) -> bool {
        match self.color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => caps.color_by_default(),
        }
    }

    /// Log filter directive for the `-v` count
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

//! pullycat CLI - demo of the interactive selection menu
//!
//! Usage: pullycat [--mode select|multi|confirm] [--min N] [--max N]

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use pullycat::presentation::{Cli, MenuKind};
use pullycat::ui::terminal::{detect_capabilities, CrosstermTerminal};
use pullycat::{Choice, Menu, MenuOption};

const COLOURS: [(&str, &str); 5] = [
    ("red", "Red"),
    ("blue", "Blue"),
    ("green", "Green"),
    ("yellow", "Yellow"),
    ("cyan", "Cyan"),
];

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.check_bounds().unwrap_or_else(|err| err.exit());
    init_tracing(cli.log_level());

    let mut menu = build_menu(&cli);
    let caps = detect_capabilities();
    let color = cli.color_enabled(&caps);
    info!(mode = ?cli.mode, color, "showing menu");

    let choice = menu
        .display_on(&mut CrosstermTerminal::new(), color)
        .context("menu interaction failed")?;

    match choice {
        Choice::Cancelled => println!("Cancelled"),
        Choice::Single(id) => println!("Choice: {}", id),
        Choice::Multiple(ids) => println!("Choice: {}", ids.join(", ")),
    }
    Ok(())
}

fn build_menu(cli: &Cli) -> Menu {
    let options = COLOURS
        .iter()
        .map(|(id, text)| MenuOption::new(*id, *text));

    match cli.mode {
        MenuKind::Select => Menu::select("Choose a colour", options),
        MenuKind::Multi => Menu::multi_select("Choose colours", cli.min, cli.max, options),
        MenuKind::Confirm => Menu::confirmation(
            "Continue",
            [MenuOption::new("yes", "Yes"), MenuOption::new("no", "No")],
        ),
    }
}

fn init_tracing(level: &str) {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_level(true)
            .init();
    });
}

//! steelcore - Interactive terminal portfolio deck
//!
//! Renders a themed portfolio "deck" in the terminal: an ASCII identity
//! monolith, a scrolling boot-log stream, a project vault carousel, and
//! slide-in overlay panels.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use steelcore::config::{Config, ThemeMode};
use steelcore::constants::{APP_BINARY_NAME, APP_NAME};
use steelcore::models::Deck;
use steelcore::{parser, tui};

/// Interactive terminal portfolio deck
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a markdown deck file (built-in deck when omitted)
    #[arg(value_name = "DECK")]
    deck_path: Option<PathBuf>,

    /// Override the configured theme mode
    #[arg(long, value_enum)]
    theme: Option<ThemeMode>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let deck = if let Some(path) = cli.deck_path {
        if !path.exists() {
            eprintln!("Error: Deck file not found: {}", path.display());
            eprintln!();
            eprintln!("Please provide a valid path to a Markdown deck file.");
            eprintln!();
            eprintln!("Examples:");
            eprintln!("  {} my_deck.md", APP_BINARY_NAME);
            eprintln!("  {}          (loads the built-in deck)", APP_BINARY_NAME);
            std::process::exit(1);
        }
        parser::parse_deck(&path)?
    } else {
        Deck::builtin()
    };

    let mut config = Config::load().unwrap_or_else(|_| Config::default());
    if let Some(theme) = cli.theme {
        config.ui.theme_mode = theme;
    }

    let mut terminal = tui::setup_terminal()?;
    let mut state = tui::AppState::new(deck, config);

    let result = tui::run_tui(&mut state, &mut terminal);

    tui::restore_terminal(terminal)?;
    result?;

    // Report the navigation target a project open pointed at, now that
    // the alternate screen is gone
    if let Some(link) = state.exit_link {
        println!("{APP_NAME}: open ./{link}");
    }

    Ok(())
}

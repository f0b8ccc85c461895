//! Terminal user interface: state, event loop, and rendering.

// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]
// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]

pub mod carousel;
pub mod component;
pub mod effects;
pub mod handlers;
pub mod log;
pub mod overlay;
pub mod status_bar;
pub mod theme;

use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::Rng as _;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};

use crate::config::Config;
use crate::constants::{MONOLITH, NAV_DELAY_MS};
use crate::models::{Deck, ProjectRecord};

pub use carousel::{Carousel, CarouselEvent, OpenRequest, Surface};
pub use component::Component;
pub use effects::{ControlRack, GlitchFlash, Schedule, Scrambler};
pub use log::{BootTicker, TerminalLog};
pub use overlay::{OverlayKind, OverlayStack};
pub use status_bar::StatusBar;
pub use theme::Theme;

/// Closing line appended by the ticker after the scripted boot lines.
const BOOT_FINALE: &str = "profile fully forged. explore panels & puzzles.";

/// Application state - single source of truth.
///
/// All UI widgets read from this state immutably; only event handlers
/// and the frame tick mutate it.
pub struct AppState {
    // Core data
    /// Parsed deck content (source regions for overlays)
    pub deck: Deck,
    /// Shared record list backing every carousel instance
    pub records: Arc<Vec<ProjectRecord>>,

    // UI state
    /// Current UI theme
    pub theme: Theme,
    /// Main vault carousel
    pub vault: Carousel,
    /// Open overlay panels
    pub overlays: OverlayStack,
    /// Terminal stream
    pub log: TerminalLog,
    /// Scripted boot-log ticker
    pub ticker: BootTicker,
    /// Monolith glyph scrambler
    pub scrambler: Scrambler,
    /// Glitch flash state
    pub glitch: GlitchFlash,
    /// Effect sliders
    pub rack: ControlRack,
    /// Status bar message
    pub status_message: String,
    /// Whether the core has been ignited at least once
    pub ignited: bool,

    // Pending navigation
    /// Schedule for leaving the deck after a command echo
    pub nav: Schedule,
    /// Target link of the pending navigation
    pub nav_target: Option<String>,
    /// Link reported on stdout after shutdown
    pub exit_link: Option<String>,

    // System resources
    /// Application configuration
    pub config: Config,

    // Control flags
    /// Whether the application should exit
    pub should_quit: bool,
}

impl AppState {
    /// Creates the application state from a parsed deck and config.
    #[must_use]
    pub fn new(deck: Deck, config: Config) -> Self {
        let records = Arc::new(deck.records.clone());
        let vault = Carousel::new(Arc::clone(&records));
        let log = TerminalLog::new(deck.metadata.prompt.clone());
        let ticker = BootTicker::new(deck.boot_lines.clone(), BOOT_FINALE);
        let rack = ControlRack::new(
            config.ui.spark_density,
            config.ui.noise_level,
            config.ui.glitch_intensity,
        );
        let theme = Theme::from_mode(config.ui.theme_mode);

        Self {
            deck,
            records,
            theme,
            vault,
            overlays: OverlayStack::new(),
            log,
            ticker,
            scrambler: Scrambler::new(MONOLITH),
            glitch: GlitchFlash::new(),
            rack,
            status_message: "core offline // press i to ignite".to_string(),
            ignited: false,
            nav: Schedule::new(),
            nav_target: None,
            exit_link: None,
            config,
            should_quit: false,
        }
    }

    /// Sets the status bar message.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }

    /// Ignites the core: clears the stream, restarts the boot ticker.
    pub fn ignite(&mut self, now: Instant) {
        self.log.clear();
        self.ignited = true;
        self.set_status(self.deck.metadata.status.clone());
        self.log
            .append("IGNITION accepted. bringing the core online...", false);
        self.ticker.start(now);
    }

    /// Focuses a random vault record and logs the pulse.
    pub fn pulse(&mut self, now: Instant) {
        if self.vault.is_empty() {
            return;
        }
        let idx = rand::rng().random_range(0..self.vault.len());
        self.vault.select(idx);
        if let Some(record) = self.vault.current() {
            let energy = if record.difficulty.is_empty() {
                "MID"
            } else {
                record.difficulty.as_str()
            };
            self.log.append(
                format!("focused on \"{}\" at energy={energy}", record.title),
                false,
            );
        }
        self.glitch.trigger(now);
    }

    /// Scrambles the monolith at the current glitch intensity.
    pub fn scramble(&mut self, now: Instant) {
        self.scrambler
            .scramble(&mut rand::rng(), self.rack.intensity(), now);
        self.glitch.trigger(now);
        self.log
            .append("scrambled identity.monolith // glyphs briefly unstable", true);
    }

    /// Handles an open request from any carousel instance: echo the
    /// command, then schedule navigation so the echo stays visible.
    pub fn request_open(&mut self, request: &OpenRequest, now: Instant) {
        if let Some(cmd) = &request.cmd {
            self.log.append_command(cmd.clone());
        }
        if let Some(link) = &request.link {
            self.nav_target = Some(link.clone());
            self.nav.arm(now, Duration::from_millis(NAV_DELAY_MS));
            self.set_status(format!("opening ./{link}"));
        }
    }

    /// Advances all timed effects to `now`.
    pub fn tick(&mut self, now: Instant) {
        self.ticker.tick(now, &mut self.log);
        self.glitch.tick(now);
        self.scrambler.tick(now);

        if self.nav.fire_due(now) {
            if let Some(link) = self.nav_target.take() {
                self.log.append(format!("leaving deck // target ./{link}"), false);
                self.exit_link = Some(link);
                self.should_quit = true;
            }
        }
    }
}

/// Initializes the terminal for the TUI.
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restores the terminal to its normal state.
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop.
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        state.theme = Theme::from_mode(state.config.ui.theme_mode);
        state.tick(Instant::now());

        terminal.draw(|f| render(f, state))?;

        // Poll with a short timeout so pending timers keep advancing
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    if handlers::handle_key_event(state, key)? {
                        break;
                    }
                }
                Event::Resize(_, _) => {
                    // Re-rendered on the next loop pass
                }
                _ => {}
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Renders the UI from current state.
fn render(f: &mut Frame, state: &AppState) {
    let theme = &state.theme;

    // Consistent background regardless of terminal defaults
    let full_bg = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(10),   // Main content
            Constraint::Length(5), // Status bar
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], state);
    render_main_content(f, chunks[1], state);
    StatusBar::render(f, chunks[2], state, theme);

    state.overlays.render(f, theme);
}

/// Renders the title bar with deck name and core state.
fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let core = if state.ignited {
        Span::styled("CORE ONLINE", Style::default().fg(theme.success))
    } else {
        Span::styled("CORE OFFLINE", Style::default().fg(theme.inactive))
    };
    let title = Line::from(vec![
        Span::styled(
            format!(" {} // {} ", crate::constants::APP_NAME, state.deck.metadata.name),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        core,
    ]);

    let widget = Paragraph::new(title).block(
        Block::default()
            .borders(Borders::ALL)
            .style(Style::default().fg(theme.primary).bg(theme.background)),
    );
    f.render_widget(widget, area);
}

/// Renders the main content: monolith column and terminal/vault column.
fn render_main_content(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let columns = RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    // Identity monolith, warning-tinted while the glitch flash is on
    let monolith_color = if state.glitch.is_active() {
        theme.warning
    } else {
        theme.accent
    };
    let monolith = Paragraph::new(state.scrambler.text().to_string())
        .style(Style::default().fg(monolith_color))
        .block(
            Block::default()
                .title(" IDENTITY ")
                .borders(Borders::ALL)
                .style(Style::default().fg(theme.primary).bg(theme.background)),
        );
    f.render_widget(monolith, columns[0]);

    let right = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(12)])
        .split(columns[1]);

    state.log.render(f, right[0], theme);
    state.vault.render(f, right[1], theme);
}

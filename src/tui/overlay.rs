//! Overlay panel manager.
//!
//! Overlays are transient panels stacked above the main layout, each
//! showing a snapshot of a deck region taken at open time. The host
//! keeps at most one open panel per kind: reopening a kind replaces
//! the existing panel, and closing removes it entirely. The most
//! recently opened panel sits on top.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::models::{Deck, ProjectRecord};

use super::carousel::{Carousel, CarouselEvent};
use super::component::Component;
use super::Theme;

/// Which deck region an overlay clones from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    /// About body snapshot
    About,
    /// Contact list snapshot
    Contact,
    /// Project vault copy with its own carousel
    Projects,
}

impl OverlayKind {
    /// Panel title for this kind.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::About => " ABOUT ",
            Self::Contact => " CONTACT ",
            Self::Projects => " PROJECT VAULT // COPY ",
        }
    }
}

/// Panel body: a text snapshot, or a re-wired carousel for the vault.
///
/// Cloning deck content copies data, never behavior, so a projects
/// panel gets a freshly constructed carousel over the shared records.
#[derive(Debug, Clone)]
pub enum OverlayBody {
    /// Deep-copied text lines from the source region
    Text(Vec<String>),
    /// Independent carousel instance
    Vault(Carousel),
}

/// A single open overlay panel.
#[derive(Debug, Clone)]
pub struct OverlayPanel {
    /// Which region this panel was cloned from
    pub kind: OverlayKind,
    /// Snapshot body
    pub body: OverlayBody,
}

/// Stack of open overlay panels, newest first.
#[derive(Debug, Clone, Default)]
pub struct OverlayStack {
    panels: Vec<OverlayPanel>,
}

impl OverlayStack {
    /// Creates an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self { panels: Vec::new() }
    }

    /// Whether no overlay is open.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Number of open panels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    /// The topmost panel, if any.
    #[must_use]
    pub fn top(&self) -> Option<&OverlayPanel> {
        self.panels.first()
    }

    /// The topmost panel, mutable.
    pub fn top_mut(&mut self) -> Option<&mut OverlayPanel> {
        self.panels.first_mut()
    }

    /// Kinds of all open panels, topmost first.
    #[must_use]
    pub fn kinds(&self) -> Vec<OverlayKind> {
        self.panels.iter().map(|p| p.kind).collect()
    }

    /// Opens (or replaces) the panel for `kind`, snapshotting the named
    /// deck region. The new panel is prepended so it renders on top.
    /// The source deck is read, never modified.
    pub fn open(&mut self, kind: OverlayKind, deck: &Deck, records: &Arc<Vec<ProjectRecord>>) {
        self.panels.retain(|p| p.kind != kind);
        let body = match kind {
            OverlayKind::About => OverlayBody::Text(deck.about.clone()),
            OverlayKind::Contact => OverlayBody::Text(deck.contact.clone()),
            OverlayKind::Projects => OverlayBody::Vault(Carousel::new(Arc::clone(records))),
        };
        self.panels.insert(0, OverlayPanel { kind, body });
    }

    /// Removes the topmost panel, returning its kind.
    pub fn close_top(&mut self) -> Option<OverlayKind> {
        if self.panels.is_empty() {
            None
        } else {
            Some(self.panels.remove(0).kind)
        }
    }

    /// Removes the panel for `kind`, if open.
    pub fn close(&mut self, kind: OverlayKind) {
        self.panels.retain(|p| p.kind != kind);
    }

    /// Routes key input to the topmost panel.
    ///
    /// Esc closes the top panel. A projects panel forwards remaining
    /// keys to its own carousel, which may emit an open event.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<CarouselEvent> {
        if key.code == KeyCode::Esc {
            self.close_top();
            return None;
        }
        match self.top_mut().map(|p| &mut p.body) {
            Some(OverlayBody::Vault(carousel)) => carousel.handle_input(key),
            _ => None,
        }
    }

    /// Renders the topmost panel centered over the main layout, with a
    /// badge strip listing any panels stacked beneath it.
    pub fn render(&self, f: &mut Frame, theme: &Theme) {
        let Some(panel) = self.top() else {
            return;
        };

        let area = centered_rect(60, 60, f.area());
        f.render_widget(Clear, area);
        f.render_widget(
            Block::default().style(Style::default().bg(theme.surface)),
            area,
        );

        let block = Block::default()
            .title(panel.kind.title())
            .borders(Borders::ALL)
            .style(Style::default().fg(theme.accent).bg(theme.surface));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // body
                Constraint::Length(1), // stacked badges + close hint
            ])
            .split(inner);

        match &panel.body {
            OverlayBody::Text(lines) => {
                let body: Vec<Line> = lines
                    .iter()
                    .map(|l| Line::from(Span::styled(l.clone(), Style::default().fg(theme.text))))
                    .collect();
                f.render_widget(Paragraph::new(body).wrap(Wrap { trim: true }), chunks[0]);
            }
            OverlayBody::Vault(carousel) => {
                carousel.render(f, chunks[0], theme);
            }
        }

        let mut footer = vec![Span::styled(
            "[Esc] close",
            Style::default().fg(theme.text_muted),
        )];
        for kind in self.kinds().into_iter().skip(1) {
            footer.push(Span::raw("  "));
            footer.push(Span::styled(
                kind.title().trim().to_string(),
                Style::default()
                    .fg(theme.inactive)
                    .add_modifier(Modifier::DIM),
            ));
        }
        f.render_widget(Paragraph::new(Line::from(footer)), chunks[1]);
    }
}

/// Helper to create a centered rectangle.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

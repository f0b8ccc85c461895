//! Project vault carousel.
//!
//! Maintains a cursor over the shared record list and projects the
//! current record into a render surface. There can be two carousels
//! alive at once (the main vault panel and a projects overlay copy);
//! each owns its own cursor, so advancing one never moves the other.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::models::ProjectRecord;

use super::component::Component;
use super::Theme;

/// An open request resolved against the record value at the moment the
/// open action fired, never against the cursor. A later cursor move
/// cannot change what an already-emitted request points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenRequest {
    /// Title of the record being opened (for the status line)
    pub title: String,
    /// Command text to echo to the log before navigating
    pub cmd: Option<String>,
    /// Navigation target
    pub link: Option<String>,
}

/// Events emitted by the carousel to its parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarouselEvent {
    /// User activated the open action on the current record
    Open(OpenRequest),
}

/// The projected content of the carousel's render surface.
///
/// This is a pure function of the cursor: projecting twice without a
/// cursor move yields identical content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    /// Record display label
    pub index_label: String,
    /// Record title
    pub title: String,
    /// Record tagline
    pub tagline: String,
    /// Record blurb body
    pub blurb: String,
    /// Difficulty chip text
    pub difficulty: String,
    /// Tech chip text
    pub tech: String,
    /// Footer path: `"./" + link` or empty
    pub path: String,
    /// One flag per record; exactly one is true
    pub dots: Vec<bool>,
}

/// Carousel over a shared, read-only record list.
#[derive(Debug, Clone)]
pub struct Carousel {
    records: Arc<Vec<ProjectRecord>>,
    cursor: usize,
}

impl Carousel {
    /// Wires a carousel against the shared record list, starting at the
    /// first record. An empty list yields a silent no-op carousel: no
    /// dots, no surface, every operation does nothing.
    #[must_use]
    pub fn new(records: Arc<Vec<ProjectRecord>>) -> Self {
        Self { records, cursor: 0 }
    }

    /// Number of records in the shared list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the carousel has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Current cursor position.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// The record under the cursor, if any.
    #[must_use]
    pub fn current(&self) -> Option<&ProjectRecord> {
        self.records.get(self.cursor)
    }

    /// Moves the cursor to `idx` (wrapped into range).
    pub fn select(&mut self, idx: usize) {
        if !self.records.is_empty() {
            self.cursor = idx % self.records.len();
        }
    }

    /// Advances the cursor by `direction` (-1 or +1), wrapping both ways.
    pub fn advance(&mut self, direction: i64) {
        let len = self.records.len();
        if len > 0 {
            self.cursor = (self.cursor as i64 + direction).rem_euclid(len as i64) as usize;
        }
    }

    /// Projects the current record into surface content.
    #[must_use]
    pub fn surface(&self) -> Option<Surface> {
        let record = self.current()?;
        let mut dots = vec![false; self.records.len()];
        dots[self.cursor] = true;
        Some(Surface {
            index_label: record.index.clone(),
            title: record.title.clone(),
            tagline: record.tagline.clone(),
            blurb: record.blurb.clone(),
            difficulty: record.difficulty.clone(),
            tech: record.tech.clone(),
            path: record.footer_path(),
            dots,
        })
    }

    /// Resolves the open action against the current record.
    ///
    /// Returns `None` when there is no record or the record has neither
    /// a command nor a link (the action is a no-op).
    #[must_use]
    pub fn open(&self) -> Option<OpenRequest> {
        let record = self.current()?;
        if record.cmd.is_none() && record.link.is_none() {
            return None;
        }
        Some(OpenRequest {
            title: record.title.clone(),
            cmd: record.cmd.clone(),
            link: record.link.clone(),
        })
    }
}

impl Component for Carousel {
    type Event = CarouselEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.advance(-1);
                None
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.advance(1);
                None
            }
            KeyCode::Char(c @ '1'..='9') => {
                let idx = (c as usize) - ('1' as usize);
                if idx < self.len() {
                    self.select(idx);
                }
                None
            }
            KeyCode::Enter => self.open().map(CarouselEvent::Open),
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let Some(surface) = self.surface() else {
            // Empty vault: leave the area untouched
            return;
        };

        let block = Block::default()
            .title(" PROJECT VAULT ")
            .borders(Borders::ALL)
            .style(Style::default().fg(theme.primary).bg(theme.background));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // index + title
                Constraint::Length(1), // tagline
                Constraint::Min(2),    // blurb
                Constraint::Length(1), // chips
                Constraint::Length(1), // path footer
                Constraint::Length(1), // dots
            ])
            .split(inner);

        let header = vec![
            Line::from(Span::styled(
                format!("[{}]", surface.index_label),
                Style::default().fg(theme.text_muted),
            )),
            Line::from(Span::styled(
                surface.title.clone(),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            )),
        ];
        f.render_widget(Paragraph::new(header), chunks[0]);

        f.render_widget(
            Paragraph::new(surface.tagline.clone()).style(Style::default().fg(theme.text)),
            chunks[1],
        );
        f.render_widget(
            Paragraph::new(surface.blurb.clone())
                .style(Style::default().fg(theme.text_muted))
                .wrap(Wrap { trim: true }),
            chunks[2],
        );

        let chips = Line::from(vec![
            Span::styled(
                format!(" {} ", surface.difficulty),
                Style::default().fg(theme.background).bg(theme.warning),
            ),
            Span::raw(" "),
            Span::styled(
                format!(" {} ", surface.tech),
                Style::default().fg(theme.background).bg(theme.primary),
            ),
        ]);
        f.render_widget(Paragraph::new(chips), chunks[3]);

        let path_line = if surface.path.is_empty() {
            Line::from("")
        } else {
            Line::from(vec![
                Span::styled(surface.path.clone(), Style::default().fg(theme.text_muted)),
                Span::styled("  [Enter] open", Style::default().fg(theme.inactive)),
            ])
        };
        f.render_widget(Paragraph::new(path_line), chunks[4]);

        let dot_spans: Vec<Span> = surface
            .dots
            .iter()
            .flat_map(|active| {
                let dot = if *active {
                    Span::styled("●", Style::default().fg(theme.accent))
                } else {
                    Span::styled("○", Style::default().fg(theme.inactive))
                };
                [dot, Span::raw(" ")]
            })
            .collect();
        f.render_widget(Paragraph::new(Line::from(dot_spans)), chunks[5]);
    }
}

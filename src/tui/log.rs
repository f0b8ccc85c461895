//! Terminal stream log and the scripted boot-log ticker.

use std::time::{Duration, Instant};

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::constants::{LOG_SCROLLBACK, TICKER_INTERVAL_MS};

use super::Theme;

/// How a log line is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Timestamped free text
    Plain,
    /// Prompt-styled command echo
    Command,
}

/// One line in the terminal stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    /// Line text (without timestamp or prompt decoration)
    pub text: String,
    /// Render dimmed
    pub faint: bool,
    /// Plain or command echo
    pub kind: LineKind,
    /// Local wall-clock timestamp, preformatted
    pub stamp: String,
}

/// Append-only terminal stream with bounded scrollback.
#[derive(Debug, Clone)]
pub struct TerminalLog {
    lines: Vec<LogLine>,
    prompt: String,
}

impl TerminalLog {
    /// Creates an empty log using `prompt` for command echo lines.
    #[must_use]
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            lines: Vec::new(),
            prompt: prompt.into(),
        }
    }

    /// All lines, oldest first.
    #[must_use]
    pub fn lines(&self) -> &[LogLine] {
        &self.lines
    }

    /// The prompt label used for command echoes.
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Appends a timestamped text line.
    pub fn append(&mut self, text: impl Into<String>, faint: bool) {
        self.push(LogLine {
            text: text.into(),
            faint,
            kind: LineKind::Plain,
            stamp: chrono::Local::now().format("%H:%M:%S").to_string(),
        });
    }

    /// Appends a prompt-styled command echo line.
    pub fn append_command(&mut self, cmd: impl Into<String>) {
        self.push(LogLine {
            text: cmd.into(),
            faint: false,
            kind: LineKind::Command,
            stamp: String::new(),
        });
    }

    /// Clears the stream.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    fn push(&mut self, line: LogLine) {
        self.lines.push(line);
        if self.lines.len() > LOG_SCROLLBACK {
            let overflow = self.lines.len() - LOG_SCROLLBACK;
            self.lines.drain(..overflow);
        }
    }

    /// Renders the stream, keeping the newest lines visible.
    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .title(" TERMINAL ")
            .borders(Borders::ALL)
            .style(Style::default().fg(theme.primary).bg(theme.background));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let visible = inner.height as usize;
        let skip = self.lines.len().saturating_sub(visible);

        let rendered: Vec<Line> = self
            .lines
            .iter()
            .skip(skip)
            .map(|line| match line.kind {
                LineKind::Command => Line::from(vec![
                    Span::styled(
                        self.prompt.clone(),
                        Style::default()
                            .fg(theme.success)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(" ≫ ", Style::default().fg(theme.accent)),
                    Span::styled(line.text.clone(), Style::default().fg(theme.text)),
                ]),
                LineKind::Plain => {
                    let color = if line.faint {
                        theme.text_muted
                    } else {
                        theme.text
                    };
                    Line::from(vec![
                        Span::styled(
                            format!("[ {} ] ", line.stamp),
                            Style::default().fg(theme.inactive),
                        ),
                        Span::styled(line.text.clone(), Style::default().fg(color)),
                    ])
                }
            })
            .collect();

        f.render_widget(Paragraph::new(rendered), inner);
    }
}

/// Appends scripted boot lines at a fixed cadence, closing with a
/// finale line, then stops.
#[derive(Debug, Clone)]
pub struct BootTicker {
    script: Vec<String>,
    finale: String,
    next_idx: usize,
    next_due: Option<Instant>,
    interval: Duration,
}

impl BootTicker {
    /// Creates an idle ticker over `script`.
    #[must_use]
    pub fn new(script: Vec<String>, finale: impl Into<String>) -> Self {
        Self {
            script,
            finale: finale.into(),
            next_idx: 0,
            next_due: None,
            interval: Duration::from_millis(TICKER_INTERVAL_MS),
        }
    }

    /// Restarts the ticker from the first scripted line.
    pub fn start(&mut self, now: Instant) {
        self.next_idx = 0;
        self.next_due = Some(now + self.interval);
    }

    /// Whether the ticker still has lines to emit.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Appends every line that has come due by `now`.
    pub fn tick(&mut self, now: Instant, log: &mut TerminalLog) {
        while let Some(due) = self.next_due {
            if now < due {
                return;
            }
            if let Some(line) = self.script.get(self.next_idx) {
                log.append(line.clone(), true);
                self.next_idx += 1;
                self.next_due = Some(due + self.interval);
            } else {
                log.append(self.finale.clone(), false);
                self.next_due = None;
            }
        }
    }
}

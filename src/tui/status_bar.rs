//! Status bar widget: status line, rack gauges, and key hints.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::shortcuts::ShortcutRegistry;

use super::{AppState, Theme};

/// Status bar widget.
pub struct StatusBar;

impl StatusBar {
    /// Renders the status bar.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let status_color = if state.glitch.is_active() {
            theme.warning
        } else {
            theme.accent
        };

        let rack = &state.rack;
        let gauges = Line::from(vec![
            Self::gauge("SPARK", rack.spark_density, theme),
            Span::raw("  "),
            Self::gauge("NOISE", rack.noise_level, theme),
            Span::raw("  "),
            Self::gauge("GLITCH", rack.glitch_intensity, theme),
        ]);

        let lines = vec![
            Line::from(Span::styled(
                state.status_message.clone(),
                Style::default().fg(status_color),
            )),
            gauges,
            Line::from(Span::styled(
                if state.overlays.is_empty() {
                    ShortcutRegistry::hints()
                } else {
                    "[Esc] close panel  [←/→] browse copy  [Enter] open"
                },
                Style::default().fg(theme.text_muted),
            )),
        ];

        let widget = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().fg(theme.inactive).bg(theme.background)),
        );
        f.render_widget(widget, area);
    }

    /// One `NAME ▮▮▮▯▯` gauge span.
    fn gauge<'a>(name: &'a str, value: u8, theme: &Theme) -> Span<'a> {
        let filled = usize::from(value) / 20;
        let mut bar = String::with_capacity(5);
        for i in 0..5 {
            bar.push(if i < filled { '▮' } else { '▯' });
        }
        Span::styled(
            format!("{name} {bar} {value:>3}"),
            Style::default().fg(theme.primary),
        )
    }
}

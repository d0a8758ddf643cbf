//! Shared screen layout: header, body, footer.

use super::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Screen areas in top-to-bottom order
pub struct ScreenAreas {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
}

pub fn split_screen(area: Rect) -> ScreenAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Title + subtitle
            Constraint::Min(0),    // Table
            Constraint::Length(3), // Hints + status
        ])
        .split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        footer: chunks[2],
    }
}

pub fn render_header(frame: &mut Frame, area: Rect, title: &str, subtitle: &str, theme: &Theme) {
    let lines = vec![
        Line::from(Span::styled(title.to_string(), theme.title_style())),
        Line::from(Span::styled(subtitle.to_string(), theme.hint_style())),
    ];
    let header = Paragraph::new(lines).block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, area);
}

/// Footer with key hints (`(key, label)` pairs) and an optional status line
pub fn render_footer(
    frame: &mut Frame,
    area: Rect,
    hints: &[(&str, &str)],
    status: Option<String>,
    theme: &Theme,
) {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, label) in hints {
        spans.push(Span::styled(key.to_string(), theme.key_style()));
        spans.push(Span::raw(format!(":{}  ", label)));
    }

    let mut lines = vec![Line::from(spans)];
    if let Some(status) = status {
        lines.push(Line::from(Span::styled(status, theme.hint_style())));
    }

    let footer = Paragraph::new(lines).block(Block::default().borders(Borders::TOP));
    frame.render_widget(footer, area);
}

//! Result screen: computed subject grades and the overall average.

use super::app::GradeApp;
use super::layout::{render_footer, render_header, split_screen};
use super::theme::Theme;
use crate::scoring::{format_grade, GradeReport};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table},
    Frame,
};

pub const TITLE: &str = "Aktuelle Zeugnisnoten";
pub const SUBTITLE: &str = "Gewichtung: Klassenarbeiten, mündlich, Referate";
pub const OVERALL_LABEL: &str = "Gesamtdurchschnitt";

pub fn render(frame: &mut Frame, app: &GradeApp) {
    let theme = app.theme();
    let areas = split_screen(frame.area());

    // Recomputed on every render; the table may have changed since the last one
    let report = app.session().report();
    let placeholder = app.display().placeholder.as_str();

    render_header(frame, areas.header, TITLE, SUBTITLE, theme);

    let body = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(report.subjects.len() as u16 + 2), // Header row + rows + gap
            Constraint::Length(1),                               // Overall line
            Constraint::Min(0),
        ])
        .split(areas.body);

    render_subject_table(frame, &report, placeholder, body[0], theme);
    render_overall(frame, &report, placeholder, body[1], theme);

    render_footer(
        frame,
        areas.footer,
        &[("Esc/b", "zurück zur Eingabe"), ("q", "Beenden")],
        app.status_message().map(str::to_string),
        theme,
    );
}

fn render_subject_table(
    frame: &mut Frame,
    report: &GradeReport,
    placeholder: &str,
    area: Rect,
    theme: &Theme,
) {
    let header = Row::new([Cell::from("Fach"), Cell::from("Zeugnisnote")])
        .style(theme.header_style());

    let rows = report.subjects.iter().map(|entry| {
        Row::new([
            Cell::from(entry.subject.label()),
            Cell::from(format_grade(entry.grade, placeholder))
                .style(theme.grade_style(entry.grade)),
        ])
    });

    let table = Table::new(rows, [Constraint::Length(10), Constraint::Length(12)])
        .header(header)
        .column_spacing(1);
    frame.render_widget(table, area);
}

fn render_overall(
    frame: &mut Frame,
    report: &GradeReport,
    placeholder: &str,
    area: Rect,
    theme: &Theme,
) {
    let line = Line::from(vec![
        Span::styled(format!("{}: ", OVERALL_LABEL), theme.title_style()),
        Span::styled(
            format_grade(report.overall, placeholder),
            theme.grade_style(report.overall),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

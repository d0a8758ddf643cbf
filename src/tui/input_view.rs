//! Input screen: the editable grade grid.

use super::app::GradeApp;
use super::layout::{render_footer, render_header, split_screen};
use super::theme::Theme;
use crate::core::{AssessmentSlot, CellValue};
use crate::session::Session;
use ratatui::{
    layout::{Constraint, Rect},
    text::Line,
    widgets::{Cell, Row, Table},
    Frame,
};

pub const TITLE: &str = "Notenrechner – Unterstufe";
pub const PROMPT: &str = "Trage deine bisherigen Noten ein:";

const SUBJECT_COLUMN_WIDTH: u16 = 10;
const SLOT_COLUMN_WIDTH: u16 = 9;

pub fn render(frame: &mut Frame, app: &GradeApp) {
    let theme = app.theme();
    let areas = split_screen(frame.area());

    render_header(frame, areas.header, TITLE, PROMPT, theme);
    render_grid(frame, app.session(), areas.body, theme);

    let status = app.status_message().map(str::to_string).or_else(|| {
        let session = app.session();
        let cursor = session.cursor();
        Some(format!(
            "{} / {}  ·  {} von {} Feldern ausgefüllt",
            cursor.subject(),
            cursor.slot(),
            session.table().filled_count(),
            Session::CELL_COUNT
        ))
    });
    render_footer(
        frame,
        areas.footer,
        &[
            ("←↑↓→", "Feld"),
            ("1-6", "Note"),
            ("-", "leeren"),
            ("Leer", "wechseln"),
            ("Enter", "Zeugnisnoten"),
            ("q", "Beenden"),
        ],
        status,
        theme,
    );
}

fn render_grid(frame: &mut Frame, session: &Session, area: Rect, theme: &Theme) {
    let header = Row::new(
        std::iter::once(Cell::from("Fach"))
            .chain(AssessmentSlot::ALL.iter().map(|slot| Cell::from(slot.label()))),
    )
    .style(theme.header_style());

    let cursor = session.cursor();
    let rows = session.table().rows().map(|(subject, row)| {
        let cells = AssessmentSlot::ALL.iter().map(|slot| {
            let value = row.get(*slot);
            let selected = subject == cursor.subject() && *slot == cursor.slot();
            let style = if selected {
                theme.selected_style()
            } else if value == CellValue::Unset {
                theme.unset_style()
            } else {
                theme.entered_style()
            };
            Cell::from(Line::from(format!(" {} ", value))).style(style)
        });
        Row::new(std::iter::once(Cell::from(subject.label())).chain(cells))
    });

    let widths = std::iter::once(Constraint::Length(SUBJECT_COLUMN_WIDTH)).chain(
        AssessmentSlot::ALL
            .iter()
            .map(|_| Constraint::Length(SLOT_COLUMN_WIDTH)),
    );

    let table = Table::new(rows, widths).header(header).column_spacing(1);
    frame.render_widget(table, area);
}

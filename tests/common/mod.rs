// Test utility module for gradecalc integration tests
#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use gradecalc::config::DisplayConfig;
use gradecalc::tui::app::GradeApp;
use gradecalc::{AssessmentSlot, CellValue, Grade, GradeTable, Session, Subject};
use ratatui::{backend::TestBackend, Terminal};

pub const U: CellValue = CellValue::Unset;

/// Cell holding grade `v`; panics for values off the scale.
pub fn g(v: u8) -> CellValue {
    CellValue::Grade(Grade::new(v).expect("test grade on scale"))
}

/// Table with the given cells filled in.
pub fn table_with(entries: &[(Subject, AssessmentSlot, u8)]) -> GradeTable {
    let mut table = GradeTable::new();
    for (subject, slot, v) in entries {
        table.set(*subject, *slot, g(*v));
    }
    table
}

pub fn new_app() -> GradeApp {
    GradeApp::new(Session::default(), DisplayConfig::default())
}

/// Send a key press; returns true when the app asked to quit.
pub fn press(app: &mut GradeApp, code: KeyCode) -> bool {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
        .expect("key handling never fails")
}

pub fn press_all(app: &mut GradeApp, codes: &[KeyCode]) {
    for code in codes {
        press(app, *code);
    }
}

/// Render the app into an in-memory terminal and return its lines.
pub fn render_lines(app: &GradeApp, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("test terminal");
    terminal.draw(|f| app.render(f)).expect("draw");

    let buffer = terminal.backend().buffer();
    (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

/// First rendered line containing `needle`.
pub fn line_containing<'a>(lines: &'a [String], needle: &str) -> Option<&'a str> {
    lines.iter().find(|l| l.contains(needle)).map(String::as_str)
}

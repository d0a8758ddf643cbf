//! Custom panic hook for structured crash reports.
//!
//! A panic while the TUI owns the terminal would otherwise be printed into
//! the alternate screen and lost. The hook leaves raw mode and the alternate
//! screen first, then prints the report to stderr.

use super::tracing::set_tui_active;
use std::panic::PanicHookInfo;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const WIDTH: usize = 64;

/// Install the crash-report hook.
///
/// Call this early in `main`, before the terminal is taken over.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        print_crash_report(info);
    }));
}

fn print_crash_report(info: &PanicHookInfo<'_>) {
    exit_tui_mode();

    let rule = "═".repeat(WIDTH + 4);
    eprintln!();
    eprintln!("╔{}╗", rule);
    print_row("GRADECALC CRASH REPORT");
    eprintln!("╠{}╣", rule);
    print_row(&format!("Version: {}", VERSION));
    print_row(&format!("Platform: {}", std::env::consts::OS));
    print_row(&format!(
        "Time: {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    ));
    eprintln!("╠{}╣", rule);
    print_row(&format!("PANIC: {}", extract_panic_message(info)));
    if let Some(location) = info.location() {
        print_row(&format!(
            "Location: {}:{}:{}",
            location.file(),
            location.line(),
            location.column()
        ));
    }
    eprintln!("╠{}╣", rule);
    if std::env::var("RUST_BACKTRACE").is_ok() {
        print_row("STACK TRACE:");
        eprintln!("╚{}╝", rule);
        eprintln!("{}", std::backtrace::Backtrace::capture());
    } else {
        print_row("Run with RUST_BACKTRACE=1 for stack trace");
        eprintln!("╚{}╝", rule);
    }
}

fn print_row(text: &str) {
    eprintln!("║  {:<width$}  ║", truncate(text, WIDTH), width = WIDTH);
}

fn exit_tui_mode() {
    set_tui_active(false);

    // Already panicking; nothing useful to do with these errors
    let _ = crossterm::terminal::disable_raw_mode();
    let _ = crossterm::execute!(
        std::io::stderr(),
        crossterm::terminal::LeaveAlternateScreen,
        crossterm::cursor::Show
    );
}

fn extract_panic_message(info: &PanicHookInfo<'_>) -> String {
    let payload = info.payload();
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "<non-string panic payload>".to_string())
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

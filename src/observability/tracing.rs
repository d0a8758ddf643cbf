//! Tracing subscriber setup.
//!
//! Events go to stderr, except while the TUI owns the terminal: then they
//! are dropped so they cannot overwrite the screen.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing_subscriber::EnvFilter;

/// Environment variable overriding the verbosity-derived filter.
pub const LOG_ENV_VAR: &str = "GRADECALC_LOG";

static TUI_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Mark whether the TUI currently owns the terminal.
pub fn set_tui_active(active: bool) {
    TUI_ACTIVE.store(active, Ordering::SeqCst);
}

pub fn is_tui_active() -> bool {
    TUI_ACTIVE.load(Ordering::SeqCst)
}

/// Default filter directive for a `-v` count.
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Writer that discards output while the TUI is active.
pub enum LogWriter {
    Stderr(io::Stderr),
    Discard(io::Sink),
}

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            LogWriter::Stderr(w) => w.write(buf),
            LogWriter::Discard(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            LogWriter::Stderr(w) => w.flush(),
            LogWriter::Discard(w) => w.flush(),
        }
    }
}

fn make_writer() -> LogWriter {
    if is_tui_active() {
        LogWriter::Discard(io::sink())
    } else {
        LogWriter::Stderr(io::stderr())
    }
}

/// Install the global subscriber.
///
/// `GRADECALC_LOG` takes precedence over the verbosity level when set.
pub fn init_tracing(verbosity: u8) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(make_writer)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))
}

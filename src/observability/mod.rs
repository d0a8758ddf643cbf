//! Observability: tracing setup and crash reports.
//!
//! ```ignore
//! use gradecalc::observability::{init_tracing, install_panic_hook};
//!
//! fn main() -> anyhow::Result<()> {
//!     install_panic_hook();
//!     init_tracing(0)?;
//!     // ... run the TUI
//!     Ok(())
//! }
//! ```

pub mod panic_hook;
pub mod tracing;

pub use self::tracing::{init_tracing, is_tui_active, level_for_verbosity, set_tui_active};
pub use panic_hook::install_panic_hook;

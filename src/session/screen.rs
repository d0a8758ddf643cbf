//! Screen controller with an explicit transition table.
//!
//! # Navigation Graph
//!
//! ```text
//!     Input ──── show results ───► Result
//!       ▲                            │
//!       └────────── return ──────────┘
//! ```
//!
//! There are no other transitions and none happen on their own. The
//! controller never terminates; it toggles for the life of the session.

use std::fmt;

/// Screen currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Grade entry grid.
    #[default]
    Input,
    /// Computed subject grades and overall average.
    Result,
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Screen::Input => f.write_str("input"),
            Screen::Result => f.write_str("result"),
        }
    }
}

/// Valid screen transitions.
///
/// Any transition not in this table is invalid.
pub const TRANSITIONS: &[(Screen, Screen)] = &[
    (Screen::Input, Screen::Result),
    (Screen::Result, Screen::Input),
];

/// Check if a transition is valid based on the table.
pub fn is_valid_transition(from: Screen, to: Screen) -> bool {
    TRANSITIONS.contains(&(from, to))
}

/// Result of attempting a screen transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationResult {
    /// Transition applied.
    Success,

    /// Transition not in the table; state unchanged.
    Invalid { from: Screen, to: Screen },
}

impl NavigationResult {
    pub fn is_success(&self) -> bool {
        matches!(self, NavigationResult::Success)
    }
}

/// Two-state navigation flag gating which view renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenController {
    screen: Screen,
}

impl ScreenController {
    /// Controller on the input screen.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Screen {
        self.screen
    }

    /// Input → Result.
    pub fn show_results(&mut self) -> NavigationResult {
        self.transition(Screen::Result)
    }

    /// Result → Input.
    pub fn return_to_input(&mut self) -> NavigationResult {
        self.transition(Screen::Input)
    }

    fn transition(&mut self, to: Screen) -> NavigationResult {
        let from = self.screen;
        if !is_valid_transition(from, to) {
            return NavigationResult::Invalid { from, to };
        }

        self.screen = to;
        tracing::info!(%from, %to, "screen transition");
        NavigationResult::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_input() {
        assert_eq!(ScreenController::new().current(), Screen::Input);
    }

    #[test]
    fn transition_table_is_a_toggle() {
        assert!(is_valid_transition(Screen::Input, Screen::Result));
        assert!(is_valid_transition(Screen::Result, Screen::Input));
        assert!(!is_valid_transition(Screen::Input, Screen::Input));
        assert!(!is_valid_transition(Screen::Result, Screen::Result));
    }

    #[test]
    fn show_results_then_return() {
        let mut controller = ScreenController::new();

        assert!(controller.show_results().is_success());
        assert_eq!(controller.current(), Screen::Result);

        assert!(controller.return_to_input().is_success());
        assert_eq!(controller.current(), Screen::Input);
    }

    #[test]
    fn show_results_twice_is_invalid() {
        let mut controller = ScreenController::new();
        controller.show_results();

        let result = controller.show_results();
        assert_eq!(
            result,
            NavigationResult::Invalid {
                from: Screen::Result,
                to: Screen::Result
            }
        );
        assert_eq!(controller.current(), Screen::Result);
    }

    #[test]
    fn return_from_input_is_invalid() {
        let mut controller = ScreenController::new();
        let result = controller.return_to_input();
        assert!(!result.is_success());
        assert_eq!(controller.current(), Screen::Input);
    }
}

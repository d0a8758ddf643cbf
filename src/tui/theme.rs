//! Colours and styles for the grade screens.

use ratatui::style::{Color, Modifier, Style};

/// Grades below this count as good (green).
pub const GOOD_BELOW: f64 = 2.5;
/// Grades below this count as fair; anything else is poor.
pub const FAIR_BELOW: f64 = 4.5;

/// Palette shared by both screens
pub struct Theme {
    /// Titles, key hints and the cursor cell
    pub accent: Color,
    pub good: Color,
    pub fair: Color,
    pub poor: Color,
    /// Unset cells, placeholders and hints
    pub muted: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Cyan,
            good: Color::Green,
            fair: Color::White,
            poor: Color::Yellow,
            muted: Color::DarkGray,
        }
    }
}

impl Theme {
    pub fn title_style(&self) -> Style {
        Style::new().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Table header rows
    pub fn header_style(&self) -> Style {
        Style::new()
            .fg(self.fair)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    /// Cell under the cursor
    pub fn selected_style(&self) -> Style {
        Style::new()
            .fg(Color::Black)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn entered_style(&self) -> Style {
        Style::new().fg(self.fair)
    }

    pub fn unset_style(&self) -> Style {
        Style::new().fg(self.muted)
    }

    pub fn hint_style(&self) -> Style {
        Style::new().fg(self.muted).add_modifier(Modifier::ITALIC)
    }

    pub fn key_style(&self) -> Style {
        Style::new().fg(self.accent)
    }

    /// Style for a computed grade; lower is better on this scale.
    pub fn grade_style(&self, grade: Option<f64>) -> Style {
        match grade {
            None => self.unset_style(),
            Some(g) if g < GOOD_BELOW => Style::new().fg(self.good),
            Some(g) if g < FAIR_BELOW => Style::new().fg(self.fair),
            Some(_) => Style::new().fg(self.poor),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_bands() {
        let theme = Theme::default();
        assert_eq!(theme.grade_style(Some(1.0)).fg, Some(Color::Green));
        assert_eq!(theme.grade_style(Some(2.49)).fg, Some(Color::Green));
        assert_eq!(theme.grade_style(Some(2.5)).fg, Some(Color::White));
        assert_eq!(theme.grade_style(Some(4.5)).fg, Some(Color::Yellow));
        assert_eq!(theme.grade_style(Some(6.0)).fg, Some(Color::Yellow));
    }

    #[test]
    fn missing_grade_is_muted() {
        let theme = Theme::default();
        assert_eq!(theme.grade_style(None), theme.unset_style());
    }

    #[test]
    fn cursor_cell_stands_out() {
        let theme = Theme::default();
        assert_eq!(theme.selected_style().bg, Some(theme.accent));
        assert!(theme
            .selected_style()
            .add_modifier
            .contains(Modifier::BOLD));
    }
}

use crate::snapshot::Outcome;
use crate::view::Mark;
use ratatui::style::{Color, Modifier, Style};

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub highlight: Color, // Yellow
    pub compare: Color,   // Cyan
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),
    secondary: Color::Rgb(250, 179, 135),
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    highlight: Color::Rgb(249, 226, 175),
    compare: Color::Rgb(148, 226, 213),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for bars
};

impl Theme {
    /// Style of a state cell by its role in the step
    pub fn mark_style(&self, mark: Mark) -> Style {
        match mark {
            Mark::Plain => Style::default().fg(self.fg),
            Mark::Label => Style::default().fg(self.primary).add_modifier(Modifier::BOLD),
            Mark::Active => Style::default()
                .fg(Color::Black)
                .bg(self.highlight)
                .add_modifier(Modifier::BOLD),
            Mark::Compare => Style::default().fg(Color::Black).bg(self.compare),
            Mark::Done => Style::default().fg(self.success).add_modifier(Modifier::BOLD),
            Mark::Muted => Style::default().fg(self.comment),
            Mark::Alert => Style::default()
                .fg(Color::Black)
                .bg(self.error)
                .add_modifier(Modifier::BOLD),
        }
    }

    /// Badge color for a terminal outcome
    pub fn outcome_color(&self, outcome: &Outcome) -> Color {
        match outcome {
            Outcome::Success => self.success,
            Outcome::Failure(_) => self.secondary,
            Outcome::Invalid(_) => self.error,
            Outcome::Truncated => self.comment,
        }
    }
}

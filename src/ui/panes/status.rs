//! Status bar rendering with keybindings and playback indicators

use crate::snapshot::Outcome;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// What the status bar shows besides the message
pub struct StatusRenderData<'a> {
    pub message: &'a str,
    pub current_step: usize,
    pub total_steps: usize,
    /// Outcome of the final step, shown once playback reaches it
    pub outcome: Option<&'a Outcome>,
    pub is_playing: bool,
    pub interval_ms: u64,
}

/// Render the status bar at the bottom
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: &StatusRenderData) {
    // Split status bar into left and right
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let step_text = format!(" Step {}/{} ", data.current_step + 1, data.total_steps);
    let left_spans = vec![
        Span::styled(
            step_text,
            Style::default()
                .bg(DEFAULT_THEME.primary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", data.message),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.fg),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: Keybinds with visual grouping
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.comment);

    let mut right_spans = vec![
        Span::styled(" ←/→ ", key_style),
        Span::styled(" step ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" ⎵ ", key_style),
        Span::styled(" play ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" +/- ", key_style),
        Span::styled(format!(" {}ms ", data.interval_ms), desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" ↵ / ⌫ ", key_style),
        Span::styled(" end/start ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled("q", key_style),
        Span::styled(" quit ", desc_style),
    ];

    let is_at_start = data.current_step == 0;
    let is_at_end = data.current_step + 1 >= data.total_steps;

    let badge = if data.is_playing {
        Some((" ▶ PLAYING ".to_string(), DEFAULT_THEME.secondary))
    } else if is_at_end {
        data.outcome.map(|outcome| {
            (
                format!(" {} ", outcome.label()),
                DEFAULT_THEME.outcome_color(outcome),
            )
        })
    } else if is_at_start {
        Some((" START ".to_string(), DEFAULT_THEME.success))
    } else {
        None
    };

    if let Some((text, color)) = badge {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            text,
            Style::default()
                .bg(color)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}

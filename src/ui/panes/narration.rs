//! Narration pane: description, phase title, note and outcome of a step

use crate::engine::RenderedStep;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

/// Render the narration pane for `step`
pub fn render_narration_pane(frame: &mut Frame, area: Rect, step: &RenderedStep, is_focused: bool) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let title = match &step.annotation.title {
        Some(phase) => format!(" Step {} · {} ", step.index, phase),
        None => format!(" Step {} ", step.index),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
        .padding(Padding::new(1, 1, 0, 0));

    let mut lines = vec![Line::from(Span::styled(
        step.description.clone(),
        Style::default().fg(DEFAULT_THEME.fg),
    ))];

    if let Some(line) = step.annotation.pseudocode_line {
        lines.push(Line::from(Span::styled(
            format!("line {}", line),
            Style::default().fg(DEFAULT_THEME.comment),
        )));
    }
    if let Some(note) = &step.annotation.note {
        lines.push(Line::from(vec![
            Span::styled("note ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(note.clone(), Style::default().fg(DEFAULT_THEME.secondary)),
        ]));
    }
    if let Some(outcome) = &step.outcome {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!(" {} ", outcome.label()),
            Style::default()
                .bg(DEFAULT_THEME.outcome_color(outcome))
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

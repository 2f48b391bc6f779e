//! State pane: the current step's rows with cells colored by mark

use crate::ui::theme::DEFAULT_THEME;
use crate::view::Row;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Turn one view row into a styled line, one span per cell
pub fn row_line(row: &Row) -> Line<'static> {
    let mut spans = Vec::with_capacity(row.cells.len() * 2);
    for (i, cell) in row.cells.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            format!(" {} ", cell.text),
            DEFAULT_THEME.mark_style(cell.mark),
        ));
    }
    Line::from(spans)
}

/// Render the state pane
pub fn render_state_pane(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    rows: &[Row],
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(border_style)
        .padding(Padding::new(1, 1, 0, 0));

    // Borders take two lines
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    if rows.len() > visible_height {
        *scroll_offset = (*scroll_offset).min(rows.len() - visible_height);
    } else {
        *scroll_offset = 0;
    }

    let lines: Vec<Line> = rows
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(row_line)
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw a form field box, with its validation error on the row below
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    error: Option<&str>,
    is_active: bool,
) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let border_style = if error.is_some() {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_value = field.display_value();
    let value_span = if display_value.is_empty() {
        Span::styled(
            field.field.placeholder(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )
    } else {
        Span::styled(display_value, style)
    };

    let mut spans = vec![value_span];
    if is_active && !field.is_choice() {
        spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
    }

    let block = Block::default()
        .title(format!(" {} ", field.label()))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);

    if let Some(message) = error {
        let error_area = Rect {
            y: area.bottom(),
            height: 1,
            ..area
        };
        if error_area.bottom() <= frame.area().bottom() {
            let line = Paragraph::new(Span::styled(
                message,
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::ITALIC),
            ));
            frame.render_widget(line, error_area);
        }
    }
}

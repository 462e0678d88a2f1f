//! Dismissible feedback banners (success / error)

use crate::state::Banner;
use crate::ui::layout::ScreenLayout;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Visual flavour of a banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

impl BannerKind {
    fn title(self) -> &'static str {
        match self {
            BannerKind::Success => "¡Éxito!",
            BannerKind::Error => "¡Error!",
        }
    }

    fn color(self) -> Color {
        match self {
            BannerKind::Success => Color::Green,
            BannerKind::Error => Color::Red,
        }
    }
}

/// Render a banner with a heading, wrapped message and a close marker
pub fn render_banner(frame: &mut Frame, area: Rect, kind: BannerKind, banner: &Banner) {
    let color = kind.color();
    let max_width = area.width.saturating_sub(4) as usize;

    let mut content = vec![Line::from(vec![
        Span::styled(
            kind.title(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", banner.shown_at.format("%H:%M:%S")),
            Style::default().fg(Color::DarkGray),
        ),
    ])];
    for line in wrap_text(&banner.message, max_width) {
        content.push(Line::from(Span::styled(line, Style::default().fg(color))));
    }

    let block = Block::default()
        .borders(Borders::LEFT | Borders::TOP | Borders::BOTTOM)
        .border_style(Style::default().fg(color));
    frame.render_widget(Paragraph::new(content).block(block), area);

    let close = ScreenLayout::close_marker(area);
    frame.render_widget(
        Paragraph::new(" ✕ ").style(Style::default().fg(color)),
        close,
    );
}

/// Wrap text to fit within a maximum width
pub(crate) fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        for word in paragraph.split_whitespace() {
            let current_len = current_line.chars().count();
            if current_len + word.chars().count() + 1 > max_width && !current_line.is_empty() {
                lines.push(current_line);
                current_line = String::new();
            }
            if !current_line.is_empty() {
                current_line.push(' ');
            }
            current_line.push_str(word);
        }
        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

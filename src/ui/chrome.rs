//! Header, account dropdown and status bar

use crate::app::App;
use crate::state::{MenuItem, View};
use crate::ui::layout::ScreenLayout;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

/// Draw the header bar with the store name and the account menu button
pub fn draw_header(frame: &mut Frame, layout: &ScreenLayout, app: &App) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "Solo Electricos",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled("Inicio", Style::default().fg(Color::Gray)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(header, layout.header);

    if app.state.current_view != View::Register {
        return;
    }

    let open = app.state.menu.is_open();
    let arrow = if open { "▴" } else { "▾" };
    let border = if open { Color::Cyan } else { Color::DarkGray };
    let button = Paragraph::new(format!(" Mi Cuenta {arrow}")).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );
    frame.render_widget(button, layout.menu_button);
}

/// Draw the open dropdown on top of everything else
pub fn draw_dropdown(frame: &mut Frame, layout: &ScreenLayout, app: &App) {
    let menu = &app.state.menu;
    if !menu.is_open() {
        return;
    }

    let items: Vec<ListItem> = MenuItem::ALL
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let style = if idx == menu.selected {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Span::styled(format!(" {}", item.label()), style))
        })
        .collect();

    frame.render_widget(Clear, layout.dropdown);
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
    );
    frame.render_widget(list, layout.dropdown);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    let indicator = if app.state.submitting {
        Span::styled(" ◌ ", Style::default().fg(Color::Yellow))
    } else {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    };
    spans.push(indicator);

    spans.push(Span::styled(
        get_view_hints(app.state.current_view),
        Style::default().fg(Color::Gray),
    ));

    if app.state.redirect.is_some() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            "Redirigiendo a inicio de sesión...",
            Style::default().fg(Color::Green),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let quit_hint = " ^C:salir ";
    let quit_area = Rect {
        x: area.right().saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for the current view
fn get_view_hints(view: View) -> String {
    match view {
        View::Register => format!(
            "Tab:siguiente  ←/→:género  Enter/{}:registrar  {}:mi cuenta  Esc:cerrar aviso",
            crate::platform::SAVE_SHORTCUT,
            crate::platform::MENU_SHORTCUT
        ),
        View::Login => "r:crear cuenta".to_string(),
    }
}

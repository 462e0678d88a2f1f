//! Account registration card

use super::field_renderer::draw_field;
use crate::app::App;
use crate::state::{Field, FormButton};
use crate::ui::components::{render_banner, render_button, BannerKind};
use crate::ui::layout::ScreenLayout;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the registration card: title, banners, fields and actions
pub fn draw_register(frame: &mut Frame, layout: &ScreenLayout, app: &App) {
    let form = &app.state.form;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(block, layout.card);

    let title = Paragraph::new(Span::styled(
        crate::state::View::Register.title(),
        Style::default().add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(title, layout.title);

    if let (Some(area), Some(banner)) = (layout.success_banner, &app.state.success) {
        render_banner(frame, area, BannerKind::Success, banner);
    }
    if let (Some(area), Some(banner)) = (layout.error_banner, &app.state.error) {
        render_banner(frame, area, BannerKind::Error, banner);
    }

    for (idx, field) in Field::ALL.into_iter().enumerate() {
        draw_field(
            frame,
            layout.field(field),
            form.field(field),
            form.error(field),
            form.active_field_index == idx,
        );
    }

    let on_buttons = form.is_buttons_row_active();
    let label = if app.state.submitting {
        "Enviando..."
    } else {
        "Registrarme"
    };
    render_button(
        frame,
        layout.submit_button,
        label,
        on_buttons && form.selected_button == FormButton::Submit,
        !app.state.submitting,
        Some(Color::Blue),
    );

    let note = Paragraph::new(Span::styled(
        "Al registrarte, recibirás un correo con tus credenciales de acceso.",
        Style::default().fg(Color::Gray),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(note, layout.note);

    let link_style = if on_buttons && form.selected_button == FormButton::LoginLink {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        Style::default().fg(Color::Blue)
    };
    let link = Paragraph::new(Span::styled("¿Ya tiene una cuenta?", link_style))
        .alignment(Alignment::Center);
    frame.render_widget(link, layout.login_link);
}

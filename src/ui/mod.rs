//! UI module for rendering the TUI

mod chrome;
mod components;
mod forms;
pub mod layout;
mod login;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let layout = app.layout_for(frame.area());

    chrome::draw_header(frame, &layout, app);

    match app.state.current_view {
        View::Register => forms::draw_register(frame, &layout, app),
        View::Login => login::draw(frame, layout.card),
    }

    chrome::draw_dropdown(frame, &layout, app);
    chrome::draw_status_bar(frame, layout.status_bar, app);
}

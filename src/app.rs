//! Application state and core logic

use crate::api::{CreateUserRequest, UserService, UserServiceClient};
use crate::config::TuiConfig;
use crate::state::{
    AppEvent, AppState, Field, Form, FormButton, Gender, MenuItem, PointerDown, PointerRouter,
    RedirectTimer, RegistrationForm, View, REGISTRATION_SUCCESS,
};
use crate::ui::layout::{BannerSlots, ScreenLayout};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Remote user service
    client: Arc<dyn UserService>,
    /// Pointer presses fan out to outside-click listeners
    pointer: PointerRouter,
    /// Background tasks report here; drained every tick
    events_tx: UnboundedSender<AppEvent>,
    events_rx: UnboundedReceiver<AppEvent>,
    /// Pause between a successful registration and the login view
    redirect_delay: Duration,
    /// Terminal size for hit-testing (height, width)
    pub terminal_size: Option<(u16, u16)>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create the app against the configured user service
    pub fn new(config: &TuiConfig) -> Result<Self> {
        let client = UserServiceClient::new(&config.api_base_url(), config.request_timeout())?;
        tracing::info!(endpoint = client.endpoint(), "user service configured");
        Ok(Self::with_client(Arc::new(client), config.redirect_delay()))
    }

    /// Create the app with an explicit client, starting on the register view
    pub fn with_client(client: Arc<dyn UserService>, redirect_delay: Duration) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let mut app = Self {
            state: AppState::default(),
            client,
            pointer: PointerRouter::new(),
            events_tx,
            events_rx,
            redirect_delay,
            terminal_size: None,
            quit: false,
        };
        app.enter_register();
        app
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Release everything the active view holds before exiting
    pub fn shutdown(&mut self) {
        if self.state.current_view == View::Register {
            self.state.tear_down_register();
        }
    }

    /// Screen geometry for `area` given the visible banners
    pub fn layout_for(&self, area: Rect) -> ScreenLayout {
        ScreenLayout::new(
            area,
            BannerSlots {
                success: self.state.success.is_some(),
                error: self.state.error.is_some(),
            },
        )
    }

    fn current_layout(&self) -> ScreenLayout {
        let (height, width) = self.terminal_size.unwrap_or((24, 80));
        self.layout_for(Rect::new(0, 0, width, height))
    }

    fn enter_register(&mut self) {
        self.state.current_view = View::Register;
        self.state.view_epoch += 1;
        self.state.form = RegistrationForm::default();
        self.state.outside_click = Some(self.pointer.subscribe());
        tracing::debug!(
            listeners = self.pointer.listener_count(),
            "outside-click listener registered"
        );
    }

    /// Switch views, tearing down the register view when leaving it
    pub fn navigate(&mut self, view: View) {
        self.state.menu.close();
        if view == self.state.current_view {
            return;
        }
        tracing::info!(from = ?self.state.current_view, to = ?view, "navigate");

        if self.state.current_view == View::Register {
            self.state.tear_down_register();
            tracing::debug!(
                listeners = self.pointer.listener_count(),
                "register view torn down"
            );
        }
        self.state.current_view = view;
        if view == View::Register {
            self.enter_register();
        }
    }

    /// Validate every field and, if all pass, start the create-user request
    pub fn submit(&mut self) {
        let errors = self.state.form.validate_all();
        self.state.form.set_errors(errors);
        if !self.state.form.errors().is_empty() {
            tracing::info!(
                invalid = self.state.form.errors().len(),
                "submit blocked by validation"
            );
            return;
        }
        if self.state.submitting {
            tracing::debug!("submit ignored: request already in flight");
            return;
        }

        let request = CreateUserRequest::from(self.state.form.draft());
        let client = Arc::clone(&self.client);
        let events = self.events_tx.clone();
        let epoch = self.state.view_epoch;
        self.state.submitting = true;
        tracing::info!(epoch, "registration submitted");

        tokio::spawn(async move {
            let result = client.create_user(&request).await;
            let _ = events.send(AppEvent::SubmissionFinished { epoch, result });
        });
    }

    /// Apply every event that background tasks have posted so far
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_event(event);
        }
    }

    /// Wait for the next background event
    #[cfg(test)]
    async fn next_event(&mut self) -> Option<AppEvent> {
        self.events_rx.recv().await
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::SubmissionFinished { epoch, result } => {
                if epoch != self.state.view_epoch || self.state.current_view != View::Register {
                    tracing::debug!(epoch, "dropping result for a torn-down register view");
                    return;
                }
                self.state.submitting = false;
                match result {
                    Ok(()) => {
                        self.state.show_success(REGISTRATION_SUCCESS);
                        self.state.redirect = Some(RedirectTimer::schedule(
                            self.redirect_delay,
                            self.events_tx.clone(),
                        ));
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "registration failed");
                        self.state.show_error(err.user_message());
                    }
                }
            }
            AppEvent::RedirectDue => {
                if self.state.current_view == View::Register && self.state.redirect.is_some() {
                    self.navigate(View::Login);
                }
            }
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return;
        }

        match self.state.current_view {
            View::Register => self.handle_register_key(key),
            View::Login => self.handle_login_key(key),
        }
    }

    fn handle_register_key(&mut self, key: KeyEvent) {
        if self.state.menu.is_open() {
            self.handle_menu_key(key);
            return;
        }

        let shortcut = crate::platform::is_shortcut(key.modifiers);
        let on_buttons = self.state.form.is_buttons_row_active();
        let on_choice = self.state.form.is_active_field_choice();

        match key.code {
            KeyCode::Char('s') if shortcut => self.submit(),
            KeyCode::Char('a') if shortcut => self.state.menu.toggle(),
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Left | KeyCode::Right if on_buttons => {
                self.state.form.selected_button.toggle()
            }
            KeyCode::Left if on_choice => self.state.form.cycle_choice(false),
            KeyCode::Right | KeyCode::Char(' ') if on_choice => self.state.form.cycle_choice(true),
            KeyCode::Char(c) if on_choice && !shortcut => {
                let gender = match c.to_ascii_lowercase() {
                    'm' => Some(Gender::Masculino),
                    'f' => Some(Gender::Femenino),
                    _ => None,
                };
                if let Some(gender) = gender {
                    self.state.form.on_field_change(Field::Genero, gender.as_str());
                }
            }
            KeyCode::Enter if on_buttons => match self.state.form.selected_button {
                FormButton::Submit => self.submit(),
                FormButton::LoginLink => self.navigate(View::Login),
            },
            // Enter inside an input submits the form
            KeyCode::Enter => self.submit(),
            KeyCode::Esc => self.dismiss_banner(),
            KeyCode::Char(c) if !on_buttons && !shortcut => self.state.form.input_char(c),
            KeyCode::Backspace => self.state.form.backspace(),
            _ => {}
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.state.menu.select_prev(),
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => self.state.menu.select_next(),
            KeyCode::Enter => {
                let item = self.state.menu.selected_item();
                self.activate_menu_item(item);
            }
            KeyCode::Esc => self.state.menu.close(),
            KeyCode::Char('a') if crate::platform::is_shortcut(key.modifiers) => {
                self.state.menu.close()
            }
            _ => {}
        }
    }

    fn handle_login_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('r') => self.navigate(View::Register),
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    fn activate_menu_item(&mut self, item: MenuItem) {
        self.state.menu.close();
        match item {
            MenuItem::Register => self.navigate(View::Register),
            MenuItem::Login => self.navigate(View::Login),
        }
    }

    /// Esc closes the error banner first, then the success banner
    fn dismiss_banner(&mut self) {
        if self.state.error.is_some() {
            self.state.dismiss_error();
        } else {
            self.state.dismiss_success();
        }
    }

    /// Handle a mouse event
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let MouseEventKind::Down(MouseButton::Left) = mouse.kind else {
            return;
        };
        self.pointer.publish(PointerDown::new(mouse.column, mouse.row));

        if self.state.current_view != View::Register {
            return;
        }

        let layout = self.current_layout();
        let menu_was_open = self.state.menu.is_open();
        if let Some(listener) = self.state.outside_click.as_mut() {
            listener.dismiss_outside(&mut self.state.menu, layout.menu_boundary(menu_was_open));
        }

        let pos = Position::new(mouse.column, mouse.row);
        if layout.menu_button.contains(pos) {
            self.state.menu.toggle();
            return;
        }
        if menu_was_open && layout.dropdown.contains(pos) {
            if let Some(item) = layout
                .dropdown_item_at(mouse.column, mouse.row)
                .and_then(|idx| MenuItem::ALL.get(idx).copied())
            {
                self.activate_menu_item(item);
            }
            return;
        }

        if let Some(banner) = layout.success_banner {
            if ScreenLayout::close_marker(banner).contains(pos) {
                self.state.dismiss_success();
                return;
            }
        }
        if let Some(banner) = layout.error_banner {
            if ScreenLayout::close_marker(banner).contains(pos) {
                self.state.dismiss_error();
                return;
            }
        }

        if let Some(idx) = layout.field_at(mouse.column, mouse.row) {
            self.state.form.set_active_field(idx);
        } else if layout.submit_button.contains(pos) {
            self.state.form.set_active_field(RegistrationForm::BUTTONS_ROW);
            self.state.form.selected_button = FormButton::Submit;
            self.submit();
        } else if layout.login_link.contains(pos) {
            self.navigate(View::Login);
        }
    }
}

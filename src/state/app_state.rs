//! Application state definitions

use super::forms::RegistrationForm;
use super::menu::{DisclosureMenu, OutsideClickSubscription};
use super::redirect::RedirectTimer;
use crate::api::SubmitError;
use chrono::{DateTime, Local};

/// Success banner text after the service accepts a registration
pub const REGISTRATION_SUCCESS: &str = "Registro exitoso. Por favor, revisa tu correo electrónico para obtener tus credenciales de acceso.";

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Register,
    Login,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            View::Register => "Crear una cuenta",
            View::Login => "Iniciar sesión",
        }
    }
}

/// Events delivered to the UI loop from background tasks
#[derive(Debug)]
pub enum AppEvent {
    /// A create-user request finished. `epoch` identifies the register
    /// view instance that started it.
    SubmissionFinished {
        epoch: u64,
        result: Result<(), SubmitError>,
    },
    /// The post-registration pause elapsed
    RedirectDue,
}

/// Transient feedback message
#[derive(Debug, Clone)]
pub struct Banner {
    pub message: String,
    pub shown_at: DateTime<Local>,
}

impl Banner {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            shown_at: Local::now(),
        }
    }
}

/// State owned by the register view while it is active
#[derive(Debug, Default)]
pub struct AppState {
    pub current_view: View,
    pub form: RegistrationForm,
    pub success: Option<Banner>,
    pub error: Option<Banner>,
    pub menu: DisclosureMenu,
    /// Outside-click listener, held only while the register view is active
    pub outside_click: Option<OutsideClickSubscription>,
    /// Pending navigation to the login view
    pub redirect: Option<RedirectTimer>,
    /// A create-user request is in flight
    pub submitting: bool,
    /// Bumped every time the register view is entered
    pub view_epoch: u64,
}

impl AppState {
    pub fn show_success(&mut self, message: impl Into<String>) {
        self.success = Some(Banner::new(message));
        self.error = None;
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error = Some(Banner::new(message));
        self.success = None;
    }

    pub fn dismiss_success(&mut self) {
        self.success = None;
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Drop everything the register view owns: draft, banners, listener, timer
    pub fn tear_down_register(&mut self) {
        if let Some(timer) = self.redirect.take() {
            timer.cancel();
        }
        self.outside_click = None;
        self.form = RegistrationForm::default();
        self.success = None;
        self.error = None;
        self.menu.close();
        self.submitting = false;
    }
}

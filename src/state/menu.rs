//! Account disclosure menu and outside-click dismissal
//!
//! Pointer presses are published on a [`PointerRouter`]. A view that wants
//! outside-click dismissal holds an [`OutsideClickSubscription`] for as long
//! as it is active; dropping the subscription unregisters the listener.

use ratatui::layout::{Position, Rect};
use tokio::sync::broadcast::{self, error::TryRecvError};

/// Pending presses kept per listener before older ones are dropped
const POINTER_CHANNEL_CAPACITY: usize = 16;

/// Left-button press at a screen cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerDown {
    pub column: u16,
    pub row: u16,
}

impl PointerDown {
    pub fn new(column: u16, row: u16) -> Self {
        Self { column, row }
    }

    fn position(self) -> Position {
        Position::new(self.column, self.row)
    }
}

/// Entries in the "Mi Cuenta" menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Register,
    Login,
}

impl MenuItem {
    pub const ALL: [MenuItem; 2] = [MenuItem::Register, MenuItem::Login];

    pub fn label(self) -> &'static str {
        match self {
            MenuItem::Register => "Registrarme",
            MenuItem::Login => "Iniciar sesión",
        }
    }
}

/// Open/closed dropdown with a keyboard cursor
#[derive(Debug, Clone, Default)]
pub struct DisclosureMenu {
    open: bool,
    pub selected: usize,
}

impl DisclosureMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
        self.selected = 0;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % MenuItem::ALL.len();
    }

    pub fn select_prev(&mut self) {
        self.selected = (self.selected + MenuItem::ALL.len() - 1) % MenuItem::ALL.len();
    }

    pub fn selected_item(&self) -> MenuItem {
        MenuItem::ALL[self.selected % MenuItem::ALL.len()]
    }
}

/// Fan-out of pointer presses to whoever is listening
#[derive(Debug, Clone)]
pub struct PointerRouter {
    tx: broadcast::Sender<PointerDown>,
}

impl PointerRouter {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(POINTER_CHANNEL_CAPACITY);
        Self { tx }
    }

    /// Deliver a press to every live subscription
    pub fn publish(&self, press: PointerDown) {
        // No listeners is fine: nothing to dismiss
        let _ = self.tx.send(press);
    }

    pub fn subscribe(&self) -> OutsideClickSubscription {
        OutsideClickSubscription {
            rx: self.tx.subscribe(),
        }
    }

    pub fn listener_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for PointerRouter {
    fn default() -> Self {
        Self::new()
    }
}

/// Live outside-click listener; released on drop
#[derive(Debug)]
pub struct OutsideClickSubscription {
    rx: broadcast::Receiver<PointerDown>,
}

impl OutsideClickSubscription {
    /// Drain pending presses and close `menu` if any landed outside `boundary`.
    /// Returns true if the menu was closed.
    pub fn dismiss_outside(&mut self, menu: &mut DisclosureMenu, boundary: Rect) -> bool {
        let mut outside = false;
        loop {
            match self.rx.try_recv() {
                Ok(press) => {
                    if !boundary.contains(press.position()) {
                        outside = true;
                    }
                }
                Err(TryRecvError::Lagged(skipped)) => {
                    tracing::debug!(skipped, "pointer listener lagged");
                    outside = true;
                }
                Err(TryRecvError::Empty | TryRecvError::Closed) => break,
            }
        }
        if outside && menu.is_open() {
            menu.close();
            return true;
        }
        false
    }
}

//! Platform-specific key bindings

use crossterm::event::KeyModifiers;

/// Modifier for the submit and menu shortcuts
/// - macOS: SUPER (Cmd key) as well as CONTROL
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SHORTCUT_MODIFIERS: KeyModifiers = KeyModifiers::SUPER.union(KeyModifiers::CONTROL);

#[cfg(not(target_os = "macos"))]
pub const SHORTCUT_MODIFIERS: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for help text
#[cfg(target_os = "macos")]
pub const SAVE_SHORTCUT: &str = "Cmd+S";

#[cfg(not(target_os = "macos"))]
pub const SAVE_SHORTCUT: &str = "Ctrl+S";

/// Account menu shortcut display
#[cfg(target_os = "macos")]
pub const MENU_SHORTCUT: &str = "Cmd+A";

#[cfg(not(target_os = "macos"))]
pub const MENU_SHORTCUT: &str = "Ctrl+A";

/// True if the key event carries the platform shortcut modifier
pub fn is_shortcut(modifiers: KeyModifiers) -> bool {
    modifiers.intersects(SHORTCUT_MODIFIERS)
}

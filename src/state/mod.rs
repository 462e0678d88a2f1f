//! Application state module

mod app_state;
mod forms;
mod menu;
mod redirect;

pub use app_state::*;
pub use forms::*;
pub use menu::*;
pub use redirect::*;

//! Form rendering module
//!
//! - `field_renderer`: single field box with its error line
//! - `register_form`: the account registration card

mod field_renderer;
mod register_form;

pub use register_form::draw_register;

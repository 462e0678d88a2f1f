//! Form domain layer
//!
//! Registration form values, the per-field validation table and the
//! draft snapshot handed to the submission client.

mod field;
mod registration;
pub mod validation;

pub use field::FormField;
pub use registration::{FieldErrors, Form, FormButton, RegistrationDraft, RegistrationForm};
pub use validation::{Field, Gender};

//! Registration form state: field values and per-field errors

use super::field::FormField;
use super::validation::{self, Field};
use std::collections::BTreeMap;

/// Per-field validation errors, at most one per field
pub type FieldErrors = BTreeMap<Field, &'static str>;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Snapshot of the form values taken when submitting
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationDraft {
    pub nombres: String,
    pub apellidos: String,
    pub correo: String,
    pub telefono: String,
    pub direccion: String,
    pub genero: String,
}

/// Buttons on the actions row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormButton {
    #[default]
    Submit,
    LoginLink,
}

impl FormButton {
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Submit => Self::LoginLink,
            Self::LoginLink => Self::Submit,
        };
    }
}

#[derive(Debug, Clone)]
pub struct RegistrationForm {
    fields: Vec<FormField>,
    errors: FieldErrors,
    pub active_field_index: usize,
    pub selected_button: FormButton,
}

impl RegistrationForm {
    /// Index of the actions row (one past the last field)
    pub const BUTTONS_ROW: usize = Field::ALL.len();

    pub fn new() -> Self {
        Self {
            fields: Field::ALL.into_iter().map(FormField::new).collect(),
            errors: FieldErrors::new(),
            active_field_index: 0,
            selected_button: FormButton::default(),
        }
    }

    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == Self::BUTTONS_ROW
    }

    /// Field under the cursor, `None` on the actions row
    pub fn active(&self) -> Option<Field> {
        Field::ALL.get(self.active_field_index).copied()
    }

    pub fn field(&self, field: Field) -> &FormField {
        // fields are built from Field::ALL in order
        &self.fields[Self::index_of(field)]
    }

    pub fn value(&self, field: Field) -> &str {
        self.field(field).as_text()
    }

    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    fn index_of(field: Field) -> usize {
        Field::ALL
            .iter()
            .position(|f| *f == field)
            .unwrap_or_default()
    }

    /// Update one field and re-run that field's validator only
    pub fn on_field_change(&mut self, field: Field, value: &str) {
        let idx = Self::index_of(field);
        self.fields[idx].set_text(value);
        let stored = self.fields[idx].as_text();
        match validation::validate(field.as_str(), stored) {
            Some(message) => {
                tracing::debug!(field = %field, "field invalid");
                self.errors.insert(field, message);
            }
            None => {
                self.errors.remove(&field);
            }
        }
    }

    /// Run every validator, including on fields the user never touched
    pub fn validate_all(&self) -> FieldErrors {
        self.fields
            .iter()
            .filter_map(|f| f.field.validate(f.as_text()).map(|msg| (f.field, msg)))
            .collect()
    }

    /// Replace the displayed error set
    pub fn set_errors(&mut self, errors: FieldErrors) {
        self.errors = errors;
    }

    pub fn draft(&self) -> RegistrationDraft {
        RegistrationDraft {
            nombres: self.value(Field::Nombres).to_string(),
            apellidos: self.value(Field::Apellidos).to_string(),
            correo: self.value(Field::Correo).to_string(),
            telefono: self.value(Field::Telefono).to_string(),
            direccion: self.value(Field::Direccion).to_string(),
            genero: self.value(Field::Genero).to_string(),
        }
    }

    /// Type a character into the active field
    pub fn input_char(&mut self, c: char) {
        let Some(field) = self.active() else { return };
        if let Some(next) = self.field(field).with_char(c) {
            self.on_field_change(field, &next);
        }
    }

    pub fn backspace(&mut self) {
        let Some(field) = self.active() else { return };
        if let Some(next) = self.field(field).without_last_char() {
            self.on_field_change(field, &next);
        }
    }

    /// Step the active choice field forward or backward
    pub fn cycle_choice(&mut self, forward: bool) {
        let Some(field) = self.active() else { return };
        if let Some(next) = self.field(field).next_choice(forward) {
            self.on_field_change(field, next);
        }
    }

    pub fn is_active_field_choice(&self) -> bool {
        self.active()
            .is_some_and(|field| self.field(field).is_choice())
    }
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for RegistrationForm {
    fn field_count(&self) -> usize {
        Self::BUTTONS_ROW + 1
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Self::BUTTONS_ROW);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::validation::{GENERO_ERROR, NOMBRES_ERROR, TELEFONO_ERROR};
    use pretty_assertions::assert_eq;

    fn filled_form() -> RegistrationForm {
        let mut form = RegistrationForm::new();
        form.on_field_change(Field::Nombres, "Ana María");
        form.on_field_change(Field::Apellidos, "Peña");
        form.on_field_change(Field::Correo, "ana@correo.co");
        form.on_field_change(Field::Telefono, "3001234567");
        form.on_field_change(Field::Direccion, "Calle 10 45-20");
        form.on_field_change(Field::Genero, "femenino");
        form
    }

    mod field_change {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_form_is_empty_without_errors() {
            let form = RegistrationForm::new();
            assert!(form.errors().is_empty());
            for field in Field::ALL {
                assert_eq!(form.value(field), "");
            }
        }

        #[test]
        fn test_change_sets_only_that_fields_error() {
            let mut form = RegistrationForm::new();
            form.on_field_change(Field::Nombres, "A");
            assert_eq!(form.error(Field::Nombres), Some(NOMBRES_ERROR));
            assert_eq!(form.errors().len(), 1);
        }

        #[test]
        fn test_correction_clears_error() {
            let mut form = RegistrationForm::new();
            form.on_field_change(Field::Telefono, "300");
            assert_eq!(form.error(Field::Telefono), Some(TELEFONO_ERROR));
            form.on_field_change(Field::Telefono, "3001234567");
            assert!(form.error(Field::Telefono).is_none());
        }

        #[test]
        fn test_typing_revalidates_each_keystroke() {
            let mut form = RegistrationForm::new();
            form.input_char('A');
            assert_eq!(form.error(Field::Nombres), Some(NOMBRES_ERROR));
            form.input_char('n');
            assert!(form.error(Field::Nombres).is_none());
            assert_eq!(form.value(Field::Nombres), "An");
            form.backspace();
            assert_eq!(form.error(Field::Nombres), Some(NOMBRES_ERROR));
        }

        #[test]
        fn test_input_on_buttons_row_is_noop() {
            let mut form = RegistrationForm::new();
            form.set_active_field(RegistrationForm::BUTTONS_ROW);
            form.input_char('x');
            form.backspace();
            assert!(form.errors().is_empty());
        }

        #[test]
        fn test_cycle_choice_validates_gender() {
            let mut form = RegistrationForm::new();
            form.set_active_field(3);
            assert!(form.is_active_field_choice());
            form.cycle_choice(true);
            assert_eq!(form.value(Field::Genero), "masculino");
            assert!(form.error(Field::Genero).is_none());
            form.cycle_choice(false);
            assert_eq!(form.error(Field::Genero), Some(GENERO_ERROR));
        }
        #[test]
        fn test_change_matches_name_keyed_rule() {
            let samples = ["", "A", "Ana", "a@b.co", "+573001234567", "Calle 10", "femenino"];
            for field in Field::ALL {
                for value in samples {
                    let mut form = RegistrationForm::new();
                    form.on_field_change(field, value);
                    assert_eq!(
                        form.error(field),
                        validation::validate(field.as_str(), form.value(field)),
                        "{field} with {value:?}"
                    );
                }
            }
        }
    }

    mod submit_validation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_validate_all_catches_untouched_fields() {
            let form = RegistrationForm::new();
            let errors = form.validate_all();
            assert_eq!(errors.len(), Field::ALL.len());
        }

        #[test]
        fn test_validate_all_reports_exactly_failing_fields() {
            let mut form = filled_form();
            form.on_field_change(Field::Genero, "");
            let errors = form.validate_all();
            assert_eq!(errors.keys().copied().collect::<Vec<_>>(), vec![Field::Genero]);
        }

        #[test]
        fn test_filled_form_has_no_errors() {
            let form = filled_form();
            assert!(form.validate_all().is_empty());
        }

        #[test]
        fn test_draft_snapshot() {
            let draft = filled_form().draft();
            assert_eq!(
                draft,
                RegistrationDraft {
                    nombres: "Ana María".into(),
                    apellidos: "Peña".into(),
                    correo: "ana@correo.co".into(),
                    telefono: "3001234567".into(),
                    direccion: "Calle 10 45-20".into(),
                    genero: "femenino".into(),
                }
            );
        }
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_field_count_includes_buttons_row() {
            let form = RegistrationForm::new();
            assert_eq!(form.field_count(), 7);
        }

        #[test]
        fn test_next_field_wraps() {
            let mut form = RegistrationForm::new();
            for _ in 0..form.field_count() {
                form.next_field();
            }
            assert_eq!(form.active_field_index, 0);
        }

        #[test]
        fn test_prev_field_wraps_to_buttons() {
            let mut form = RegistrationForm::new();
            form.prev_field();
            assert!(form.is_buttons_row_active());
            assert!(form.active().is_none());
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = RegistrationForm::new();
            form.set_active_field(100);
            assert_eq!(form.active_field_index, RegistrationForm::BUTTONS_ROW);
        }

        #[test]
        fn test_field_order_follows_grid() {
            let form = RegistrationForm::new();
            assert_eq!(form.fields[0].field, Field::Nombres);
            assert_eq!(form.fields[5].field, Field::Correo);
        }

        #[test]
        fn test_button_toggle() {
            let mut button = FormButton::default();
            button.toggle();
            assert_eq!(button, FormButton::LoginLink);
            button.toggle();
            assert_eq!(button, FormButton::Submit);
        }
    }
}

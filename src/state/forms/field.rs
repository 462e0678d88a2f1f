//! Form field value objects

use super::validation::{Field, Gender};

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// Selection from a fixed list; `None` until the user picks one
    Choice(Option<Gender>),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its value
#[derive(Debug, Clone)]
pub struct FormField {
    pub field: Field,
    pub value: FieldValue,
}

impl FormField {
    /// Create an empty field of the right kind
    pub fn new(field: Field) -> Self {
        let value = match field {
            Field::Genero => FieldValue::Choice(None),
            _ => FieldValue::Text(String::new()),
        };
        Self { field, value }
    }

    pub fn label(&self) -> &'static str {
        self.field.label()
    }

    pub fn is_choice(&self) -> bool {
        matches!(self.value, FieldValue::Choice(_))
    }

    /// Get the value as submitted (empty string for an unset choice)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Choice(Some(g)) => g.as_str(),
            FieldValue::Choice(None) => "",
        }
    }

    /// Replace the value from its textual form.
    /// Choice fields accept only the known option names; anything else unsets them.
    pub fn set_text(&mut self, value: &str) {
        match &mut self.value {
            FieldValue::Text(s) => {
                s.clear();
                s.push_str(value);
            }
            FieldValue::Choice(selected) => {
                *selected = Gender::ALL.into_iter().find(|g| g.as_str() == value);
            }
        }
    }

    /// Value after pushing a character (choice fields don't take text input)
    pub fn with_char(&self, c: char) -> Option<String> {
        match &self.value {
            FieldValue::Text(s) => {
                let mut next = s.clone();
                next.push(c);
                Some(next)
            }
            FieldValue::Choice(_) => None,
        }
    }

    /// Value after removing the last character
    pub fn without_last_char(&self) -> Option<String> {
        match &self.value {
            FieldValue::Text(s) => {
                let mut next = s.clone();
                next.pop();
                Some(next)
            }
            FieldValue::Choice(_) => None,
        }
    }

    /// Next option in the cycle: unset -> Masculino -> Femenino -> unset
    pub fn next_choice(&self, forward: bool) -> Option<&'static str> {
        let FieldValue::Choice(selected) = &self.value else {
            return None;
        };
        let order: [Option<Gender>; 3] = [None, Some(Gender::Masculino), Some(Gender::Femenino)];
        let idx = order.iter().position(|o| o == selected).unwrap_or(0);
        let next = if forward {
            (idx + 1) % order.len()
        } else {
            (idx + order.len() - 1) % order.len()
        };
        Some(order[next].map(Gender::as_str).unwrap_or(""))
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Choice(Some(g)) => format!("◀ {} ▶", g.label()),
            FieldValue::Choice(None) => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_picks_value_kind() {
        assert!(FormField::new(Field::Genero).is_choice());
        assert!(!FormField::new(Field::Correo).is_choice());
        assert_eq!(FormField::new(Field::Nombres).as_text(), "");
    }

    #[test]
    fn test_set_text_on_choice() {
        let mut field = FormField::new(Field::Genero);
        field.set_text("femenino");
        assert_eq!(field.value, FieldValue::Choice(Some(Gender::Femenino)));
        field.set_text("otro");
        assert_eq!(field.value, FieldValue::Choice(None));
        assert_eq!(field.as_text(), "");
    }

    #[test]
    fn test_char_editing() {
        let mut field = FormField::new(Field::Nombres);
        field.set_text("An");
        assert_eq!(field.with_char('a').as_deref(), Some("Ana"));
        assert_eq!(field.without_last_char().as_deref(), Some("A"));
        assert!(FormField::new(Field::Genero).with_char('x').is_none());
    }

    #[test]
    fn test_without_last_char_on_empty() {
        let field = FormField::new(Field::Correo);
        assert_eq!(field.without_last_char().as_deref(), Some(""));
    }

    #[test]
    fn test_next_choice_cycles() {
        let mut field = FormField::new(Field::Genero);
        let first = field.next_choice(true);
        assert_eq!(first, Some("masculino"));
        field.set_text("masculino");
        assert_eq!(field.next_choice(true), Some("femenino"));
        field.set_text("femenino");
        assert_eq!(field.next_choice(true), Some(""));
        assert_eq!(field.next_choice(false), Some("masculino"));
    }

    #[test]
    fn test_next_choice_backward_from_unset() {
        let field = FormField::new(Field::Genero);
        assert_eq!(field.next_choice(false), Some("femenino"));
        assert!(FormField::new(Field::Telefono).next_choice(true).is_none());
    }

    #[test]
    fn test_display_value() {
        let mut field = FormField::new(Field::Genero);
        assert_eq!(field.display_value(), "");
        field.set_text("masculino");
        assert_eq!(field.display_value(), "◀ Masculino ▶");
    }
}

//! Field validation rules for the registration form
//!
//! A single rule table backs both the per-keystroke check and the
//! exhaustive check run on submit, so the two can never disagree.

use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Letters (with Spanish accented vowels and ñ) and whitespace, 2-50 chars
static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-ZáéíóúÁÉÍÓÚñÑ\s]{2,50}$").expect("valid name pattern"));

/// `local@domain.tld` with a 2-6 letter final segment
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,6}$").expect("valid email pattern")
});

/// Colombian mobile number: optional `+57`/`57`, then `3` and nine digits.
/// ASCII digits only; `\d` would also accept other Unicode digits.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\+57|57)?3[0-9]{9}$").expect("valid phone pattern"));

static ADDRESS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9\s,'-]{3,100}$").expect("valid address pattern"));

pub const NOMBRES_ERROR: &str =
    "El nombre deben contener solo letras y espacios, entre 2 y 50 caracteres.";
pub const APELLIDOS_ERROR: &str =
    "Los apellidos deben contener solo letras y espacios, entre 2 y 50 caracteres.";
pub const CORREO_ERROR: &str = "El formato del correo electrónico no es válido.";
pub const TELEFONO_ERROR: &str = "El número de teléfono debe ser un número colombiano válido.";
pub const DIRECCION_ERROR: &str =
    "La dirección debe tener entre 3 y 100 caracteres alfanuméricos.";
pub const GENERO_ERROR: &str = "Por favor seleccione un género.";

/// Registration form fields, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Nombres,
    Apellidos,
    Telefono,
    Genero,
    Direccion,
    Correo,
}

impl Field {
    /// All fields in the order they are rendered and tabbed through
    pub const ALL: [Field; 6] = [
        Field::Nombres,
        Field::Apellidos,
        Field::Telefono,
        Field::Genero,
        Field::Direccion,
        Field::Correo,
    ];

    /// Wire/form name of the field
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Nombres => "nombres",
            Field::Apellidos => "apellidos",
            Field::Correo => "correo",
            Field::Telefono => "telefono",
            Field::Direccion => "direccion",
            Field::Genero => "genero",
        }
    }

    /// Label shown above the input
    pub fn label(self) -> &'static str {
        match self {
            Field::Nombres => "Nombre",
            Field::Apellidos => "Apellidos",
            Field::Correo => "Correo electrónico",
            Field::Telefono => "Número de teléfono",
            Field::Direccion => "Dirección de residencia",
            Field::Genero => "Género",
        }
    }

    /// Placeholder shown while the field is empty and inactive
    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Nombres => "Ingresar nombre",
            Field::Apellidos => "Ingresar apellidos",
            Field::Correo => "Ingresar correo electrónico",
            Field::Telefono => "Ingresar número telefónico",
            Field::Direccion => "Ingresar dirección",
            Field::Genero => "Seleccionar género",
        }
    }

    /// Check a value against this field's rule
    pub fn validate(self, value: &str) -> Option<&'static str> {
        let valid = match self {
            Field::Nombres | Field::Apellidos => NAME_RE.is_match(value),
            Field::Correo => EMAIL_RE.is_match(value),
            Field::Telefono => PHONE_RE.is_match(value),
            Field::Direccion => ADDRESS_RE.is_match(value),
            Field::Genero => !value.is_empty(),
        };
        if valid {
            None
        } else {
            Some(self.error_message())
        }
    }

    fn error_message(self) -> &'static str {
        match self {
            Field::Nombres => NOMBRES_ERROR,
            Field::Apellidos => APELLIDOS_ERROR,
            Field::Correo => CORREO_ERROR,
            Field::Telefono => TELEFONO_ERROR,
            Field::Direccion => DIRECCION_ERROR,
            Field::Genero => GENERO_ERROR,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown form field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Validate by form name. Names outside the form have no rule and pass.
pub fn validate(name: &str, value: &str) -> Option<&'static str> {
    name.parse::<Field>().ok().and_then(|field| field.validate(value))
}

/// Selectable gender values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Masculino,
    Femenino,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Masculino, Gender::Femenino];

    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Masculino => "masculino",
            Gender::Femenino => "femenino",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Gender::Masculino => "Masculino",
            Gender::Femenino => "Femenino",
        }
    }
}

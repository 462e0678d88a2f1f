//! Wire types for the user service

use crate::state::RegistrationDraft;
use serde::{Deserialize, Serialize};

/// Role attached to every account created from this client
pub const CUSTOMER_ROLE: &str = "Cliente";

/// Shown when the service gives no usable reason for a failure
pub const GENERIC_SUBMIT_ERROR: &str =
    "Ocurrió un error inesperado. Por favor, inténtelo de nuevo.";

/// Body of `POST /users/create`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateUserRequest {
    pub nombres: String,
    pub apellidos: String,
    pub correo: String,
    pub telefono: String,
    pub direccion: String,
    pub genero: String,
    pub rol: String,
}

impl From<RegistrationDraft> for CreateUserRequest {
    fn from(draft: RegistrationDraft) -> Self {
        Self {
            nombres: draft.nombres,
            apellidos: draft.apellidos,
            correo: draft.correo,
            telefono: draft.telefono,
            direccion: draft.direccion,
            genero: draft.genero,
            rol: CUSTOMER_ROLE.to_string(),
        }
    }
}

/// Optional error body returned by the service.
/// Only a string `message` is used; any other JSON type fails to parse and
/// the banner falls back to the generic text.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Why a submission did not create an account
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The service answered with a non-2xx status
    #[error("user service rejected the registration ({status})")]
    Rejected { status: u16, message: Option<String> },
    /// The request never got a response
    #[error("could not reach the user service: {0}")]
    Transport(String),
}

impl SubmitError {
    /// Text for the error banner: the service's message verbatim, or the generic fallback
    pub fn user_message(&self) -> &str {
        match self {
            SubmitError::Rejected {
                message: Some(message),
                ..
            } if !message.is_empty() => message,
            _ => GENERIC_SUBMIT_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn draft() -> RegistrationDraft {
        RegistrationDraft {
            nombres: "Ana".into(),
            apellidos: "Peña".into(),
            correo: "ana@correo.co".into(),
            telefono: "+573001234567".into(),
            direccion: "Calle 10 45-20".into(),
            genero: "femenino".into(),
        }
    }

    #[test]
    fn test_request_uses_capitalized_keys_and_customer_role() {
        let request = CreateUserRequest::from(draft());
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "Nombres": "Ana",
                "Apellidos": "Peña",
                "Correo": "ana@correo.co",
                "Telefono": "+573001234567",
                "Direccion": "Calle 10 45-20",
                "Genero": "femenino",
                "Rol": "Cliente",
            })
        );
    }

    #[test]
    fn test_error_body_message_is_optional() {
        let body: ErrorBody = serde_json::from_str(r#"{"error": "x"}"#).unwrap();
        assert!(body.message.is_none());
        let body: ErrorBody = serde_json::from_str(r#"{"message": "Correo ya registrado"}"#).unwrap();
        assert_eq!(body.message.as_deref(), Some("Correo ya registrado"));
    }

    #[test]
    fn test_user_message_prefers_server_text() {
        let err = SubmitError::Rejected {
            status: 409,
            message: Some("Correo ya registrado".into()),
        };
        assert_eq!(err.user_message(), "Correo ya registrado");
    }

    #[test]
    fn test_user_message_falls_back() {
        let rejected = SubmitError::Rejected {
            status: 500,
            message: None,
        };
        assert_eq!(rejected.user_message(), GENERIC_SUBMIT_ERROR);
        let transport = SubmitError::Transport("connection refused".into());
        assert_eq!(transport.user_message(), GENERIC_SUBMIT_ERROR);
    }
}

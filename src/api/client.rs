//! HTTP client for the remote user service
//!
//! Issues `POST <base>/users/create` with the registration payload and maps
//! the response onto `Result<(), SubmitError>`.

use super::traits::UserService;
use super::types::{CreateUserRequest, ErrorBody, SubmitError};
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;

/// Default user service host
pub const DEFAULT_API_BASE_URL: &str = "https://railway-back-bd-production.up.railway.app";

const CREATE_USER_PATH: &str = "/users/create";

/// Client for the user-creation endpoint
#[derive(Debug, Clone)]
pub struct UserServiceClient {
    http: reqwest::Client,
    endpoint: String,
}

impl UserServiceClient {
    /// Build a client for `base_url`. `timeout` of `None` means the request
    /// waits for the server indefinitely.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .context("Failed to build HTTP client")?;

        let endpoint = format!("{}{}", base_url.trim_end_matches('/'), CREATE_USER_PATH);
        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl UserService for UserServiceClient {
    async fn create_user(&self, request: &CreateUserRequest) -> Result<(), SubmitError> {
        tracing::info!(endpoint = %self.endpoint, "submitting registration");

        let response = self
            .http
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "registration request failed");
                SubmitError::Transport(e.to_string())
            })?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(status = status.as_u16(), "registration accepted");
            return Ok(());
        }

        // A body we can't read or parse just means no server message
        let message = match response.bytes().await {
            Ok(body) => error_message(&body),
            Err(_) => None,
        };
        tracing::warn!(status = status.as_u16(), ?message, "registration rejected");
        Err(SubmitError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

/// Pull `message` out of a JSON error body, if there is one
fn error_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::GENERIC_SUBMIT_ERROR;
    use axum::{http::StatusCode, routing::post, Json, Router};
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};
    use tokio_test::{assert_err, assert_ok};

    fn request() -> CreateUserRequest {
        CreateUserRequest {
            nombres: "Ana".into(),
            apellidos: "Peña".into(),
            correo: "ana@correo.co".into(),
            telefono: "3001234567".into(),
            direccion: "Calle 10 45-20".into(),
            genero: "femenino".into(),
            rol: "Cliente".into(),
        }
    }

    /// Serve `router` on an ephemeral port and return its base URL
    async fn spawn_server(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[test]
    fn test_endpoint_joins_path() {
        let client = UserServiceClient::new("http://localhost:8080/", None).unwrap();
        assert_eq!(client.endpoint(), "http://localhost:8080/users/create");
        let client = UserServiceClient::new("http://localhost:8080", None).unwrap();
        assert_eq!(client.endpoint(), "http://localhost:8080/users/create");
    }

    #[test]
    fn test_error_message_parsing() {
        assert_eq!(
            error_message(br#"{"message":"Correo ya registrado"}"#),
            Some("Correo ya registrado".to_string())
        );
        assert_eq!(error_message(br#"{"message": 42}"#), None);
        assert_eq!(error_message(b"<html>502</html>"), None);
        assert_eq!(error_message(b""), None);
    }

    #[tokio::test]
    async fn test_success_posts_payload_once() {
        let seen: Arc<Mutex<Vec<Value>>> = Arc::default();
        let sink = seen.clone();
        let router = Router::new().route(
            "/users/create",
            post(move |Json(body): Json<Value>| async move {
                sink.lock().unwrap().push(body);
                StatusCode::CREATED
            }),
        );
        let base = spawn_server(router).await;
        let client = UserServiceClient::new(&base, None).unwrap();

        assert_ok!(client.create_user(&request()).await);

        let bodies = seen.lock().unwrap().clone();
        assert_eq!(bodies.len(), 1);
        assert_eq!(
            bodies[0],
            json!({
                "Nombres": "Ana",
                "Apellidos": "Peña",
                "Correo": "ana@correo.co",
                "Telefono": "3001234567",
                "Direccion": "Calle 10 45-20",
                "Genero": "femenino",
                "Rol": "Cliente",
            })
        );
    }

    #[tokio::test]
    async fn test_rejection_with_message() {
        let router = Router::new().route(
            "/users/create",
            post(|| async {
                (
                    StatusCode::CONFLICT,
                    Json(json!({ "message": "Correo ya registrado" })),
                )
            }),
        );
        let base = spawn_server(router).await;
        let client = UserServiceClient::new(&base, None).unwrap();

        let err = client.create_user(&request()).await.unwrap_err();
        assert_eq!(
            err,
            SubmitError::Rejected {
                status: 409,
                message: Some("Correo ya registrado".into()),
            }
        );
        assert_eq!(err.user_message(), "Correo ya registrado");
    }

    #[tokio::test]
    async fn test_rejection_without_message() {
        let router = Router::new().route(
            "/users/create",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let base = spawn_server(router).await;
        let client = UserServiceClient::new(&base, None).unwrap();

        let err = client.create_user(&request()).await.unwrap_err();
        assert!(matches!(err, SubmitError::Rejected { status: 500, message: None }));
        assert_eq!(err.user_message(), GENERIC_SUBMIT_ERROR);
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let client = UserServiceClient::new(&format!("http://{addr}"), None).unwrap();

        let err = assert_err!(client.create_user(&request()).await);
        assert!(matches!(err, SubmitError::Transport(_)));
        assert_eq!(err.user_message(), GENERIC_SUBMIT_ERROR);
    }

    #[tokio::test]
    async fn test_configured_timeout_applies() {
        let router = Router::new().route(
            "/users/create",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                StatusCode::CREATED
            }),
        );
        let base = spawn_server(router).await;
        let client = UserServiceClient::new(&base, Some(Duration::from_millis(100))).unwrap();

        let err = client.create_user(&request()).await.unwrap_err();
        assert!(matches!(err, SubmitError::Transport(_)));
    }
}

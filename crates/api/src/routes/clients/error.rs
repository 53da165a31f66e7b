use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum ClientsError {
    #[error("unknown client '{0}'")]
    NotFound(String),

    #[error("wrong access code")]
    WrongCode,
}

fn log_clients_failure(error: &ClientsError) {
    match error {
        ClientsError::NotFound(key) => debug!("Client lookup miss: {}", key),
        ClientsError::WrongCode => warn!("Rejected wrong access code"),
    }
}

impl IntoResponse for ClientsError {
    fn into_response(self) -> Response {
        log_clients_failure(&self);

        let (status, error_message) = match &self {
            Self::NotFound(key) => (
                StatusCode::NOT_FOUND,
                format!("No client album named '{key}'."),
            ),
            Self::WrongCode => (
                StatusCode::UNAUTHORIZED,
                "The access code does not match.".into(),
            ),
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

//! Error taxonomy surfaced at the service boundary.
//!
//! Every failure of a user action ends up here: bad input, a stale
//! player reference, or a storage fault. Nothing is retried; the client
//! resubmits after seeing the notification.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;

#[derive(Debug)]
pub enum ServiceError {
    /// Malformed or missing user input; no state was mutated.
    Validation(String),
    /// A referenced player is absent from the player table. The whole
    /// operation aborts with no partial mutation.
    PlayerNotFound(String),
    /// Backend read/write failure (network, auth, quota).
    Storage(anyhow::Error),
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceError::Validation(msg) => write!(f, "{msg}"),
            ServiceError::PlayerNotFound(name) => write!(f, "player '{name}' not found"),
            ServiceError::Storage(e) => write!(f, "storage failure: {e}"),
        }
    }
}

impl std::error::Error for ServiceError {}

impl From<anyhow::Error> for ServiceError {
    fn from(e: anyhow::Error) -> Self {
        ServiceError::Storage(e)
    }
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::PlayerNotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ServiceError::Storage(e) = self {
            log::error!("storage failure: {e:?}");
        }
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}

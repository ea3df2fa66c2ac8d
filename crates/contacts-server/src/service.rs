use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contacts_store_contract::{ContactInput, ContactStore};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ContactStore>,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Contact not found")]
    NotFound,

    #[error("{0}")]
    BadRequest(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = match &self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (code, body).into_response()
    }
}

/// Client-supplied contact fields as received on the wire. Everything is
/// optional here; [`validate_payload`] decides what is acceptable.
#[derive(Debug, Deserialize)]
pub struct ContactPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Validate and normalize a payload. Applied identically to create and
/// update.
///
/// All fields are trimmed before any check. `notes` collapses to `None`
/// when blank, so a cleared field is erased rather than stored empty.
pub fn validate_payload(payload: &ContactPayload) -> Result<ContactInput, ApiError> {
    let name = payload.name.as_deref().unwrap_or_default().trim();
    if name.is_empty() {
        return Err(ApiError::BadRequest("Name is required".to_string()));
    }

    let phone = payload.phone.as_deref().unwrap_or_default().trim();
    if phone.is_empty() || !phone_is_valid(phone) {
        return Err(ApiError::BadRequest(
            "Phone number is required (digits, plus, dash, spaces only)".to_string(),
        ));
    }

    let notes = payload
        .notes
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_string);

    Ok(ContactInput {
        name: name.to_string(),
        phone: phone.to_string(),
        notes,
    })
}

fn phone_is_valid(phone: &str) -> bool {
    phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-') || c.is_whitespace())
}

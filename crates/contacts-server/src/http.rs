use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, put};
use axum::{Json, Router};
use contacts_store_contract::Contact;

use crate::service::{validate_payload, ApiError, ContactPayload};

pub use crate::service::AppState;

/// Health endpoint path.
pub const HEALTH_PATH: &str = "/health";
/// Contact collection endpoint path.
pub const CONTACTS_PATH: &str = "/api/contacts";
/// Single contact endpoint path.
pub const CONTACT_PATH: &str = "/api/contacts/:id";

/// Build health routes.
pub fn health_routes() -> Router<AppState> {
    Router::new().route(HEALTH_PATH, get(health))
}

/// Build contact CRUD routes.
pub fn contact_routes() -> Router<AppState> {
    Router::new()
        .route(CONTACTS_PATH, get(list_contacts).post(create_contact))
        .route(CONTACT_PATH, put(update_contact).delete(delete_contact))
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn list_contacts(State(st): State<AppState>) -> Result<Json<Vec<Contact>>, ApiError> {
    st.store
        .list()
        .await
        .map(Json)
        .map_err(|e| ApiError::Internal(e.to_string()))
}

async fn create_contact(
    State(st): State<AppState>,
    Json(payload): Json<ContactPayload>,
) -> Result<(StatusCode, Json<Contact>), ApiError> {
    let input = validate_payload(&payload)?;
    let contact = st
        .store
        .create(input)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok((StatusCode::CREATED, Json(contact)))
}

async fn update_contact(
    State(st): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<ContactPayload>,
) -> Result<Json<Contact>, ApiError> {
    let input = validate_payload(&payload)?;
    let Some(contact) = st
        .store
        .update(&id, input)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?
    else {
        return Err(ApiError::NotFound);
    };
    Ok(Json(contact))
}

async fn delete_contact(
    State(st): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let removed = st
        .store
        .remove(&id)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    if !removed {
        return Err(ApiError::NotFound);
    }
    Ok(StatusCode::NO_CONTENT)
}

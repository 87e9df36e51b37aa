use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::contact::Contact;
use crate::server::AppState;

/// Fixed message for create/update requests missing a required field.
const MISSING_FIELDS: &str = "name and phone are required";

/// Request body for create and update
///
/// Missing fields default to empty strings, so an absent or malformed
/// body behaves exactly like an empty object and fails the same
/// required-field check.
#[derive(Debug, Default, Deserialize)]
pub struct ContactPayload {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
}

impl ContactPayload {
    fn from_body(body: &Bytes) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }

    fn validate(&self) -> Result<(), (StatusCode, Json<ErrorResponse>)> {
        if self.name.is_empty() || self.phone.is_empty() {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: MISSING_FIELDS.to_string(),
                }),
            ));
        }
        Ok(())
    }
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub async fn handle_root(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let db = state
        .database_path
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    Json(serde_json::json!({
        "ok": true,
        "service": env!("CARGO_PKG_NAME"),
        "db": db,
    }))
}

pub async fn handle_list(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Contact>>, (StatusCode, Json<ErrorResponse>)> {
    let store = state.store.lock().await;
    let contacts = store.list_all().map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
    })?;

    Ok(Json(contacts))
}

pub async fn handle_create(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<(StatusCode, Json<Contact>), (StatusCode, Json<ErrorResponse>)> {
    let payload = ContactPayload::from_body(&body);
    payload.validate()?;

    let store = state.store.lock().await;
    let contact = store
        .insert(&payload.name, &payload.phone, &payload.email)
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
        })?;

    Ok((StatusCode::CREATED, Json(contact)))
}

pub async fn handle_update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Contact>, (StatusCode, Json<ErrorResponse>)> {
    let payload = ContactPayload::from_body(&body);
    payload.validate()?;

    let store = state.store.lock().await;
    let updated = store
        .update(&id, &payload.name, &payload.phone, &payload.email)
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
        })?;

    match updated {
        Some(contact) => Ok(Json(contact)),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("contact {} not found", id),
            }),
        )),
    }
}

pub async fn handle_delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    let store = state.store.lock().await;
    let removed = store.delete(&id).map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
    })?;

    if removed {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("contact {} not found", id),
            }),
        ))
    }
}

//! Owner-scoped lodging endpoints

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::Lodging;

/// Every lodging belonging to one owner (unpaged)
#[derive(Debug, Serialize)]
pub struct OwnerLodgings {
    pub lodgings: Vec<Lodging>,
}

/// GET /users/{userID}/lodgings
async fn list_for_owner(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<OwnerLodgings>, ApiError> {
    // A non-numeric owner id matches no records
    let lodgings = match user_id.parse::<i64>() {
        Ok(owner_id) => state.store.list_by_owner(owner_id).await?,
        Err(_) => Vec::new(),
    };

    Ok(Json(OwnerLodgings { lodgings }))
}

/// Owner routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/users/{userID}/lodgings", get(list_for_owner))
}

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
};
use roster::{Confirmation, GuestList};
use tracing::error;

use crate::{
    database::{fetch_guests, insert_guest},
    error::AppError,
    models::{ConfirmParams, people_count_or_default},
    state::State as AppState,
};

/// `GET /api/confirm?name=...&peopleCount=...`
///
/// Appends exactly one row per call. Identical submissions append identical
/// rows; deduplication is nobody's job here.
pub async fn confirm_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ConfirmParams>,
) -> Result<Json<Confirmation>, AppError> {
    let name = match params.name.as_deref() {
        Some(name) if !name.is_empty() => name,
        _ => return Err(AppError::MissingName),
    };

    let people_count = people_count_or_default(params.people_count.as_deref());

    let guest = insert_guest(&state.pool, name, people_count)
        .await
        .map_err(|e| {
            error!("Insert failed: {e}");
            AppError::Database(e)
        })?;

    Ok(Json(Confirmation {
        message: "Confirmed".to_string(),
        data: guest,
    }))
}

/// `GET /api/get-list`
pub async fn get_list_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<GuestList>, AppError> {
    let guests = fetch_guests(&state.pool).await.map_err(|e| {
        error!("Fetch failed: {e}");
        AppError::Internal(Box::new(e))
    })?;

    Ok(Json(GuestList { data: guests }))
}

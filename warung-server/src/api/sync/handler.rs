//! Snapshot sync handler

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::store::{Collection, Snapshot};
use shared::error::{AppError, AppResult};

/// GET /api/sync/{collection}
///
/// Returns the current full-collection snapshot with its version, the
/// same payload a subscriber would see. Staff docs are stripped of their
/// PIN credential; the settings collection is never synced.
pub async fn snapshot(
    State(state): State<ServerState>,
    Path(collection): Path<String>,
) -> AppResult<Json<Snapshot>> {
    crate::api::require_session(&state)?;
    let collection = Collection::parse(&collection)
        .ok_or_else(|| AppError::invalid(format!("unknown collection: {collection}")))?;

    if collection == Collection::Settings {
        return Err(AppError::forbidden("settings are not synced"));
    }

    let mut snap = state.store.snapshot(collection);
    if collection == Collection::Staff {
        for doc in &mut snap.docs {
            if let Some(obj) = doc.data.as_object_mut() {
                obj.remove("pin");
            }
        }
    }
    Ok(Json(snap))
}

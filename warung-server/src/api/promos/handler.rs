//! Promo handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use validator::Validate;

use crate::core::ServerState;
use crate::marketing;
use crate::store::StoreError;
use crate::store::repository::PromoRepository;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Promo, PromoCreate, PromoKind};

/// GET /api/promos
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Promo>>> {
    crate::api::require_session(&state)?;
    Ok(Json(PromoRepository::new(state.store.clone()).find_all()))
}

/// POST /api/promos
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<PromoCreate>,
) -> AppResult<Json<Promo>> {
    crate::api::require_admin(&state)?;
    payload.validate()?;
    if payload.kind == PromoKind::Percentage && !(1..=100).contains(&payload.value) {
        return Err(AppError::new(ErrorCode::PromoInvalidValue)
            .with_detail("value", payload.value));
    }

    let code = payload.code.trim().to_uppercase();
    let promo = PromoRepository::new(state.store.clone())
        .create(payload)
        .map_err(|e| match e {
            StoreError::FieldTaken { .. } => {
                AppError::new(ErrorCode::PromoCodeExists).with_detail("code", code)
            }
            other => other.into(),
        })?;
    tracing::info!(code = %promo.code, "promo created");
    Ok(Json(promo))
}

/// DELETE /api/promos/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    crate::api::require_admin(&state)?;
    PromoRepository::new(state.store.clone()).delete(&id)?;
    tracing::info!(id = %id, "promo deleted");
    Ok(Json(true))
}

#[derive(Debug, Deserialize)]
pub struct LookupRequest {
    pub code: String,
}

/// POST /api/promos/lookup
pub async fn lookup(
    State(state): State<ServerState>,
    Json(req): Json<LookupRequest>,
) -> AppResult<Json<Promo>> {
    crate::api::require_session(&state)?;
    let promos = PromoRepository::new(state.store.clone()).find_all();
    let promo = marketing::lookup_code(&promos, &req.code)?;
    Ok(Json(promo.clone()))
}

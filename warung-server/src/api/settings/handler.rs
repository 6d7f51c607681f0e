//! Settings handlers
//!
//! Admin PIN rotation: the old PIN must verify before the new one is
//! hashed and written.

use std::time::Duration;

use axum::{Json, extract::State};
use serde::Deserialize;

use crate::core::ServerState;
use crate::session::PinCredential;
use crate::store::repository::SettingsRepository;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{AdminConfig, staff_pin_is_valid};

const AUTH_FIXED_DELAY_MS: u64 = 500;

#[derive(Debug, Deserialize)]
pub struct RotatePinRequest {
    pub old_pin: String,
    pub new_pin: String,
}

/// PUT /api/settings/pin
pub async fn rotate_pin(
    State(state): State<ServerState>,
    Json(req): Json<RotatePinRequest>,
) -> AppResult<Json<bool>> {
    crate::api::require_admin(&state)?;
    let settings = SettingsRepository::new(state.store.clone());
    let admin_config = settings
        .admin_config()
        .ok_or_else(|| AppError::internal("admin config missing"))?;

    let old_matches = PinCredential::verify(&admin_config.pin, &req.old_pin)?;

    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    if !old_matches {
        tracing::warn!("admin PIN rotation rejected");
        return Err(AppError::invalid_pin());
    }
    if !staff_pin_is_valid(&req.new_pin) {
        return Err(AppError::new(ErrorCode::StaffPinInvalid));
    }

    let hashed = PinCredential::hash(&req.new_pin)?;
    settings.set_admin_config(&AdminConfig::new(hashed))?;
    tracing::info!("admin PIN rotated");
    Ok(Json(true))
}

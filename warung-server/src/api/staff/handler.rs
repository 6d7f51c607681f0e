//! Staff handlers
//!
//! Responses never carry the PIN credential, only public fields.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use validator::Validate;

use crate::core::ServerState;
use crate::store::repository::StaffRepository;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Staff, StaffCreate, StaffUpdate, staff_pin_is_valid};

/// Staff record without the credential
#[derive(Debug, Serialize)]
pub struct StaffPublic {
    pub id: Option<String>,
    pub name: String,
    pub position: String,
    pub joined_at: i64,
}

impl From<Staff> for StaffPublic {
    fn from(s: Staff) -> Self {
        Self {
            id: s.id,
            name: s.name,
            position: s.position,
            joined_at: s.joined_at,
        }
    }
}

/// GET /api/staff
///
/// Open: the login screen lists staff by name before any session exists.
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<StaffPublic>>> {
    let staff = StaffRepository::new(state.store.clone())
        .find_all()
        .into_iter()
        .map(StaffPublic::from)
        .collect();
    Ok(Json(staff))
}

/// GET /api/staff/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<StaffPublic>> {
    crate::api::require_admin(&state)?;
    let staff = StaffRepository::new(state.store.clone())
        .find_by_id(&id)
        .ok_or_else(|| AppError::new(ErrorCode::StaffNotFound).with_detail("id", id))?;
    Ok(Json(staff.into()))
}

/// POST /api/staff
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<StaffCreate>,
) -> AppResult<Json<StaffPublic>> {
    crate::api::require_admin(&state)?;
    payload.validate()?;
    let staff = StaffRepository::new(state.store.clone()).create(payload)?;
    tracing::info!(id = ?staff.id, name = %staff.name, "staff created");
    Ok(Json(staff.into()))
}

/// PUT /api/staff/{id}
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<StaffUpdate>,
) -> AppResult<Json<StaffPublic>> {
    crate::api::require_admin(&state)?;
    if let Some(pin) = &payload.pin
        && !staff_pin_is_valid(pin)
    {
        return Err(AppError::new(ErrorCode::StaffPinInvalid));
    }
    let staff = StaffRepository::new(state.store.clone()).update(&id, payload)?;
    tracing::info!(id = %id, "staff updated");
    Ok(Json(staff.into()))
}

/// DELETE /api/staff/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    crate::api::require_admin(&state)?;
    StaffRepository::new(state.store.clone()).delete(&id)?;
    tracing::info!(id = %id, "staff deleted");
    Ok(Json(true))
}

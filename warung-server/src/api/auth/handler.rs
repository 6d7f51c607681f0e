//! Auth handlers
//!
//! Login resolves the role gate against the stored credential and
//! persists the session; logout clears it.

use std::time::Duration;

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::session::gate;
use crate::store::repository::{SettingsRepository, StaffRepository};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{DefaultView, Role, SessionUser, StoredSession};

/// Fixed delay before any login response, so valid and invalid attempts
/// take the same time
const AUTH_FIXED_DELAY_MS: u64 = 500;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub role: Role,
    /// Required when role is staff
    pub staff_id: Option<String>,
    pub pin: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub role: Role,
    pub user: SessionUser,
    pub default_view: DefaultView,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub logged_in: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<StoredSession>,
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let settings = SettingsRepository::new(state.store.clone());
    let admin_config = settings
        .admin_config()
        .ok_or_else(|| AppError::internal("admin config missing"))?;

    let staff = match (&req.role, &req.staff_id) {
        (Role::Staff, Some(id)) => StaffRepository::new(state.store.clone()).find_by_id(id),
        _ => None,
    };

    let outcome = gate::resolve_login(req.role, staff.as_ref(), &req.pin, &admin_config);

    // Delay before revealing the result
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    let outcome = match outcome {
        Ok(o) => o,
        Err(e) => {
            tracing::warn!(role = ?req.role, code = %e.code, "login rejected");
            // Collapse gate errors so the response never says which part failed
            return Err(if e.code == ErrorCode::InternalError {
                e
            } else {
                AppError::invalid_pin()
            });
        }
    };

    state.sessions.save(outcome.session.clone())?;
    tracing::info!(role = ?outcome.session.role, user = %outcome.session.user.name, "login");

    Ok(Json(LoginResponse {
        role: outcome.session.role,
        user: outcome.session.user,
        default_view: outcome.default_view,
    }))
}

/// GET /api/auth/session
pub async fn session(State(state): State<ServerState>) -> Json<SessionResponse> {
    let current = state.sessions.current();
    Json(SessionResponse {
        logged_in: current.is_some(),
        session: current,
    })
}

/// POST /api/auth/logout
pub async fn logout(State(state): State<ServerState>) -> Json<SessionResponse> {
    state.sessions.clear();
    tracing::info!("logout");
    Json(SessionResponse {
        logged_in: false,
        session: None,
    })
}

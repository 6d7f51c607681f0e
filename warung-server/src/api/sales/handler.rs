//! Sales and checkout handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::checkout::{self, CheckoutRequest, receipt};
use crate::core::ServerState;
use crate::reporting::{self, SalesSummary};
use crate::store::repository::SaleRepository;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::Sale;

/// GET /api/sales
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Sale>>> {
    crate::api::require_admin(&state)?;
    Ok(Json(SaleRepository::new(state.store.clone()).find_all()))
}

/// GET /api/sales/summary
///
/// Dashboard aggregates over the full sales history.
pub async fn summary(State(state): State<ServerState>) -> AppResult<Json<SalesSummary>> {
    crate::api::require_admin(&state)?;
    let sales = SaleRepository::new(state.store.clone()).find_all();
    Ok(Json(reporting::summarize(&sales)))
}

/// GET /api/sales/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Sale>> {
    crate::api::require_admin(&state)?;
    let sale = SaleRepository::new(state.store.clone())
        .find_by_id(&id)
        .ok_or_else(|| AppError::new(ErrorCode::SaleNotFound).with_detail("id", id))?;
    Ok(Json(sale))
}

#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    pub sale: Sale,
    /// Plain-text receipt for the print hand-off
    pub receipt: String,
}

/// POST /api/checkout
///
/// Requires an active session; the cashier name on the sale comes from it.
pub async fn checkout(
    State(state): State<ServerState>,
    Json(req): Json<CheckoutRequest>,
) -> AppResult<Json<CheckoutResponse>> {
    let session = state
        .sessions
        .current()
        .ok_or_else(|| AppError::new(ErrorCode::NotAuthenticated))?;

    let sale = checkout::perform(&state.store, &session.user.name, req)?;
    let receipt = receipt::render(&sale);

    Ok(Json(CheckoutResponse { sale, receipt }))
}

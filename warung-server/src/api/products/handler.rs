//! Product handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use validator::Validate;

use crate::core::ServerState;
use crate::store::repository::ProductRepository;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{CategoryFilter, Product, ProductCreate, ProductUpdate};

#[derive(Debug, Deserialize)]
pub struct ProductListQuery {
    pub search: Option<String>,
    pub category: Option<String>,
}

/// GET /api/products?search=&category=
///
/// Without query parameters this returns the whole catalog; with them it
/// runs the memoized catalog filter.
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ProductListQuery>,
) -> AppResult<Json<Vec<Product>>> {
    crate::api::require_session(&state)?;
    let repo = ProductRepository::new(state.store.clone());
    // Version and docs from the same snapshot, or the cache could pin a
    // stale list under a newer version
    let (version, products) = repo.snapshot_all();

    if query.search.is_none() && query.category.is_none() {
        return Ok(Json(products));
    }

    let search = query.search.unwrap_or_default();
    let filter = match query.category.as_deref() {
        None => CategoryFilter::Semua,
        Some(raw) => CategoryFilter::parse(raw).ok_or_else(|| {
            AppError::new(ErrorCode::CategoryUnknown).with_detail("category", raw)
        })?,
    };

    let filtered = state.catalog.filter(version, &products, &search, filter);
    Ok(Json(filtered))
}

/// GET /api/products/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Product>> {
    crate::api::require_session(&state)?;
    let repo = ProductRepository::new(state.store.clone());
    let product = repo
        .find_by_id(&id)
        .ok_or_else(|| AppError::new(ErrorCode::ProductNotFound).with_detail("id", id))?;
    Ok(Json(product))
}

/// POST /api/products
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ProductCreate>,
) -> AppResult<Json<Product>> {
    crate::api::require_admin(&state)?;
    payload.validate()?;
    let repo = ProductRepository::new(state.store.clone());
    let product = repo.create(payload)?;
    tracing::info!(id = ?product.id, name = %product.name, "product created");
    Ok(Json(product))
}

/// PUT /api/products/{id}
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ProductUpdate>,
) -> AppResult<Json<Product>> {
    crate::api::require_admin(&state)?;
    if payload.price.is_some_and(|p| p < 0) {
        return Err(AppError::new(ErrorCode::ProductInvalidPrice));
    }
    if payload.stock.is_some_and(|s| s < 0) {
        return Err(AppError::validation("stock must not be negative"));
    }
    let repo = ProductRepository::new(state.store.clone());
    let product = repo.update(&id, payload)?;
    tracing::info!(id = %id, "product updated");
    Ok(Json(product))
}

/// DELETE /api/products/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    crate::api::require_admin(&state)?;
    let repo = ProductRepository::new(state.store.clone());
    repo.delete(&id)?;
    tracing::info!(id = %id, "product deleted");
    Ok(Json(true))
}

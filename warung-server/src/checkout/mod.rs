//! Checkout orchestration
//!
//! The server is authoritative: request lines are rebuilt against current
//! product records, the promo is re-resolved, totals are recomputed, and
//! the sale plus every stock decrement commit in one atomic store batch.
//! Insufficient stock anywhere fails the whole checkout with no partial
//! writes.

pub mod receipt;

use crate::cart;
use crate::marketing;
use crate::store::repository::{ProductRepository, PromoRepository, SaleRepository};
use crate::store::{Collection, DocStore, WriteOp};
use crate::utils::now_ms;
use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{CartLine, PaymentMethod, Sale, SaleItem};
use std::sync::Arc;

/// One requested cart line, resolved server-side
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutLine {
    pub product_id: String,
    pub quantity: u32,
}

/// Checkout request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutRequest {
    pub lines: Vec<CheckoutLine>,
    pub payment_method: PaymentMethod,
    pub promo_code: Option<String>,
}

/// Run a checkout to completion
pub fn perform(store: &Arc<DocStore>, staff_name: &str, req: CheckoutRequest) -> AppResult<Sale> {
    if req.lines.is_empty() {
        return Err(AppError::new(ErrorCode::CartEmpty));
    }

    let products = ProductRepository::new(store.clone());
    let promos = PromoRepository::new(store.clone());
    let sales = SaleRepository::new(store.clone());

    // Rebuild every line against current records. The stock check here is
    // an early rejection; the decrement ops re-check under the write lock.
    let mut lines: Vec<CartLine> = Vec::with_capacity(req.lines.len());
    for line in &req.lines {
        if line.quantity == 0 {
            return Err(AppError::invalid("quantity must be at least 1")
                .with_detail("product_id", line.product_id.clone()));
        }
        if lines.iter().any(|l| l.product_id == line.product_id) {
            return Err(AppError::invalid("duplicate line for product")
                .with_detail("product_id", line.product_id.clone()));
        }
        let product = products
            .find_by_id(&line.product_id)
            .ok_or_else(|| {
                AppError::new(ErrorCode::ProductNotFound)
                    .with_detail("product_id", line.product_id.clone())
            })?;
        if product.stock < line.quantity as i64 {
            return Err(AppError::new(ErrorCode::InsufficientStock)
                .with_detail("product_id", line.product_id.clone())
                .with_detail("requested", line.quantity)
                .with_detail("available", product.stock));
        }
        let mut cart_line = CartLine::from_product(&product)
            .ok_or_else(|| AppError::internal("stored product has no id"))?;
        cart_line.quantity = line.quantity;
        lines.push(cart_line);
    }

    // Re-resolve the promo; an unknown code fails the checkout
    let promo = match &req.promo_code {
        Some(code) => {
            let all = promos.find_all();
            Some(marketing::lookup_code(&all, code)?.clone())
        }
        None => None,
    };

    let totals = cart::totals(&lines, promo.as_ref());

    let sale = Sale {
        id: None,
        items: lines
            .iter()
            .map(|l| SaleItem {
                product_id: l.product_id.clone(),
                name: l.name.clone(),
                price: l.price,
                quantity: l.quantity,
            })
            .collect(),
        subtotal: totals.subtotal,
        discount: totals.discount,
        total: totals.total,
        payment_method: req.payment_method,
        timestamp: now_ms(),
        staff_name: staff_name.to_string(),
        promo_code: promo.as_ref().map(|p| p.code.clone()),
    };

    // One batch: the sale plus one stock decrement per distinct line. The
    // decrement re-checks stock inside the store's write lock, so two
    // concurrent checkouts cannot both spend the same unit.
    let (sale_id, sale_op) = sales.create_op(&sale);
    let mut ops = vec![sale_op];
    for line in &lines {
        ops.push(WriteOp::Decrement {
            collection: Collection::Products,
            id: line.product_id.clone(),
            field: "stock",
            by: line.quantity as i64,
        });
    }
    store.apply(&ops)?;

    tracing::info!(sale_id = %sale_id, total = sale.total, lines = sale.items.len(),
        "checkout committed");

    Ok(Sale {
        id: Some(sale_id),
        ..sale
    })
}

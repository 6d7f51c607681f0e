//! Cart line model

use super::product::Product;
use serde::{Deserialize, Serialize};

/// One line of a transient cart
///
/// Carries a snapshot of the product at add time. Never persisted; the
/// server re-resolves every line against current records at checkout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: String,
    pub name: String,
    /// Unit price at snapshot time
    pub price: i64,
    /// Stock at snapshot time; upper bound for quantity
    pub stock: i64,
    pub quantity: u32,
}

impl CartLine {
    /// Snapshot a product into a new line at quantity 1
    pub fn from_product(product: &Product) -> Option<Self> {
        let id = product.id.clone()?;
        Some(Self {
            product_id: id,
            name: product.name.clone(),
            price: product.price,
            stock: product.stock,
            quantity: 1,
        })
    }

    /// Line total in whole currency units
    pub fn line_total(&self) -> i64 {
        self.price * self.quantity as i64
    }
}

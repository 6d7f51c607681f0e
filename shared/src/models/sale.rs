//! Sale Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Payment method accepted at the stall
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    Tunai,
    Qris,
}

impl PaymentMethod {
    pub const fn name(&self) -> &'static str {
        match self {
            PaymentMethod::Tunai => "Tunai",
            PaymentMethod::Qris => "QRIS",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One purchased line inside a sale record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleItem {
    pub product_id: String,
    pub name: String,
    pub price: i64,
    pub quantity: u32,
}

impl SaleItem {
    pub fn line_total(&self) -> i64 {
        self.price * self.quantity as i64
    }
}

/// Sale record
///
/// Write-once: never mutated or deleted after checkout commits it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sale {
    pub id: Option<String>,
    pub items: Vec<SaleItem>,
    pub subtotal: i64,
    pub discount: i64,
    pub total: i64,
    pub payment_method: PaymentMethod,
    /// Checkout time, epoch milliseconds
    pub timestamp: i64,
    pub staff_name: String,
    pub promo_code: Option<String>,
}

//! Promo Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Discount type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromoKind {
    /// Percentage of the subtotal, 0..=100
    Percentage,
    /// Fixed amount in whole currency units
    Fixed,
}

/// Promo entity
///
/// Codes are stored uppercase and unique case-insensitively.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Promo {
    pub id: Option<String>,
    pub code: String,
    pub kind: PromoKind,
    pub value: i64,
    /// Creation time, epoch milliseconds
    pub created_at: i64,
}

/// Create promo payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PromoCreate {
    #[validate(length(min = 1, message = "code is required"))]
    pub code: String,
    pub kind: PromoKind,
    #[validate(range(min = 1, message = "value must be positive"))]
    pub value: i64,
}

//! Error category classification
//!
//! Categories are derived from the numeric range of an error code, so a
//! client can route errors without matching on every variant.

use super::codes::ErrorCode;

/// High-level error category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// 0xxx: general errors
    General,
    /// 1xxx: authentication errors
    Auth,
    /// 2xxx: permission errors
    Permission,
    /// 4xxx: checkout errors
    Checkout,
    /// 5xxx: promo errors
    Promo,
    /// 6xxx: product errors
    Product,
    /// 8xxx: staff errors
    Staff,
    /// 9xxx: system errors
    System,
}

impl ErrorCategory {
    /// Classify an error code by its numeric range
    pub const fn from_code(code: ErrorCode) -> Self {
        match code.code() {
            0..=999 => ErrorCategory::General,
            1000..=1999 => ErrorCategory::Auth,
            2000..=2999 => ErrorCategory::Permission,
            4000..=4999 => ErrorCategory::Checkout,
            5000..=5999 => ErrorCategory::Promo,
            6000..=6999 => ErrorCategory::Product,
            8000..=8999 => ErrorCategory::Staff,
            _ => ErrorCategory::System,
        }
    }

    /// Category name for logging
    pub const fn name(&self) -> &'static str {
        match self {
            ErrorCategory::General => "General",
            ErrorCategory::Auth => "Auth",
            ErrorCategory::Permission => "Permission",
            ErrorCategory::Checkout => "Checkout",
            ErrorCategory::Promo => "Promo",
            ErrorCategory::Product => "Product",
            ErrorCategory::Staff => "Staff",
            ErrorCategory::System => "System",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_ranges() {
        assert_eq!(
            ErrorCategory::from_code(ErrorCode::ValidationFailed),
            ErrorCategory::General
        );
        assert_eq!(
            ErrorCategory::from_code(ErrorCode::InvalidPin),
            ErrorCategory::Auth
        );
        assert_eq!(
            ErrorCategory::from_code(ErrorCode::AdminRequired),
            ErrorCategory::Permission
        );
        assert_eq!(
            ErrorCategory::from_code(ErrorCode::InsufficientStock),
            ErrorCategory::Checkout
        );
        assert_eq!(
            ErrorCategory::from_code(ErrorCode::PromoNotFound),
            ErrorCategory::Promo
        );
        assert_eq!(
            ErrorCategory::from_code(ErrorCode::ProductNotFound),
            ErrorCategory::Product
        );
        assert_eq!(
            ErrorCategory::from_code(ErrorCode::StaffPinInvalid),
            ErrorCategory::Staff
        );
        assert_eq!(
            ErrorCategory::from_code(ErrorCode::StoreError),
            ErrorCategory::System
        );
    }

    #[test]
    fn test_category_names() {
        assert_eq!(ErrorCategory::System.name(), "System");
        assert_eq!(ErrorCategory::Checkout.name(), "Checkout");
    }
}

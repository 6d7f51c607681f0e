//! Promo lookup
//!
//! Manual code entry: trim, uppercase, exact match against the stored
//! codes. Codes live uppercase in the store so the match is effectively
//! case-insensitive for the cashier.

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::Promo;

/// Resolve a hand-typed promo code against the promo list
pub fn lookup_code<'a>(promos: &'a [Promo], input: &str) -> AppResult<&'a Promo> {
    let needle = input.trim().to_uppercase();
    promos
        .iter()
        .find(|p| p.code == needle)
        .ok_or_else(|| AppError::new(ErrorCode::PromoNotFound).with_detail("code", needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::PromoKind;

    fn promos() -> Vec<Promo> {
        vec![Promo {
            id: Some("pr-1".into()),
            code: "HEMAT10".into(),
            kind: PromoKind::Percentage,
            value: 10,
            created_at: 0,
        }]
    }

    #[test]
    fn test_lookup_uppercases_input() {
        let list = promos();
        assert!(lookup_code(&list, "hemat10").is_ok());
        assert!(lookup_code(&list, " Hemat10 ").is_ok());
    }

    #[test]
    fn test_lookup_requires_exact_match() {
        let list = promos();
        let err = lookup_code(&list, "HEMAT").unwrap_err();
        assert_eq!(err.code, ErrorCode::PromoNotFound);
    }
}

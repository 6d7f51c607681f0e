//! Cart engine
//!
//! A cart is transient and process-local; lines carry product snapshots
//! and quantities are clamped to the snapshot stock. Totals are derived
//! on demand, never stored.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{CartLine, Product, Promo, PromoKind};

/// Derived cart totals, whole currency units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    pub subtotal: i64,
    pub discount: i64,
    pub total: i64,
}

/// Transient cart
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add one unit of a product
    ///
    /// A product without stock is refused. Adding an already-carted
    /// product increments its line, clamped to the snapshot stock.
    pub fn add(&mut self, product: &Product) -> AppResult<()> {
        if !product.is_purchasable() {
            return Err(AppError::new(ErrorCode::ProductOutOfStock)
                .with_detail("product", product.name.clone()));
        }
        let id = product
            .id
            .as_deref()
            .ok_or_else(|| AppError::invalid("product has no id"))?;

        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == id) {
            let max = line.stock.clamp(1, u32::MAX as i64) as u32;
            line.quantity = (line.quantity + 1).min(max);
        } else if let Some(line) = CartLine::from_product(product) {
            self.lines.push(line);
        }
        Ok(())
    }

    /// Set a line's quantity, clamped to `1..=stock`
    pub fn set_quantity(&mut self, product_id: &str, quantity: u32) -> AppResult<()> {
        let line = self
            .lines
            .iter_mut()
            .find(|l| l.product_id == product_id)
            .ok_or_else(|| AppError::not_found(format!("cart line {product_id}")))?;
        let max = line.stock.clamp(1, u32::MAX as i64) as u32;
        line.quantity = quantity.clamp(1, max);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Compute subtotal, discount and total for this cart under an
    /// optional promo
    pub fn totals(&self, promo: Option<&Promo>) -> Totals {
        totals(&self.lines, promo)
    }
}

/// Totals for any slice of lines
pub fn totals(lines: &[CartLine], promo: Option<&Promo>) -> Totals {
    let subtotal: i64 = lines.iter().map(|l| l.line_total()).sum();
    let discount = match promo {
        // An empty cart keeps the promo inert
        Some(p) if subtotal > 0 => discount_for(subtotal, p),
        _ => 0,
    };
    Totals {
        subtotal,
        discount,
        total: (subtotal - discount).max(0),
    }
}

/// Discount amount for a non-empty subtotal
///
/// Percentage promos round half-up to a whole currency unit. Fixed promos
/// apply in full even past the subtotal; the total floors at zero.
fn discount_for(subtotal: i64, promo: &Promo) -> i64 {
    match promo.kind {
        PromoKind::Percentage => {
            let exact = Decimal::from(subtotal) * Decimal::from(promo.value) / Decimal::from(100);
            exact
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
                .to_i64()
                .unwrap_or(0)
        }
        PromoKind::Fixed => promo.value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Category;

    fn product(id: &str, price: i64, stock: i64) -> Product {
        Product {
            id: Some(id.into()),
            name: format!("Item {id}"),
            price,
            stock,
            category: Category::Bakso,
            image: String::new(),
        }
    }

    fn promo(kind: PromoKind, value: i64) -> Promo {
        Promo {
            id: Some("pr-1".into()),
            code: "PROMO".into(),
            kind,
            value,
            created_at: 0,
        }
    }

    #[test]
    fn test_add_twice_increments_quantity() {
        let mut cart = Cart::new();
        let p = product("p-1", 10000, 5);
        cart.add(&p).unwrap();
        cart.add(&p).unwrap();
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
    }

    #[test]
    fn test_add_clamps_at_stock() {
        let mut cart = Cart::new();
        let p = product("p-1", 10000, 2);
        for _ in 0..5 {
            cart.add(&p).unwrap();
        }
        assert_eq!(cart.lines()[0].quantity, 2);
    }

    #[test]
    fn test_out_of_stock_refused() {
        let mut cart = Cart::new();
        let p = product("p-1", 10000, 0);
        let err = cart.add(&p).unwrap_err();
        assert_eq!(err.code, ErrorCode::ProductOutOfStock);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_clamps_both_ends() {
        let mut cart = Cart::new();
        let p = product("p-1", 10000, 4);
        cart.add(&p).unwrap();

        cart.set_quantity("p-1", 0).unwrap();
        assert_eq!(cart.lines()[0].quantity, 1);

        cart.set_quantity("p-1", 99).unwrap();
        assert_eq!(cart.lines()[0].quantity, 4);

        cart.set_quantity("p-1", 3).unwrap();
        assert_eq!(cart.lines()[0].quantity, 3);
    }

    #[test]
    fn test_fixed_discount() {
        let mut cart = Cart::new();
        let p = product("p-1", 10000, 5);
        cart.add(&p).unwrap();
        cart.set_quantity("p-1", 2).unwrap();

        let t = cart.totals(Some(&promo(PromoKind::Fixed, 5000)));
        assert_eq!(t.subtotal, 20000);
        assert_eq!(t.discount, 5000);
        assert_eq!(t.total, 15000);
    }

    #[test]
    fn test_percentage_discount() {
        let mut cart = Cart::new();
        cart.add(&product("p-1", 10000, 5)).unwrap();

        let t = cart.totals(Some(&promo(PromoKind::Percentage, 50)));
        assert_eq!(t.subtotal, 10000);
        assert_eq!(t.discount, 5000);
        assert_eq!(t.total, 5000);
    }

    #[test]
    fn test_percentage_rounds_half_up() {
        let mut cart = Cart::new();
        // 125 * 10% = 12.5 -> 13
        cart.add(&product("p-1", 125, 5)).unwrap();
        let t = cart.totals(Some(&promo(PromoKind::Percentage, 10)));
        assert_eq!(t.discount, 13);
        assert_eq!(t.total, 112);
    }

    #[test]
    fn test_fixed_discount_exceeding_subtotal_floors_total() {
        let mut cart = Cart::new();
        cart.add(&product("p-1", 3000, 5)).unwrap();
        let t = cart.totals(Some(&promo(PromoKind::Fixed, 5000)));
        assert_eq!(t.subtotal, 3000);
        assert_eq!(t.discount, 5000);
        assert_eq!(t.total, 0);
    }

    #[test]
    fn test_empty_cart_keeps_promo_inert() {
        let cart = Cart::new();
        let t = cart.totals(Some(&promo(PromoKind::Fixed, 5000)));
        assert_eq!(t.subtotal, 0);
        assert_eq!(t.discount, 0);
        assert_eq!(t.total, 0);
    }

    #[test]
    fn test_no_promo_no_discount() {
        let mut cart = Cart::new();
        cart.add(&product("p-1", 7000, 2)).unwrap();
        let t = cart.totals(None);
        assert_eq!(t.subtotal, 7000);
        assert_eq!(t.discount, 0);
        assert_eq!(t.total, 7000);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add(&product("p-1", 7000, 2)).unwrap();
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.totals(None).subtotal, 0);
    }
}

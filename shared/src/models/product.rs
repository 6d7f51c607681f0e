//! Product Model

use super::category::Category;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Product entity
///
/// Prices are integer currency units (IDR, no cents).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: Option<String>,
    pub name: String,
    /// Unit price in whole currency units
    pub price: i64,
    /// Remaining stock; a product at 0 cannot be added to a cart
    pub stock: i64,
    pub category: Category,
    pub image: String,
}

impl Product {
    /// Whether the product can currently be sold
    pub fn is_purchasable(&self) -> bool {
        self.stock > 0
    }
}

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProductCreate {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(range(min = 0, message = "price must not be negative"))]
    pub price: i64,
    #[validate(range(min = 0, message = "stock must not be negative"))]
    pub stock: i64,
    pub category: Category,
    pub image: Option<String>,
}

/// Update product payload (partial)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub price: Option<i64>,
    pub stock: Option<i64>,
    pub category: Option<Category>,
    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_purchasable() {
        let mut p = Product {
            id: Some("p-1".into()),
            name: "Bakso Urat".into(),
            price: 15000,
            stock: 3,
            category: Category::Bakso,
            image: String::new(),
        };
        assert!(p.is_purchasable());
        p.stock = 0;
        assert!(!p.is_purchasable());
    }

    #[test]
    fn test_create_validation() {
        let bad = ProductCreate {
            name: String::new(),
            price: -1,
            stock: 0,
            category: Category::Mie,
            image: None,
        };
        assert!(bad.validate().is_err());
    }
}

//! Product categories
//!
//! Categories form a closed set and serialize with their Indonesian display
//! names so stored documents stay readable for the stall owner.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Product category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Bakso,
    Mie,
    Minuman,
    Tambahan,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Bakso,
        Category::Mie,
        Category::Minuman,
        Category::Tambahan,
    ];

    /// Display name as stored and shown
    pub const fn name(&self) -> &'static str {
        match self {
            Category::Bakso => "Bakso",
            Category::Mie => "Mie",
            Category::Minuman => "Minuman",
            Category::Tambahan => "Tambahan",
        }
    }

    /// Parse a display name; case-sensitive since the set is fixed
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == s)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Catalog filter: a concrete category or the "all" sentinel
///
/// `Semua` is a filter value only; it never appears on a stored product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryFilter {
    Semua,
    Only(Category),
}

impl CategoryFilter {
    /// Whether a product category passes this filter
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::Semua => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }

    /// Parse from a query-string value; `"Semua"`, empty or missing
    /// select everything
    pub fn parse(s: &str) -> Option<Self> {
        if s.is_empty() || s == "Semua" {
            return Some(CategoryFilter::Semua);
        }
        Category::parse(s).map(CategoryFilter::Only)
    }
}

impl Default for CategoryFilter {
    fn default() -> Self {
        CategoryFilter::Semua
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::Semua => f.write_str("Semua"),
            CategoryFilter::Only(c) => f.write_str(c.name()),
        }
    }
}

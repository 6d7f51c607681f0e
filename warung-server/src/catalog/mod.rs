//! Catalog filtering
//!
//! Pure filter over the product list plus a memoizing wrapper keyed on
//! the collection version and the filter inputs, so repeated identical
//! queries against an unchanged catalog skip the scan.

use parking_lot::Mutex;
use shared::models::{CategoryFilter, Product};

/// Filter products by search text and category
///
/// Search matches case-insensitively on the name; `Semua` passes every
/// category. Order is preserved, so the identity filter returns the list
/// unchanged.
pub fn filter_products(
    products: &[Product],
    search: &str,
    filter: CategoryFilter,
) -> Vec<Product> {
    let needle = search.to_lowercase();
    products
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&needle) && filter.matches(p.category))
        .cloned()
        .collect()
}

#[derive(Clone, PartialEq)]
struct CacheKey {
    version: u64,
    search: String,
    filter: CategoryFilter,
}

/// Memoized catalog filter
///
/// Caches the last result; any change to the products collection bumps
/// the version and invalidates it.
#[derive(Default)]
pub struct CatalogCache {
    last: Mutex<Option<(CacheKey, Vec<Product>)>>,
}

impl std::fmt::Debug for CatalogCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogCache").finish_non_exhaustive()
    }
}

impl CatalogCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(
        &self,
        version: u64,
        products: &[Product],
        search: &str,
        filter: CategoryFilter,
    ) -> Vec<Product> {
        let key = CacheKey {
            version,
            search: search.to_string(),
            filter,
        };
        let mut last = self.last.lock();
        if let Some((cached_key, cached)) = last.as_ref()
            && *cached_key == key
        {
            return cached.clone();
        }
        let result = filter_products(products, search, filter);
        *last = Some((key, result.clone()));
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Category;

    fn catalog() -> Vec<Product> {
        let mk = |id: &str, name: &str, category| Product {
            id: Some(id.into()),
            name: name.into(),
            price: 10000,
            stock: 5,
            category,
            image: String::new(),
        };
        vec![
            mk("p-1", "Bakso Urat", Category::Bakso),
            mk("p-2", "Mie Ayam", Category::Mie),
            mk("p-3", "Es Teh", Category::Minuman),
            mk("p-4", "Bakso Telur", Category::Bakso),
        ]
    }

    #[test]
    fn test_identity_filter_returns_full_list_in_order() {
        let products = catalog();
        let result = filter_products(&products, "", CategoryFilter::Semua);
        assert_eq!(result.len(), 4);
        let ids: Vec<_> = result.iter().map(|p| p.id.clone().unwrap()).collect();
        assert_eq!(ids, ["p-1", "p-2", "p-3", "p-4"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let products = catalog();
        let result = filter_products(&products, "bAkSo", CategoryFilter::Semua);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_search_and_category_combine() {
        let products = catalog();
        let result =
            filter_products(&products, "telur", CategoryFilter::Only(Category::Bakso));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Bakso Telur");

        let none = filter_products(&products, "telur", CategoryFilter::Only(Category::Mie));
        assert!(none.is_empty());
    }

    #[test]
    fn test_cache_invalidates_on_version_change() {
        let cache = CatalogCache::new();
        let products = catalog();

        let first = cache.filter(1, &products, "bakso", CategoryFilter::Semua);
        assert_eq!(first.len(), 2);

        // Same key: served from cache even with a different slice
        let cached = cache.filter(1, &[], "bakso", CategoryFilter::Semua);
        assert_eq!(cached.len(), 2);

        // Version bump: recomputed
        let fresh = cache.filter(2, &[], "bakso", CategoryFilter::Semua);
        assert!(fresh.is_empty());
    }
}

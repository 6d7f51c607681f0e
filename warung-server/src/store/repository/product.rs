//! Product repository

use crate::store::{Collection, DocStore, StoreError, StoreResult};
use serde_json::{Value, json};
use shared::models::{Product, ProductCreate, ProductUpdate};
use std::sync::Arc;

pub struct ProductRepository {
    store: Arc<DocStore>,
}

impl ProductRepository {
    pub fn new(store: Arc<DocStore>) -> Self {
        Self { store }
    }

    /// All products in insertion order
    pub fn find_all(&self) -> Vec<Product> {
        self.snapshot_all().1
    }

    /// Version and products taken from one snapshot, so a caller keying a
    /// cache on the version can never pair it with docs from another read
    pub fn snapshot_all(&self) -> (u64, Vec<Product>) {
        let snap = self.store.snapshot(Collection::Products);
        let products = snap
            .docs
            .iter()
            .filter_map(|d| super::decode(Collection::Products, d))
            .collect();
        (snap.version, products)
    }

    pub fn find_by_id(&self, id: &str) -> Option<Product> {
        self.store
            .get(Collection::Products, id)
            .and_then(|d| super::decode(Collection::Products, &d))
    }

    pub fn create(&self, payload: ProductCreate) -> StoreResult<Product> {
        let product = Product {
            id: None,
            name: payload.name,
            price: payload.price,
            stock: payload.stock,
            category: payload.category,
            image: payload.image.unwrap_or_default(),
        };
        let id = self
            .store
            .create(Collection::Products, super::encode(&product))?;
        Ok(Product {
            id: Some(id),
            ..product
        })
    }

    pub fn update(&self, id: &str, payload: ProductUpdate) -> StoreResult<Product> {
        let mut patch = serde_json::Map::new();
        if let Some(name) = payload.name {
            patch.insert("name".into(), json!(name));
        }
        if let Some(price) = payload.price {
            patch.insert("price".into(), json!(price));
        }
        if let Some(stock) = payload.stock {
            patch.insert("stock".into(), json!(stock));
        }
        if let Some(category) = payload.category {
            patch.insert("category".into(), json!(category));
        }
        if let Some(image) = payload.image {
            patch.insert("image".into(), json!(image));
        }
        self.store
            .merge(Collection::Products, id, Value::Object(patch))?;
        self.find_by_id(id).ok_or_else(|| StoreError::NotFound {
            collection: Collection::Products.name(),
            id: id.to_string(),
        })
    }

    pub fn delete(&self, id: &str) -> StoreResult<()> {
        self.store.delete(Collection::Products, id)
    }
}

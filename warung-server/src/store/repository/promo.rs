//! Promo repository

use crate::store::{Collection, DocStore, StoreResult, WriteOp};
use crate::utils::now_ms;
use serde_json::json;
use shared::models::{Promo, PromoCreate};
use std::sync::Arc;

pub struct PromoRepository {
    store: Arc<DocStore>,
}

impl PromoRepository {
    pub fn new(store: Arc<DocStore>) -> Self {
        Self { store }
    }

    pub fn find_all(&self) -> Vec<Promo> {
        let snap = self.store.snapshot(Collection::Promos);
        snap.docs
            .iter()
            .filter_map(|d| super::decode(Collection::Promos, d))
            .collect()
    }

    pub fn find_by_id(&self, id: &str) -> Option<Promo> {
        self.store
            .get(Collection::Promos, id)
            .and_then(|d| super::decode(Collection::Promos, &d))
    }

    /// Create a promo, storing the code uppercase. Code uniqueness is
    /// enforced inside the store batch, so concurrent creates of the same
    /// code cannot both land.
    pub fn create(&self, payload: PromoCreate) -> StoreResult<Promo> {
        let promo = Promo {
            id: None,
            code: payload.code.trim().to_uppercase(),
            kind: payload.kind,
            value: payload.value,
            created_at: now_ms(),
        };
        let id = uuid::Uuid::new_v4().to_string();
        self.store.apply(&[
            WriteOp::EnsureAbsent {
                collection: Collection::Promos,
                field: "code",
                value: json!(promo.code),
            },
            WriteOp::Create {
                collection: Collection::Promos,
                id: id.clone(),
                data: super::encode(&promo),
            },
        ])?;
        Ok(Promo {
            id: Some(id),
            ..promo
        })
    }

    pub fn delete(&self, id: &str) -> StoreResult<()> {
        self.store.delete(Collection::Promos, id)
    }
}

//! Sale repository
//!
//! Sales are write-once: there is no update or delete here. Inserts go
//! through the atomic checkout batch, so creation only builds the op.

use crate::store::{Collection, DocStore, WriteOp};
use shared::models::Sale;
use std::sync::Arc;

pub struct SaleRepository {
    store: Arc<DocStore>,
}

impl SaleRepository {
    pub fn new(store: Arc<DocStore>) -> Self {
        Self { store }
    }

    /// All sales, most recent first
    pub fn find_all(&self) -> Vec<Sale> {
        let snap = self.store.snapshot(Collection::Sales);
        let mut sales: Vec<Sale> = snap
            .docs
            .iter()
            .filter_map(|d| super::decode(Collection::Sales, d))
            .collect();
        sales.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        sales
    }

    pub fn find_by_id(&self, id: &str) -> Option<Sale> {
        self.store
            .get(Collection::Sales, id)
            .and_then(|d| super::decode(Collection::Sales, &d))
    }

    /// Build the insert op for a checkout batch, returning the generated id
    pub fn create_op(&self, sale: &Sale) -> (String, WriteOp) {
        let id = uuid::Uuid::new_v4().to_string();
        (
            id.clone(),
            WriteOp::Create {
                collection: Collection::Sales,
                id,
                data: super::encode(sale),
            },
        )
    }
}

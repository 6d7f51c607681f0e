//! Staff repository
//!
//! PINs are hashed before storage; the repository never sees plaintext
//! again after create/update.

use crate::session::credential::PinCredential;
use crate::store::{Collection, DocStore, StoreError, StoreResult};
use crate::utils::now_ms;
use serde_json::{Value, json};
use shared::models::{Staff, StaffCreate, StaffUpdate};
use std::sync::Arc;

pub struct StaffRepository {
    store: Arc<DocStore>,
}

impl StaffRepository {
    pub fn new(store: Arc<DocStore>) -> Self {
        Self { store }
    }

    pub fn find_all(&self) -> Vec<Staff> {
        let snap = self.store.snapshot(Collection::Staff);
        snap.docs
            .iter()
            .filter_map(|d| super::decode(Collection::Staff, d))
            .collect()
    }

    pub fn find_by_id(&self, id: &str) -> Option<Staff> {
        self.store
            .get(Collection::Staff, id)
            .and_then(|d| super::decode(Collection::Staff, &d))
    }

    pub fn create(&self, payload: StaffCreate) -> StoreResult<Staff> {
        let pin =
            PinCredential::hash(&payload.pin).map_err(|e| StoreError::Credential(e.message))?;
        let staff = Staff {
            id: None,
            name: payload.name,
            position: payload.position,
            pin,
            joined_at: now_ms(),
        };
        let id = self.store.create(Collection::Staff, super::encode(&staff))?;
        Ok(Staff {
            id: Some(id),
            ..staff
        })
    }

    pub fn update(&self, id: &str, payload: StaffUpdate) -> StoreResult<Staff> {
        let mut patch = serde_json::Map::new();
        if let Some(name) = payload.name {
            patch.insert("name".into(), json!(name));
        }
        if let Some(position) = payload.position {
            patch.insert("position".into(), json!(position));
        }
        if let Some(pin) = payload.pin {
            let hashed =
                PinCredential::hash(&pin).map_err(|e| StoreError::Credential(e.message))?;
            patch.insert("pin".into(), json!(hashed));
        }
        self.store.merge(Collection::Staff, id, Value::Object(patch))?;
        self.find_by_id(id).ok_or_else(|| StoreError::NotFound {
            collection: Collection::Staff.name(),
            id: id.to_string(),
        })
    }

    pub fn delete(&self, id: &str) -> StoreResult<()> {
        self.store.delete(Collection::Staff, id)
    }
}

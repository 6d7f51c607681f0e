//! Admin settings repository
//!
//! The settings collection holds a single document under a fixed id.

use crate::store::{Collection, DocStore, StoreResult};
use shared::models::AdminConfig;
use std::sync::Arc;

const ADMIN_DOC_ID: &str = "admin";

pub struct SettingsRepository {
    store: Arc<DocStore>,
}

impl SettingsRepository {
    pub fn new(store: Arc<DocStore>) -> Self {
        Self { store }
    }

    pub fn admin_config(&self) -> Option<AdminConfig> {
        self.store
            .get(Collection::Settings, ADMIN_DOC_ID)
            .and_then(|d| super::decode(Collection::Settings, &d))
    }

    pub fn set_admin_config(&self, config: &AdminConfig) -> StoreResult<()> {
        self.store
            .set(Collection::Settings, ADMIN_DOC_ID, super::encode(config))
    }
}

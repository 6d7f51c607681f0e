//! Server state
//!
//! `ServerState` holds shared references to every long-lived component.
//! It is cheap to clone and flows through axum as router state.

use std::sync::Arc;

use crate::catalog::CatalogCache;
use crate::core::Config;
use crate::session::{PinCredential, SessionStore};
use crate::store::repository::SettingsRepository;
use crate::store::{DocStore, ResourceVersions};
use shared::models::AdminConfig;

#[derive(Clone, Debug)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Embedded document store
    pub store: Arc<DocStore>,
    /// Persisted login session
    pub sessions: Arc<SessionStore>,
    /// Memoized catalog filter
    pub catalog: Arc<CatalogCache>,
    /// Per-collection version counters
    pub versions: Arc<ResourceVersions>,
}

impl ServerState {
    /// Initialize the full server state
    ///
    /// Creates the work dir layout, opens the store, loads the persisted
    /// session and seeds the admin config on first startup.
    ///
    /// # Panics
    ///
    /// Panics when the work directory or the store cannot be initialized.
    pub fn initialize(config: &Config) -> Self {
        config
            .ensure_work_dir_structure()
            .expect("failed to create work directory structure");

        let versions = Arc::new(ResourceVersions::new());
        let db_path = config.database_dir().join("warung.redb");
        let store = Arc::new(
            DocStore::open(&db_path, versions.clone()).expect("failed to open document store"),
        );

        let sessions = Arc::new(SessionStore::load(config.session_file()));

        let state = Self {
            config: config.clone(),
            store,
            sessions,
            catalog: Arc::new(CatalogCache::new()),
            versions,
        };
        state.seed_admin_config();
        state
    }

    /// Seed the admin config with the default PIN when absent
    fn seed_admin_config(&self) {
        let settings = SettingsRepository::new(self.store.clone());
        if settings.admin_config().is_none() {
            let pin = PinCredential::hash(&self.config.default_admin_pin)
                .expect("failed to hash default admin PIN");
            settings
                .set_admin_config(&AdminConfig::new(pin))
                .expect("failed to seed admin config");
            tracing::info!("seeded admin config with default PIN");
        }
    }
}

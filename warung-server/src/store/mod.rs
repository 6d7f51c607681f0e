//! Embedded document store
//!
//! Collections of JSON documents persisted in redb, mirrored in memory,
//! with full-collection snapshot publication over watch channels. Every
//! mutation republishes the whole collection under a fresh monotonically
//! increasing version; subscribers drop their receiver to unsubscribe.

pub mod repository;

use dashmap::DashMap;
use parking_lot::Mutex;
use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use serde_json::Value;
use shared::error::{AppError, ErrorCode};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::watch;

/// Per-collection version counters
///
/// DashMap-backed so publication from any task is lock-free. Versions start
/// at 0 and increment on every publish.
#[derive(Debug, Default)]
pub struct ResourceVersions {
    versions: DashMap<String, u64>,
}

impl ResourceVersions {
    pub fn new() -> Self {
        Self {
            versions: DashMap::new(),
        }
    }

    /// Increment the version for a resource and return the new value
    pub fn increment(&self, resource: &str) -> u64 {
        let mut entry = self.versions.entry(resource.to_string()).or_insert(0);
        *entry += 1;
        *entry
    }

    /// Current version for a resource, 0 when never published
    pub fn get(&self, resource: &str) -> u64 {
        self.versions.get(resource).map(|v| *v).unwrap_or(0)
    }
}

/// Named collection in the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Products,
    Sales,
    Promos,
    Staff,
    Settings,
}

impl Collection {
    pub const ALL: [Collection; 5] = [
        Collection::Products,
        Collection::Sales,
        Collection::Promos,
        Collection::Staff,
        Collection::Settings,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            Collection::Products => "products",
            Collection::Sales => "sales",
            Collection::Promos => "promos",
            Collection::Staff => "staff",
            Collection::Settings => "settings",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == s)
    }

    fn table(&self) -> TableDefinition<'static, &'static str, &'static [u8]> {
        TableDefinition::new(self.name())
    }
}

/// Raw document: id plus its JSON body
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RawDoc {
    pub id: String,
    pub data: Value,
}

/// Full-collection snapshot as published to subscribers
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Snapshot {
    pub version: u64,
    pub docs: Vec<RawDoc>,
}

/// A single write in an atomic batch
#[derive(Debug, Clone)]
pub enum WriteOp {
    /// Insert a new document; fails if the id already exists
    Create {
        collection: Collection,
        id: String,
        data: Value,
    },
    /// Full replace, upsert
    Set {
        collection: Collection,
        id: String,
        data: Value,
    },
    /// Shallow JSON merge into an existing document
    Merge {
        collection: Collection,
        id: String,
        patch: Value,
    },
    /// Subtract from a numeric field, failing when the result would go
    /// negative; the check runs against the staged document inside the
    /// write lock
    Decrement {
        collection: Collection,
        id: String,
        field: &'static str,
        by: i64,
    },
    /// Assert no document in the collection carries this field value
    EnsureAbsent {
        collection: Collection,
        field: &'static str,
        value: Value,
    },
    /// Remove an existing document
    Delete { collection: Collection, id: String },
}

impl WriteOp {
    fn collection(&self) -> Collection {
        match self {
            WriteOp::Create { collection, .. }
            | WriteOp::Set { collection, .. }
            | WriteOp::Merge { collection, .. }
            | WriteOp::Decrement { collection, .. }
            | WriteOp::EnsureAbsent { collection, .. }
            | WriteOp::Delete { collection, .. } => *collection,
        }
    }
}

/// Store-level error
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("document not found: {collection}/{id}")]
    NotFound { collection: &'static str, id: String },

    #[error("document already exists: {collection}/{id}")]
    AlreadyExists { collection: &'static str, id: String },

    #[error("document body must be a JSON object: {collection}/{id}")]
    NotAnObject { collection: &'static str, id: String },

    #[error("field is not a number: {collection}/{id}.{field}")]
    NotANumber {
        collection: &'static str,
        id: String,
        field: &'static str,
    },

    #[error("insufficient value: {collection}/{id}.{field} has {have}, need {need}")]
    Insufficient {
        collection: &'static str,
        id: String,
        field: &'static str,
        have: i64,
        need: i64,
    },

    #[error("field value already taken: {collection}.{field} = {value}")]
    FieldTaken {
        collection: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("malformed document {collection}/{id}: {source}")]
    Malformed {
        collection: &'static str,
        id: String,
        source: serde_json::Error,
    },

    #[error("credential error: {0}")]
    Credential(String),
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound { collection, id } => {
                AppError::not_found(format!("{collection}/{id}"))
            }
            StoreError::AlreadyExists { collection, id } => {
                AppError::conflict(format!("{collection}/{id} already exists"))
            }
            StoreError::FieldTaken {
                collection,
                field,
                value,
            } => AppError::conflict(format!("{collection}.{field} {value} already taken")),
            StoreError::Insufficient {
                id, have, need, ..
            } => AppError::new(ErrorCode::InsufficientStock)
                .with_detail("product_id", id)
                .with_detail("requested", need)
                .with_detail("available", have),
            other => AppError::store(other.to_string()),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// The embedded document store
///
/// One redb database file, one table per collection, values are JSON
/// bytes keyed by document id. The in-memory mirror preserves insertion
/// order and is the source of every published snapshot.
pub struct DocStore {
    db: Database,
    versions: Arc<ResourceVersions>,
    mirror: DashMap<&'static str, Vec<RawDoc>>,
    channels: HashMap<&'static str, watch::Sender<Snapshot>>,
    // Serializes apply() batches; redb allows one writer anyway
    write_lock: Mutex<()>,
}

impl std::fmt::Debug for DocStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocStore").finish_non_exhaustive()
    }
}

impl DocStore {
    /// Open (or create) the store at the given path and load all
    /// collections into the mirror
    pub fn open(path: &Path, versions: Arc<ResourceVersions>) -> StoreResult<Self> {
        let db = Database::create(path)?;

        // Ensure every table exists before the first read
        let txn = db.begin_write()?;
        for c in Collection::ALL {
            txn.open_table(c.table())?;
        }
        txn.commit()?;

        let mirror = DashMap::new();
        let mut channels = HashMap::new();

        let read = db.begin_read()?;
        for c in Collection::ALL {
            let table = read.open_table(c.table())?;
            let mut docs = Vec::new();
            for entry in table.iter()? {
                let (key, value) = entry?;
                let id = key.value().to_string();
                match serde_json::from_slice::<Value>(value.value()) {
                    Ok(data) => docs.push(RawDoc { id, data }),
                    Err(e) => {
                        tracing::warn!(collection = c.name(), id = %id, error = %e,
                            "skipping unreadable document");
                    }
                }
            }
            tracing::debug!(collection = c.name(), count = docs.len(), "collection loaded");
            let (tx, _rx) = watch::channel(Snapshot {
                version: 0,
                docs: docs.clone(),
            });
            mirror.insert(c.name(), docs);
            channels.insert(c.name(), tx);
        }

        Ok(Self {
            db,
            versions,
            mirror,
            channels,
            write_lock: Mutex::new(()),
        })
    }

    /// Subscribe to a collection's snapshot stream
    ///
    /// The receiver immediately holds the current snapshot; dropping it
    /// releases the subscription.
    pub fn subscribe(&self, collection: Collection) -> watch::Receiver<Snapshot> {
        self.channels[collection.name()].subscribe()
    }

    /// Current snapshot of a collection
    pub fn snapshot(&self, collection: Collection) -> Snapshot {
        self.channels[collection.name()].borrow().clone()
    }

    /// Current version of a collection
    pub fn version(&self, collection: Collection) -> u64 {
        self.versions.get(collection.name())
    }

    /// Insert a document with a generated id, returning the id
    pub fn create(&self, collection: Collection, data: Value) -> StoreResult<String> {
        let id = uuid::Uuid::new_v4().to_string();
        self.apply(&[WriteOp::Create {
            collection,
            id: id.clone(),
            data,
        }])?;
        Ok(id)
    }

    /// Full replace, upsert
    pub fn set(&self, collection: Collection, id: &str, data: Value) -> StoreResult<()> {
        self.apply(&[WriteOp::Set {
            collection,
            id: id.to_string(),
            data,
        }])
    }

    /// Shallow-merge a patch into an existing document
    pub fn merge(&self, collection: Collection, id: &str, patch: Value) -> StoreResult<()> {
        self.apply(&[WriteOp::Merge {
            collection,
            id: id.to_string(),
            patch,
        }])
    }

    /// Remove a document
    pub fn delete(&self, collection: Collection, id: &str) -> StoreResult<()> {
        self.apply(&[WriteOp::Delete {
            collection,
            id: id.to_string(),
        }])
    }

    /// Fetch one document by id
    pub fn get(&self, collection: Collection, id: &str) -> Option<RawDoc> {
        self.mirror
            .get(collection.name())
            .and_then(|docs| docs.iter().find(|d| d.id == id).cloned())
    }

    /// Apply a batch of writes atomically
    ///
    /// All ops commit in one redb write transaction; on any failure nothing
    /// is applied and no snapshot is published. Affected collections are
    /// republished exactly once each after the commit.
    pub fn apply(&self, ops: &[WriteOp]) -> StoreResult<()> {
        if ops.is_empty() {
            return Ok(());
        }
        let _guard = self.write_lock.lock();

        // Stage the batch against working copies of the affected collections
        let mut staged: HashMap<&'static str, Vec<RawDoc>> = HashMap::new();
        for op in ops {
            let name = op.collection().name();
            staged.entry(name).or_insert_with(|| {
                self.mirror
                    .get(name)
                    .map(|d| d.clone())
                    .unwrap_or_default()
            });
        }
        for op in ops {
            let docs = staged
                .get_mut(op.collection().name())
                .expect("staged above");
            Self::stage(docs, op)?;
        }

        // Persist: rewrite each affected collection's changed ids
        let txn = self.db.begin_write()?;
        for op in ops {
            let collection = op.collection();
            let mut table = txn.open_table(collection.table())?;
            match op {
                WriteOp::Delete { id, .. } => {
                    table.remove(id.as_str())?;
                }
                WriteOp::EnsureAbsent { .. } => {}
                WriteOp::Create { id, .. }
                | WriteOp::Set { id, .. }
                | WriteOp::Merge { id, .. }
                | WriteOp::Decrement { id, .. } => {
                    let docs = &staged[collection.name()];
                    if let Some(doc) = docs.iter().find(|d| d.id == *id) {
                        let bytes = serde_json::to_vec(&doc.data).map_err(|e| {
                            StoreError::Malformed {
                                collection: collection.name(),
                                id: id.clone(),
                                source: e,
                            }
                        })?;
                        table.insert(id.as_str(), bytes.as_slice())?;
                    }
                }
            }
        }
        txn.commit()?;

        // Publish each affected collection once
        for (name, docs) in staged {
            let version = self.versions.increment(name);
            self.mirror.insert(name, docs.clone());
            let _ = self.channels[name].send(Snapshot { version, docs });
        }
        Ok(())
    }

    fn stage(docs: &mut Vec<RawDoc>, op: &WriteOp) -> StoreResult<()> {
        match op {
            WriteOp::Create {
                collection,
                id,
                data,
            } => {
                if docs.iter().any(|d| d.id == *id) {
                    return Err(StoreError::AlreadyExists {
                        collection: collection.name(),
                        id: id.clone(),
                    });
                }
                docs.push(RawDoc {
                    id: id.clone(),
                    data: data.clone(),
                });
            }
            WriteOp::Set {
                collection: _,
                id,
                data,
            } => match docs.iter_mut().find(|d| d.id == *id) {
                Some(doc) => doc.data = data.clone(),
                None => docs.push(RawDoc {
                    id: id.clone(),
                    data: data.clone(),
                }),
            },
            WriteOp::Merge {
                collection,
                id,
                patch,
            } => {
                let doc = docs.iter_mut().find(|d| d.id == *id).ok_or_else(|| {
                    StoreError::NotFound {
                        collection: collection.name(),
                        id: id.clone(),
                    }
                })?;
                let target = doc.data.as_object_mut().ok_or_else(|| {
                    StoreError::NotAnObject {
                        collection: collection.name(),
                        id: id.clone(),
                    }
                })?;
                let patch = patch.as_object().ok_or_else(|| StoreError::NotAnObject {
                    collection: collection.name(),
                    id: id.clone(),
                })?;
                for (k, v) in patch {
                    target.insert(k.clone(), v.clone());
                }
            }
            WriteOp::Decrement {
                collection,
                id,
                field,
                by,
            } => {
                let doc = docs.iter_mut().find(|d| d.id == *id).ok_or_else(|| {
                    StoreError::NotFound {
                        collection: collection.name(),
                        id: id.clone(),
                    }
                })?;
                let obj = doc.data.as_object_mut().ok_or_else(|| {
                    StoreError::NotAnObject {
                        collection: collection.name(),
                        id: id.clone(),
                    }
                })?;
                let have = obj.get(*field).and_then(Value::as_i64).ok_or_else(|| {
                    StoreError::NotANumber {
                        collection: collection.name(),
                        id: id.clone(),
                        field: *field,
                    }
                })?;
                if have < *by {
                    return Err(StoreError::Insufficient {
                        collection: collection.name(),
                        id: id.clone(),
                        field: *field,
                        have,
                        need: *by,
                    });
                }
                obj.insert((*field).to_string(), Value::from(have - by));
            }
            WriteOp::EnsureAbsent {
                collection,
                field,
                value,
            } => {
                if docs.iter().any(|d| d.data.get(*field) == Some(value)) {
                    return Err(StoreError::FieldTaken {
                        collection: collection.name(),
                        field: *field,
                        value: value.to_string(),
                    });
                }
            }
            WriteOp::Delete { collection, id } => {
                let pos = docs.iter().position(|d| d.id == *id).ok_or_else(|| {
                    StoreError::NotFound {
                        collection: collection.name(),
                        id: id.clone(),
                    }
                })?;
                docs.remove(pos);
            }
        }
        Ok(())
    }
}

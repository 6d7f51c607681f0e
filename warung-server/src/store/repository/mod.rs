//! Typed repositories over the document store
//!
//! Repositories are the typed boundary: raw docs deserialize into the
//! model types here, and malformed documents are logged and skipped
//! instead of surfacing as errors.

mod product;
mod promo;
mod sale;
mod settings;
mod staff;

pub use product::ProductRepository;
pub use promo::PromoRepository;
pub use sale::SaleRepository;
pub use settings::SettingsRepository;
pub use staff::StaffRepository;

use super::{Collection, RawDoc};
use serde::de::DeserializeOwned;

/// Deserialize a raw doc, injecting the store id; logs and returns None
/// on malformed data
pub(crate) fn decode<T: DeserializeOwned>(collection: Collection, doc: &RawDoc) -> Option<T> {
    let mut data = doc.data.clone();
    if let Some(obj) = data.as_object_mut() {
        obj.insert("id".into(), serde_json::Value::String(doc.id.clone()));
    }
    match serde_json::from_value(data) {
        Ok(t) => Some(t),
        Err(e) => {
            tracing::warn!(collection = collection.name(), id = %doc.id, error = %e,
                "skipping malformed document");
            None
        }
    }
}

/// Serialize a model for storage, dropping the id field (the store key
/// carries it)
pub(crate) fn encode<T: serde::Serialize>(value: &T) -> serde_json::Value {
    let mut data = serde_json::to_value(value).unwrap_or(serde_json::Value::Null);
    if let Some(obj) = data.as_object_mut() {
        obj.remove("id");
    }
    data
}

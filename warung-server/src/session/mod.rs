//! Session handling: role gate, credentials, persistence

pub mod credential;
pub mod gate;
pub mod persist;

pub use credential::PinCredential;
pub use gate::{LoginOutcome, resolve_login};
pub use persist::SessionStore;

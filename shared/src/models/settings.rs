//! Admin settings singleton

use serde::{Deserialize, Serialize};

/// Singleton admin configuration
///
/// Created on first startup when absent. The PIN is stored as a credential
/// string (hash for values written by this server).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminConfig {
    pub pin: String,
}

impl AdminConfig {
    pub fn new(pin: impl Into<String>) -> Self {
        Self { pin: pin.into() }
    }
}

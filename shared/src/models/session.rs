//! Session and role types

use serde::{Deserialize, Serialize};

/// Caller role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Staff,
}

impl Role {
    /// Landing view after a successful login
    pub const fn default_view(&self) -> DefaultView {
        match self {
            Role::Admin => DefaultView::Dashboard,
            Role::Staff => DefaultView::Pos,
        }
    }
}

/// View a client should land on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefaultView {
    Dashboard,
    Pos,
}

/// Identity attached to a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

/// Session as persisted between restarts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    pub role: Role,
    pub user: SessionUser,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_views() {
        assert_eq!(Role::Admin.default_view(), DefaultView::Dashboard);
        assert_eq!(Role::Staff.default_view(), DefaultView::Pos);
    }

    #[test]
    fn test_stored_session_roundtrip() {
        let s = StoredSession {
            role: Role::Staff,
            user: SessionUser {
                name: "Budi".into(),
                position: Some("Kasir".into()),
            },
        };
        let json = serde_json::to_string(&s).unwrap();
        let back: StoredSession = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }
}

//! Role gate
//!
//! Resolves a login attempt against the stored credential for the chosen
//! role: the admin PIN for Admin, the staff record's PIN for Staff. A
//! mismatch changes nothing.

use super::credential::PinCredential;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{AdminConfig, DefaultView, Role, SessionUser, Staff, StoredSession};

/// Successful login outcome
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub session: StoredSession,
    pub default_view: DefaultView,
}

/// Resolve a login attempt
///
/// For `Role::Staff` a staff record must be supplied; for `Role::Admin`
/// it is ignored.
pub fn resolve_login(
    role: Role,
    staff: Option<&Staff>,
    entered_pin: &str,
    admin_config: &AdminConfig,
) -> AppResult<LoginOutcome> {
    let (stored, user) = match role {
        Role::Admin => (
            admin_config.pin.as_str(),
            SessionUser {
                name: "Admin".to_string(),
                position: None,
            },
        ),
        Role::Staff => {
            let staff = staff.ok_or_else(|| AppError::new(ErrorCode::StaffNotFound))?;
            (
                staff.pin.as_str(),
                SessionUser {
                    name: staff.name.clone(),
                    position: Some(staff.position.clone()),
                },
            )
        }
    };

    if !PinCredential::verify(stored, entered_pin)? {
        return Err(AppError::invalid_pin());
    }

    Ok(LoginOutcome {
        session: StoredSession { role, user },
        default_view: role.default_view(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn staff() -> Staff {
        Staff {
            id: Some("st-1".into()),
            name: "Budi".into(),
            position: "Kasir".into(),
            pin: PinCredential::hash("5678").unwrap(),
            joined_at: 0,
        }
    }

    #[test]
    fn test_admin_pin_grants_dashboard() {
        let admin = AdminConfig::new("1234");
        let outcome = resolve_login(Role::Admin, None, "1234", &admin).unwrap();
        assert_eq!(outcome.session.role, Role::Admin);
        assert_eq!(outcome.session.user.name, "Admin");
        assert_eq!(outcome.default_view, DefaultView::Dashboard);
    }

    #[test]
    fn test_wrong_admin_pin_rejected() {
        let admin = AdminConfig::new("1234");
        let err = resolve_login(Role::Admin, None, "0000", &admin).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidPin);
    }

    #[test]
    fn test_staff_pin_grants_pos() {
        let admin = AdminConfig::new("1234");
        let s = staff();
        let outcome = resolve_login(Role::Staff, Some(&s), "5678", &admin).unwrap();
        assert_eq!(outcome.session.role, Role::Staff);
        assert_eq!(outcome.session.user.name, "Budi");
        assert_eq!(outcome.session.user.position.as_deref(), Some("Kasir"));
        assert_eq!(outcome.default_view, DefaultView::Pos);
    }

    #[test]
    fn test_staff_cannot_use_admin_pin() {
        let admin = AdminConfig::new("1234");
        let s = staff();
        let err = resolve_login(Role::Staff, Some(&s), "1234", &admin).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidPin);
    }

    #[test]
    fn test_staff_login_requires_record() {
        let admin = AdminConfig::new("1234");
        let err = resolve_login(Role::Staff, None, "5678", &admin).unwrap_err();
        assert_eq!(err.code, ErrorCode::StaffNotFound);
    }
}

//! Staff Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Staff entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Staff {
    pub id: Option<String>,
    pub name: String,
    pub position: String,
    /// Credential string: argon2 hash for records created here, plaintext
    /// tolerated for documents seeded by older backends
    pub pin: String,
    /// Join time, epoch milliseconds
    pub joined_at: i64,
}

/// Create staff payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct StaffCreate {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "position is required"))]
    pub position: String,
    /// Plaintext 4-digit PIN; hashed before storage
    #[validate(custom(function = validate_pin))]
    pub pin: String,
}

/// Update staff payload (partial)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffUpdate {
    pub name: Option<String>,
    pub position: Option<String>,
    /// New plaintext PIN; hashed before storage
    pub pin: Option<String>,
}

/// A PIN is exactly 4 ASCII digits
pub fn staff_pin_is_valid(pin: &str) -> bool {
    pin.len() == 4 && pin.bytes().all(|b| b.is_ascii_digit())
}

fn validate_pin(pin: &str) -> Result<(), validator::ValidationError> {
    if staff_pin_is_valid(pin) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("pin_format")
            .with_message("PIN must be exactly 4 digits".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(pin: &str) -> StaffCreate {
        StaffCreate {
            name: "Budi".into(),
            position: "Kasir".into(),
            pin: pin.into(),
        }
    }

    #[test]
    fn test_pin_must_be_four_digits() {
        assert!(create("1234").validate().is_ok());
        assert!(create("123").validate().is_err());
        assert!(create("12345").validate().is_err());
        assert!(create("12a4").validate().is_err());
    }
}

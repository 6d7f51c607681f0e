//! HTTP status mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Map this error code to an HTTP status
    pub fn http_status(&self) -> StatusCode {
        match self {
            ErrorCode::Success => StatusCode::OK,

            ErrorCode::NotFound
            | ErrorCode::SaleNotFound
            | ErrorCode::PromoNotFound
            | ErrorCode::ProductNotFound
            | ErrorCode::StaffNotFound => StatusCode::NOT_FOUND,

            ErrorCode::AlreadyExists | ErrorCode::PromoCodeExists => StatusCode::CONFLICT,

            ErrorCode::NotAuthenticated
            | ErrorCode::InvalidPin
            | ErrorCode::SessionExpired
            | ErrorCode::SessionCorrupted => StatusCode::UNAUTHORIZED,

            ErrorCode::PermissionDenied | ErrorCode::AdminRequired => StatusCode::FORBIDDEN,

            ErrorCode::CartEmpty
            | ErrorCode::InsufficientStock
            | ErrorCode::ProductOutOfStock => StatusCode::UNPROCESSABLE_ENTITY,

            ErrorCode::InternalError
            | ErrorCode::StoreError
            | ErrorCode::ConfigError
            | ErrorCode::StorageCorrupted => StatusCode::INTERNAL_SERVER_ERROR,

            _ => StatusCode::BAD_REQUEST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ErrorCode::InvalidPin.http_status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ErrorCode::AdminRequired.http_status(), StatusCode::FORBIDDEN);
        assert_eq!(
            ErrorCode::InsufficientStock.http_status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(ErrorCode::ProductNotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ErrorCode::StoreError.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(ErrorCode::ValidationFailed.http_status(), StatusCode::BAD_REQUEST);
    }
}

use crate::utils::error::{CatalogError, ErrorCategory};
use axum::{
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

impl CatalogError {
    pub fn status_code(&self) -> StatusCode {
        match self.category() {
            ErrorCategory::NotFound => StatusCode::NOT_FOUND,
            ErrorCategory::Validation => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if self.is_client_error() {
            tracing::debug!("Request rejected: {}", self);
        } else {
            tracing::error!("Request failed: {} (category: {:?})", self, self.category());
        }
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

impl From<QueryRejection> for CatalogError {
    fn from(rejection: QueryRejection) -> Self {
        CatalogError::InvalidQuery {
            parameter: "query".to_string(),
            reason: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for CatalogError {
    fn from(rejection: PathRejection) -> Self {
        CatalogError::InvalidQuery {
            parameter: "path".to_string(),
            reason: rejection.body_text(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            CatalogError::ProductNotFound { product_id: 1 }.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            CatalogError::PincodeNotFound { pincode: 1 }.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            CatalogError::ValidationError {
                message: "page must be greater than 0".to_string()
            }
            .status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            CatalogError::ProcessingError {
                message: "boom".to_string()
            }
            .status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_into_response_status() {
        let response = CatalogError::PincodeNotFound { pincode: 999 }.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use database::error::ServiceError;
use log::error;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// A service failure on its way out as an HTTP response
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub ServiceError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            ServiceError::NotFound { .. } => (StatusCode::NOT_FOUND, self.to_string()),
            ServiceError::Validation(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ServiceError::Database(e) => {
                error!("Database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use models::validation::ValidationError;
    use sea_orm::DbErr;

    #[test]
    fn test_status_codes() {
        let not_found = ApiError::from(ServiceError::not_found("hotel", 3)).into_response();
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);

        let invalid = ApiError::from(ServiceError::from(ValidationError::StandardExceedsMax {
            standard: 5,
            max: 4,
        }))
        .into_response();
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);

        let failed = ApiError::from(ServiceError::from(DbErr::Custom("boom".to_string())))
            .into_response();
        assert_eq!(failed.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_message_names_the_missing_entity() {
        let error = ApiError::from(ServiceError::not_found("room", 12));
        assert_eq!(error.to_string(), "room 12 not found");
    }
}

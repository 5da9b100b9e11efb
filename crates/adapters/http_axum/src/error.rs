//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use secmon_domain::error::SecMonError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`SecMonError`] to an HTTP response with appropriate status code.
pub struct ApiError(SecMonError);

impl From<SecMonError> for ApiError {
    fn from(err: SecMonError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            SecMonError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            SecMonError::Source(err) => {
                tracing::error!(error = %err, "data source error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::warn;
use warren_core::StoreError;

pub type Result<T> = std::result::Result<T, AppError>;

/// Transport wrapper mapping store errors onto HTTP statuses.
#[derive(Debug)]
pub struct AppError(StoreError);

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            StoreError::NotFound(_) => StatusCode::NOT_FOUND,
            StoreError::AllocationExhausted { .. } => StatusCode::CONFLICT,
            StoreError::InvalidSlug(_) => StatusCode::NOT_ACCEPTABLE,
            StoreError::Unavailable(_) => StatusCode::BAD_GATEWAY,
        };

        if status.is_server_error() {
            warn!(error = %self.0, "store backend failure");
        }

        (status, self.0.to_string()).into_response()
    }
}

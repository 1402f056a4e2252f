use axum::http::StatusCode;
use axum::response::IntoResponse;
use thiserror::Error;

use crate::external::quote_provider::QuoteError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Quote(#[from] QuoteError),
    #[error("fetch task failed: {0}")]
    Task(String),
}

// Every failure is a 500 with the raw message; clients cannot tell a bad pair
// from an upstream outage by status alone.
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(value: tokio::task::JoinError) -> Self {
        AppError::Task(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_not_found_maps_to_500_with_plain_message() {
        let response = AppError::from(QuoteError::NotFound).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"pair not found");
    }

    #[test]
    fn test_quote_error_message_is_passed_through() {
        let err = AppError::from(QuoteError::Parse("invalid float literal".into()));
        assert_eq!(err.to_string(), "parse error: invalid float literal");
    }
}

use std::fmt;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;

/// Error surface of the API. `Validation` and `Conflict` carry messages
/// that are safe to show to clients; the cause behind `Internal` is only
/// ever logged server-side.
#[derive(Debug)]
pub enum ApiError {
    Validation(String),
    Conflict(String),
    Internal(anyhow::Error),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Validation(msg) | ApiError::Conflict(msg) => f.write_str(msg),
            ApiError::Internal(_) => f.write_str("Unknown Error"),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            // The frontend treats duplicate identifiers like any other
            // form error, so conflicts answer 400 rather than 409.
            ApiError::Validation(_) | ApiError::Conflict(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::Internal(e) => log::error!("❌ Sign-up failed: {:?}", e),
            other => log::debug!("Rejected sign-up: {}", other),
        }
        HttpResponse::build(self.status_code()).json(json!({
            "success": false,
            "msg": self.to_string(),
        }))
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        ApiError::Internal(e.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use anyhow::anyhow;
    use serde_json::Value;

    async fn body_json(resp: HttpResponse) -> Value {
        let bytes = to_bytes(resp.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn validation_answers_400_with_message() {
        let err = ApiError::Validation("Field email is required".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        let body = body_json(err.error_response()).await;
        assert_eq!(
            body,
            json!({ "success": false, "msg": "Field email is required" })
        );
    }

    #[actix_web::test]
    async fn conflict_answers_400_with_message() {
        let err = ApiError::Conflict("Email already exits".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        let body = body_json(err.error_response()).await;
        assert_eq!(body["msg"], "Email already exits");
    }

    #[actix_web::test]
    async fn internal_answers_500_and_hides_the_cause() {
        let err = ApiError::Internal(anyhow!("connection refused on 5432"));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(err.error_response()).await;
        assert_eq!(body, json!({ "success": false, "msg": "Unknown Error" }));
    }
}

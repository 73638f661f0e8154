//! HTTP routes for the Kolegium API

pub mod contact;
pub mod content;
pub mod health;

pub use contact::handle_contact;
pub use content::{handle_create, handle_list};
pub use health::{index, test_database};

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::body::Body;
use hyper::{Request, Response, StatusCode};
use serde::Serialize;
use serde_json::Value;

use crate::error::{ApiError, ValidationError};

/// JSON response with permissive CORS, matching the original service's
/// allow-all CORS policy
pub(crate) fn json_response<T: Serialize>(status: StatusCode, payload: &T) -> Response<Full<Bytes>> {
    let body = serde_json::to_string(payload)
        .unwrap_or_else(|_| r#"{"error":"Serialization failed"}"#.to_string());

    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Full::new(Bytes::from(body)))
        .unwrap()
}

/// Map the error taxonomy onto HTTP statuses: validation faults carry the
/// full field-level report, storage failures stay opaque
pub(crate) fn error_response(err: ApiError) -> Response<Full<Bytes>> {
    match err {
        ApiError::Validation(report) => json_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            &serde_json::json!({
                "error": "validation failed",
                "violations": report.violations,
            }),
        ),
        ApiError::StorageUnavailable => json_response(
            StatusCode::SERVICE_UNAVAILABLE,
            &serde_json::json!({ "error": err.to_string() }),
        ),
        other => json_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            &serde_json::json!({ "error": other.to_string() }),
        ),
    }
}

/// Collect the request body and parse it as JSON
///
/// Generic over the body type so tests can drive handlers with in-memory
/// requests instead of live connections.
pub(crate) async fn read_json_body<B>(req: Request<B>) -> Result<Value, ApiError>
where
    B: Body,
    B::Error: std::fmt::Display,
{
    let body = req
        .collect()
        .await
        .map_err(|e| ValidationError::single("body", format!("failed to read request body: {e}")))?
        .to_bytes();

    serde_json::from_slice(&body)
        .map_err(|e| ValidationError::single("body", format!("request body is not valid JSON: {e}")).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response<Full<Bytes>>) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validation_faults_carry_the_field_report() {
        let err = ValidationError::single("email", "must be a well-formed email address");
        let response = error_response(err.into());
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = body_json(response).await;
        assert_eq!(body["error"], "validation failed");
        assert_eq!(body["violations"][0]["field"], "email");
    }

    #[tokio::test]
    async fn unavailable_storage_maps_to_service_unavailable() {
        let response = error_response(ApiError::StorageUnavailable);
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn storage_failures_map_to_internal_error() {
        let response = error_response(ApiError::Storage("cursor read failed".into()));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        // The field-level detail stays out of opaque storage errors
        let body = body_json(response).await;
        assert!(body.get("violations").is_none());
    }

    #[tokio::test]
    async fn malformed_json_body_is_a_body_violation() {
        let req = Request::builder()
            .body(Full::new(Bytes::from_static(b"{not json")))
            .unwrap();
        let err = read_json_body(req).await.unwrap_err();
        match err {
            ApiError::Validation(report) => assert!(report.cites("body")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn well_formed_json_body_parses() {
        let req = Request::builder()
            .body(Full::new(Bytes::from_static(br#"{"title": "Derma Summit"}"#)))
            .unwrap();
        let value = read_json_body(req).await.unwrap();
        assert_eq!(value["title"], "Derma Summit");
    }
}

//! Generic list/create routes over the content collections
//!
//! One pair of handlers serves every entity kind; the kind is resolved from
//! the route segment before these are called.

use bson::Document;
use bytes::Bytes;
use http_body_util::Full;
use hyper::body::Body;
use hyper::{Request, Response, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::db::DEFAULT_QUERY_LIMIT;
use crate::error::ApiError;
use crate::routes::{error_response, json_response, read_json_body};
use crate::schemas::EntityKind;
use crate::server::AppState;

/// Handle `GET /api/{collection}?limit=N`
pub async fn handle_list(
    state: Arc<AppState>,
    kind: EntityKind,
    query: Option<&str>,
) -> Response<Full<Bytes>> {
    let limit = parse_limit(query);
    match list_documents(&state, kind, limit).await {
        Ok(docs) => json_response(StatusCode::OK, &docs),
        Err(err) => error_response(err),
    }
}

/// Handle `POST /api/{collection}`
pub async fn handle_create<B>(
    req: Request<B>,
    state: Arc<AppState>,
    kind: EntityKind,
) -> Response<Full<Bytes>>
where
    B: Body,
    B::Error: std::fmt::Display,
{
    let payload = match read_json_body(req).await {
        Ok(value) => value,
        Err(err) => return error_response(err),
    };

    match create_document(&state, kind, &payload).await {
        Ok(id) => json_response(StatusCode::OK, &json!({ "id": id })),
        Err(err) => error_response(err),
    }
}

/// Unfiltered query capped at `limit`; `_id` is rendered as a string
pub async fn list_documents(
    state: &AppState,
    kind: EntityKind,
    limit: i64,
) -> Result<Vec<Document>, ApiError> {
    state
        .gateway
        .query(kind.collection_name(), Document::new(), limit)
        .await
}

/// Validate, then persist. Storage is never reached with unvalidated data.
pub async fn create_document(
    state: &AppState,
    kind: EntityKind,
    payload: &Value,
) -> Result<String, ApiError> {
    let document = kind.validated_document(payload)?;
    state.gateway.insert(kind.collection_name(), document).await
}

/// Parse `limit` from the query string, falling back to the default cap
fn parse_limit(query: Option<&str>) -> i64 {
    query
        .and_then(|q| q.split('&').find_map(|p| p.strip_prefix("limit=")))
        .and_then(|v| v.parse::<i64>().ok())
        .filter(|n| *n >= 0)
        .unwrap_or(DEFAULT_QUERY_LIMIT)
}

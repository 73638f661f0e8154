//! Contact form submission route

use bytes::Bytes;
use http_body_util::Full;
use hyper::body::Body;
use hyper::{Request, Response, StatusCode};
use serde_json::json;
use std::sync::Arc;

use crate::routes::content::create_document;
use crate::routes::{error_response, json_response, read_json_body};
use crate::schemas::EntityKind;
use crate::server::AppState;

/// Handle `POST /api/contact`
///
/// Acknowledges the submission with `status: received` alongside the
/// stored message's identifier.
pub async fn handle_contact<B>(req: Request<B>, state: Arc<AppState>) -> Response<Full<Bytes>>
where
    B: Body,
    B::Error: std::fmt::Display,
{
    let payload = match read_json_body(req).await {
        Ok(value) => value,
        Err(err) => return error_response(err),
    };

    match create_document(&state, EntityKind::ContactMessage, &payload).await {
        Ok(id) => json_response(StatusCode::OK, &json!({ "id": id, "status": "received" })),
        Err(err) => error_response(err),
    }
}

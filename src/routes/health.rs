//! Liveness and storage diagnostics endpoints
//!
//! `GET /` answers with a liveness message; `GET /test` reports storage
//! connectivity and the visible collection names so a deploy can be checked
//! from a browser.

use bytes::Bytes;
use http_body_util::Full;
use hyper::{Response, StatusCode};
use serde::Serialize;
use std::sync::Arc;

use crate::routes::json_response;
use crate::server::AppState;

/// Handle `GET /` liveness message
pub fn index() -> Response<Full<Bytes>> {
    json_response(
        StatusCode::OK,
        &serde_json::json!({
            "message": "Kolegium Dermatologi, Venereologi & Estetika API"
        }),
    )
}

/// Storage diagnostics payload for `GET /test`
#[derive(Debug, Serialize)]
pub struct TestResponse {
    /// Always "running" when this handler answers at all
    pub backend: &'static str,
    /// Storage summary: "connected", "not available", or an error detail
    pub database: String,
    /// Whether the DATABASE_URL environment variable is set
    pub database_url_set: bool,
    /// Whether the DATABASE_NAME environment variable is set
    pub database_name_set: bool,
    pub connection_status: &'static str,
    /// Visible collection names, capped at 20
    pub collections: Vec<String>,
}

/// Handle `GET /test`
pub async fn test_database(state: Arc<AppState>) -> Response<Full<Bytes>> {
    let mut response = TestResponse {
        backend: "running",
        database: "not available".to_string(),
        database_url_set: std::env::var("DATABASE_URL").is_ok(),
        database_name_set: std::env::var("DATABASE_NAME").is_ok(),
        connection_status: "Not Connected",
        collections: Vec::new(),
    };

    if state.gateway.is_connected() {
        match state.gateway.collection_names().await {
            Ok(mut names) => {
                names.truncate(20);
                response.collections = names;
                response.database = "connected".to_string();
                response.connection_status = "Connected";
            }
            Err(e) => {
                response.database = format!("connected but error: {e}");
            }
        }
    }

    json_response(StatusCode::OK, &response)
}

//! HTTP server implementation
//!
//! hyper http1 with TokioIo for async handling; one task per connection,
//! shared state behind an Arc.

use bytes::Bytes;
use http_body_util::Full;
use hyper::body::Body;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Method, Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

use crate::config::Args;
use crate::db::Gateway;
use crate::error::ApiError;
use crate::routes;
use crate::schemas::EntityKind;

/// Shared application state
pub struct AppState {
    pub args: Args,
    /// Storage gateway, possibly degraded when startup could not connect
    pub gateway: Gateway,
}

impl AppState {
    pub fn new(args: Args, gateway: Gateway) -> Self {
        Self { args, gateway }
    }
}

/// Start the HTTP server
pub async fn run(state: Arc<AppState>) -> Result<(), ApiError> {
    let listener = TcpListener::bind(state.args.listen).await?;

    info!("Kolegium API listening on {}", state.args.listen);
    if !state.gateway.is_connected() {
        warn!("Storage degraded - persistence operations will report unavailable");
    }

    loop {
        match listener.accept().await {
            Ok((stream, addr)) => {
                let state = Arc::clone(&state);
                tokio::spawn(async move {
                    let io = TokioIo::new(stream);

                    let service = service_fn(move |req| {
                        let state = Arc::clone(&state);
                        async move { handle_request(state, addr, req).await }
                    });

                    if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                        error!("Error serving connection from {}: {:?}", addr, err);
                    }
                });
            }
            Err(e) => {
                error!("Error accepting connection: {:?}", e);
            }
        }
    }
}

/// Route incoming HTTP requests
///
/// Generic over the body type so the router can be driven by in-memory
/// requests in tests.
async fn handle_request<B>(
    state: Arc<AppState>,
    addr: SocketAddr,
    req: Request<B>,
) -> Result<Response<Full<Bytes>>, hyper::Error>
where
    B: Body,
    B::Error: std::fmt::Display,
{
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    info!("[{}] {} {}", addr, method, path);

    let response = match (method, path.as_str()) {
        // Liveness message
        (Method::GET, "/") => routes::index(),

        // Storage diagnostics
        (Method::GET, "/test") => routes::test_database(Arc::clone(&state)).await,

        // CORS preflight
        (Method::OPTIONS, _) => preflight_response(),

        // Contact form submission (no list route; submission-only)
        (Method::POST, "/api/contact") => {
            return Ok(routes::handle_contact(req, Arc::clone(&state)).await);
        }

        // Content listing: GET /api/{collection}?limit=N
        (Method::GET, p) if p.starts_with("/api/") => {
            let segment = p.strip_prefix("/api/").unwrap_or("");
            match EntityKind::from_route(segment) {
                Some(kind) => {
                    let query = req.uri().query();
                    routes::handle_list(Arc::clone(&state), kind, query).await
                }
                None => not_found_response(&path),
            }
        }

        // Content creation: POST /api/{collection}
        (Method::POST, p) if p.starts_with("/api/") => {
            let segment = p.strip_prefix("/api/").unwrap_or("");
            match EntityKind::from_route(segment) {
                Some(kind) => {
                    return Ok(routes::handle_create(req, Arc::clone(&state), kind).await);
                }
                None => not_found_response(&path),
            }
        }

        // Not found
        _ => not_found_response(&path),
    };

    Ok(response)
}

/// CORS preflight response
fn preflight_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::OK)
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Headers", "*")
        .header("Access-Control-Allow-Methods", "GET, POST, OPTIONS")
        .body(Full::new(Bytes::new()))
        .unwrap()
}

/// Not found response
fn not_found_response(path: &str) -> Response<Full<Bytes>> {
    let body = serde_json::json!({
        "error": "Not Found",
        "path": path,
    });

    Response::builder()
        .status(StatusCode::NOT_FOUND)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Full::new(Bytes::from(body.to_string())))
        .unwrap()
}

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{info, warn};

/// One `api_request` event per request with method, path, status and
/// latency. Bodies carry patient data and images and are never logged.
pub async fn audit_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(req).await;

    let status = response.status();
    let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    if status.is_server_error() {
        warn!(%method, %path, status = status.as_u16(), elapsed_ms, "api_request");
    } else {
        info!(%method, %path, status = status.as_u16(), elapsed_ms, "api_request");
    }

    response
}

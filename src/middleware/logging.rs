//! Request logging middleware
//!
//! Tags each HTTP request with a request id and logs method, path, status
//! and latency once the response is ready.

use std::time::{Duration, Instant};
use axum::{
    extract::Request,
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use tracing::{info, warn, Instrument};
use uuid::Uuid;
use crate::utils::logging::log_performance_metric;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Requests slower than this are logged at `warn`
const SLOW_REQUEST: Duration = Duration::from_secs(5);

pub async fn log_requests(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4();
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let span = tracing::info_span!(
        "http_request",
        request_id = %request_id,
        method = %method,
        path = %path
    );
    let mut response = next.run(request).instrument(span).await;

    let elapsed = started.elapsed();
    let status = response.status().as_u16();
    if elapsed > SLOW_REQUEST {
        warn!(
            request_id = %request_id,
            method = %method,
            path = %path,
            status = status,
            duration_ms = elapsed.as_millis() as u64,
            "Slow request"
        );
    } else {
        info!(
            request_id = %request_id,
            method = %method,
            path = %path,
            status = status,
            duration_ms = elapsed.as_millis() as u64,
            "Request completed"
        );
    }
    log_performance_metric("http_request_ms", elapsed.as_secs_f64() * 1000.0, "ms");

    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http, routing::get, Router};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_request_id_header_is_set() {
        let app = Router::new()
            .route("/", get(|| async { "ok" }))
            .layer(axum::middleware::from_fn(log_requests));

        let response = app
            .oneshot(http::Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let header = response.headers().get(REQUEST_ID_HEADER).unwrap();
        assert!(Uuid::parse_str(header.to_str().unwrap()).is_ok());
    }
}

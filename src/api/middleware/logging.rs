use axum::{extract::Request, middleware::Next, response::Response};

/// Log one line per request with method and full URI. Timestamps come from
/// the tracing subscriber.
pub async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();

    tracing::info!("{} {}", method, uri);

    next.run(req).await
}

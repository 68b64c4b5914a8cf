use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Emit `[METHOD] /path?query` for every inbound request, then pass it on untouched.
pub async fn log_requests(req: Request, next: Next) -> Response {
    let label = request_label(&req);
    tracing::info!("{label}");

    next.run(req).await
}

fn request_label(req: &Request) -> String {
    let target = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| req.uri().path());

    format!("[{}] {}", req.method().as_str().to_uppercase(), target)
}

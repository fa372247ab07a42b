use askama::Template;
use axum::body::Body;
use axum::http::{Request, StatusCode, Uri};
use axum::middleware::Next;
use axum::response::{Html, IntoResponse, Response};

use crate::error::AppError;
use crate::VERSION;

/// Newtype for passing error messages through response extensions.
#[derive(Clone)]
pub struct ErrorMessage(pub String);

#[derive(Template)]
#[template(path = "pages/error.html")]
struct ErrorPageTemplate {
    version: &'static str,
    status_code: u16,
    status_text: &'static str,
    message: String,
}

/// Middleware that replaces 4xx/5xx responses of HTML pages with a full
/// error page. API routes and the health endpoint keep their JSON/plain
/// bodies.
pub async fn error_page_middleware(request: Request<Body>, next: Next) -> Response {
    let path = request.uri().path().to_owned();
    let is_page = !(path.starts_with("/api/") || path == "/health");

    let method = request.method().clone();
    let response = next.run(request).await;

    let status = response.status();
    if !(status.is_client_error() || status.is_server_error()) {
        return response;
    }

    let message = response
        .extensions()
        .get::<ErrorMessage>()
        .map(|e| e.0.clone())
        .unwrap_or_default();
    tracing::warn!(%status, %method, %path, message = %message, "request failed");

    if is_page {
        render_error_page(status, message)
    } else {
        response
    }
}

/// Fallback handler for unmatched routes.
pub async fn fallback_handler(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

fn render_error_page(status: StatusCode, message: String) -> Response {
    let template = ErrorPageTemplate {
        version: VERSION,
        status_code: status.as_u16(),
        status_text: status.canonical_reason().unwrap_or("Error"),
        message,
    };
    match template.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            tracing::error!("Failed to render error page: {}", e);
            status.into_response()
        }
    }
}

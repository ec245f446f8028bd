// File: src/server.rs
// Purpose: HTTP host that hands every request path to the shell

use axum::{
    extract::State,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{Html, IntoResponse, Json, Response},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::shell::Shell;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    shell: Arc<Shell>,
}

/// Builds the application; the route table lives in the shell, so every
/// path goes through a single fallback handler.
pub fn app(shell: Shell) -> Router {
    let state = AppState {
        shell: Arc::new(shell),
    };

    Router::new()
        .fallback(dispatch)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

async fn dispatch(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    if method != Method::GET && method != Method::HEAD {
        return (StatusCode::METHOD_NOT_ALLOWED, [(header::ALLOW, "GET, HEAD")]).into_response();
    }

    let path = uri.path();

    // Content negotiation: JSON response
    if accepts_json(&headers) {
        let resolution = state.shell.resolve(path);
        debug!(path, view = ?resolution.view, "json resolution");
        return (resolution.status, Json(resolution)).into_response();
    }

    let rendered = state.shell.render(path);
    (rendered.status, Html(rendered.markup.into_string())).into_response()
}

fn accepts_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|accept| accept.to_str().ok())
        .map(|accept| accept.contains("application/json"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_accepts_json() {
        let mut headers = HeaderMap::new();
        assert!(!accepts_json(&headers));

        headers.insert(header::ACCEPT, HeaderValue::from_static("text/html"));
        assert!(!accepts_json(&headers));

        headers.insert(
            header::ACCEPT,
            HeaderValue::from_static("application/json, text/plain"),
        );
        assert!(accepts_json(&headers));
    }
}

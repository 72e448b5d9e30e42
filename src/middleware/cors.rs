use axum::http::Method;
use tower_http::cors::{Any, CorsLayer};

/// The job board and admin pages are served from their own origins.
pub fn permissive_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any)
        .allow_origin(Any)
}

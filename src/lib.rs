pub mod assets;
pub mod config;
pub mod middleware;
pub mod navigation;
pub mod observability;
pub mod routes;
pub mod template;
pub mod view_state;

pub use routes::AppState;

use tower_http::{compression::CompressionLayer, trace::TraceLayer};

/// Builds the application router with every route and layer, without binding a socket.
pub fn create_app(config: config::Config) -> axum::Router {
    routes::router(AppState { config })
        // no-cache for pages, long-lived cache for static files
        .layer(axum::middleware::from_fn(
            middleware::cache_control_middleware,
        ))
        // minify before compression
        .layer(axum::middleware::map_response(
            middleware::minify_html_middleware,
        ))
        .layer(CompressionLayer::new().br(true).gzip(true))
        .layer(TraceLayer::new_for_http())
}

//! Router assembly.

use axum::{Router, middleware as axum_middleware, routing::get};
use tower::ServiceBuilder;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::middleware::{
    create_session_layer, csp_nonce_middleware, make_request_span, request_id_middleware,
    security_headers_middleware,
};
use crate::routes;
use crate::state::AppState;

/// Build the complete storefront router with its middleware stack.
///
/// Sentry layers are added by the binary, outside this stack.
pub fn build_router(state: AppState) -> Router {
    let session_layer = create_session_layer(state.config());
    let static_dir = state.config().static_dir.clone();

    Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(session_layer)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
                .layer(axum_middleware::from_fn(request_id_middleware))
                .layer(axum_middleware::from_fn(csp_nonce_middleware))
                .layer(axum_middleware::from_fn(security_headers_middleware)),
        )
        .with_state(state)
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}

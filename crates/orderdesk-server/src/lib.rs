pub mod error;
pub mod routes;
pub mod state;

use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use orderdesk_core::store::RecordStore;
use std::future::Future;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the axum Router with all API routes and middleware.
/// Used by `serve_on()` and available for integration testing.
pub fn build_router(store: RecordStore) -> Router {
    let app_state = state::AppState::new(store);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health))
        // Orders
        .route("/order", get(routes::orders::list_orders))
        .route("/order/{id}", get(routes::orders::get_order))
        .route("/order/{id}/total", get(routes::orders::get_order_total))
        // Customers
        .route("/customer", get(routes::customers::list_customers))
        .route("/customer/{id}", get(routes::customers::get_customer))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}

/// Serve the API on a pre-bound listener until `shutdown` resolves.
///
/// The listener is bound by the caller so it can read the actual port first
/// (useful when `port = 0` and the OS picks a free port). Once `shutdown`
/// completes, no new connections are accepted and in-flight requests are
/// drained before this returns.
pub async fn serve_on<F>(
    listener: tokio::net::TcpListener,
    store: RecordStore,
    shutdown: F,
) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let actual_port = listener.local_addr()?.port();
    let app = build_router(store);

    tracing::info!("orderdesk listening on http://localhost:{actual_port}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("orderdesk stopped");
    Ok(())
}

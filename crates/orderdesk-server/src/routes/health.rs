use axum::extract::State;
use axum::Json;

use crate::state::AppState;

/// GET /health — liveness plus record counts.
pub async fn health(State(app): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "orders": app.store.orders.len(),
        "customers": app.store.customers.len(),
    }))
}

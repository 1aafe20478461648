use axum::extract::{Path, State};
use axum::Json;
use orderdesk_core::model::Order;
use orderdesk_core::query;

use crate::error::AppError;
use crate::state::AppState;

/// GET /order — every order in store order. An empty store answers `[]`.
pub async fn list_orders(State(app): State<AppState>) -> Json<Vec<Order>> {
    Json(app.store.orders.list().to_vec())
}

/// GET /order/{id} — one order by number.
pub async fn get_order(
    State(app): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Order>, AppError> {
    let order = query::find_order(&app.store, &id)?;
    Ok(Json(order.clone()))
}

/// GET /order/{id}/total — sum of `price * amount` over the order's items.
pub async fn get_order_total(
    State(app): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<f64>, AppError> {
    let total = query::order_total(&app.store, &id)?;
    Ok(Json(total))
}

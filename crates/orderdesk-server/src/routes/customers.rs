use axum::extract::{Path, State};
use axum::Json;
use orderdesk_core::model::Customer;
use orderdesk_core::query;

use crate::error::AppError;
use crate::state::AppState;

/// GET /customer — every customer. An empty store answers `[]`.
pub async fn list_customers(State(app): State<AppState>) -> Json<Vec<Customer>> {
    Json(app.store.customers.list().to_vec())
}

/// GET /customer/{id}
pub async fn get_customer(
    State(app): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Customer>, AppError> {
    let customer = query::find_customer(&app.store, &id)?;
    Ok(Json(customer.clone()))
}

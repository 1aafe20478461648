use crate::error::{OrderdeskError, Result};
use crate::model::{Customer, Order};
use crate::store::RecordStore;

fn require_id(id: &str) -> Result<&str> {
    if id.is_empty() {
        return Err(OrderdeskError::MissingParameter("id".into()));
    }
    Ok(id)
}

// ---------------------------------------------------------------------------
// Orders
// ---------------------------------------------------------------------------

/// Look up an order by its number. An empty id is a missing parameter, not a miss.
pub fn find_order<'a>(store: &'a RecordStore, id: &str) -> Result<&'a Order> {
    let id = require_id(id)?;
    store
        .orders
        .find_by_id(id)
        .ok_or_else(|| OrderdeskError::OrderNotFound(id.to_string()))
}

/// Sum of `price * amount` over every line item. No rounding is applied.
pub fn compute_total(order: &Order) -> f64 {
    order.contents.iter().map(|item| item.subtotal()).sum()
}

pub fn order_total(store: &RecordStore, id: &str) -> Result<f64> {
    find_order(store, id).map(compute_total)
}

// ---------------------------------------------------------------------------
// Customers
// ---------------------------------------------------------------------------

pub fn find_customer<'a>(store: &'a RecordStore, id: &str) -> Result<&'a Customer> {
    let id = require_id(id)?;
    store
        .customers
        .find_by_id(id)
        .ok_or_else(|| OrderdeskError::CustomerNotFound(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use crate::model::OrderItem;

    fn store() -> RecordStore {
        RecordStore::new(
            vec![],
            vec![Order::new(
                "1",
                vec![OrderItem::new("", 2, 10.0), OrderItem::new("", 1, 5.0)],
            )],
        )
    }

    #[test]
    fn total_of_example_order() {
        let store = store();
        assert_eq!(order_total(&store, "1").unwrap(), 25.0);
    }

    #[test]
    fn unknown_order_is_not_found() {
        let store = store();
        let err = find_order(&store, "2").unwrap_err();
        assert!(matches!(err, OrderdeskError::OrderNotFound(ref id) if id == "2"));
        assert!(err.is_not_found());
    }

    #[test]
    fn empty_id_is_missing_parameter() {
        let store = store();
        assert!(matches!(
            find_order(&store, "").unwrap_err(),
            OrderdeskError::MissingParameter(_)
        ));
        assert!(matches!(
            order_total(&store, "").unwrap_err(),
            OrderdeskError::MissingParameter(_)
        ));
        assert!(matches!(
            find_customer(&store, "").unwrap_err(),
            OrderdeskError::MissingParameter(_)
        ));
    }

    #[test]
    fn empty_order_totals_zero() {
        assert_eq!(compute_total(&Order::new("x", vec![])), 0.0);
    }

    #[test]
    fn total_matches_item_sum_for_sample_orders() {
        let store = RecordStore::from_dataset(Dataset::sample());
        for order in store.orders.list() {
            let expected: f64 = order
                .contents
                .iter()
                .map(|i| i.price * f64::from(i.amount))
                .sum();
            assert_eq!(order_total(&store, &order.number).unwrap(), expected);
        }
    }

    #[test]
    fn repeated_lookups_are_identical() {
        let store = store();
        let first = find_order(&store, "1").unwrap().clone();
        let second = find_order(&store, "1").unwrap().clone();
        assert_eq!(first, second);
    }

    #[test]
    fn find_customer_hits_and_misses() {
        let store = RecordStore::from_dataset(Dataset::sample());
        assert_eq!(find_customer(&store, "100").unwrap().first_name, "Jane");
        assert!(matches!(
            find_customer(&store, "999").unwrap_err(),
            OrderdeskError::CustomerNotFound(_)
        ));
    }
}

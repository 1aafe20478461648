use crate::error::{OrderdeskError, Result};
use crate::model::{Customer, Order, OrderItem};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Raw records used to populate a [`crate::store::RecordStore`] at startup.
///
/// Seed files are YAML; plain JSON parses too since YAML is a superset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub customers: Vec<Customer>,
    #[serde(default)]
    pub orders: Vec<Order>,
}

impl Dataset {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(OrderdeskError::SeedNotFound(path.to_path_buf()));
        }
        let data = std::fs::read_to_string(path)?;
        let dataset: Dataset = serde_yaml::from_str(&data)?;
        tracing::debug!(
            path = %path.display(),
            customers = dataset.customers.len(),
            orders = dataset.orders.len(),
            "seed file parsed"
        );
        Ok(dataset)
    }

    /// Built-in records served when no seed file is configured.
    pub fn sample() -> Self {
        Self {
            customers: vec![
                Customer {
                    id: "100".into(),
                    first_name: "Jane".into(),
                    last_name: "Smith".into(),
                    email: "jane.smith@company.com".into(),
                },
                Customer {
                    id: "200".into(),
                    first_name: "John".into(),
                    last_name: "Smith".into(),
                    email: "john.smith@company.com".into(),
                },
            ],
            orders: vec![
                Order::new(
                    "2020-04-06-01",
                    vec![
                        OrderItem::new("Ham Sandwich", 2, 5.50),
                        OrderItem::new("Water", 1, 1.50),
                        OrderItem::new("Beer", 3, 2.30),
                        OrderItem::new("Cheesecake", 1, 3.75),
                    ],
                ),
                Order::new(
                    "2020-04-03-01",
                    vec![
                        OrderItem::new("Cheeseburger", 1, 8.50),
                        OrderItem::new("Water", 2, 1.50),
                        OrderItem::new("Coke", 2, 1.76),
                        OrderItem::new("Ice Cream", 1, 2.35),
                    ],
                ),
            ],
        }
    }
}

use serde::{Deserialize, Serialize};

/// Anything the record store can index by identifier.
pub trait Record {
    fn id(&self) -> &str;
}

// ---------------------------------------------------------------------------
// Customer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl Record for Customer {
    fn id(&self) -> &str {
        &self.id
    }
}

// ---------------------------------------------------------------------------
// OrderItem
// ---------------------------------------------------------------------------

/// One line of an order. Contributes `price * amount` to the order total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(default)]
    pub item: String,
    pub amount: i32,
    pub price: f64,
}

impl OrderItem {
    pub fn new(item: impl Into<String>, amount: i32, price: f64) -> Self {
        Self {
            item: item.into(),
            amount,
            price,
        }
    }

    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.amount)
    }
}

// ---------------------------------------------------------------------------
// Order
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub number: String,
    #[serde(default)]
    pub contents: Vec<OrderItem>,
}

impl Order {
    pub fn new(number: impl Into<String>, contents: Vec<OrderItem>) -> Self {
        Self {
            number: number.into(),
            contents,
        }
    }
}

impl Record for Order {
    fn id(&self) -> &str {
        &self.number
    }
}

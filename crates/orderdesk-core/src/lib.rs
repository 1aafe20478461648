pub mod config;
pub mod dataset;
pub mod error;
pub mod model;
pub mod query;
pub mod store;

pub use error::{OrderdeskError, Result};

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrderdeskError {
    #[error("order not found: {0}")]
    OrderNotFound(String),

    #[error("customer not found: {0}")]
    CustomerNotFound(String),

    #[error("missing required parameter '{0}'")]
    MissingParameter(String),

    #[error("seed file not found: {}", .0.display())]
    SeedNotFound(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

impl OrderdeskError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            OrderdeskError::OrderNotFound(_) | OrderdeskError::CustomerNotFound(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, OrderdeskError>;

use thiserror::Error;

use crate::actor_framework::FrameworkError;
use crate::domain::{OrderId, OrderItemId, ProductId};
use crate::error::ValidationError;

/// Errors that can occur during order item operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderItemError {
    #[error("Order item not found: {0}")]
    NotFound(OrderItemId),
    #[error("Invalid order: {0}")]
    InvalidOrder(OrderId),
    #[error("Invalid product: {0}")]
    InvalidProduct(ProductId),
    #[error("Order item validation error: {0}")]
    ValidationError(#[from] ValidationError),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl OrderItemError {
    pub(crate) fn for_id(id: OrderItemId) -> impl FnOnce(FrameworkError) -> Self {
        move |err| match err {
            FrameworkError::NotFound { .. } => OrderItemError::NotFound(id),
            other => other.into(),
        }
    }
}

impl From<FrameworkError> for OrderItemError {
    fn from(err: FrameworkError) -> Self {
        match err {
            FrameworkError::Validation(e) => OrderItemError::ValidationError(e),
            other => OrderItemError::ActorCommunicationError(other.to_string()),
        }
    }
}

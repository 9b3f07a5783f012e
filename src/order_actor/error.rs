use thiserror::Error;

use crate::actor_framework::FrameworkError;
use crate::domain::OrderId;
use crate::error::ValidationError;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(OrderId),
    #[error("Order validation error: {0}")]
    ValidationError(#[from] ValidationError),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl OrderError {
    pub(crate) fn for_id(id: OrderId) -> impl FnOnce(FrameworkError) -> Self {
        move |err| match err {
            FrameworkError::NotFound { .. } => OrderError::NotFound(id),
            other => other.into(),
        }
    }
}

impl From<FrameworkError> for OrderError {
    fn from(err: FrameworkError) -> Self {
        match err {
            FrameworkError::Validation(e) => OrderError::ValidationError(e),
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

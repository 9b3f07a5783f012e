use thiserror::Error;

use crate::actor_framework::FrameworkError;
use crate::domain::ProductId;
use crate::error::ValidationError;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(ProductId),
    #[error("Product validation error: {0}")]
    ValidationError(#[from] ValidationError),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl ProductError {
    /// Maps a store error for a request that targeted `id`.
    pub(crate) fn for_id(id: ProductId) -> impl FnOnce(FrameworkError) -> Self {
        move |err| match err {
            FrameworkError::NotFound { .. } => ProductError::NotFound(id),
            other => other.into(),
        }
    }
}

impl From<FrameworkError> for ProductError {
    fn from(err: FrameworkError) -> Self {
        match err {
            FrameworkError::Validation(e) => ProductError::ValidationError(e),
            other => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}

use thiserror::Error;

/// Errors raised while configuring, running or stopping the system.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SystemError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Store error: {0}")]
    Store(String),
    #[error("Actor task failed: {0}")]
    Shutdown(String),
}

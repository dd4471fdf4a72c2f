//! Error types for veranda
//!
//! This module defines the error types used throughout the library.
//! We use thiserror for convenient error derivation and avoid panics
//! in production code by properly propagating errors.

use std::fmt;

/// Main error type for veranda operations
#[derive(Debug, thiserror::Error)]
pub enum VerandaError {
    /// Window not found in a manager
    #[error("Window {0} not found")]
    WindowNotFound(crate::window::WindowId),

    /// Scene node not found
    #[error("Node {0} not found")]
    NodeNotFound(crate::scene::NodeId),

    /// Window refused a close request
    #[error("Window {0} is not closeable")]
    NotCloseable(crate::window::WindowId),

    /// Invalid structural or window operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),

    /// Row-store failure during an essential operation, original cause kept
    #[error("Row store failure during {operation}")]
    Store {
        operation: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Result type alias for veranda operations
pub type VerandaResult<T> = Result<T, VerandaError>;

/// Extension trait for Option to convert to Result with error context
pub trait OptionExt<T> {
    /// Convert None to an error with context
    fn ok_or_log<F>(self, error_fn: F) -> VerandaResult<T>
    where
        F: FnOnce() -> VerandaError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_log<F>(self, error_fn: F) -> VerandaResult<T>
    where
        F: FnOnce() -> VerandaError,
    {
        match self {
            Some(val) => Ok(val),
            None => {
                let err = error_fn();
                tracing::error!("{err}");
                Err(err)
            }
        }
    }
}

/// Helper for operations that should log errors but not propagate them
pub fn log_error<T, E: fmt::Display>(result: Result<T, E>) -> Option<T> {
    match result {
        Ok(val) => Some(val),
        Err(err) => {
            tracing::error!("Operation failed: {err}");
            None
        }
    }
}

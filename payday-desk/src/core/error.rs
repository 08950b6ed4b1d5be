//! Desk error types

use thiserror::Error;

use crate::core::session::SessionError;
use crate::forms::FormError;
use payday_client::ApiError;

/// Desk-level error type
#[derive(Debug, Error)]
pub enum DeskError {
    /// Request-level failure (transport or non-success status)
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Client-side validation failure; never reaches the network
    #[error(transparent)]
    Form(#[from] FormError),

    /// The entity is no longer present in the local store
    #[error("{what} not found: {id}")]
    NotFound { what: &'static str, id: String },

    /// Session persistence failure
    #[error(transparent)]
    Session(#[from] SessionError),
}

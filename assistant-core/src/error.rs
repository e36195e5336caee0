//! Error types for the assistant core.
//!
//! [`AssistantError`] is the top-level error; [`HandlerError`] is used for handler failures.

use thiserror::Error;

/// Top-level error for the assistant's handler pipeline.
#[derive(Error, Debug)]
pub enum AssistantError {
    #[error("Handler error: {0}")]
    Handler(#[from] HandlerError),
}

/// Errors produced by handlers.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum HandlerError {
    #[error("Empty content")]
    EmptyContent,

    #[error("Unexpected sender: expected a user message")]
    NotFromUser,
}

/// Result type for core operations; uses [`AssistantError`].
pub type Result<T> = std::result::Result<T, AssistantError>;

//! # assistant-core
//!
//! Core types and traits for the health assistant: [`Message`], [`Sender`], [`Conversation`],
//! the [`Handler`] trait with its [`HandlerResponse`], error types, and tracing initialization.
//! Front-end agnostic; used by handler-chain, responder-handlers and health-assistant.

pub mod conversation;
pub mod error;
pub mod logger;
pub mod types;

pub use conversation::Conversation;
pub use error::{AssistantError, HandlerError, Result};
pub use logger::init_tracing;
pub use types::{Handler, HandlerResponse, Message, Sender};

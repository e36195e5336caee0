//! Terminal handler: always replies with a canned "I don't know" text.

use assistant_core::{Handler, HandlerResponse, Message, Result};
use async_trait::async_trait;
use tracing::info;

use crate::query::FallbackShape;

#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackHandler;

impl FallbackHandler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Handler for FallbackHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let shape = FallbackShape::of(&message.text.to_lowercase());
        info!(shape = ?shape, "step: every source failed, using canned reply");
        Ok(HandlerResponse::Reply(shape.reply(&message.text)))
    }
}

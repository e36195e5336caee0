//! Answers from the local rule table; never touches the network.

use std::sync::Arc;

use assistant_core::{Handler, HandlerError, HandlerResponse, Message, Result};
use async_trait::async_trait;
use tracing::{debug, info};

use crate::intents::{render_response, Clock, JokePicker, RuleTable};

/// Replies when a local intent rule matches the lowercased input; otherwise continues.
/// Only user messages are answered.
#[derive(Clone)]
pub struct LocalRuleHandler {
    rules: Arc<RuleTable>,
    clock: Arc<dyn Clock>,
    jokes: Arc<dyn JokePicker>,
}

impl LocalRuleHandler {
    pub fn new(rules: Arc<RuleTable>, clock: Arc<dyn Clock>, jokes: Arc<dyn JokePicker>) -> Self {
        Self {
            rules,
            clock,
            jokes,
        }
    }
}

#[async_trait]
impl Handler for LocalRuleHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if !message.is_from_user() {
            return Err(HandlerError::NotFromUser.into());
        }
        let lowered = message.text.to_lowercase();
        match self.rules.find(&lowered) {
            Some(rule) => {
                info!(rule = rule.name, "step: local rule matched");
                let reply = render_response(rule.response, self.clock.as_ref(), self.jokes.as_ref());
                Ok(HandlerResponse::Reply(reply))
            }
            None => {
                debug!("step: no local rule matched");
                Ok(HandlerResponse::Continue)
            }
        }
    }
}

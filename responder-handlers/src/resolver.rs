//! Turns one user input into one reply: local rules first, then the external lookups in fixed
//! order, then the canned fallback.

use std::sync::Arc;

use assistant_core::{HandlerResponse, Message};
use handler_chain::HandlerChain;
use lookup::LookupService;
use tracing::{error, info, instrument};

use crate::fallback_handler::FallbackHandler;
use crate::intents::{Clock, JokePicker, RandomJokePicker, RuleTable, SystemClock};
use crate::local_handler::LocalRuleHandler;
use crate::lookup_handler::{LookupHandler, LookupRoute};
use crate::query::fallback_reply;

/// Reply for blank input; no source is consulted.
pub const EMPTY_INPUT_REPLY: &str = "Please type a question and I'll do my best to help.";

/// The four external sources, in the roles the resolver consults them.
#[derive(Clone)]
pub struct LookupSources {
    pub geocoder: Arc<dyn LookupService>,
    pub trivia: Arc<dyn LookupService>,
    pub encyclopedia: Arc<dyn LookupService>,
    pub web_answer: Arc<dyn LookupService>,
}

#[derive(Clone)]
pub struct ResponseResolver {
    chain: HandlerChain,
}

impl ResponseResolver {
    /// Default rule table, wall clock and random jokes.
    pub fn new(sources: LookupSources) -> Self {
        Self::with_rules(
            RuleTable::health_defaults(),
            sources,
            Arc::new(SystemClock),
            Arc::new(RandomJokePicker),
        )
    }

    /// Chain order: local rules, geocoder (location queries), trivia (other queries),
    /// encyclopedia, web answer, fallback.
    pub fn with_rules(
        rules: RuleTable,
        sources: LookupSources,
        clock: Arc<dyn Clock>,
        jokes: Arc<dyn JokePicker>,
    ) -> Self {
        let chain = HandlerChain::new()
            .add_handler(Arc::new(LocalRuleHandler::new(Arc::new(rules), clock, jokes)))
            .add_handler(Arc::new(LookupHandler::new(
                sources.geocoder,
                LookupRoute::LocationOnly,
            )))
            .add_handler(Arc::new(LookupHandler::new(
                sources.trivia,
                LookupRoute::GeneralOnly,
            )))
            .add_handler(Arc::new(LookupHandler::new(
                sources.encyclopedia,
                LookupRoute::Always,
            )))
            .add_handler(Arc::new(LookupHandler::new(
                sources.web_answer,
                LookupRoute::Always,
            )))
            .add_handler(Arc::new(FallbackHandler::new()));
        Self { chain }
    }

    /// Always yields a non-empty reply; lookup failures never surface to the caller.
    #[instrument(skip(self, input), fields(input_len = input.len()))]
    pub async fn resolve(&self, input: &str) -> String {
        let text = input.trim();
        if text.is_empty() {
            info!("step: empty input, prompting for a question");
            return EMPTY_INPUT_REPLY.to_string();
        }

        let message = Message::from_user(text);
        match self.chain.handle(&message).await {
            Ok(HandlerResponse::Reply(reply)) => reply,
            Ok(other) => {
                error!(response = ?other, "step: chain ended without a reply");
                fallback_reply(text)
            }
            Err(e) => {
                error!(error = %e, "step: chain failed");
                fallback_reply(text)
            }
        }
    }
}

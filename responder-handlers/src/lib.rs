//! Handlers that answer a health assistant's chat input.
//!
//! [`ResponseResolver`] wires them into a [`handler_chain::HandlerChain`]:
//! [`LocalRuleHandler`] → [`LookupHandler`] per external source → [`FallbackHandler`].

pub mod fallback_handler;
pub mod intents;
pub mod local_handler;
pub mod lookup_handler;
pub mod query;
pub mod resolver;

pub use fallback_handler::FallbackHandler;
pub use intents::{
    is_simple_query, render_response, Clock, FixedClock, FixedJokePicker, IntentRule, JokePicker,
    RandomJokePicker, RuleResponse, RuleTable, SystemClock, JOKES,
};
pub use local_handler::LocalRuleHandler;
pub use lookup_handler::{LookupHandler, LookupRoute};
pub use query::{extract_place, fallback_reply, is_location_query, FallbackShape};
pub use resolver::{LookupSources, ResponseResolver, EMPTY_INPUT_REPLY};

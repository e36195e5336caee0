//! Wraps one external [`LookupService`] as a step of the fallback chain.
//!
//! A failed or empty lookup is logged and turned into `Continue`, so the next source is tried.

use std::sync::Arc;

use assistant_core::{Handler, HandlerError, HandlerResponse, Message, Result};
use async_trait::async_trait;
use lookup::LookupService;
use tracing::{debug, info, warn};

use crate::query::{extract_place, is_location_query};

/// Which queries a lookup step serves, and what it is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupRoute {
    /// Location queries only; the source receives the extracted place name.
    LocationOnly,
    /// Non-location queries only; the source receives the input as typed.
    GeneralOnly,
    /// Every query; the source receives the input as typed.
    Always,
}

impl LookupRoute {
    pub fn applies(&self, is_location: bool) -> bool {
        match self {
            Self::LocationOnly => is_location,
            Self::GeneralOnly => !is_location,
            Self::Always => true,
        }
    }
}

#[derive(Clone)]
pub struct LookupHandler {
    service: Arc<dyn LookupService>,
    route: LookupRoute,
}

impl LookupHandler {
    pub fn new(service: Arc<dyn LookupService>, route: LookupRoute) -> Self {
        Self { service, route }
    }

    pub fn route(&self) -> LookupRoute {
        self.route
    }
}

#[async_trait]
impl Handler for LookupHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let source = self.service.name();
        let lowered = message.text.to_lowercase();
        if !self.route.applies(is_location_query(&lowered)) {
            debug!(source = %source, route = ?self.route, "step: lookup skipped for this query");
            return Ok(HandlerResponse::Ignore);
        }

        let query = match self.route {
            LookupRoute::LocationOnly => extract_place(&lowered),
            LookupRoute::GeneralOnly | LookupRoute::Always => message.text.trim().to_string(),
        };
        if query.is_empty() && self.route != LookupRoute::LocationOnly {
            return Err(HandlerError::EmptyContent.into());
        }

        info!(source = %source, "step: lookup started");
        match self.service.lookup(&query).await {
            Ok(reply) if !reply.trim().is_empty() => {
                info!(source = %source, reply_len = reply.len(), "step: lookup answered");
                Ok(HandlerResponse::Reply(reply))
            }
            Ok(_) => {
                warn!(source = %source, kind = "empty_result", "step: lookup returned blank text, trying next source");
                Ok(HandlerResponse::Continue)
            }
            Err(e) => {
                warn!(source = %source, kind = e.kind(), error = %e, "step: lookup failed, trying next source");
                Ok(HandlerResponse::Continue)
            }
        }
    }
}

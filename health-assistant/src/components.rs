//! Component factory: builds the response resolver from config. Isolates assembly logic from runner.

use std::sync::Arc;

use anyhow::Result;
use http_lookup::HttpLookupSet;
use lookup::LookupConfig;
use responder_handlers::{LookupSources, ResponseResolver};
use tracing::{info, instrument, warn};

/// HTTP-backed lookup sources from config, sharing one client.
#[instrument(skip(config))]
pub fn build_lookup_sources(config: &dyn LookupConfig) -> Result<LookupSources> {
    let set = HttpLookupSet::from_config(config)
        .map_err(|e| anyhow::anyhow!("Failed to build lookup clients: {}", e))?;

    if set.geocoder.is_configured() {
        info!(base_url = %config.geodb_base_url(), "Geocoding enabled");
    } else {
        warn!("GEODB_API_KEY not set, location queries skip geocoding");
    }
    info!(
        trivia = %config.trivia_base_url(),
        encyclopedia = %config.wikipedia_base_url(),
        web_answer = %config.duckduckgo_base_url(),
        timeout_secs = config.timeout_secs(),
        "Lookup sources ready"
    );

    Ok(LookupSources {
        geocoder: Arc::new(set.geocoder),
        trivia: Arc::new(set.trivia),
        encyclopedia: Arc::new(set.encyclopedia),
        web_answer: Arc::new(set.web_answer),
    })
}

/// Resolver with the default rule table over HTTP lookups.
pub fn build_resolver(config: &dyn LookupConfig) -> Result<ResponseResolver> {
    Ok(ResponseResolver::new(build_lookup_sources(config)?))
}

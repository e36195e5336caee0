//! # HTTP lookup services
//!
//! reqwest implementations of [`lookup::LookupService`] for the assistant's fallback chain:
//!
//! - [`GeoDbLookup`]: GeoDB Cities via RapidAPI (needs an API key)
//! - [`OpenTriviaLookup`]: Open Trivia DB random question
//! - [`WikipediaLookup`]: Wikipedia REST page summary
//! - [`DuckDuckGoLookup`]: DuckDuckGo Instant Answer
//!
//! All four share one [`reqwest::Client`] built from the [`lookup::LookupConfig`] timeout and
//! user agent. Every failure maps to [`lookup::LookupError`]; nothing here retries.
//!
//! ## Example
//!
//! ```rust,no_run
//! use http_lookup::HttpLookupSet;
//! use lookup::{EnvLookupConfig, LookupService};
//!
//! async fn example() -> anyhow::Result<()> {
//!     let config = EnvLookupConfig::default();
//!     let set = HttpLookupSet::from_config(&config)?;
//!     let summary = set.encyclopedia.lookup("Insulin").await?;
//!     println!("{}", summary);
//!     Ok(())
//! }
//! ```

mod client;
mod duckduckgo;
mod geodb;
mod html;
mod trivia;
mod wikipedia;

pub use client::{build_http_client, mask_token};
pub use duckduckgo::DuckDuckGoLookup;
pub use geodb::GeoDbLookup;
pub use html::decode_entities;
pub use trivia::{keywords, OpenTriviaLookup};
pub use wikipedia::WikipediaLookup;

use lookup::{LookupConfig, LookupError};

/// The four sources of the fallback chain, built from one config.
#[derive(Debug, Clone)]
pub struct HttpLookupSet {
    pub geocoder: GeoDbLookup,
    pub trivia: OpenTriviaLookup,
    pub encyclopedia: WikipediaLookup,
    pub web_answer: DuckDuckGoLookup,
}

impl HttpLookupSet {
    pub fn from_config(config: &dyn LookupConfig) -> Result<Self, LookupError> {
        let client = build_http_client(config)?;
        Ok(Self {
            geocoder: GeoDbLookup::new(
                client.clone(),
                config.geodb_base_url().to_string(),
                config.geodb_api_host().to_string(),
                config.geodb_api_key().to_string(),
            ),
            trivia: OpenTriviaLookup::new(client.clone(), config.trivia_base_url().to_string()),
            encyclopedia: WikipediaLookup::new(
                client.clone(),
                config.wikipedia_base_url().to_string(),
            ),
            web_answer: DuckDuckGoLookup::new(client, config.duckduckgo_base_url().to_string()),
        })
    }
}

//! DuckDuckGo Instant Answer API: abstract text, else the first related topic.

use async_trait::async_trait;
use lookup::{LookupError, LookupService};
use reqwest::Client;
use serde::Deserialize;
use tracing::info;

use crate::client::get_json;

#[derive(Debug, Clone)]
pub struct DuckDuckGoLookup {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct InstantAnswer {
    #[serde(rename = "AbstractText", default)]
    abstract_text: String,
    #[serde(rename = "AbstractURL", default)]
    abstract_url: String,
    #[serde(rename = "RelatedTopics", default)]
    related_topics: Vec<RelatedTopic>,
}

/// Topic groups have no `Text`; only the first entry is looked at.
#[derive(Debug, Deserialize)]
struct RelatedTopic {
    #[serde(rename = "Text", default)]
    text: Option<String>,
}

impl DuckDuckGoLookup {
    pub fn new(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }
}

#[async_trait]
impl LookupService for DuckDuckGoLookup {
    fn name(&self) -> &str {
        "duckduckgo"
    }

    async fn lookup(&self, query: &str) -> Result<String, LookupError> {
        info!(query_len = query.len(), "step: duckduckgo instant answer request");

        let url = format!("{}/", self.base_url.trim_end_matches('/'));
        let request = self.client.get(url).query(&[
            ("q", query),
            ("format", "json"),
            ("no_html", "1"),
            ("skip_disambig", "1"),
        ]);

        let body: InstantAnswer = get_json(request, self.name()).await?;

        if !body.abstract_text.trim().is_empty() {
            return Ok(if body.abstract_url.is_empty() {
                body.abstract_text
            } else {
                format!("{}\n\nSource: {}", body.abstract_text, body.abstract_url)
            });
        }

        body.related_topics
            .into_iter()
            .next()
            .and_then(|t| t.text)
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| LookupError::empty("no abstract or related topic"))
    }
}

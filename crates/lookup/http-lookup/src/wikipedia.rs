//! Wikipedia REST page summary.

use async_trait::async_trait;
use lookup::{LookupError, LookupService};
use reqwest::{Client, Url};
use serde::Deserialize;
use tracing::info;

use crate::client::get_json;

#[derive(Debug, Clone)]
pub struct WikipediaLookup {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct SummaryResponse {
    #[serde(default)]
    extract: Option<String>,
    #[serde(default)]
    content_urls: Option<ContentUrls>,
}

#[derive(Debug, Deserialize)]
struct ContentUrls {
    #[serde(default)]
    desktop: Option<PageUrls>,
}

#[derive(Debug, Deserialize)]
struct PageUrls {
    #[serde(default)]
    page: Option<String>,
}

impl WikipediaLookup {
    pub fn new(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// `{base}/page/summary/{query}` with the query percent-encoded as one path segment.
    pub fn summary_url(&self, query: &str) -> Result<Url, LookupError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| LookupError::network(format!("invalid Wikipedia base URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| LookupError::network("Wikipedia base URL cannot carry a path"))?
            .pop_if_empty()
            .extend(["page", "summary", query]);
        Ok(url)
    }
}

#[async_trait]
impl LookupService for WikipediaLookup {
    fn name(&self) -> &str {
        "wikipedia"
    }

    async fn lookup(&self, query: &str) -> Result<String, LookupError> {
        let url = self.summary_url(query)?;
        info!(url = %url, "step: wikipedia summary request");

        let body: SummaryResponse = get_json(self.client.get(url), self.name()).await?;
        let extract = body
            .extract
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| LookupError::empty("summary has no extract"))?;

        let source = body
            .content_urls
            .and_then(|u| u.desktop)
            .and_then(|d| d.page)
            .filter(|p| !p.is_empty());

        Ok(match source {
            Some(page) => format!("{}\n\nSource: {}", extract, page),
            None => extract,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_url_encodes_query_as_one_segment() {
        let lookup = WikipediaLookup::new(
            Client::new(),
            "https://en.wikipedia.org/api/rest_v1".to_string(),
        );
        let url = lookup.summary_url("what is insulin?").unwrap();
        assert_eq!(
            url.as_str(),
            "https://en.wikipedia.org/api/rest_v1/page/summary/what%20is%20insulin%3F"
        );
    }

    #[test]
    fn test_summary_url_tolerates_trailing_slash() {
        let lookup = WikipediaLookup::new(Client::new(), "http://localhost:1234/".to_string());
        let url = lookup.summary_url("Paris").unwrap();
        assert_eq!(url.as_str(), "http://localhost:1234/page/summary/Paris");
    }
}

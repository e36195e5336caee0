//! Open Trivia DB: a random general-knowledge question and its answer.
//!
//! The question is not related to the user's query; the source is only asked when the query
//! has at least one word longer than three characters.

use async_trait::async_trait;
use lookup::{LookupError, LookupService};
use reqwest::Client;
use serde::Deserialize;
use tracing::info;

use crate::client::get_json;
use crate::html::decode_entities;

#[derive(Debug, Clone)]
pub struct OpenTriviaLookup {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct TriviaResponse {
    #[serde(default)]
    results: Vec<TriviaQuestion>,
}

#[derive(Debug, Deserialize)]
struct TriviaQuestion {
    #[serde(default)]
    category: String,
    question: String,
    correct_answer: String,
}

/// Words longer than three characters.
pub fn keywords(query: &str) -> Vec<&str> {
    query
        .split(' ')
        .filter(|word| word.chars().count() > 3)
        .collect()
}

impl OpenTriviaLookup {
    pub fn new(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }
}

#[async_trait]
impl LookupService for OpenTriviaLookup {
    fn name(&self) -> &str {
        "open_trivia"
    }

    async fn lookup(&self, query: &str) -> Result<String, LookupError> {
        let keyword_count = keywords(query).len();
        if keyword_count == 0 {
            return Err(LookupError::empty("query has no keywords"));
        }

        info!(keyword_count, "step: open trivia question request");

        let url = format!("{}/api.php", self.base_url.trim_end_matches('/'));
        let request = self.client.get(url).query(&[("amount", "1")]);

        let body: TriviaResponse = get_json(request, self.name()).await?;
        let question = body
            .results
            .into_iter()
            .next()
            .ok_or_else(|| LookupError::empty("no trivia results"))?;

        Ok(format!(
            "Here's some information related to your query:\n\nQuestion: {}\nAnswer: {}\n\nThis is from the category: {}",
            decode_entities(&question.question),
            decode_entities(&question.correct_answer),
            decode_entities(&question.category),
        ))
    }
}

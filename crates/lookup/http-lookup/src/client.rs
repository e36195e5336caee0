//! Shared HTTP plumbing: client construction, GET-and-decode, API key masking.

use std::time::Duration;

use lookup::{LookupConfig, LookupError};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

/// Builds the reqwest client shared by every source (timeout + user agent from config).
pub fn build_http_client(config: &dyn LookupConfig) -> Result<Client, LookupError> {
    Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs()))
        .user_agent(config.user_agent())
        .build()
        .map_err(|e| LookupError::network(format!("Failed to build HTTP client: {}", e)))
}

/// Sends the request and decodes a JSON body. Any transport failure, non-2xx status
/// or undecodable body is a [`LookupError::Network`].
pub(crate) async fn get_json<T: DeserializeOwned>(
    request: RequestBuilder,
    source: &str,
) -> Result<T, LookupError> {
    let response = request.send().await.map_err(|e| {
        if e.is_timeout() {
            LookupError::network(format!("{} request timed out", source))
        } else {
            LookupError::network(format!("{} request failed: {}", source, e))
        }
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(LookupError::network(format!("{} returned HTTP {}", source, status)));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| LookupError::network(format!("{} returned an undecodable body: {}", source, e)))
}

/// Masks an API key for safe logging: first 7 chars + "***" + last 4 chars.
/// Keys of 11 chars or fewer are fully masked.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    let len = chars.len();
    if len <= 11 {
        return "***".to_string();
    }
    let head: String = chars[..7].iter().collect();
    let tail: String = chars[len - 4..].iter().collect();
    format!("{}***{}", head, tail)
}

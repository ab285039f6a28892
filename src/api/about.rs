use gloo_net::http::Request;
use thiserror::Error;

use crate::api::models::AboutContent;
use crate::config;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("failed to parse response: {0}")]
    Decode(String),
}

/// Loads the About section content from the backend.
pub async fn fetch_about_content() -> Result<AboutContent, FetchError> {
    let response = Request::get(&config::about_url())
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    response
        .json::<AboutContent>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}

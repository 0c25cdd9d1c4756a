use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Settings;
use crate::llm::client::CompletionBackend;
use crate::{QuotidianError, Result};

/// Whole-request bound on the completion call. Local models can be slow,
/// but past this the backend is considered unreachable.
const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Client for the llama.cpp HTTP server's `/completion` endpoint.
pub struct LlamaCppClient {
    http: Client,
    completion_url: String,
}

impl LlamaCppClient {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let base_url = settings.llm.base_url.trim().trim_end_matches('/');
        if base_url.is_empty() {
            return Err(QuotidianError::Config(
                "llm.base_url must not be empty".to_string(),
            ));
        }

        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| QuotidianError::Other(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            completion_url: format!("{base_url}/completion"),
        })
    }

    pub fn completion_url(&self) -> &str {
        &self.completion_url
    }
}

#[async_trait]
impl CompletionBackend for LlamaCppClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let payload = CompletionRequest {
            prompt,
            n_predict: 50,
            temperature: 0.9,
            top_p: 0.95,
            top_k: 40,
            // llama.cpp accepts this as a string; kept for parity with the
            // deployed backend configuration
            repeat_penalty: "1.2",
            stop: &["<|eot_id|>", "<|end_of_text|>", "\n"],
            stream: false,
        };

        debug!("Sending completion request to {}", self.completion_url);
        let response = self
            .http
            .post(&self.completion_url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| QuotidianError::BackendUnreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(QuotidianError::BackendStatus {
                status: status.as_u16(),
            });
        }

        let body: CompletionResponse = response
            .json()
            .await
            .map_err(|e| QuotidianError::Other(format!("Invalid completion response: {e}")))?;

        Ok(body.content)
    }
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    prompt: &'a str,
    n_predict: u32,
    temperature: f64,
    top_p: f64,
    top_k: u32,
    repeat_penalty: &'a str,
    stop: &'a [&'a str],
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    /// Generated text. Missing field is treated as an empty completion.
    #[serde(default)]
    content: String,
}

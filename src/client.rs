use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tokio::task::JoinSet;
use log::{debug, trace, warn, error};

use crate::config::ClientConfig;
use crate::request::{
  word_count, ClientFailure, GenerationRequest, GenerationResult
};

// ===== Wire Types =====

/// Ollama /api/generate request body
#[derive(Debug, Clone, Serialize)]
pub struct OllamaGenerateRequest
{   pub model: String
  , pub prompt: String
  , pub stream: bool
  , #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>
  , #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<usize>
}

/// Ollama /api/generate response body
/// Only the completion field matters; a missing field is
/// treated as an empty completion, not a parse error
#[derive(Debug, Clone, Deserialize)]
pub struct OllamaGenerateResponse
{   #[serde(default)]
    pub response: String
}

// ===== Generation Client =====

/// Client for a locally hosted Ollama generation endpoint
///
/// Holds only static configuration; every call is stateless and
/// independent, so clones are safe to use from concurrent tasks.
/// Multi-turn context, when tested, is encoded by the caller into
/// the prompt text of each call.
#[derive(Debug, Clone)]
pub struct OllamaClient
{   config: ClientConfig
  , http: reqwest::Client
}

impl OllamaClient
{   /// Create a client from a configuration
    pub fn new(config: ClientConfig) -> Self
    {   debug!(
          "Creating OllamaClient for '{}' at {}",
          config.model,
          config.endpoint()
        );
        OllamaClient
        {   config
          , http: reqwest::Client::new()
        }
    }

    /// Create a client from LLMPROBE_* environment variables
    pub fn from_env() -> Self
    {   OllamaClient::new(ClientConfig::from_env())
    }

    /// The client's static configuration
    pub fn config(&self) -> &ClientConfig
    {   &self.config
    }

    fn timeout(&self) -> Duration
    {   Duration::from_secs(self.config.timeout_secs)
    }

    async fn post(
      &self
    , body: &OllamaGenerateRequest
    ) -> Result<reqwest::Response, reqwest::Error>
    {   self.http
          .post(self.config.endpoint())
          .timeout(self.timeout())
          .json(body)
          .send()
          .await
    }

    /// Probe whether the configured model is up and responding
    ///
    /// One minimal non-streaming request; true iff the endpoint
    /// answers with a success status. Never panics, no retries.
    pub async fn is_model_available(&self) -> bool
    {   let probe = OllamaGenerateRequest
        {   model: self.config.model.clone()
          , prompt: "test".to_string()
          , stream: false
          , temperature: None
          , max_tokens: None
        };

        match self.post(&probe).await
        {   Ok(response) => {
              let status = response.status();
              trace!("Availability probe status: {}", status);
              status.is_success()
            }
          , Err(e) => {
              warn!(
                "Model availability check failed: {}",
                e
              );
              false
            }
        }
    }

    /// Generate text from the model
    ///
    /// Total function: every failure mode is captured in the
    /// returned result, never raised. Latency is wall-clock time
    /// around the request, and stays 0.0 when the request never
    /// completed (transport failure or timeout).
    pub async fn generate(
      &self
    , request: &GenerationRequest
    ) -> GenerationResult
    {   debug!(
          "Generating with '{}' ({} prompt words)",
          self.config.model,
          word_count(&request.prompt)
        );

        let body = OllamaGenerateRequest
        {   model: self.config.model.clone()
          , prompt: request.prompt.clone()
          , stream: false
          , temperature: Some(request.temperature)
          , max_tokens: Some(request.max_tokens)
        };

        let start = Instant::now();

        let response = match self.post(&body).await
        {   Ok(response) => response
          , Err(e) => {
              error!("Transport failure: {}", e);
              return GenerationResult::from_failure(
                ClientFailure::Transport(e.to_string()),
                0.0,
                0
              );
            }
        };

        let latency_seconds = start.elapsed().as_secs_f64();
        let prompt_tokens = word_count(&request.prompt);
        let status = response.status();
        trace!("Generation response status: {}", status);

        if !status.is_success()
        {   let body = response.text().await
              .unwrap_or_else(|_|
                "Unknown error".to_string()
              );
            error!("API error {}: {}", status, body);
            return GenerationResult::from_failure(
              ClientFailure::Backend
              {   status: status.as_u16()
                , body
              },
              latency_seconds,
              prompt_tokens
            );
        }

        let raw = match response.text().await
        {   Ok(raw) => raw
          , Err(e) => {
              // Connection dropped mid-body: the call never
              // completed, same accounting as a send failure
              error!("Failed to read response body: {}", e);
              return GenerationResult::from_failure(
                ClientFailure::Transport(e.to_string()),
                0.0,
                0
              );
            }
        };

        let parsed: OllamaGenerateResponse
          = match serde_json::from_str(&raw)
        {   Ok(parsed) => parsed
          , Err(e) => {
              error!("Parse error: {}", e);
              return GenerationResult::from_failure(
                ClientFailure::Malformed(e.to_string()),
                latency_seconds,
                prompt_tokens
              );
            }
        };

        GenerationResult::from_text(
          parsed.response,
          latency_seconds,
          prompt_tokens
        )
    }

    /// Issue the same request from `count` concurrent tasks and
    /// collect every result at a single join point
    ///
    /// The fan-out width is caller-supplied; each task owns its
    /// cloned client and request, so no state is shared. Exactly
    /// `count` results come back, in no particular order.
    pub async fn generate_concurrent(
      &self
    , request: &GenerationRequest
    , count: usize
    ) -> Vec<GenerationResult>
    {   debug!("Dispatching {} concurrent generations", count);
        let mut tasks = JoinSet::new();

        for _ in 0..count
        {   let client = self.clone();
            let request = request.clone();
            tasks.spawn(async move {
              client.generate(&request).await
            });
        }

        let mut results = Vec::with_capacity(count);
        while let Some(joined) = tasks.join_next().await
        {   match joined
            {   Ok(result) => results.push(result)
              , Err(e) => {
                  error!("Generation task failed: {}", e);
                  results.push(GenerationResult::from_failure(
                    ClientFailure::Transport(
                      format!("worker task failed: {}", e)
                    ),
                    0.0,
                    0
                  ));
                }
            }
        }
        results
    }
}

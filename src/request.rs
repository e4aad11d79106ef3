//! Request and result value types for the generation client

use std::fmt;
use serde::{Deserialize, Serialize};

/// Whitespace-delimited word count
/// Used as a stable, reproducible approximation of token counts
pub fn word_count(text: &str) -> usize
{   text.split_whitespace().count()
}

/// One generation call, built fresh per request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest
{   /// The prompt text
    pub prompt: String
  , /// Sampling temperature (advisory, not validated)
    pub temperature: f32
  , /// Cap on generated length
    pub max_tokens: usize
}

impl GenerationRequest
{   /// Create a request with the default sampling parameters
    pub fn new(prompt: impl Into<String>) -> Self
    {   GenerationRequest
        {   prompt: prompt.into()
          , temperature: 0.8
          , max_tokens: 1000
        }
    }

    /// Override the sampling temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self
    {   self.temperature = temperature;
        self
    }

    /// Override the generated-length cap
    pub fn with_max_tokens(mut self, max_tokens: usize) -> Self
    {   self.max_tokens = max_tokens;
        self
    }
}

/// Tagged failure modes of a generation call
/// Consumers match on this instead of probing optional fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientFailure
{   /// Endpoint unreachable, connection reset, or timeout
    /// before any response arrived
    Transport(String)
  , /// Endpoint reachable but returned a non-success status
    Backend
    {   status: u16
      , body: String
    }
  , /// Success status but the body failed to parse as JSON
    Malformed(String)
  , /// Success status, parseable body, but the completion
    /// field was empty or absent
    EmptyCompletion
}

impl fmt::Display for ClientFailure
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   match self
        {   ClientFailure::Transport(msg) => {
              write!(f, "Request failed: {}", msg)
            }
          , ClientFailure::Backend { status, body } => {
              write!(f, "API Error {}: {}", status, body)
            }
          , ClientFailure::Malformed(msg) => {
              write!(f,
                "Invalid JSON in API response: {}",
                msg
              )
            }
          , ClientFailure::EmptyCompletion => {
              write!(f, "No response")
            }
        }
    }
}

/// Normalized outcome of a generation call
///
/// Exactly one of text / error is non-empty for every result the
/// client produces: an HTTP 200 with an empty completion is reported
/// as the soft error "No response" rather than as a silent success.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationResult
{   /// Produced completion, empty on every failure path
    pub text: String
  , /// Human-readable failure description, empty on success
    pub error: String
  , /// Failure tag for exhaustive matching, None on success
    pub failure: Option<ClientFailure>
  , /// Wall-clock duration of the call in fractional seconds;
    /// exactly 0.0 only when the call never completed
    pub latency_seconds: f64
  , /// Word count of the prompt (0 on transport failure)
    pub prompt_tokens: usize
  , /// Word count of the completion (0 on any failure)
    pub completion_tokens: usize
}

impl GenerationResult
{   /// Build a result from a completion returned with a success
    /// status; an empty completion becomes an EmptyCompletion
    /// failure so that error == "" always implies text != ""
    pub fn from_text(
      text: String
    , latency_seconds: f64
    , prompt_tokens: usize
    ) -> Self
    {   if text.is_empty()
        {   return GenerationResult::from_failure(
              ClientFailure::EmptyCompletion,
              latency_seconds,
              prompt_tokens
            );
        }
        let completion_tokens = word_count(&text);
        GenerationResult
        {   text
          , error: String::new()
          , failure: None
          , latency_seconds
          , prompt_tokens
          , completion_tokens
        }
    }

    /// Build a result from any failure condition
    pub fn from_failure(
      failure: ClientFailure
    , latency_seconds: f64
    , prompt_tokens: usize
    ) -> Self
    {   GenerationResult
        {   text: String::new()
          , error: failure.to_string()
          , failure: Some(failure)
          , latency_seconds
          , prompt_tokens
          , completion_tokens: 0
        }
    }

    /// Whether the call failed (including the soft No-response case)
    pub fn is_error(&self) -> bool
    {   !self.error.is_empty()
    }

    /// Completion tokens per second, None when no duration was
    /// measured for the call
    pub fn tokens_per_second(&self) -> Option<f64>
    {   if self.latency_seconds > 0.0
        {   Some(self.completion_tokens as f64 / self.latency_seconds)
        } else
        {   None
        }
    }
}

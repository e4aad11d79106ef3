//! Shared fixture helpers for the behavioral suites

#![allow(dead_code)]

use llmprobe::{Error, GenerationResult, OllamaClient};

/// Build the client under test from LLMPROBE_* environment
/// variables, defaulting to tinyllama on localhost:11434
pub fn test_client() -> OllamaClient
{   let _ = env_logger::builder()
      .is_test(true)
      .try_init();
    OllamaClient::from_env()
}

/// Availability guard: returns false (after printing a skip
/// message) when the configured model is not responding, so
/// live tests can bail out instead of failing
pub async fn require_model(client: &OllamaClient) -> bool
{   if client.is_model_available().await
    {   true
    } else
    {   println!(
          "Skipping: model '{}' is not available at {}",
          client.config().model,
          client.config().endpoint()
        );
        false
    }
}

/// Fail the test with the verbatim error field if the call
/// errored; on success, surface the completion to the log for
/// audit
pub fn assert_no_api_error(result: &GenerationResult)
{   if result.is_error()
    {   panic!("LLM request failed: {}", result.error);
    }
    log::debug!("LLM response: {}", result.text);
}

/// Unwrap a predicate result with its own failure message
pub fn check(result: Result<(), Error>)
{   if let Err(e) = result
    {   panic!("{}", e);
    }
}

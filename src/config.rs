//! Configuration for the generation client

use serde::{Deserialize, Serialize};
use log::debug;

/// Default model served by a local Ollama install
pub const DEFAULT_MODEL: &str = "tinyllama";

/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Generation client configuration
/// Immutable after construction; cloned freely across tasks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig
{   /// Model identifier to invoke
    pub model: String
  , /// Endpoint host
    pub host: String
  , /// Endpoint port
    pub port: u16
  , /// Per-request timeout in seconds
    pub timeout_secs: u64
}

impl ClientConfig
{   /// Create a config for a model on the default local endpoint
    pub fn for_model(model: impl Into<String>) -> Self
    {   ClientConfig
        {   model: model.into()
          , ..ClientConfig::default()
        }
    }

    /// Build a config from LLMPROBE_* environment variables,
    /// falling back to defaults for anything unset
    pub fn from_env() -> Self
    {   let mut config = ClientConfig::default();
        if let Ok(model) = std::env::var("LLMPROBE_MODEL")
        {   config.model = model;
        }
        if let Ok(host) = std::env::var("LLMPROBE_HOST")
        {   config.host = host;
        }
        if let Ok(port) = std::env::var("LLMPROBE_PORT")
        {   match port.parse()
            {   Ok(port) => config.port = port
              , Err(_) => debug!(
                  "Ignoring unparseable LLMPROBE_PORT: {}",
                  port
                )
            }
        }
        if let Ok(secs) = std::env::var("LLMPROBE_TIMEOUT_SECS")
        {   match secs.parse()
            {   Ok(secs) => config.timeout_secs = secs
              , Err(_) => debug!(
                  "Ignoring unparseable LLMPROBE_TIMEOUT_SECS: {}",
                  secs
                )
            }
        }
        config
    }

    /// Full URL of the generation endpoint
    pub fn endpoint(&self) -> String
    {   format!(
          "http://{}:{}/api/generate",
          self.host, self.port
        )
    }
}

impl Default for ClientConfig
{   fn default() -> Self
    {   ClientConfig
        {   model: DEFAULT_MODEL.to_string()
          , host: "localhost".to_string()
          , port: 11434
          , timeout_secs: DEFAULT_TIMEOUT_SECS
        }
    }
}

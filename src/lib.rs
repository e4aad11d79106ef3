pub mod error;
pub mod config;
pub mod request;
pub mod client;
pub mod checks;

/*

llmprobe: behavioral test harness for a locally hosted LLM
generation endpoint (Ollama /api/generate).

One thin client normalizes every call into a fixed result record;
a catalog of predicate checks drives pass/fail decisions over the
generated text; the behavioral suites live under tests/.

llmprobe/
├── Cargo.toml
├── src/
│   ├── lib.rs          # Re-exports and main documentation
│   ├── error.rs        # Check-failure taxonomy
│   ├── config.rs       # Endpoint and model configuration
│   ├── request.rs      # Request/result value types
│   ├── client.rs       # Generation client (Ollama wire protocol)
│   └── checks.rs       # Assertion library
└── tests/
    ├── common/         # Shared fixture helpers
    ├── check_tests.rs  # Predicate properties (pure)
    ├── client_tests.rs # Client contract against a stub server
    └── integration_tests.rs  # Live behavioral suites

The client never raises: transport failures, backend error statuses,
malformed bodies, and empty completions all come back as data in the
GenerationResult, tagged for exhaustive matching. Test logic decides
whether to fail, skip, or ignore.

*/

pub use client::OllamaClient;
pub use config::ClientConfig;
pub use error::Error;
pub use request::{
  word_count, ClientFailure, GenerationRequest, GenerationResult
};

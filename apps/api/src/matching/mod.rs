// Matching: keyword estimator (pure) plus the LLM-first scorer used by handlers.

pub mod estimator;
pub mod handlers;
pub mod prompts;
pub mod scorer;

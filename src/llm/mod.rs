//! LLM module for quotidian
//!
//! Talks to a llama.cpp server over HTTP to generate quote text.

mod client;
mod llama;
mod prompts;

pub use client::CompletionBackend;
pub use llama::LlamaCppClient;
pub use prompts::build_quote_prompt;

use async_trait::async_trait;

use crate::Result;

/// A text-generation backend that turns a prompt into a completion.
///
/// The HTTP layer holds this behind a trait object so tests can point the
/// service at a stub backend.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Run a single non-streaming completion and return the generated text.
    async fn complete(&self, prompt: &str) -> Result<String>;
}

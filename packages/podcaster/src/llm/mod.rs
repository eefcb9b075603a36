//! Text-generation provider seam.
//!
//! The script generator only ever sees [`TextGenerator`]; [`GroqClient`] is
//! the production implementation.

mod client;

pub use client::{GROQ_API_KEY_ENV, GroqClient};

use crate::error::GenerationError;

/// Anything that turns a prompt into generated text.
#[allow(async_fn_in_trait)]
pub trait TextGenerator {
    /// Generate a completion for `prompt` with `model`, capped at
    /// `max_tokens` output tokens.
    async fn generate(
        &self,
        prompt: &str,
        model: &str,
        max_tokens: u32,
    ) -> Result<String, GenerationError>;
}

impl<T: TextGenerator> TextGenerator for &T {
    async fn generate(
        &self,
        prompt: &str,
        model: &str,
        max_tokens: u32,
    ) -> Result<String, GenerationError> {
        (**self).generate(prompt, model, max_tokens).await
    }
}

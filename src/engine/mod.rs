//! Inference engine seam
//!
//! The speech-to-text model lives behind these traits so the controller
//! can be exercised without native whisper bindings. One model context is
//! loaded at a time; switching models releases the previous context before
//! acquiring the new one.

use crate::error::SessionError;

/// Loads model assets into usable contexts
#[async_trait::async_trait]
pub trait InferenceEngine: Send + Sync {
    /// Load the model asset named by `identifier`.
    async fn load_model(&self, identifier: &str) -> Result<Box<dyn ModelContext>, SessionError>;
}

/// A loaded speech-to-text model
#[async_trait::async_trait]
pub trait ModelContext: Send + Sync {
    /// Run inference over decoded samples, returning the transcript.
    async fn transcribe(
        &mut self,
        samples: &[f32],
        language: &str,
        translate: bool,
    ) -> Result<String, SessionError>;

    /// Release the native context. Idempotent; safe to call during
    /// teardown from a task other than the one that loaded it.
    async fn release(&mut self);
}

use std::path::Path;

use crate::error::SessionError;

/// Audio playback service
///
/// There is a single playback slot: `play` replaces whatever was playing.
/// `stop` and `release` are idempotent and safe with no active playback,
/// including across task boundaries during teardown.
#[async_trait::async_trait]
pub trait Playback: Send + Sync {
    /// Start playing `file`, replacing any current playback.
    async fn play(&mut self, file: &Path) -> Result<(), SessionError>;

    /// Stop the current playback, if any.
    async fn stop(&mut self);

    /// Release the underlying player resources.
    async fn release(&mut self);
}

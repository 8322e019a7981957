use std::path::Path;

use tokio::sync::oneshot;

use crate::error::SessionError;

/// Audio capture service
///
/// Implemented by the platform recorder; the session controller only
/// drives the start/stop sequencing. `start` hands back a receiver that
/// fires if capture ends for an external reason (device loss, interruption)
/// so the controller can fall back to idle without a `stop` call.
#[async_trait::async_trait]
pub trait AudioCapture: Send + Sync {
    /// Begin capturing to `target`.
    ///
    /// The returned channel fires at most once, when capture stops without
    /// the controller asking for it.
    async fn start(&mut self, target: &Path) -> Result<oneshot::Receiver<()>, SessionError>;

    /// Finalize the capture file and stop recording.
    async fn stop(&mut self) -> Result<(), SessionError>;
}

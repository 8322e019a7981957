use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What the session is doing right now
///
/// Model loading is deliberately not a phase: it is an orthogonal gate
/// that can overlap `Idle` (startup, model switch).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Not recording, no transcription in flight
    Idle,
    /// Audio capture is active
    Recording,
    /// A transcription request has been accepted and not yet completed
    Transcribing,
}

/// Snapshot of the session controller state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStats {
    /// Current phase of the recording/transcription state machine
    pub phase: SessionPhase,

    /// Whether audio capture is active
    pub is_recording: bool,

    /// Whether a model reload is in flight
    pub is_model_loading: bool,

    /// Whether a new transcription request would be accepted
    pub can_transcribe: bool,

    /// Number of records currently held
    pub record_count: usize,

    /// When the session was created
    pub started_at: DateTime<Utc>,

    /// Session age in seconds
    pub duration_secs: f64,
}

use thiserror::Error;

/// Session controller errors
///
/// None of these are fatal: every variant is caught at the operation
/// boundary, logged, and degrades to a skipped save, an empty record list,
/// or an absent transcription result.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Record snapshot read, write, or parse failure
    #[error("persistence error: {0}")]
    Persistence(String),

    /// Recording start/stop failure in the audio capture service
    #[error("capture error: {0}")]
    Capture(String),

    /// Malformed or unreadable audio file
    #[error("decode error: {0}")]
    Decode(String),

    /// Model asset missing or failed to load
    #[error("model load error: {0}")]
    Load(String),

    /// Inference engine failed on an otherwise valid request
    #[error("inference error: {0}")]
    Inference(String),
}

impl From<std::io::Error> for SessionError {
    fn from(e: std::io::Error) -> Self {
        SessionError::Persistence(e.to_string())
    }
}

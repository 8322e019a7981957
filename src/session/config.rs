use serde::{Deserialize, Serialize};

/// Languages offered by the transcription UI
pub const SUPPORTED_LANGUAGES: &[&str] = &["en", "ja", "sw"];

/// Bundled whisper model assets
pub const SUPPORTED_MODELS: &[&str] = &[
    "ggml-tiny-q5_1.bin",
    "ggml-base-q5_1.bin",
    "ggml-small-q8_0.bin",
];

/// In-memory transcription settings for one session
///
/// Lives for the process lifetime and is not persisted across restarts.
/// Changing `model` triggers an asynchronous engine reload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Language code passed to the inference engine (e.g. "en")
    pub language: String,

    /// Model asset identifier (one of `SUPPORTED_MODELS`)
    pub model: String,

    /// Ask the engine to translate the transcript to English
    pub translate_to_english: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            model: "ggml-tiny-q5_1.bin".to_string(),
            translate_to_english: false,
        }
    }
}

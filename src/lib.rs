pub mod audio;
pub mod config;
pub mod engine;
pub mod error;
pub mod session;
pub mod store;

pub use audio::{AudioCapture, AudioDecoder, Playback, WavDecoder};
pub use config::Config;
pub use engine::{InferenceEngine, ModelContext};
pub use error::SessionError;
pub use session::{
    SessionConfig, SessionController, SessionGates, SessionPhase, SessionStats,
    SUPPORTED_LANGUAGES, SUPPORTED_MODELS,
};
pub use store::{Record, RecordStore};

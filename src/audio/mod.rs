//! Audio collaborator seams
//!
//! Capture and playback are trait contracts filled in by the platform;
//! the WAV decoder is implemented here since the capture service writes
//! plain 16-bit PCM files.

mod capture;
mod decoder;
mod playback;

pub use capture::AudioCapture;
pub use decoder::{AudioDecoder, WavDecoder};
pub use playback::Playback;

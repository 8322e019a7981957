//! Session controller
//!
//! This module provides the `SessionController` abstraction that manages:
//! - Recording start/stop and capture target allocation
//! - The single in-flight transcription gate and model reload gate
//! - The record list and its snapshot persistence
//! - Playback slot replacement and collaborator handle lifetimes

mod config;
mod controller;
mod stats;

pub use config::{SessionConfig, SUPPORTED_LANGUAGES, SUPPORTED_MODELS};
pub use controller::{SessionController, SessionGates};
pub use stats::{SessionPhase, SessionStats};

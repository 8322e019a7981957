use std::path::PathBuf;

use anyhow::Result;
use serde::Deserialize;

use crate::session::SessionConfig;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub storage: StorageConfig,
    pub transcription: TranscriptionConfig,
}

#[derive(Debug, Deserialize)]
pub struct StorageConfig {
    pub data_dir: String,
}

impl StorageConfig {
    /// Fixed per-install record snapshot file.
    pub fn records_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join("records.json")
    }

    /// Directory capture target files are allocated in.
    pub fn samples_dir(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join("samples")
    }

    /// Directory the model assets live in.
    pub fn models_dir(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join("models")
    }
}

#[derive(Debug, Deserialize)]
pub struct TranscriptionConfig {
    pub language: String,
    pub model: String,
    #[serde(default)]
    pub translate_to_english: bool,
}

impl TranscriptionConfig {
    /// Initial in-memory session settings from the config file defaults.
    pub fn to_session(&self) -> SessionConfig {
        SessionConfig {
            language: self.language.clone(),
            model: self.model.clone(),
            translate_to_english: self.translate_to_english,
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

use std::path::Path;

use hound::WavReader;
use tracing::info;

use crate::error::SessionError;

/// Decodes an audio file into the sample buffer the engine consumes
///
/// Blocking by design; the controller runs it on a blocking worker.
pub trait AudioDecoder: Send + Sync {
    /// Decode `file` into mono f32 samples in the -1.0..=1.0 range.
    fn decode(&self, file: &Path) -> Result<Vec<f32>, SessionError>;
}

/// WAV decoder backed by `hound`
///
/// Reads 16-bit PCM WAV files as produced by the capture service and
/// normalizes samples to f32.
#[derive(Debug, Default)]
pub struct WavDecoder;

impl AudioDecoder for WavDecoder {
    fn decode(&self, file: &Path) -> Result<Vec<f32>, SessionError> {
        let reader = WavReader::open(file)
            .map_err(|e| SessionError::Decode(format!("open {}: {}", file.display(), e)))?;

        let spec = reader.spec();
        let samples: Vec<f32> = reader
            .into_samples::<i16>()
            .map(|s| s.map(|v| v as f32 / 32768.0))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| SessionError::Decode(format!("read samples: {}", e)))?;

        info!(
            "Decoded {}: {} samples, {}Hz, {} channels",
            file.display(),
            samples.len(),
            spec.sample_rate,
            spec.channels
        );

        Ok(samples)
    }
}

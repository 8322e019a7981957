use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{DateTime, Local, Utc};
use tokio::task;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use super::config::SessionConfig;
use super::stats::{SessionPhase, SessionStats};
use crate::audio::{AudioCapture, AudioDecoder, Playback};
use crate::engine::{InferenceEngine, ModelContext};
use crate::error::SessionError;
use crate::store::{Record, RecordStore};

/// Shared view of the controller gates
///
/// Cloneable so observers (UI bindings, the capture-stop watcher) can read
/// session state without touching the controller itself. All writes happen
/// on the controller's owning task.
#[derive(Debug, Clone)]
pub struct SessionGates {
    can_transcribe: Arc<AtomicBool>,
    is_recording: Arc<AtomicBool>,
    is_model_loading: Arc<AtomicBool>,
    is_transcribing: Arc<AtomicBool>,
}

impl SessionGates {
    fn new() -> Self {
        Self {
            can_transcribe: Arc::new(AtomicBool::new(false)),
            is_recording: Arc::new(AtomicBool::new(false)),
            is_model_loading: Arc::new(AtomicBool::new(false)),
            is_transcribing: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Whether a new transcription request would be accepted right now.
    pub fn can_transcribe(&self) -> bool {
        self.can_transcribe.load(Ordering::SeqCst)
    }

    /// Whether audio capture is active.
    pub fn is_recording(&self) -> bool {
        self.is_recording.load(Ordering::SeqCst)
    }

    /// Whether a model reload is in flight.
    pub fn is_model_loading(&self) -> bool {
        self.is_model_loading.load(Ordering::SeqCst)
    }

    /// Current phase of the recording/transcription state machine.
    pub fn phase(&self) -> SessionPhase {
        if self.is_recording() {
            SessionPhase::Recording
        } else if self.is_transcribing.load(Ordering::SeqCst) {
            SessionPhase::Transcribing
        } else {
            SessionPhase::Idle
        }
    }
}

/// The session controller
///
/// Owns the record list, the transcription settings, and the collaborator
/// handles (capture, playback, inference engine, decoder), and sequences
/// record → stop → persist → transcribe → append-result. All state lives
/// in this object; it is constructed on session start and torn down with
/// [`SessionController::shutdown`].
///
/// Every method must be called from the single task that owns the
/// controller. Long-running work (decode, inference, model load, snapshot
/// writes) is awaited on workers, never run inline.
pub struct SessionController {
    config: SessionConfig,
    samples_dir: PathBuf,
    store: RecordStore,
    records: Vec<Record>,

    capture: Box<dyn AudioCapture>,
    playback: Box<dyn Playback>,
    engine: Arc<dyn InferenceEngine>,
    decoder: Arc<dyn AudioDecoder>,
    model: Option<Box<dyn ModelContext>>,

    gates: SessionGates,
    current_recording: Option<PathBuf>,
    started_at: DateTime<Utc>,
}

impl SessionController {
    pub fn new(
        config: SessionConfig,
        store: RecordStore,
        samples_dir: impl Into<PathBuf>,
        capture: Box<dyn AudioCapture>,
        playback: Box<dyn Playback>,
        engine: Arc<dyn InferenceEngine>,
        decoder: Arc<dyn AudioDecoder>,
    ) -> Self {
        Self {
            config,
            samples_dir: samples_dir.into(),
            store,
            records: Vec::new(),
            capture,
            playback,
            engine,
            decoder,
            model: None,
            gates: SessionGates::new(),
            current_recording: None,
            started_at: Utc::now(),
        }
    }

    /// Restore the persisted record list and load the configured model.
    ///
    /// The restore itself never triggers a save; only later mutations do.
    /// The transcription gate opens once the initial model load settles,
    /// whether or not it succeeded.
    pub async fn init(&mut self) -> Result<(), SessionError> {
        std::fs::create_dir_all(&self.samples_dir)?;

        let store = self.store.clone();
        self.records = match task::spawn_blocking(move || store.load()).await {
            Ok(records) => records,
            Err(e) => {
                error!("Record load task panicked: {}", e);
                Vec::new()
            }
        };

        let model = self.config.model.clone();
        self.load_model(&model).await;

        info!(
            "Session initialized: {} records, model {}",
            self.records.len(),
            self.config.model
        );

        Ok(())
    }

    /// Records held by this session, oldest first.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Current transcription settings.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Cloneable gate view for observers off the owning task.
    pub fn gates(&self) -> SessionGates {
        self.gates.clone()
    }

    /// Snapshot of the session state.
    pub fn stats(&self) -> SessionStats {
        let duration = Utc::now().signed_duration_since(self.started_at);
        SessionStats {
            phase: self.gates.phase(),
            is_recording: self.gates.is_recording(),
            is_model_loading: self.gates.is_model_loading(),
            can_transcribe: self.gates.can_transcribe(),
            record_count: self.records.len(),
            started_at: self.started_at,
            duration_secs: duration.num_milliseconds() as f64 / 1000.0,
        }
    }

    pub fn set_language(&mut self, language: &str) {
        self.config.language = language.to_string();
    }

    pub fn set_translate(&mut self, translate: bool) {
        self.config.translate_to_english = translate;
    }

    /// Switch the model and reload the engine.
    ///
    /// The transcription gate is held closed for the whole reload so no
    /// request can run against a stale or unloaded context.
    pub async fn set_model(&mut self, identifier: &str) {
        self.config.model = identifier.to_string();
        self.load_model(identifier).await;
    }

    /// Begin capturing to a freshly allocated target file.
    ///
    /// Rejected while a transcription or model reload holds the gate
    /// closed: the stop-recording auto-chain would only be dropped there.
    /// Any active playback is stopped first. On capture failure the
    /// session resets to idle before the error is returned.
    pub async fn start_recording(&mut self) -> Result<(), SessionError> {
        if self.gates.is_recording() {
            warn!("Recording already started");
            return Ok(());
        }
        if !self.gates.can_transcribe() {
            warn!("Transcription gate closed, not starting a recording");
            return Ok(());
        }

        self.playback.stop().await;

        let target = self.allocate_capture_file();
        info!("Starting capture to {}", target.display());

        match self.capture.start(&target).await {
            Ok(stopped_rx) => {
                self.gates.is_recording.store(true, Ordering::SeqCst);
                self.current_recording = Some(target);

                // Hardware interruptions drop the session back to idle
                // without a stop_recording call.
                let is_recording = Arc::clone(&self.gates.is_recording);
                tokio::spawn(async move {
                    if stopped_rx.await.is_ok() {
                        warn!("Capture stopped externally");
                        is_recording.store(false, Ordering::SeqCst);
                    }
                });

                Ok(())
            }
            Err(e) => {
                error!("Failed to start capture: {}", e);
                self.gates.is_recording.store(false, Ordering::SeqCst);
                self.current_recording = None;
                Err(e)
            }
        }
    }

    /// Finalize the capture, append its record, and chain into a
    /// transcription of the captured file.
    ///
    /// One transition, two effects: the record append always completes
    /// (and is persisted) before the transcription result can land on it.
    pub async fn stop_recording(&mut self) -> Result<(), SessionError> {
        if !self.gates.is_recording() {
            warn!("Recording not active");
            return Ok(());
        }

        let stopped = self.capture.stop().await;
        self.gates.is_recording.store(false, Ordering::SeqCst);

        if let Err(e) = stopped {
            error!("Failed to finalize capture: {}", e);
            self.current_recording = None;
            return Err(e);
        }

        let Some(path) = self.current_recording.take() else {
            warn!("Capture finalized but no target file was allocated");
            return Ok(());
        };

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        self.records.push(Record::new_recording(
            &file_name,
            path.display().to_string(),
            Local::now(),
        ));
        self.persist().await;

        info!("Recording finalized: {}", file_name);

        self.request_transcription(&path, None).await;

        Ok(())
    }

    /// Transcribe `path` and append the result block to the record at
    /// `index`, or to the last record when `index` is `None` or out of
    /// range.
    ///
    /// Only permitted while not recording. At most one request is in
    /// flight at a time: while one is running (or a model reload is),
    /// further requests are rejected, not queued.
    /// The gate releases on every exit path. Transcription is serialized,
    /// so the "last record" target can never race.
    pub async fn request_transcription(&mut self, path: &Path, index: Option<usize>) {
        if self.gates.is_recording() {
            warn!(
                "Cannot transcribe {} while recording",
                path.display()
            );
            return;
        }
        if !self.gates.can_transcribe.swap(false, Ordering::SeqCst) {
            warn!(
                "Transcription not ready, rejecting request for {}",
                path.display()
            );
            return;
        }
        self.gates.is_transcribing.store(true, Ordering::SeqCst);

        if let Err(e) = self.transcribe(path, index).await {
            error!("Transcription failed for {}: {}", path.display(), e);
        }

        self.gates.is_transcribing.store(false, Ordering::SeqCst);
        self.gates.can_transcribe.store(true, Ordering::SeqCst);
    }

    /// Transcribe the recording behind an existing record, appending the
    /// result to that record. No-op while recording.
    pub async fn transcribe_record(&mut self, index: usize) {
        if self.gates.is_recording() {
            warn!("Cannot transcribe while recording");
            return;
        }
        let Some(record) = self.records.get(index) else {
            warn!("No record at index {}", index);
            return;
        };
        let path = PathBuf::from(&record.path);
        self.request_transcription(&path, Some(index)).await;
    }

    /// Play the recording behind a record, replacing any current playback.
    pub async fn play_record(&mut self, index: usize) -> Result<(), SessionError> {
        if self.gates.is_recording() {
            warn!("Cannot start playback while recording");
            return Ok(());
        }
        let Some(record) = self.records.get(index) else {
            warn!("No record at index {}", index);
            return Ok(());
        };
        let path = PathBuf::from(&record.path);
        self.playback.stop().await;
        self.playback.play(&path).await
    }

    /// Remove the record at `index`, preserving the order of the rest.
    pub async fn remove_record(&mut self, index: usize) {
        if index >= self.records.len() {
            warn!("Delete ignored, no record at index {}", index);
            return;
        }
        self.records.remove(index);
        self.persist().await;
    }

    /// Release the model and playback handles. Safe to call more than
    /// once; an active capture is stopped without chaining a
    /// transcription.
    pub async fn shutdown(&mut self) {
        info!("Shutting down session");

        if self.gates.is_recording.swap(false, Ordering::SeqCst) {
            if let Err(e) = self.capture.stop().await {
                warn!("Failed to stop capture during shutdown: {}", e);
            }
        }

        if let Some(mut model) = self.model.take() {
            model.release().await;
        }

        self.playback.stop().await;
        self.playback.release().await;
    }

    async fn load_model(&mut self, identifier: &str) {
        self.gates.is_model_loading.store(true, Ordering::SeqCst);
        self.gates.can_transcribe.store(false, Ordering::SeqCst);

        // Previous handles go before the new context comes up.
        if let Some(mut old) = self.model.take() {
            old.release().await;
        }
        self.playback.release().await;

        info!("Loading model: {}", identifier);
        match self.engine.load_model(identifier).await {
            Ok(context) => {
                info!("Model loaded: {}", identifier);
                self.model = Some(context);
            }
            Err(e) => {
                error!("Failed to load model {}: {}", identifier, e);
            }
        }

        // Loading flag drops before the transcription gate reopens.
        self.gates.is_model_loading.store(false, Ordering::SeqCst);
        self.gates.can_transcribe.store(true, Ordering::SeqCst);
    }

    async fn transcribe(&mut self, path: &Path, index: Option<usize>) -> Result<(), SessionError> {
        // The clip plays while it is being transcribed; playback failure
        // does not block the transcription itself.
        self.playback.stop().await;
        if let Err(e) = self.playback.play(path).await {
            warn!("Playback unavailable for {}: {}", path.display(), e);
        }

        let decoder = Arc::clone(&self.decoder);
        let file = path.to_path_buf();
        let samples = task::spawn_blocking(move || decoder.decode(&file))
            .await
            .map_err(|e| SessionError::Decode(format!("decode task panicked: {}", e)))??;

        let Some(model) = self.model.as_mut() else {
            return Err(SessionError::Inference("no model context loaded".into()));
        };

        let started = Instant::now();
        let text = model
            .transcribe(
                &samples,
                &self.config.language,
                self.config.translate_to_english,
            )
            .await?;
        let elapsed = started.elapsed();

        debug!(
            "Transcription finished in {}.{:03}s",
            elapsed.as_secs(),
            elapsed.subsec_millis()
        );

        let block = self.format_result(elapsed, &text);
        self.append_result(&block, index);
        self.persist().await;

        Ok(())
    }

    fn format_result(&self, elapsed: Duration, text: &str) -> String {
        let mut block = String::new();
        block.push_str("✅ Done. \n");
        block.push_str(&format!(
            "🕒 Finished in {}.{:03}s\n",
            elapsed.as_secs(),
            elapsed.subsec_millis()
        ));
        block.push_str(&format!("🎯 Model     : {}\n", self.config.model));
        block.push_str(&format!("🌐 Language  : {}\n", self.config.language));
        block.push_str("📝 Converted Text Result\n");
        if self.config.translate_to_english {
            block.push_str("🌐 Translate To Eng\n");
        }
        block.push_str(text);
        block.push('\n');
        block
    }

    fn append_result(&mut self, block: &str, index: Option<usize>) {
        if self.records.is_empty() {
            warn!("No records to append a transcription result to");
            return;
        }
        let last = self.records.len() - 1;
        let target = match index {
            Some(i) if i < self.records.len() => i,
            _ => last,
        };
        self.records[target].append_result(block);
    }

    fn allocate_capture_file(&self) -> PathBuf {
        let stamp = Local::now().format("%Y%m%d_%H%M%S");
        let suffix = Uuid::new_v4().simple().to_string();
        self.samples_dir
            .join(format!("recording_{}_{}.wav", stamp, &suffix[..8]))
    }

    async fn persist(&self) {
        let store = self.store.clone();
        let snapshot = self.records.clone();
        match task::spawn_blocking(move || store.save(&snapshot)).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => warn!("Failed to save records: {}", e),
            Err(e) => warn!("Record save task panicked: {}", e),
        }
    }
}

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// One persisted recording/transcription log entry
///
/// `logs` starts with the recording-created notice and grows by appended
/// transcription-result blocks; it is never empty after creation. Records
/// only change via whole-record text append or whole-record removal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Human-readable status lines, newest block last
    pub logs: String,

    /// Absolute path to the associated audio file
    pub path: String,
}

impl Record {
    /// Create a record for a freshly captured file, stamped with the
    /// creation time.
    pub fn new_recording(
        file_name: &str,
        path: impl Into<String>,
        created_at: DateTime<Local>,
    ) -> Self {
        let stamp = created_at.format("%Y/%m/%d %H:%M:%S");
        Self {
            logs: format!("🎤 {} recorded at {}", file_name, stamp),
            path: path.into(),
        }
    }

    /// Append a transcription-result block on its own lines.
    pub fn append_result(&mut self, text: &str) {
        self.logs.push('\n');
        self.logs.push_str(text);
    }
}

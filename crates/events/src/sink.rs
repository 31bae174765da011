//! Event sinks - best-effort, append-only recorders

use crate::error::EventError;
use crate::event::{LifecycleEvent, RecordedEvent};
use chrono::Utc;
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// An ordered, append-only recorder of lifecycle events.
///
/// Recording is best-effort: implementations must swallow their own I/O
/// failures (logging them) rather than fail the operation that emitted the
/// event. The registry calls `record` while holding its own mutable
/// borrow, so sinks take `&self` and manage interior mutability.
pub trait EventSink: Send + Sync {
    fn record(&self, event: &LifecycleEvent);
}

/// In-memory sink - keeps every event in recorded order.
///
/// Used by tests to assert on emissions and by embedders that want to
/// inspect the trail without touching disk.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<LifecycleEvent>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded events, in order
    pub fn events(&self) -> Vec<LifecycleEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Count of events matching the given kind code
    pub fn count_kind(&self, kind: &str) -> usize {
        self.events().iter().filter(|e| e.kind() == kind).count()
    }
}

impl EventSink for MemorySink {
    fn record(&self, event: &LifecycleEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}

/// Append-only JSONL sink with daily file rotation.
///
/// Each record becomes one line of `<base>/<YYYY-MM-DD>.jsonl`, flushed
/// immediately. Write failures are logged at warn level and dropped.
pub struct JsonlSink {
    base_path: PathBuf,
    inner: Mutex<WriterState>,
}

#[derive(Default)]
struct WriterState {
    current_file: Option<BufWriter<File>>,
    current_date: Option<String>,
}

impl JsonlSink {
    /// Create a sink writing under `base_path` (created if missing)
    pub fn new(base_path: impl AsRef<Path>) -> Result<Self, EventError> {
        let base_path = base_path.as_ref().to_path_buf();
        fs::create_dir_all(&base_path)?;

        Ok(Self {
            base_path,
            inner: Mutex::new(WriterState::default()),
        })
    }

    fn append(&self, recorded: &RecordedEvent) -> Result<(), EventError> {
        let date = recorded.at.format("%Y-%m-%d").to_string();
        let mut state = self
            .inner
            .lock()
            .map_err(|_| EventError::InvalidFile("sink writer poisoned".to_string()))?;

        // Rotate file if date changed
        if state.current_date.as_ref() != Some(&date) {
            if let Some(ref mut writer) = state.current_file {
                writer.flush()?;
            }

            let file_path = self.base_path.join(format!("{}.jsonl", date));
            let file = OpenOptions::new().create(true).append(true).open(&file_path)?;

            state.current_file = Some(BufWriter::new(file));
            state.current_date = Some(date);
        }

        if let Some(ref mut writer) = state.current_file {
            let json = serde_json::to_string(recorded)?;
            writeln!(writer, "{}", json)?;
            writer.flush()?;
        }

        Ok(())
    }

    /// Path of the file events recorded today land in
    pub fn today_file_path(&self) -> PathBuf {
        let date = Utc::now().format("%Y-%m-%d").to_string();
        self.base_path.join(format!("{}.jsonl", date))
    }
}

impl EventSink for JsonlSink {
    fn record(&self, event: &LifecycleEvent) {
        let recorded = RecordedEvent::now(event.clone());
        if let Err(err) = self.append(&recorded) {
            // Best-effort trail: the triggering operation must not fail.
            tracing::warn!(kind = event.kind(), %err, "failed to record lifecycle event");
        }
    }
}

impl Drop for JsonlSink {
    fn drop(&mut self) {
        if let Ok(mut state) = self.inner.lock() {
            if let Some(ref mut writer) = state.current_file {
                let _ = writer.flush();
            }
        }
    }
}

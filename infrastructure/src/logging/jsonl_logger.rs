//! Append-only JSONL generation log.
//!
//! One line per [`GenerationEvent`]: the event payload's fields plus `type`
//! and a millisecond UTC `timestamp`. The file is never truncated, so a single
//! log collects the history of every run that points at it.

use chrono::{DateTime, SecondsFormat, Utc};
use ideator_application::{GenerationEvent, GenerationLogger};
use serde_json::{Map, Value};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, warn};

/// Flatten an event into the line written to disk.
///
/// Object payloads keep their fields at the top level; anything else is
/// nested under `data`.
fn stamp(event: GenerationEvent, at: DateTime<Utc>) -> Value {
    let mut line = match event.payload {
        Value::Object(fields) => fields,
        other => {
            let mut fields = Map::new();
            fields.insert("data".to_string(), other);
            fields
        }
    };
    line.insert("type".to_string(), Value::from(event.event_type));
    line.insert(
        "timestamp".to_string(),
        Value::from(at.to_rfc3339_opts(SecondsFormat::Millis, true)),
    );
    Value::Object(line)
}

/// [`GenerationLogger`] backed by a JSONL file
pub struct JsonlGenerationLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlGenerationLogger {
    /// Open `path` for appending, creating the file and missing directories.
    ///
    /// Logging is optional, so failures are reported with `warn!` and yield
    /// `None` instead of an error.
    pub fn open(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty())
            && let Err(e) = std::fs::create_dir_all(dir)
        {
            warn!("Generation log disabled, cannot create {}: {}", dir.display(), e);
            return None;
        }

        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => {
                debug!("Generation log: {}", path.display());
                Some(Self {
                    writer: Mutex::new(BufWriter::new(file)),
                    path: path.to_path_buf(),
                })
            }
            Err(e) => {
                warn!("Generation log disabled, cannot open {}: {}", path.display(), e);
                None
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl GenerationLogger for JsonlGenerationLogger {
    fn log(&self, event: GenerationEvent) {
        let Ok(line) = serde_json::to_string(&stamp(event, Utc::now())) else {
            return;
        };

        let Ok(mut writer) = self.writer.lock() else {
            return;
        };
        if let Err(e) = writeln!(writer, "{}", line).and_then(|_| writer.flush()) {
            warn!("Failed to append to {}: {}", self.path.display(), e);
        }
    }
}

impl Drop for JsonlGenerationLogger {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

//! Port for structured generation logging.
//!
//! Separate from `tracing` diagnostics: this port records every generated
//! record and verdict in a machine-readable form (JSONL in production).

use serde_json::Value;

/// A structured generation event.
pub struct GenerationEvent {
    /// Event type identifier (e.g. `"branding_generated"`).
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl GenerationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging generation events.
///
/// `log` is synchronous and infallible; adapters swallow their own I/O
/// errors so a full disk never fails a generation.
pub trait GenerationLogger: Send + Sync {
    fn log(&self, event: GenerationEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoGenerationLogger;

impl GenerationLogger for NoGenerationLogger {
    fn log(&self, _event: GenerationEvent) {}
}

//! Progress notification port
//!
//! Defines the interface for reporting progress during generation.

use std::fmt;

/// Observable stages of one generation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationStage {
    /// Offline synthesis of name, ticker and copy
    Synthesis,
    /// Trending-title enrichment
    Trends,
    /// Registry uniqueness check
    Uniqueness,
}

impl GenerationStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationStage::Synthesis => "synthesis",
            GenerationStage::Trends => "trends",
            GenerationStage::Uniqueness => "uniqueness",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GenerationStage::Synthesis => "Synthesizing branding",
            GenerationStage::Trends => "Fetching trending topics",
            GenerationStage::Uniqueness => "Checking registry",
        }
    }
}

impl fmt::Display for GenerationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Callback for progress updates during generation
///
/// Implementations live in the presentation layer. The trends and
/// uniqueness stages run concurrently, so their callbacks may interleave.
pub trait GenerationProgress: Send + Sync {
    /// Called when a stage starts
    fn on_stage_start(&self, stage: GenerationStage);

    /// Called when a stage finishes; `degraded` is true when it fell back
    fn on_stage_complete(&self, stage: GenerationStage, degraded: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl GenerationProgress for NoProgress {
    fn on_stage_start(&self, _stage: GenerationStage) {}
    fn on_stage_complete(&self, _stage: GenerationStage, _degraded: bool) {}
}

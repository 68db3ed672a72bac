//! Progress reporting for generation runs

use colored::Colorize;
use ideator_application::{GenerationProgress, GenerationStage};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

/// Reports progress with one spinner per stage.
///
/// Trends and uniqueness run concurrently, so spinners are tracked per stage
/// rather than as a single "current" bar.
pub struct ProgressReporter {
    multi: MultiProgress,
    bars: Mutex<HashMap<&'static str, ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            bars: Mutex::new(HashMap::new()),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl GenerationProgress for ProgressReporter {
    fn on_stage_start(&self, stage: GenerationStage) {
        let pb = self.multi.add(ProgressBar::new_spinner());
        pb.set_style(Self::spinner_style());
        pb.set_prefix(stage.label());
        pb.set_message("...");
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut bars) = self.bars.lock() {
            bars.insert(stage.as_str(), pb);
        }
    }

    fn on_stage_complete(&self, stage: GenerationStage, degraded: bool) {
        let pb = self
            .bars
            .lock()
            .ok()
            .and_then(|mut bars| bars.remove(stage.as_str()));
        if let Some(pb) = pb {
            if degraded {
                pb.finish_with_message(format!("{}", "skipped (fallback used)".yellow()));
            } else {
                pb.finish_with_message(format!("{}", "done".green()));
            }
        }
    }
}

/// Simple text-based progress (no fancy UI), written to stderr
pub struct SimpleProgress;

impl GenerationProgress for SimpleProgress {
    fn on_stage_start(&self, stage: GenerationStage) {
        eprintln!("{} {}", "->".cyan(), stage.label().bold());
    }

    fn on_stage_complete(&self, stage: GenerationStage, degraded: bool) {
        if degraded {
            eprintln!("  {} {} (fallback used)", "x".yellow(), stage);
        } else {
            eprintln!("  {} {}", "v".green(), stage);
        }
    }
}

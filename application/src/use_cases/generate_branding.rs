//! Generate Branding use case
//!
//! Orchestrates one full generation run:
//!
//! 1. Validate the idea (length bounds from [`GenerationParams`])
//! 2. Synthesize the branding record offline
//! 3. Concurrently fetch trending titles and check registry uniqueness,
//!    each bounded by its own timeout and the optional cancellation token
//! 4. Return the record (with external signals) and the verdict
//!
//! Network failures never fail the run. A conflicting verdict is returned
//! as-is; regenerating is left to the caller.

use crate::config::GenerationParams;
use crate::ports::generation_logger::{GenerationEvent, GenerationLogger, NoGenerationLogger};
use crate::ports::progress::{GenerationProgress, GenerationStage, NoProgress};
use crate::ports::token_registry::TokenRegistry;
use crate::ports::trending_topics::TrendingTopics;
use crate::use_cases::check_uniqueness::CheckUniquenessUseCase;
use crate::use_cases::shared::bounded_call;
use chrono::Utc;
use ideator_domain::core::string::truncate;
use ideator_domain::{
    BrandingRecord, DomainError, ProjectIdea, UniquenessVerdict, rng_from_seed,
    synthesize_branding,
};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

/// Errors that can occur during generation
#[derive(Error, Debug)]
pub enum GenerateBrandingError {
    /// The idea was rejected; nothing was generated
    #[error("{0}")]
    InvalidInput(DomainError),

    /// A synthesis chain ran dry. Indicates a defect.
    #[error("Internal error: {0}")]
    Internal(DomainError),
}

impl GenerateBrandingError {
    pub fn is_input_error(&self) -> bool {
        matches!(self, GenerateBrandingError::InvalidInput(_))
    }
}

impl From<DomainError> for GenerateBrandingError {
    fn from(e: DomainError) -> Self {
        if e.is_input_error() {
            GenerateBrandingError::InvalidInput(e)
        } else {
            GenerateBrandingError::Internal(e)
        }
    }
}

/// Input for the GenerateBranding use case
#[derive(Debug, Clone)]
pub struct GenerateBrandingInput {
    pub idea: String,
    /// Overrides [`GenerationParams::seed`] for this run
    pub seed: Option<u64>,
}

impl GenerateBrandingInput {
    pub fn new(idea: impl Into<String>) -> Self {
        Self {
            idea: idea.into(),
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Result of a generation run
#[derive(Debug, Clone, Serialize)]
pub struct GenerationOutput {
    pub branding: BrandingRecord,
    pub uniqueness: UniquenessVerdict,
}

/// Use case for generating token branding
pub struct GenerateBrandingUseCase {
    trends: Arc<dyn TrendingTopics>,
    uniqueness: CheckUniquenessUseCase,
    params: GenerationParams,
    generation_logger: Arc<dyn GenerationLogger>,
    cancellation_token: Option<CancellationToken>,
}

impl GenerateBrandingUseCase {
    pub fn new(
        registry: Arc<dyn TokenRegistry>,
        trends: Arc<dyn TrendingTopics>,
        params: GenerationParams,
    ) -> Self {
        let uniqueness = CheckUniquenessUseCase::new(registry, params.registry_timeout);
        Self {
            trends,
            uniqueness,
            params,
            generation_logger: Arc::new(NoGenerationLogger),
            cancellation_token: None,
        }
    }

    /// Create with a generation logger.
    pub fn with_generation_logger(mut self, logger: Arc<dyn GenerationLogger>) -> Self {
        self.generation_logger = logger;
        self
    }

    /// Cancelling `token` aborts pending network calls; their fallbacks are used.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.uniqueness = self.uniqueness.with_cancellation(token.clone());
        self.cancellation_token = Some(token);
        self
    }

    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        input: GenerateBrandingInput,
    ) -> Result<GenerationOutput, GenerateBrandingError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: GenerateBrandingInput,
        progress: &dyn GenerationProgress,
    ) -> Result<GenerationOutput, GenerateBrandingError> {
        let idea = self.validate(&input.idea)?;
        info!("Generating branding for: {}", truncate(idea.content(), 80));

        progress.on_stage_start(GenerationStage::Synthesis);
        let mut rng = rng_from_seed(input.seed.or(self.params.seed));
        let record = match synthesize_branding(&idea, Utc::now(), &mut rng) {
            Ok(record) => record.with_confidence(self.params.confidence),
            Err(e) => {
                error!("Branding synthesis failed: {}", e);
                progress.on_stage_complete(GenerationStage::Synthesis, true);
                return Err(e.into());
            }
        };
        progress.on_stage_complete(GenerationStage::Synthesis, false);
        debug!(
            "Synthesized {} ({}) under theme {}",
            record.token_name(),
            record.symbol(),
            record.theme()
        );

        let (signals, verdict) = tokio::join!(
            self.fetch_signals(progress),
            self.check_uniqueness(&record, progress)
        );

        let record = record.with_external_signals(signals);

        self.generation_logger.log(GenerationEvent::new(
            "branding_generated",
            serde_json::json!({
                "idea": truncate(idea.content(), 200),
                "branding": &record,
                "uniqueness": &verdict,
            }),
        ));

        info!(
            "Generated {} ({}), unique={}, degraded={}",
            record.token_name(),
            record.symbol(),
            verdict.is_unique,
            verdict.degraded
        );

        Ok(GenerationOutput {
            branding: record,
            uniqueness: verdict,
        })
    }

    fn validate(&self, text: &str) -> Result<ProjectIdea, GenerateBrandingError> {
        let idea = ProjectIdea::new(text)?;
        let len = idea.char_len();
        if len < self.params.min_idea_len {
            return Err(GenerateBrandingError::InvalidInput(DomainError::InvalidIdea(
                format!(
                    "Project idea must be at least {} characters",
                    self.params.min_idea_len
                ),
            )));
        }
        if len > self.params.max_idea_len {
            return Err(GenerateBrandingError::InvalidInput(DomainError::InvalidIdea(
                format!(
                    "Project idea must not exceed {} characters",
                    self.params.max_idea_len
                ),
            )));
        }
        Ok(idea)
    }

    async fn fetch_signals(&self, progress: &dyn GenerationProgress) -> Vec<String> {
        if !self.params.trends_enabled || self.params.trending_limit == 0 {
            return Vec::new();
        }

        progress.on_stage_start(GenerationStage::Trends);
        let limit = self.params.trending_limit;
        match bounded_call(
            self.trends.top_titles(limit),
            self.params.trends_timeout,
            self.cancellation_token.as_ref(),
        )
        .await
        {
            Ok(mut titles) => {
                titles.truncate(limit);
                progress.on_stage_complete(GenerationStage::Trends, false);
                titles
            }
            Err(failure) => {
                warn!("Trending topics unavailable: {}", failure);
                progress.on_stage_complete(GenerationStage::Trends, true);
                Vec::new()
            }
        }
    }

    async fn check_uniqueness(
        &self,
        record: &BrandingRecord,
        progress: &dyn GenerationProgress,
    ) -> UniquenessVerdict {
        progress.on_stage_start(GenerationStage::Uniqueness);
        let verdict = self
            .uniqueness
            .resolve(record.token_name(), record.symbol().as_str())
            .await;
        progress.on_stage_complete(GenerationStage::Uniqueness, verdict.degraded);
        verdict
    }
}

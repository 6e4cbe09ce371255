use std::sync::Arc;
use std::time::Duration;

use crate::analysis::extractor::{ProfileExtractor, VocabularyExtractor};
use crate::analysis::ids::{IdGenerator, UuidV4Ids};
use crate::analysis::random::{RandomSource, SharedRandom, StdRandom};
use crate::analysis::vocabulary::{candidate_vocabulary, employee_vocabulary};
use crate::config::Config;
use crate::development::session::DevelopmentSession;
use crate::errors::AppError;
use crate::recruiting::session::RecruitingSession;
use crate::sessions::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable extractors, one per pipeline. Default: `VocabularyExtractor`.
    pub candidate_extractor: Arc<dyn ProfileExtractor>,
    pub employee_extractor: Arc<dyn ProfileExtractor>,
    pub rng: SharedRandom,
    pub ids: Arc<dyn IdGenerator>,
    pub recruiting: SessionStore<RecruitingSession>,
    pub development: SessionStore<DevelopmentSession>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => SharedRandom::new(StdRandom::seeded(seed)),
            None => SharedRandom::new(StdRandom::from_entropy()),
        };
        Self::with_parts(config, rng, Arc::new(UuidV4Ids))
    }

    pub fn with_parts(config: Config, rng: SharedRandom, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            config,
            candidate_extractor: Arc::new(VocabularyExtractor::new(candidate_vocabulary())),
            employee_extractor: Arc::new(VocabularyExtractor::new(employee_vocabulary())),
            rng,
            ids,
            recruiting: SessionStore::new("recruiting"),
            development: SessionStore::new("development"),
        }
    }

    /// Waits out the simulated analysis latency, then runs `f` with the shared
    /// random source. No cancellation and no retry.
    pub async fn analyze_after_delay<T>(
        &self,
        f: impl FnOnce(&mut dyn RandomSource) -> Result<T, AppError>,
    ) -> Result<T, AppError> {
        tokio::time::sleep(Duration::from_millis(self.config.analysis_delay_ms)).await;
        self.rng.with(f)?
    }
}

//! Shared state handed to every request handler

use crate::analyzer::{AggregationService, ClassificationOrchestrator, LanguageModelClient};
use crate::models::InputLimits;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Read-only services shared across requests. Cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<ClassificationOrchestrator>,
    pub aggregator: Arc<AggregationService>,
    pub model_name: String,
    pub limits: InputLimits,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(
        llm_client: Arc<dyn LanguageModelClient>,
        limits: InputLimits,
        call_timeout: Duration,
    ) -> Self {
        let model_name = llm_client.model_name().to_string();

        Self {
            orchestrator: Arc::new(ClassificationOrchestrator::new(
                Arc::clone(&llm_client),
                limits,
                call_timeout,
            )),
            aggregator: Arc::new(AggregationService::new(llm_client, limits, call_timeout)),
            model_name,
            limits,
            start_time: Instant::now(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

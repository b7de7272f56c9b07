use crate::analyzer::llm_client::{complete_with_timeout, LanguageModelClient};
use crate::analyzer::prompts::PromptTemplate;
use crate::error::ReviewError;
use crate::models::{DerivedDocument, DocumentKind, InputLimits, ReviewCollection};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Produces insights, trends, or a summary from a review collection with a
/// single model call. The completion is returned as-is.
pub struct AggregationService {
    llm_client: Arc<dyn LanguageModelClient>,
    limits: InputLimits,
    call_timeout: Duration,
}

impl AggregationService {
    pub fn new(
        llm_client: Arc<dyn LanguageModelClient>,
        limits: InputLimits,
        call_timeout: Duration,
    ) -> Self {
        Self {
            llm_client,
            limits,
            call_timeout,
        }
    }

    /// Validates raw reviews before any model call, then aggregates them.
    pub async fn aggregate<S: AsRef<str>>(
        &self,
        kind: DocumentKind,
        reviews: &[S],
    ) -> Result<DerivedDocument, ReviewError> {
        let collection =
            ReviewCollection::new(reviews.iter().map(|r| r.as_ref().to_string()), &self.limits)?;
        self.aggregate_collection(kind, &collection).await
    }

    pub async fn aggregate_collection(
        &self,
        kind: DocumentKind,
        reviews: &ReviewCollection,
    ) -> Result<DerivedDocument, ReviewError> {
        let start_time = Instant::now();
        let prompt = PromptTemplate::build_aggregation_prompt(kind, reviews);

        tracing::debug!(
            kind = %kind,
            reviews = reviews.len(),
            prompt_chars = prompt.len(),
            "dispatching aggregation"
        );

        let content = complete_with_timeout(self.llm_client.as_ref(), &prompt, self.call_timeout)
            .await
            .map_err(|e| {
                tracing::warn!(kind = %kind, error = %e, "aggregation failed");
                ReviewError::orchestration(kind.description(), e)
            })?;

        if content.trim().is_empty() {
            tracing::warn!(kind = %kind, "model returned empty content");
            return Err(ReviewError::orchestration(
                kind.description(),
                ReviewError::ModelInvocation("model returned empty content".to_string()),
            ));
        }

        tracing::info!(
            kind = %kind,
            reviews = reviews.len(),
            duration_ms = start_time.elapsed().as_millis() as u64,
            "reviews aggregated"
        );

        Ok(DerivedDocument::new(kind, content))
    }
}

use crate::analyzer::llm_client::{complete_with_timeout, LanguageModelClient};
use crate::analyzer::parser::ResponseParser;
use crate::analyzer::prompts::PromptTemplate;
use crate::error::ReviewError;
use crate::models::{
    AggregateClassification, ClassificationResult, ClassificationTask, InputLimits, ReviewText,
};
use futures::future::try_join_all;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Runs the three classification tasks over one review.
pub struct ClassificationOrchestrator {
    llm_client: Arc<dyn LanguageModelClient>,
    limits: InputLimits,
    call_timeout: Duration,
}

impl ClassificationOrchestrator {
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

    /// Validates raw caller text, then classifies it. Invalid text never
    /// reaches the model.
    pub async fn classify(&self, text: &str) -> Result<AggregateClassification, ReviewError> {
        let review = ReviewText::new(text, &self.limits)?;
        self.classify_review(&review).await
    }

    /// All three tasks are issued concurrently. The first failure fails the
    /// whole aggregate and the remaining calls are dropped.
    pub async fn classify_review(
        &self,
        review: &ReviewText,
    ) -> Result<AggregateClassification, ReviewError> {
        let start_time = Instant::now();

        let task_futures = ClassificationTask::ALL
            .into_iter()
            .map(|task| self.run_task(task, review));

        let results = try_join_all(task_futures).await.map_err(|e| {
            tracing::warn!(error = %e, "classification aborted");
            e
        })?;

        let aggregate = AggregateClassification::from_results(results)?;

        tracing::info!(
            model = %self.llm_client.model_name(),
            duration_ms = start_time.elapsed().as_millis() as u64,
            sentiment = aggregate.sentiment().category(),
            category = aggregate.category().category(),
            intent = aggregate.intent().category(),
            "review classified"
        );

        Ok(aggregate)
    }

    async fn run_task(
        &self,
        task: ClassificationTask,
        review: &ReviewText,
    ) -> Result<ClassificationResult, ReviewError> {
        let prompt = PromptTemplate::build_classification_prompt(task, review);
        tracing::debug!(task = %task, prompt_chars = prompt.len(), "dispatching classification");

        let completion = complete_with_timeout(self.llm_client.as_ref(), &prompt, self.call_timeout)
            .await
            .map_err(|e| ReviewError::orchestration(task.description(), e))?;

        let result = ResponseParser::parse(task, &completion).map_err(|e| {
            tracing::debug!(
                task = %task,
                kind = ?e.malformed_kind(),
                completion = %completion,
                "unparseable completion"
            );
            ReviewError::orchestration(task.description(), e)
        })?;

        tracing::debug!(
            task = %task,
            label = result.category(),
            reason = result.reason(),
            "task classified"
        );
        Ok(result)
    }

    pub fn get_model_info(&self) -> String {
        format!(
            "Model: {}, Timeout: {}s, Max review length: {} chars",
            self.llm_client.model_name(),
            self.call_timeout.as_secs(),
            self.limits.max_text_chars
        )
    }
}

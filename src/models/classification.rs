use serde::{Serialize, Serializer};
use crate::error::{MalformedKind, ReviewError};
use crate::models::ClassificationTask;

/// A validated label for one task. Only constructible with a label from the
/// task's set and a non-empty reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationResult {
    task: ClassificationTask,
    category: &'static str,
    reason: String,
}

impl ClassificationResult {
    pub fn new(
        task: ClassificationTask,
        category: &str,
        reason: impl Into<String>,
    ) -> Result<Self, ReviewError> {
        let reason = reason.into();
        if reason.trim().is_empty() {
            return Err(ReviewError::malformed(
                MalformedKind::MissingField,
                format!("{} result has an empty \"reason\"", task),
            ));
        }

        let category = task.canonical_label(category).ok_or_else(|| {
            ReviewError::malformed(
                MalformedKind::InvalidLabel,
                format!(
                    "\"{}\" is not a valid {} label (expected one of: {})",
                    category,
                    task,
                    task.valid_labels().join(", ")
                ),
            )
        })?;

        Ok(Self {
            task,
            category,
            reason,
        })
    }

    pub fn task(&self) -> ClassificationTask {
        self.task
    }

    pub fn category(&self) -> &'static str {
        self.category
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Per-task results of one review, held in fixed task order.
///
/// Serializes as a bare array `[sentiment, category, intent]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateClassification {
    sentiment: ClassificationResult,
    category: ClassificationResult,
    intent: ClassificationResult,
}

impl AggregateClassification {
    /// Slots results by their task. Every task must appear exactly once.
    pub fn from_results<I>(results: I) -> Result<Self, ReviewError>
    where
        I: IntoIterator<Item = ClassificationResult>,
    {
        let mut slots: [Option<ClassificationResult>; 3] = [None, None, None];

        for result in results {
            let slot = &mut slots[result.task().position()];
            if slot.is_some() {
                return Err(ReviewError::Validation(format!(
                    "Duplicate {} result in aggregate",
                    result.task()
                )));
            }
            *slot = Some(result);
        }

        let [sentiment, category, intent] = slots;
        let missing = |task: ClassificationTask| {
            ReviewError::Validation(format!("Missing {} result in aggregate", task))
        };

        Ok(Self {
            sentiment: sentiment.ok_or_else(|| missing(ClassificationTask::Sentiment))?,
            category: category.ok_or_else(|| missing(ClassificationTask::Category))?,
            intent: intent.ok_or_else(|| missing(ClassificationTask::Intent))?,
        })
    }

    pub fn sentiment(&self) -> &ClassificationResult {
        &self.sentiment
    }

    pub fn category(&self) -> &ClassificationResult {
        &self.category
    }

    pub fn intent(&self) -> &ClassificationResult {
        &self.intent
    }

    pub fn labels(&self) -> [&'static str; 3] {
        [
            self.sentiment.category(),
            self.category.category(),
            self.intent.category(),
        ]
    }
}

impl Serialize for AggregateClassification {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.labels())
    }
}

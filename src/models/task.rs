use std::fmt;

/// One of the three fixed classification dimensions applied to a review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassificationTask {
    Sentiment,
    Category,
    Intent,
}

const SENTIMENT_LABELS: &[&str] = &["positive", "negative", "neutral"];
const CATEGORY_LABELS: &[&str] = &["bug", "feature_request", "question", "feedback"];
const INTENT_LABELS: &[&str] = &["urgent", "medium", "low"];

impl ClassificationTask {
    /// Output order of the aggregate. Callers index positionally.
    pub const ALL: [ClassificationTask; 3] = [
        ClassificationTask::Sentiment,
        ClassificationTask::Category,
        ClassificationTask::Intent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClassificationTask::Sentiment => "sentiment",
            ClassificationTask::Category => "category",
            ClassificationTask::Intent => "intent",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ClassificationTask::Sentiment => "sentiment classification",
            ClassificationTask::Category => "category tagging",
            ClassificationTask::Intent => "intent classification",
        }
    }

    /// Canonical label set the model must choose from.
    pub fn valid_labels(&self) -> &'static [&'static str] {
        match self {
            ClassificationTask::Sentiment => SENTIMENT_LABELS,
            ClassificationTask::Category => CATEGORY_LABELS,
            ClassificationTask::Intent => INTENT_LABELS,
        }
    }

    /// Case-insensitive lookup returning the canonical spelling.
    pub fn canonical_label(&self, candidate: &str) -> Option<&'static str> {
        let candidate = candidate.trim();
        self.valid_labels()
            .iter()
            .copied()
            .find(|label| label.eq_ignore_ascii_case(candidate))
    }

    pub fn position(&self) -> usize {
        match self {
            ClassificationTask::Sentiment => 0,
            ClassificationTask::Category => 1,
            ClassificationTask::Intent => 2,
        }
    }
}

impl fmt::Display for ClassificationTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

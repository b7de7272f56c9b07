use crate::models::{ClassificationTask, DocumentKind, ReviewCollection, ReviewText};

pub struct PromptTemplate;

impl PromptTemplate {
    /// Classification prompt for one task. The review is embedded verbatim.
    pub fn build_classification_prompt(task: ClassificationTask, text: &ReviewText) -> String {
        let instructions = match task {
            ClassificationTask::Sentiment => Self::get_sentiment_instructions(),
            ClassificationTask::Category => Self::get_category_instructions(),
            ClassificationTask::Intent => Self::get_intent_instructions(),
        };

        format!(
            r#"{}

Review: {}

{}

Output:"#,
            instructions,
            text.as_str(),
            Self::build_output_contract(task)
        )
    }

    /// Aggregation prompt for a review collection. Reviews are joined by a
    /// single space in submission order.
    pub fn build_aggregation_prompt(kind: DocumentKind, reviews: &ReviewCollection) -> String {
        let combined = reviews.combined();

        match kind {
            DocumentKind::Insights => format!(
                "Based on the following user reviews: {}, generate actionable insights in brief and avoid any duplication.",
                combined
            ),
            DocumentKind::Trends => format!(
                "Analyze the following array of user reviews for trends: {}. Please keep it brief and return your answer in a .md format",
                combined
            ),
            DocumentKind::Summary => format!(
                "Summarize the following text: {}. Please keep it brief and return your answer in a .md format (Markdown Format)",
                combined
            ),
        }
    }

    pub fn build_system_prompt() -> &'static str {
        "You analyze user reviews of a mobile app for a product team. \
Follow the requested output format exactly and do not add commentary outside it."
    }

    /// Closing instruction shared by every classification task: a JSON object
    /// with exactly `category` and `reason`, and the legal category values.
    fn build_output_contract(task: ClassificationTask) -> String {
        let labels = task
            .valid_labels()
            .iter()
            .map(|label| format!("\"{}\"", label))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            r#"Respond with a single JSON object with exactly two fields, "category" and "reason". The "category" field must be one of {}. The "reason" field must be a string explaining the reason for the category."#,
            labels
        )
    }

    fn get_sentiment_instructions() -> &'static str {
        "You are a sentiment analysis expert who can assign sentiment tags to user reviews. \
Analyze the sentiment of the review below and label it as positive, negative, or neutral."
    }

    fn get_category_instructions() -> &'static str {
        "You are an expert at labeling a user review of a mobile app as bug, feature_request, question, or feedback. \
A bug reports broken behavior, a feature_request asks for something new, a question asks for help, \
and feedback is any other opinion about the app."
    }

    fn get_intent_instructions() -> &'static str {
        "You are an intent classification expert. Classify how urgently the review below needs \
a response from the product team into the urgent, medium, or low category label."
    }
}

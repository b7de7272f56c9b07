use review_insight::{
    ClassificationTask, DocumentKind, InputLimits, PromptTemplate, ReviewCollection, ReviewText,
};

#[test]
fn classification_prompts_enumerate_their_labels() {
    let text = ReviewText::new("Can I export my photos?", &InputLimits::default()).unwrap();

    for task in ClassificationTask::ALL {
        let prompt = PromptTemplate::build_classification_prompt(task, &text);

        assert!(prompt.contains("Can I export my photos?"));
        assert!(prompt.contains(r#""category" and "reason""#));
        for label in task.valid_labels() {
            assert!(prompt.contains(&format!("\"{}\"", label)), "{} missing {}", task, label);
        }
    }
}

#[test]
fn aggregation_prompts_differ_by_kind() {
    let reviews = ReviewCollection::new(
        vec!["Battery drain since 3.2", "Stories load slowly"],
        &InputLimits::default(),
    )
    .unwrap();

    let insights = PromptTemplate::build_aggregation_prompt(DocumentKind::Insights, &reviews);
    let trends = PromptTemplate::build_aggregation_prompt(DocumentKind::Trends, &reviews);
    let summary = PromptTemplate::build_aggregation_prompt(DocumentKind::Summary, &reviews);

    for prompt in [&insights, &trends, &summary] {
        assert!(prompt.contains("Battery drain since 3.2 Stories load slowly"));
    }

    assert!(insights.contains("actionable insights"));
    assert!(trends.contains("for trends"));
    assert!(summary.contains("Summarize"));
    assert!(summary.contains("Markdown"));
}

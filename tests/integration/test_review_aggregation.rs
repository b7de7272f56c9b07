#[path = "../common/mod.rs"]
mod common;

use common::{Reply, ScriptedClient};
use review_insight::{AggregationService, DocumentKind, InputLimits, ReviewError};
use std::sync::Arc;
use std::time::Duration;

fn service(client: Arc<ScriptedClient>) -> AggregationService {
    AggregationService::new(client, InputLimits::default(), Duration::from_secs(60))
}

#[tokio::test]
async fn empty_collections_are_rejected_without_model_calls() {
    let client = ScriptedClient::new()
        .otherwise(Reply::Text("should not be used".to_string()))
        .into_arc();
    let service = service(client.clone());
    let empty: Vec<String> = Vec::new();

    for kind in [DocumentKind::Trends, DocumentKind::Insights, DocumentKind::Summary] {
        let err = service.aggregate(kind, &empty).await.unwrap_err();
        assert!(matches!(err, ReviewError::Validation(_)), "{}: {:?}", kind, err);
    }

    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn summary_is_idempotent_for_identical_responses() {
    let markdown = "# Summary\n\n* Users like the new editor\n* Sync is unreliable";
    let client = ScriptedClient::new()
        .otherwise(Reply::Text(markdown.to_string()))
        .into_arc();
    let service = service(client.clone());
    let reviews = ["New editor is great", "Sync lost my drafts"];

    let first = service.aggregate(DocumentKind::Summary, &reviews).await.unwrap();
    let second = service.aggregate(DocumentKind::Summary, &reviews).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first.content, markdown);
    assert_eq!(client.call_count(), 2);

    let prompts = client.prompts();
    assert_eq!(prompts[0], prompts[1]);
}

#[tokio::test]
async fn each_kind_issues_exactly_one_call() {
    let reviews = vec![
        "Crashes when uploading video".to_string(),
        "Crashes when uploading video".to_string(),
        "Please add a dark theme".to_string(),
    ];

    for kind in [DocumentKind::Insights, DocumentKind::Trends, DocumentKind::Summary] {
        let client = ScriptedClient::new()
            .otherwise(Reply::Text(format!("{} output", kind)))
            .into_arc();

        let document = service(client.clone()).aggregate(kind, &reviews).await.unwrap();

        assert_eq!(document.kind, kind);
        assert_eq!(document.content, format!("{} output", kind));
        assert_eq!(client.call_count(), 1);
        // Duplicates are passed through, not removed
        assert!(client.prompts()[0].contains(
            "Crashes when uploading video Crashes when uploading video Please add a dark theme"
        ));
    }
}

#[tokio::test]
async fn model_failure_surfaces_as_orchestration_error() {
    let client = ScriptedClient::new()
        .otherwise(Reply::Fail("invalid API key".to_string()))
        .into_arc();

    let err = service(client)
        .aggregate(DocumentKind::Trends, &["Slow"])
        .await
        .unwrap_err();

    assert!(matches!(err, ReviewError::Orchestration { .. }));
    assert!(err.to_string().contains("invalid API key"));
}

#[tokio::test]
async fn too_many_reviews_are_rejected() {
    let client = ScriptedClient::new()
        .otherwise(Reply::Text("unused".to_string()))
        .into_arc();
    let service = AggregationService::new(
        client.clone(),
        InputLimits::new(100, 2),
        Duration::from_secs(60),
    );

    let err = service
        .aggregate(DocumentKind::Insights, &["a", "b", "c"])
        .await
        .unwrap_err();

    assert!(err.is_validation());
    assert_eq!(client.call_count(), 0);
}

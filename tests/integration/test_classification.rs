#[path = "../common/mod.rs"]
mod common;

use common::{label_json, Reply, ScriptedClient};
use review_insight::{
    ClassificationOrchestrator, ClassificationTask, InputLimits, MalformedKind, ReviewError,
};
use std::sync::Arc;
use std::time::Duration;

fn orchestrator(client: Arc<ScriptedClient>) -> ClassificationOrchestrator {
    ClassificationOrchestrator::new(client, InputLimits::default(), Duration::from_secs(60))
}

#[tokio::test]
async fn crash_report_is_labelled_negative_bug_urgent() {
    let client = ScriptedClient::new()
        .on_task(ClassificationTask::Sentiment, label_json("negative", "User is frustrated"))
        .on_task(ClassificationTask::Category, label_json("bug", "Describes a crash"))
        .on_task(ClassificationTask::Intent, label_json("urgent", "App is unusable"))
        .into_arc();

    let aggregate = orchestrator(client.clone())
        .classify("App crashes on launch")
        .await
        .unwrap();

    assert_eq!(aggregate.labels(), ["negative", "bug", "urgent"]);
    assert_eq!(aggregate.category().reason(), "Describes a crash");
    assert_eq!(
        serde_json::to_value(&aggregate).unwrap(),
        serde_json::json!(["negative", "bug", "urgent"])
    );
    assert_eq!(client.call_count(), 3);
    assert!(client
        .prompts()
        .iter()
        .all(|prompt| prompt.contains("App crashes on launch")));
}

#[tokio::test(start_paused = true)]
async fn order_is_fixed_regardless_of_completion_order() {
    // Intent answers first, sentiment last
    let client = ScriptedClient::new()
        .on_task_after(
            ClassificationTask::Sentiment,
            label_json("positive", "Happy"),
            Duration::from_millis(300),
        )
        .on_task_after(
            ClassificationTask::Category,
            label_json("feature_request", "Wants export"),
            Duration::from_millis(200),
        )
        .on_task_after(
            ClassificationTask::Intent,
            label_json("low", "Nice to have"),
            Duration::from_millis(100),
        )
        .into_arc();

    let aggregate = orchestrator(client)
        .classify("Love it, would be great to export to PDF")
        .await
        .unwrap();

    assert_eq!(aggregate.labels(), ["positive", "feature_request", "low"]);
}

#[tokio::test]
async fn one_failing_call_fails_the_whole_aggregate() {
    for failing in ClassificationTask::ALL {
        let mut client = ScriptedClient::new();
        for task in ClassificationTask::ALL {
            let reply = if task == failing {
                Reply::Fail("provider unavailable".to_string())
            } else {
                label_json(task.valid_labels()[0], "fine")
            };
            client = client.on_task(task, reply);
        }

        let err = orchestrator(client.into_arc())
            .classify("Where is the settings page?")
            .await
            .unwrap_err();

        match &err {
            ReviewError::Orchestration { stage, source } => {
                assert_eq!(stage, failing.description());
                assert!(matches!(**source, ReviewError::ModelInvocation(_)));
            }
            other => panic!("expected orchestration error, got {:?}", other),
        }
    }
}

#[tokio::test]
async fn malformed_completion_fails_with_parser_kind() {
    let client = ScriptedClient::new()
        .on_task(ClassificationTask::Sentiment, label_json("neutral", "Plain question"))
        .on_task(ClassificationTask::Category, label_json("question", "Asks how"))
        .on_task(
            ClassificationTask::Intent,
            Reply::Text("I think this is medium priority.".to_string()),
        )
        .into_arc();

    let err = orchestrator(client)
        .classify("How do I change my username?")
        .await
        .unwrap_err();

    assert_eq!(err.malformed_kind(), Some(MalformedKind::Syntax));
    assert!(err.to_string().starts_with("intent classification failed"));
}

#[tokio::test(start_paused = true)]
async fn slow_call_times_out() {
    let client = ScriptedClient::new()
        .on_task(ClassificationTask::Sentiment, label_json("neutral", "ok"))
        .on_task_after(
            ClassificationTask::Category,
            label_json("feedback", "ok"),
            Duration::from_secs(120),
        )
        .on_task(ClassificationTask::Intent, label_json("low", "ok"))
        .into_arc();

    let orchestrator =
        ClassificationOrchestrator::new(client, InputLimits::default(), Duration::from_secs(10));
    let err = orchestrator.classify("It's fine I guess").await.unwrap_err();

    assert!(matches!(err.root_cause(), ReviewError::ModelTimeout { timeout: 10 }));
}

#[tokio::test]
async fn oversized_text_is_rejected_before_any_call() {
    let client = ScriptedClient::new().into_arc();
    let orchestrator = ClassificationOrchestrator::new(
        client.clone(),
        InputLimits::new(10, 10),
        Duration::from_secs(60),
    );

    let err = orchestrator
        .classify("This review is much longer than ten characters")
        .await
        .unwrap_err();

    assert!(matches!(err, ReviewError::Validation(_)));
    assert_eq!(client.call_count(), 0);
}

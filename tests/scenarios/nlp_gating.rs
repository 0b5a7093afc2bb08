//! Test: NLP-only steps run only when text columns are designated

use crate::helpers::*;
use crate::mock_blueprint::RecordingBlueprint;
use prepline::core::{StepName, TRAIN_TEST_SPLIT};

#[test]
fn test_gated_steps_skip_without_text_columns() {
    let (_dir, mut orchestrator) = temp_orchestrator();
    let mut blueprint = RecordingBlueprint::default();

    orchestrator.run(&mut blueprint, None).unwrap();

    assert_eq!(blueprint.count("regex_clean_text_data"), 0);
    assert_eq!(blueprint.count("append_text_sentiment_score"), 0);
    // Only the ungated PCA-reducing variant ran.
    assert_eq!(blueprint.count("tfidf_vectorizer_to_pca"), 1);
    assert!(blueprint
        .calls
        .contains(&"tfidf_vectorizer_to_pca(true)".to_string()));

    for step in ["regex_clean_text_data", "tfidf_vectorizer", "append_text_sentiment_score"] {
        assert!(!orchestrator.store().exists(step), "unexpected checkpoint for {step}");
    }
    assert!(!blueprint.completion.is_complete(StepName::TfidfVectorizer));
    assert!(orchestrator.store().exists("tfidf_vectorizer_to_pca"));
}

#[test]
fn test_gated_steps_run_with_text_columns() {
    let (_dir, mut orchestrator) = temp_orchestrator();
    let mut blueprint = RecordingBlueprint::default().with_nlp_columns(["review_text"]);

    orchestrator.run(&mut blueprint, None).unwrap();

    assert_eq!(blueprint.count("regex_clean_text_data"), 1);
    assert_eq!(blueprint.count("append_text_sentiment_score"), 1);
    // Both vectorizer registrations ran, with their respective flags.
    assert_eq!(blueprint.count("tfidf_vectorizer_to_pca"), 2);
    assert!(blueprint
        .calls
        .contains(&"tfidf_vectorizer_to_pca(true)".to_string()));
    assert!(blueprint
        .calls
        .contains(&"tfidf_vectorizer_to_pca(false)".to_string()));

    assert!(blueprint.completion.is_complete(StepName::TfidfVectorizer));
    assert!(orchestrator.store().exists("tfidf_vectorizer"));
}

/// Gating wins over the user's selection: enabling only NLP steps on a
/// dataset without text columns executes nothing.
#[test]
fn test_gating_wins_over_selection() {
    let (dir, mut orchestrator) = temp_orchestrator();
    let mut blueprint = RecordingBlueprint::with_selection(
        prepline::core::StepSelection::only([
            StepName::RegexCleanTextData,
            StepName::TfidfVectorizer,
            StepName::AppendTextSentimentScore,
        ]),
    );

    orchestrator.run(&mut blueprint, None).unwrap();

    assert!(checkpoint_files(dir.path()).is_empty());
    assert_eq!(blueprint.completion.completed_count(), 0);
    assert_eq!(orchestrator.last_checkpoint(), Some(TRAIN_TEST_SPLIT));
}

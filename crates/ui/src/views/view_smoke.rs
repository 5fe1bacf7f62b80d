use luxe_core::model::PackageTag;
use services::builtin_content;

use crate::vm::{QuizIntent, Section};

use super::test_harness::{setup_view_harness, setup_view_harness_with_content};

const FIRST_PROMPT: &str = "How involved do you want to be in the planning process?";
const SECOND_PROMPT: &str = "What is your main stressor right now?";

#[tokio::test(flavor = "current_thread")]
async fn landing_view_smoke_renders_sections() {
    let mut harness = setup_view_harness();
    harness.rebuild();
    let html = harness.render();

    for title in ["Luxe Essentials", "Luxe Signature", "Luxe Elite"] {
        assert!(html.contains(title), "missing {title} in {html}");
    }
    assert!(html.contains("Most Popular"), "missing badge in {html}");
    assert!(html.contains("Unsure / Need Advice"), "missing select option in {html}");
    assert!(
        html.contains("© 2023 Luxe Vision Event Coordinating. All rights reserved."),
        "missing copyright in {html}"
    );
    assert!(!html.contains("quiz-modal"), "quiz open on load: {html}");
    assert!(!html.contains("Your Match"), "recommendation before quiz: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn opening_quiz_shows_first_question() {
    let mut harness = setup_view_harness();
    harness.rebuild();

    harness.act(|handles| handles.dispatch().call(QuizIntent::Open));
    let html = harness.render();

    assert!(html.contains("quiz-modal"), "missing modal in {html}");
    assert!(html.contains(FIRST_PROMPT), "missing first prompt in {html}");
    assert!(html.contains("quiz-option-essentials"), "missing option in {html}");
    assert_eq!(html.matches("quiz-step--reached").count(), 1, "{html}");
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn completing_quiz_marks_package_and_shows_toast() {
    let mut harness = setup_view_harness();
    harness.rebuild();

    harness.act(|handles| handles.dispatch().call(QuizIntent::Open));
    harness.act(|handles| {
        handles
            .dispatch()
            .call(QuizIntent::Answer(PackageTag::Essentials));
    });
    let html = harness.render();
    assert!(html.contains(SECOND_PROMPT), "missing second prompt in {html}");
    assert_eq!(html.matches("quiz-step--reached").count(), 2, "{html}");

    harness.act(|handles| {
        handles
            .dispatch()
            .call(QuizIntent::Answer(PackageTag::Signature));
    });
    let html = harness.render();
    assert!(!html.contains("quiz-modal"), "modal still open: {html}");
    assert_eq!(html.matches("Your Match").count(), 1, "{html}");
    assert!(
        html.contains("package-card package-card--highlighted package-card--recommended"),
        "signature card not marked in {html}"
    );

    let expected = "Based on your answers, we recommend the SIGNATURE package!";
    for _ in 0..30 {
        if harness.render().contains(expected) {
            break;
        }
        harness.drive_async().await;
    }
    let html = harness.render();
    assert!(html.contains(expected), "missing toast in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn closing_quiz_discards_progress() {
    let mut harness = setup_view_harness();
    harness.rebuild();

    harness.act(|handles| handles.dispatch().call(QuizIntent::Open));
    harness.act(|handles| handles.dispatch().call(QuizIntent::Answer(PackageTag::Elite)));
    harness.act(|handles| handles.dispatch().call(QuizIntent::Close));
    let html = harness.render();
    assert!(!html.contains("quiz-modal"), "modal still open: {html}");
    assert!(!html.contains("Your Match"), "aborted quiz recommended: {html}");

    harness.act(|handles| handles.dispatch().call(QuizIntent::Open));
    let html = harness.render();
    assert!(html.contains(FIRST_PROMPT), "reopened quiz not restarted: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn empty_quiz_reports_unavailable() {
    let mut content = builtin_content().expect("builtin content");
    content.questions.clear();
    let mut harness = setup_view_harness_with_content(content);
    harness.rebuild();

    harness.act(|handles| handles.dispatch().call(QuizIntent::Open));
    let html = harness.render();
    assert!(!html.contains("quiz-modal"), "modal opened without questions: {html}");
    assert!(
        html.contains("The package quiz is not available right now."),
        "missing error in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn navigating_leaves_page_intact() {
    let mut harness = setup_view_harness();
    harness.rebuild();

    harness.act(|handles| handles.navigate().call(Section::Packages));
    let html = harness.render();
    assert!(html.contains("id=\"packages\""), "missing packages section in {html}");
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn reopening_quiz_drops_pending_recommendation_notice() {
    let mut harness = setup_view_harness();
    harness.rebuild();

    harness.act(|handles| handles.dispatch().call(QuizIntent::Open));
    harness.act(|handles| handles.dispatch().call(QuizIntent::Answer(PackageTag::Essentials)));
    harness.act(|handles| handles.dispatch().call(QuizIntent::Answer(PackageTag::Elite)));
    harness.act(|handles| handles.dispatch().call(QuizIntent::Open));

    for _ in 0..30 {
        harness.drive_async().await;
    }
    let html = harness.render();
    assert!(html.contains("quiz-modal"), "reopened modal missing: {html}");
    assert!(html.contains(FIRST_PROMPT), "reopened quiz not at start: {html}");
    assert!(
        !html.contains("we recommend the ELITE package"),
        "stale notice shown over new quiz: {html}"
    );
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn only_latest_completion_shows_notice() {
    let mut harness = setup_view_harness();
    harness.rebuild();

    for last in [PackageTag::Essentials, PackageTag::Elite] {
        harness.act(|handles| handles.dispatch().call(QuizIntent::Open));
        harness.act(|handles| handles.dispatch().call(QuizIntent::Answer(PackageTag::Signature)));
        harness.act(|handles| handles.dispatch().call(QuizIntent::Answer(last)));
    }

    for _ in 0..30 {
        harness.drive_async().await;
    }
    let html = harness.render();
    assert!(
        html.contains("Based on your answers, we recommend the ELITE package!"),
        "missing latest notice in {html}"
    );
    assert!(
        !html.contains("we recommend the ESSENTIALS package"),
        "stale notice shown: {html}"
    );
}

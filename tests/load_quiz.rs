use std::fs;

use quizkit::loader::{parse_quiz, FsQuizLoader, FsTemplateLoader, QuizLoader, TemplateLoader};
use quizkit::model::Content;
use quizkit::LoadError;

#[test]
fn test_load_scenario_fixture() {
    let loader = FsQuizLoader::new("fixtures/quizzes");
    let quiz = loader.load("scenario").unwrap();

    assert_eq!(quiz.title.as_deref(), Some("Scenario"));
    assert_eq!(quiz.time_limit_seconds, 60);
    assert_eq!(quiz.passing_score, 2);
    assert_eq!(quiz.questions.len(), 3);
    assert_eq!(quiz.questions[1].prompt, "B");
    assert_eq!(quiz.questions[1].correct_option_index, 1);
    assert!(quiz.questions.iter().all(|q| q.content.is_none()));
}

#[test]
fn test_content_attachments() {
    let loader = FsQuizLoader::new("fixtures/quizzes");
    let quiz = loader.load("media").unwrap();

    assert_eq!(quiz.display_title(), "Quiz");
    match &quiz.questions[0].content {
        Some(Content::Image { src, alt }) => {
            assert_eq!(src, "img/colosseum.jpg");
            assert!(alt.contains("amphitheatre"));
        }
        other => panic!("Expected image, got {:?}", other),
    }
    assert!(matches!(quiz.questions[1].content, Some(Content::Video { .. })));
    match &quiz.questions[2].content {
        Some(Content::Code { language, code }) => {
            assert_eq!(language, "javascript");
            assert!(code.contains("console.log"));
        }
        other => panic!("Expected code, got {:?}", other),
    }
}

#[test]
fn test_missing_quiz_is_not_found() {
    let loader = FsQuizLoader::new("fixtures/quizzes");
    assert!(matches!(loader.load("nope"), Err(LoadError::QuizNotFound(id)) if id == "nope"));
    // Ids cannot escape the quiz directory
    assert!(matches!(
        loader.load("../quizzes/scenario"),
        Err(LoadError::QuizNotFound(_))
    ));
}

#[test]
fn test_malformed_data_rejected() {
    let loader = FsQuizLoader::new("fixtures/quizzes");
    assert!(matches!(
        loader.load("broken"),
        Err(LoadError::MalformedQuizData { .. })
    ));
    assert!(matches!(
        loader.load("empty"),
        Err(LoadError::MalformedQuizData { .. })
    ));
}

#[test]
fn test_parse_rejects_out_of_range_correct_option() {
    let json = r#"{"timeLimit": 5, "passingScore": 1,
        "questions": [{"question": "Q", "options": ["a"], "correctOption": 1}]}"#;
    match parse_quiz(json, "inline") {
        Err(LoadError::MalformedQuizData { id, reason }) => {
            assert_eq!(id, "inline");
            assert!(reason.contains("correctOption"));
        }
        other => panic!("Expected MalformedQuizData, got {:?}", other),
    }
}

#[test]
fn test_list_catalogue() {
    let dir = tempfile::tempdir().unwrap();
    fs::copy(
        "fixtures/quizzes/scenario-quiz.json",
        dir.path().join("scenario-quiz.json"),
    )
    .unwrap();
    fs::copy(
        "fixtures/quizzes/media-quiz.json",
        dir.path().join("ancient-quiz.json"),
    )
    .unwrap();
    fs::write(dir.path().join("notes.txt"), "not a quiz").unwrap();

    let loader = FsQuizLoader::new(dir.path());
    let entries = loader.list().unwrap();

    let ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["ancient", "scenario"]);
    // Untitled quizzes fall back to their id
    assert_eq!(entries[0].title, "ancient");
    assert_eq!(entries[1].title, "Scenario");
}

#[test]
fn test_template_loader() {
    let loader = FsTemplateLoader::new("fixtures/templates");
    let text = loader.load("results-template").unwrap();
    assert!(text.contains("{{ score }}"));

    assert!(matches!(
        loader.load("missing-template"),
        Err(LoadError::TemplateNotFound(_))
    ));
}

#[test]
fn test_template_loader_falls_back_to_html() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("page.html"), "<p>{{x}}</p>").unwrap();
    let loader = FsTemplateLoader::new(dir.path());
    assert_eq!(loader.load("page").unwrap(), "<p>{{x}}</p>");
}

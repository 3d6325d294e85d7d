use lingo_content::{ContentRepository, ContentSourceError, DirectoryContent, EmbeddedContent};

#[test]
fn embedded_content_is_valid_and_complete() {
    let content = EmbeddedContent.load().expect("embedded content parses");

    let lessons = content.lessons();
    assert!(!lessons.is_empty());
    for tab in lessons.tabs() {
        assert!(
            lessons.in_tab(&tab.id).next().is_some(),
            "tab {} has no lessons",
            tab.id
        );
    }
    for lesson in lessons.lessons() {
        assert!(
            lessons.tabs().iter().any(|tab| &tab.id == lesson.tab()),
            "lesson {} points at unknown tab {}",
            lesson.id(),
            lesson.tab()
        );
    }

    let quizzes = content.quizzes();
    for category in ["grammar", "vocabulary", "idioms"] {
        let bank = quizzes.get(category).expect("bank exists");
        for question in bank.questions() {
            assert!(question.correct() < question.options().len());
        }
    }
}

#[test]
fn directory_content_reads_both_documents() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("lessons.json"),
        r#"{"tabs": [{"id": "t", "label": "T"}],
            "lessons": [{"id": "l", "tab": "t", "title": "L", "content": "body"}]}"#,
    )
    .unwrap();
    std::fs::write(
        dir.path().join("quizzes.json"),
        r#"{"banks": [{"category": "q", "title": "Q", "questions": [
            {"text": "?", "options": ["a", "b"], "correct": 1, "explanation": "b"}
        ]}]}"#,
    )
    .unwrap();

    let content = DirectoryContent::new(dir.path()).load().unwrap();
    assert_eq!(content.lessons().get("l").unwrap().content(), "body");
    assert_eq!(content.quizzes().get("q").unwrap().len(), 1);
}

#[test]
fn missing_directory_reports_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let err = DirectoryContent::new(dir.path().join("nope"))
        .load()
        .unwrap_err();
    match err {
        ContentSourceError::Io { path, .. } => assert!(path.ends_with("lessons.json")),
        other => panic!("unexpected error: {other}"),
    }
}

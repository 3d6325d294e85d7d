use lingo_content::{ContentRepository, EmbeddedContent};
use lingo_services::{FeedbackTier, QuizPhase, QuizSession, QuizStep};

fn answer_all(quiz: &mut QuizSession, pick: impl Fn(usize, usize) -> Option<usize>) -> QuizStep {
    loop {
        let question = quiz.current_question().expect("question");
        if let Some(choice) = pick(quiz.cursor(), question.correct()) {
            quiz.select_answer(choice).unwrap();
        }
        match quiz.next().unwrap() {
            QuizStep::Advanced { .. } => continue,
            finished @ QuizStep::Finished(_) => return finished,
        }
    }
}

#[test]
fn perfect_run_through_embedded_grammar_bank() {
    let content = EmbeddedContent.load().unwrap();
    let mut quiz = QuizSession::new();
    quiz.start(content.quizzes(), "grammar").unwrap();

    let QuizStep::Finished(results) = answer_all(&mut quiz, |_, correct| Some(correct)) else {
        unreachable!()
    };
    assert_eq!(results.score, results.total);
    assert_eq!(results.percentage, 100);
    assert_eq!(results.tier, FeedbackTier::Excellent);
    assert!(results.review.iter().all(|r| r.is_correct));
}

#[test]
fn skipped_questions_show_as_unanswered_in_review() {
    let content = EmbeddedContent.load().unwrap();
    let mut quiz = QuizSession::new();
    quiz.start(content.quizzes(), "vocabulary").unwrap();

    let QuizStep::Finished(results) =
        answer_all(&mut quiz, |cursor, correct| (cursor % 2 == 0).then_some(correct))
    else {
        unreachable!()
    };
    let unanswered = results.review.iter().filter(|r| r.chosen.is_none()).count();
    assert_eq!(unanswered, results.total / 2);
    assert_eq!(results.score, results.total - unanswered);
    assert_eq!(results.tier, FeedbackTier::Good);
}

#[test]
fn restart_then_close_resets_everything() {
    let content = EmbeddedContent.load().unwrap();
    let mut quiz = QuizSession::new();
    quiz.start(content.quizzes(), "idioms").unwrap();
    answer_all(&mut quiz, |_, _| Some(0));
    assert_eq!(quiz.phase(), QuizPhase::Finished);

    assert!(quiz.restart());
    assert_eq!(quiz.cursor(), 0);
    assert_eq!(quiz.bank().unwrap().category().as_str(), "idioms");

    assert!(quiz.close());
    assert_eq!(quiz.phase(), QuizPhase::Idle);
    assert!(quiz.bank().is_none());
}

#[test]
fn switching_category_starts_a_fresh_session() {
    let content = EmbeddedContent.load().unwrap();
    let mut quiz = QuizSession::new();
    quiz.start(content.quizzes(), "grammar").unwrap();
    quiz.select_answer(1).unwrap();
    quiz.next().unwrap();

    quiz.start(content.quizzes(), "idioms").unwrap();
    assert_eq!(quiz.cursor(), 0);
    assert!(quiz.answers().is_empty());
}

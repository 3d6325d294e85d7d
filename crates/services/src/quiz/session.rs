use std::collections::BTreeMap;

use lingo_core::model::{Question, QuizBank, QuizCatalog};

use super::results::{QuizResults, score};
use crate::error::QuizError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    Idle,
    InProgress,
    Finished,
}

/// Outcome of moving forward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizStep {
    Advanced { cursor: usize },
    Finished(QuizResults),
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// The single active quiz: a cursor over one bank plus the learner's answers.
///
/// Answers are kept per question index and survive navigation in both
/// directions. Closing or restarting discards them.
#[derive(Debug, Clone)]
pub struct QuizSession {
    bank: Option<QuizBank>,
    cursor: usize,
    answers: BTreeMap<usize, usize>,
    score: usize,
    phase: QuizPhase,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self {
            bank: None,
            cursor: 0,
            answers: BTreeMap::new(),
            score: 0,
            phase: QuizPhase::Idle,
        }
    }
}

impl QuizSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts `category` from its first question, discarding any previous session.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::UnknownCategory` and leaves the session untouched if the
    /// catalog has no such bank.
    pub fn start(&mut self, catalog: &QuizCatalog, category: &str) -> Result<&QuizBank, QuizError> {
        let bank = catalog
            .get(category)
            .ok_or_else(|| QuizError::UnknownCategory(category.to_owned()))?
            .clone();

        *self = Self {
            phase: QuizPhase::InProgress,
            ..Self::default()
        };
        Ok(&*self.bank.insert(bank))
    }

    /// Records `option` as the answer to the current question, replacing any earlier one.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotInProgress` outside a running quiz and
    /// `QuizError::OptionOutOfRange` for an option the question does not have.
    pub fn select_answer(&mut self, option: usize) -> Result<(), QuizError> {
        let question = self.in_progress_question()?;
        let count = question.options().len();
        if option >= count {
            return Err(QuizError::OptionOutOfRange {
                index: option,
                count,
            });
        }
        self.answers.insert(self.cursor, option);
        Ok(())
    }

    /// Moves to the next question, or scores the quiz when on the last one.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotInProgress` outside a running quiz.
    pub fn next(&mut self) -> Result<QuizStep, QuizError> {
        self.in_progress_question()?;
        let bank = self.bank.as_ref().ok_or(QuizError::NotInProgress)?;

        if self.cursor + 1 < bank.len() {
            self.cursor += 1;
            return Ok(QuizStep::Advanced {
                cursor: self.cursor,
            });
        }

        self.score = score(bank, &self.answers);
        self.phase = QuizPhase::Finished;
        Ok(QuizStep::Finished(QuizResults::compute(bank, &self.answers)))
    }

    /// Moves back one question. Returns `false` (and does nothing) at the first question.
    pub fn previous(&mut self) -> bool {
        if self.phase != QuizPhase::InProgress || self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Same bank, first question, no answers. Returns `false` when no bank is loaded.
    pub fn restart(&mut self) -> bool {
        if self.bank.is_none() {
            return false;
        }
        self.cursor = 0;
        self.answers.clear();
        self.score = 0;
        self.phase = QuizPhase::InProgress;
        true
    }

    /// Drops the session. Returns whether anything was active.
    pub fn close(&mut self) -> bool {
        let was_active = self.bank.is_some();
        *self = Self::default();
        was_active
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    #[must_use]
    pub fn bank(&self) -> Option<&QuizBank> {
        self.bank.as_ref()
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.bank.as_ref().map_or(0, QuizBank::len)
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.bank.as_ref()?.question(self.cursor)
    }

    /// The recorded answer for the current question.
    #[must_use]
    pub fn current_answer(&self) -> Option<usize> {
        self.answers.get(&self.cursor).copied()
    }

    #[must_use]
    pub fn answers(&self) -> &BTreeMap<usize, usize> {
        &self.answers
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.cursor + 1 >= self.total()
    }

    #[must_use]
    pub fn can_go_previous(&self) -> bool {
        self.phase == QuizPhase::InProgress && self.cursor > 0
    }

    /// Next/Finish is enabled once the current question has an answer.
    #[must_use]
    pub fn can_go_next(&self) -> bool {
        self.phase == QuizPhase::InProgress && self.current_answer().is_some()
    }

    /// `(cursor + 1) / total * 100`.
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let pct = (self.cursor + 1) as f64 / total as f64 * 100.0;
        pct
    }

    /// Results of a finished quiz.
    #[must_use]
    pub fn results(&self) -> Option<QuizResults> {
        match (&self.bank, self.phase) {
            (Some(bank), QuizPhase::Finished) => Some(QuizResults::compute(bank, &self.answers)),
            _ => None,
        }
    }

    fn in_progress_question(&self) -> Result<&Question, QuizError> {
        if self.phase != QuizPhase::InProgress {
            return Err(QuizError::NotInProgress);
        }
        self.current_question().ok_or(QuizError::NotInProgress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::FeedbackTier;
    use lingo_core::model::QuizCategory;

    fn question(correct: usize) -> Question {
        Question::new(
            format!("Q{correct}"),
            vec!["a".into(), "b".into(), "c".into(), "d".into()],
            correct,
            "because",
        )
        .unwrap()
    }

    fn catalog(correct: &[usize]) -> QuizCatalog {
        let bank = QuizBank::new(
            QuizCategory::new("grammar").unwrap(),
            "Grammar",
            "",
            correct.iter().copied().map(question).collect(),
        )
        .unwrap();
        QuizCatalog::new(vec![bank]).unwrap()
    }

    #[test]
    fn start_enters_first_question() {
        let mut quiz = QuizSession::new();
        quiz.start(&catalog(&[1, 1, 2]), "grammar").unwrap();
        assert_eq!(quiz.phase(), QuizPhase::InProgress);
        assert_eq!(quiz.cursor(), 0);
        assert!(!quiz.can_go_previous());
        assert!(!quiz.can_go_next());
        assert!((quiz.progress_percent() - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn unknown_category_is_rejected_without_side_effects() {
        let catalog = catalog(&[0]);
        let mut quiz = QuizSession::new();
        assert_eq!(
            quiz.start(&catalog, "history").unwrap_err(),
            QuizError::UnknownCategory("history".into())
        );
        assert_eq!(quiz.phase(), QuizPhase::Idle);
    }

    #[test]
    fn previous_at_first_question_is_a_no_op() {
        let mut quiz = QuizSession::new();
        quiz.start(&catalog(&[0, 0]), "grammar").unwrap();
        assert!(!quiz.previous());
        assert_eq!(quiz.cursor(), 0);
    }

    #[test]
    fn scoring_skips_unanswered_questions() {
        let mut quiz = QuizSession::new();
        quiz.start(&catalog(&[1, 1, 2]), "grammar").unwrap();

        quiz.select_answer(1).unwrap();
        assert_eq!(quiz.next().unwrap(), QuizStep::Advanced { cursor: 1 });
        assert_eq!(quiz.next().unwrap(), QuizStep::Advanced { cursor: 2 });
        quiz.select_answer(2).unwrap();

        let QuizStep::Finished(results) = quiz.next().unwrap() else {
            panic!("expected results");
        };
        assert_eq!(results.score, 2);
        assert_eq!(quiz.score(), 2);
        assert_eq!(results.percentage, 67);
        assert_eq!(results.tier, FeedbackTier::Good);
        assert_eq!(results.review[1].chosen, None);
        assert!(!results.review[1].is_correct);
        assert_eq!(quiz.phase(), QuizPhase::Finished);
        assert_eq!(quiz.cursor(), 2);
    }

    #[test]
    fn revisited_answer_is_preselected_and_can_be_overwritten() {
        let mut quiz = QuizSession::new();
        quiz.start(&catalog(&[0, 1]), "grammar").unwrap();
        quiz.select_answer(3).unwrap();
        quiz.next().unwrap();
        assert!(quiz.previous());

        assert_eq!(quiz.current_answer(), Some(3));
        assert!(quiz.can_go_next());

        quiz.select_answer(0).unwrap();
        assert_eq!(quiz.current_answer(), Some(0));
        assert!(quiz.can_go_next());
    }

    #[test]
    fn out_of_range_option_is_rejected() {
        let mut quiz = QuizSession::new();
        quiz.start(&catalog(&[0]), "grammar").unwrap();
        assert_eq!(
            quiz.select_answer(4).unwrap_err(),
            QuizError::OptionOutOfRange { index: 4, count: 4 }
        );
        assert_eq!(quiz.current_answer(), None);
    }

    #[test]
    fn restart_keeps_bank_and_clears_progress() {
        let mut quiz = QuizSession::new();
        quiz.start(&catalog(&[0]), "grammar").unwrap();
        quiz.select_answer(0).unwrap();
        quiz.next().unwrap();
        assert_eq!(quiz.score(), 1);

        assert!(quiz.restart());
        assert_eq!(quiz.phase(), QuizPhase::InProgress);
        assert_eq!(quiz.score(), 0);
        assert!(quiz.answers().is_empty());
        assert_eq!(quiz.bank().map(QuizBank::title), Some("Grammar"));
    }

    #[test]
    fn actions_outside_a_quiz_are_rejected() {
        let mut quiz = QuizSession::new();
        assert_eq!(quiz.select_answer(0), Err(QuizError::NotInProgress));
        assert_eq!(quiz.next(), Err(QuizError::NotInProgress));
        assert!(!quiz.previous());
        assert!(!quiz.restart());
        assert!(!quiz.close());
    }
}

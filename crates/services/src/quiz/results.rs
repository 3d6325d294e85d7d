use std::collections::BTreeMap;

use lingo_core::model::QuizBank;

/// Feedback band for a finished quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackTier {
    /// 80% and above.
    Excellent,
    /// 60% up to 79%.
    Good,
    /// Below 60%.
    NeedsReview,
}

impl FeedbackTier {
    #[must_use]
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            80.. => FeedbackTier::Excellent,
            60..=79 => FeedbackTier::Good,
            _ => FeedbackTier::NeedsReview,
        }
    }

    #[must_use]
    pub fn headline(self) -> &'static str {
        match self {
            FeedbackTier::Excellent => "Excellent!",
            FeedbackTier::Good => "Good job!",
            FeedbackTier::NeedsReview => "Keep practicing!",
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            FeedbackTier::Excellent => "You have a strong grasp of this topic.",
            FeedbackTier::Good => "A little more practice and you will master it.",
            FeedbackTier::NeedsReview => "Review the lessons and try again.",
        }
    }
}

/// How the learner did on one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionReview {
    pub question: String,
    /// `None` when the question was never answered.
    pub chosen: Option<String>,
    pub correct_answer: String,
    pub is_correct: bool,
    pub explanation: String,
}

/// Summary shown once the last question is submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizResults {
    pub title: String,
    pub score: usize,
    pub total: usize,
    pub percentage: u32,
    pub tier: FeedbackTier,
    pub review: Vec<QuestionReview>,
}

/// Count of answers matching the correct option. Unanswered questions never match.
#[must_use]
pub fn score(bank: &QuizBank, answers: &BTreeMap<usize, usize>) -> usize {
    bank.questions()
        .iter()
        .enumerate()
        .filter(|(idx, question)| {
            answers
                .get(idx)
                .is_some_and(|chosen| question.is_correct(*chosen))
        })
        .count()
}

/// `round(score / total * 100)`; zero for an empty total.
#[must_use]
pub fn percentage(score: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let pct = (score as f64 / total as f64 * 100.0).round() as u32;
    pct
}

impl QuizResults {
    #[must_use]
    pub fn compute(bank: &QuizBank, answers: &BTreeMap<usize, usize>) -> Self {
        let score = score(bank, answers);
        let total = bank.len();
        let percentage = percentage(score, total);

        let review = bank
            .questions()
            .iter()
            .enumerate()
            .map(|(idx, question)| {
                let chosen = answers.get(&idx).copied();
                QuestionReview {
                    question: question.text().to_owned(),
                    chosen: chosen.and_then(|c| question.option(c)).map(str::to_owned),
                    correct_answer: question.option(question.correct()).unwrap_or_default().to_owned(),
                    is_correct: chosen.is_some_and(|c| question.is_correct(c)),
                    explanation: question.explanation().to_owned(),
                }
            })
            .collect();

        Self {
            title: bank.title().to_owned(),
            score,
            total,
            percentage,
            tier: FeedbackTier::from_percentage(percentage),
            review,
        }
    }
}

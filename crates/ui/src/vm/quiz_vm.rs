use lingo_core::model::QuizCatalog;
use lingo_services::{FeedbackTier, QuizPhase, QuizResults, QuizSession};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizCardVm {
    pub category: String,
    pub title: String,
    pub description: String,
    pub question_count_label: String,
    pub reveal_index: usize,
}

#[must_use]
pub fn map_quiz_cards(catalog: &QuizCatalog, first_reveal_index: usize) -> Vec<QuizCardVm> {
    catalog
        .banks()
        .iter()
        .enumerate()
        .map(|(offset, bank)| QuizCardVm {
            category: bank.category().as_str().to_owned(),
            title: bank.title().to_owned(),
            description: bank.description().to_owned(),
            question_count_label: match bank.len() {
                1 => "1 question".to_string(),
                count => format!("{count} questions"),
            },
            reveal_index: first_reveal_index + offset,
        })
        .collect()
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub index: usize,
    pub letter: char,
    pub text: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuestionVm {
    pub title: String,
    pub counter_label: String,
    pub progress_percent: f64,
    pub text: String,
    pub options: Vec<OptionVm>,
    pub previous_disabled: bool,
    pub next_disabled: bool,
    pub next_label: &'static str,
}

/// `A`, `B`, `C`, ... for option positions.
#[must_use]
pub fn option_letter(index: usize) -> char {
    u8::try_from(index)
        .ok()
        .and_then(|offset| b'A'.checked_add(offset))
        .map_or('?', char::from)
}

/// View of the current question, or `None` unless a quiz is in progress.
#[must_use]
pub fn map_question_view(session: &QuizSession) -> Option<QuestionVm> {
    if session.phase() != QuizPhase::InProgress {
        return None;
    }
    let bank = session.bank()?;
    let question = session.current_question()?;
    let selected = session.current_answer();

    let options = question
        .options()
        .iter()
        .enumerate()
        .map(|(index, text)| OptionVm {
            index,
            letter: option_letter(index),
            text: text.clone(),
            selected: selected == Some(index),
        })
        .collect();

    Some(QuestionVm {
        title: bank.title().to_owned(),
        counter_label: format!("Question {} of {}", session.cursor() + 1, session.total()),
        progress_percent: session.progress_percent(),
        text: question.text().to_owned(),
        options,
        previous_disabled: !session.can_go_previous(),
        next_disabled: !session.can_go_next(),
        next_label: if session.is_last() { "Finish" } else { "Next" },
    })
}

//
// ─── RESULTS ───────────────────────────────────────────────────────────────────
//

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewItemVm {
    pub number: usize,
    pub question: String,
    pub chosen_label: String,
    pub correct_answer: String,
    pub is_correct: bool,
    pub explanation: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub title: String,
    pub score_label: String,
    pub percentage_label: String,
    pub tier_class: &'static str,
    pub headline: &'static str,
    pub message: &'static str,
    pub review: Vec<ReviewItemVm>,
}

#[must_use]
pub fn map_results_view(results: &QuizResults) -> ResultsVm {
    let review = results
        .review
        .iter()
        .enumerate()
        .map(|(idx, item)| ReviewItemVm {
            number: idx + 1,
            question: item.question.clone(),
            chosen_label: item
                .chosen
                .clone()
                .unwrap_or_else(|| "Not answered".to_string()),
            correct_answer: item.correct_answer.clone(),
            is_correct: item.is_correct,
            explanation: item.explanation.clone(),
        })
        .collect();

    ResultsVm {
        title: results.title.clone(),
        score_label: format!("{} / {}", results.score, results.total),
        percentage_label: format!("{}%", results.percentage),
        tier_class: match results.tier {
            FeedbackTier::Excellent => "result--excellent",
            FeedbackTier::Good => "result--good",
            FeedbackTier::NeedsReview => "result--review",
        },
        headline: results.tier.headline(),
        message: results.tier.message(),
        review,
    }
}

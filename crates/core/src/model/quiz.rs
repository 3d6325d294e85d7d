use serde::{Deserialize, Serialize};

use super::ContentError;
use super::ids::QuizCategory;

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A multiple-choice question.
///
/// Invariant: `correct < options.len()` and there are at least two options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "QuestionRecord")]
pub struct Question {
    text: String,
    options: Vec<String>,
    correct: usize,
    explanation: String,
}

#[derive(Deserialize)]
struct QuestionRecord {
    text: String,
    options: Vec<String>,
    correct: usize,
    #[serde(default)]
    explanation: String,
}

impl TryFrom<QuestionRecord> for Question {
    type Error = ContentError;

    fn try_from(record: QuestionRecord) -> Result<Self, Self::Error> {
        Question::new(record.text, record.options, record.correct, record.explanation)
    }
}

impl Question {
    /// # Errors
    ///
    /// Returns `ContentError` if the text is blank, fewer than two options are given,
    /// or `correct` does not index an option.
    pub fn new(
        text: impl Into<String>,
        options: Vec<String>,
        correct: usize,
        explanation: impl Into<String>,
    ) -> Result<Self, ContentError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ContentError::EmptyQuestion);
        }
        if options.len() < 2 {
            return Err(ContentError::TooFewOptions {
                count: options.len(),
            });
        }
        if correct >= options.len() {
            return Err(ContentError::CorrectOptionOutOfRange {
                index: correct,
                count: options.len(),
            });
        }
        Ok(Self {
            text,
            options,
            correct,
            explanation: explanation.into(),
        })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn option(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn correct(&self) -> usize {
        self.correct
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    #[must_use]
    pub fn is_correct(&self, chosen: usize) -> bool {
        chosen == self.correct
    }
}

//
// ─── BANK ──────────────────────────────────────────────────────────────────────
//

/// The ordered questions of one quiz category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "QuizBankRecord")]
pub struct QuizBank {
    category: QuizCategory,
    title: String,
    description: String,
    questions: Vec<Question>,
}

#[derive(Deserialize)]
struct QuizBankRecord {
    category: QuizCategory,
    title: String,
    #[serde(default)]
    description: String,
    questions: Vec<Question>,
}

impl TryFrom<QuizBankRecord> for QuizBank {
    type Error = ContentError;

    fn try_from(record: QuizBankRecord) -> Result<Self, Self::Error> {
        QuizBank::new(record.category, record.title, record.description, record.questions)
    }
}

impl QuizBank {
    /// # Errors
    ///
    /// Returns `ContentError::EmptyTitle` or `ContentError::EmptyBank`.
    pub fn new(
        category: QuizCategory,
        title: impl Into<String>,
        description: impl Into<String>,
        questions: Vec<Question>,
    ) -> Result<Self, ContentError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ContentError::EmptyTitle);
        }
        if questions.is_empty() {
            return Err(ContentError::EmptyBank {
                category: category.to_string(),
            });
        }
        Ok(Self {
            category,
            title,
            description: description.into(),
            questions,
        })
    }

    #[must_use]
    pub fn category(&self) -> &QuizCategory {
        &self.category
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Number of questions; never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }
}

/// Every quiz bank on the site, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizCatalog {
    banks: Vec<QuizBank>,
}

impl QuizCatalog {
    /// # Errors
    ///
    /// Returns `ContentError::Duplicate` if two banks share a category.
    pub fn new(banks: Vec<QuizBank>) -> Result<Self, ContentError> {
        for (idx, bank) in banks.iter().enumerate() {
            if banks[..idx].iter().any(|other| other.category == bank.category) {
                return Err(ContentError::Duplicate {
                    id: bank.category.to_string(),
                });
            }
        }
        Ok(Self { banks })
    }

    #[must_use]
    pub fn get(&self, category: &str) -> Option<&QuizBank> {
        self.banks
            .iter()
            .find(|bank| bank.category.as_str() == category)
    }

    #[must_use]
    pub fn banks(&self) -> &[QuizBank] {
        &self.banks
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.banks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("option {i}")).collect()
    }

    #[test]
    fn correct_index_must_address_an_option() {
        assert_eq!(
            Question::new("Pick", options(4), 4, "").unwrap_err(),
            ContentError::CorrectOptionOutOfRange { index: 4, count: 4 }
        );
        assert_eq!(
            Question::new("Pick", options(1), 0, "").unwrap_err(),
            ContentError::TooFewOptions { count: 1 }
        );
        let q = Question::new("Pick", options(3), 2, "because").unwrap();
        assert!(q.is_correct(2));
        assert_eq!(q.option(5), None);
    }

    #[test]
    fn bank_json_is_validated() {
        let json = r#"{
            "category": "grammar",
            "title": "Grammar",
            "questions": [
                {"text": "She ___ here.", "options": ["is", "are"], "correct": 0}
            ]
        }"#;
        let bank: QuizBank = serde_json::from_str(json).unwrap();
        assert_eq!(bank.len(), 1);
        assert_eq!(bank.question(0).unwrap().explanation(), "");

        let bad = r#"{"category": "grammar", "title": "Grammar", "questions": []}"#;
        assert!(serde_json::from_str::<QuizBank>(bad).is_err());
    }

    #[test]
    fn catalog_rejects_duplicate_categories() {
        let bank = || {
            QuizBank::new(
                QuizCategory::new("vocab").unwrap(),
                "Vocabulary",
                "",
                vec![Question::new("Q", options(2), 0, "").unwrap()],
            )
            .unwrap()
        };
        assert!(QuizCatalog::new(vec![bank(), bank()]).is_err());
        let catalog = QuizCatalog::new(vec![bank()]).unwrap();
        assert!(catalog.get("vocab").is_some());
        assert!(catalog.get("unknown").is_none());
    }
}

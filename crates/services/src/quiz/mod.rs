mod results;
mod session;

pub use results::{FeedbackTier, QuestionReview, QuizResults};
pub use session::{QuizPhase, QuizSession, QuizStep};

mod report;
mod session;

pub use crate::error::QuizError;
pub use report::{GradeTier, QuestionOutcome, QuizReport};
pub use session::{QuizProgress, QuizSession};

use chrono::{DateTime, Utc};
use std::fmt;

use timeline_core::Clock;
use timeline_core::model::{OptionIndex, QuizQuestion};

use super::report::{QuestionOutcome, QuizReport};
use crate::error::QuizError;

/// Position within a quiz, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    /// 0-based index of the current question.
    pub current: usize,
    pub total: usize,
    pub answered: usize,
}

impl QuizProgress {
    /// "Question n of m" with a 1-based `n`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("Question {} of {}", self.current + 1, self.total)
    }
}

/// One walk through a snapshot of the question bank.
///
/// Navigation wraps in both directions and never grades; answers are only
/// scored by [`QuizSession::finish`], which consumes the session.
pub struct QuizSession {
    questions: Vec<QuizQuestion>,
    current: usize,
    answers: Vec<Option<OptionIndex>>,
    clock: Clock,
    started_at: DateTime<Utc>,
}

impl QuizSession {
    /// Snapshot `bank` and start on the first question with nothing answered.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::EmptyBank` if `bank` has no questions.
    pub fn start(bank: &[QuizQuestion], clock: Clock) -> Result<Self, QuizError> {
        if bank.is_empty() {
            return Err(QuizError::EmptyBank);
        }

        Ok(Self {
            questions: bank.to_vec(),
            current: 0,
            answers: vec![None; bank.len()],
            clock,
            started_at: clock.now(),
        })
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_question(&self) -> &QuizQuestion {
        &self.questions[self.current]
    }

    /// Answer recorded for the current question.
    #[must_use]
    pub fn current_answer(&self) -> Option<OptionIndex> {
        self.answers[self.current]
    }

    #[must_use]
    pub fn answers(&self) -> &[Option<OptionIndex>] {
        &self.answers
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            current: self.current,
            total: self.questions.len(),
            answered: self.answers.iter().filter(|answer| answer.is_some()).count(),
        }
    }

    /// Record `option` for the current question without moving.
    pub fn select_answer(&mut self, option: OptionIndex) {
        self.answers[self.current] = Some(option);
    }

    pub fn next(&mut self) {
        self.current = (self.current + 1) % self.questions.len();
    }

    pub fn prev(&mut self) {
        let len = self.questions.len();
        self.current = (self.current + len - 1) % len;
    }

    /// Score every question; unanswered ones count as incorrect.
    #[must_use]
    pub fn finish(self) -> QuizReport {
        let outcomes = self
            .questions
            .iter()
            .zip(&self.answers)
            .enumerate()
            .map(|(position, (question, answer))| QuestionOutcome {
                number: position + 1,
                prompt: question.prompt().to_string(),
                selected: answer.map(|option| question.option(option).to_string()),
                correct: question.correct_text().to_string(),
                is_correct: *answer == Some(question.correct()),
            })
            .collect();

        QuizReport::new(outcomes, self.started_at, self.clock.now())
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("questions_len", &self.questions.len())
            .field("current", &self.current)
            .field("answers", &self.answers)
            .field("started_at", &self.started_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use timeline_core::Catalog;
    use timeline_core::time::fixed_now;

    use crate::quiz::GradeTier;

    fn session() -> QuizSession {
        QuizSession::start(Catalog::builtin().quiz(), Clock::fixed(fixed_now())).unwrap()
    }

    #[test]
    fn empty_bank_is_rejected() {
        let err = QuizSession::start(&[], Clock::fixed(fixed_now())).unwrap_err();
        assert_eq!(err, QuizError::EmptyBank);
    }

    #[test]
    fn starts_at_first_question_unanswered() {
        let session = session();
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.total(), 8);
        assert!(session.answers().iter().all(Option::is_none));
        assert_eq!(session.progress().label(), "Question 1 of 8");
    }

    #[test]
    fn next_from_last_wraps_to_first() {
        let mut session = session();
        for _ in 0..7 {
            session.next();
        }
        assert_eq!(session.current_index(), 7);
        session.next();
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn prev_from_first_wraps_to_last() {
        let mut session = session();
        session.prev();
        assert_eq!(session.current_index(), 7);
    }

    #[test]
    fn select_answer_records_without_advancing() {
        let mut session = session();
        session.select_answer(OptionIndex::B);
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.current_answer(), Some(OptionIndex::B));
        session.select_answer(OptionIndex::A);
        assert_eq!(session.current_answer(), Some(OptionIndex::A));
        assert_eq!(session.progress().answered, 1);
    }

    #[test]
    fn all_unanswered_scores_zero_and_fails() {
        let report = session().finish();
        assert_eq!(report.correct_count(), 0);
        assert!((report.percentage() - 0.0).abs() < f64::EPSILON);
        assert_eq!(report.grade(), GradeTier::NeedsReview);
        assert!(report.outcomes().iter().all(|outcome| outcome.selected.is_none()));
    }

    #[test]
    fn all_correct_scores_full_marks() {
        let mut session = session();
        for _ in 0..session.total() {
            let correct = session.current_question().correct();
            session.select_answer(correct);
            session.next();
        }
        let report = session.finish();
        assert_eq!(report.correct_count(), 8);
        assert!((report.percentage() - 100.0).abs() < f64::EPSILON);
        assert_eq!(report.grade(), GradeTier::Excellent);
    }

    #[test]
    fn report_carries_selected_and_correct_text() {
        let mut session = session();
        session.select_answer(OptionIndex::B);
        let report = session.finish();
        let first = &report.outcomes()[0];
        assert_eq!(first.number, 1);
        assert_eq!(first.selected.as_deref(), Some("Douglas Engelbart"));
        assert_eq!(first.correct, "Ivan Sutherland");
        assert!(!first.is_correct);
    }
}

use chrono::{DateTime, Duration, Utc};
use std::fmt;

/// Qualitative grade derived from the percentage score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeTier {
    /// 90% and above.
    Excellent,
    /// 70% and above.
    VeryGood,
    /// 50% and above.
    Passing,
    NeedsReview,
}

impl GradeTier {
    #[must_use]
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 90.0 {
            Self::Excellent
        } else if percentage >= 70.0 {
            Self::VeryGood
        } else if percentage >= 50.0 {
            Self::Passing
        } else {
            Self::NeedsReview
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent!",
            Self::VeryGood => "Very good!",
            Self::Passing => "Passed",
            Self::NeedsReview => "Needs review",
        }
    }
}

impl fmt::Display for GradeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-question result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionOutcome {
    /// 1-based question number.
    pub number: usize,
    pub prompt: String,
    /// Text of the chosen option, `None` when unanswered.
    pub selected: Option<String>,
    pub correct: String,
    pub is_correct: bool,
}

/// Scored result of a finished quiz.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizReport {
    outcomes: Vec<QuestionOutcome>,
    correct_count: usize,
    percentage: f64,
    grade: GradeTier,
    started_at: DateTime<Utc>,
    finished_at: DateTime<Utc>,
}

impl QuizReport {
    #[must_use]
    pub fn new(
        outcomes: Vec<QuestionOutcome>,
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
    ) -> Self {
        let correct_count = outcomes.iter().filter(|outcome| outcome.is_correct).count();
        let percentage = percentage(correct_count, outcomes.len());
        Self {
            outcomes,
            correct_count,
            percentage,
            grade: GradeTier::from_percentage(percentage),
            started_at,
            finished_at,
        }
    }

    #[must_use]
    pub fn outcomes(&self) -> &[QuestionOutcome] {
        &self.outcomes
    }

    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// Score rounded to one decimal place.
    #[must_use]
    pub fn percentage(&self) -> f64 {
        self.percentage
    }

    #[must_use]
    pub fn grade(&self) -> GradeTier {
        self.grade
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.finished_at - self.started_at
    }

    /// `"6/8 correct (75.0%)"`.
    #[must_use]
    pub fn score_line(&self) -> String {
        format!(
            "{}/{} correct ({:.1}%)",
            self.correct_count,
            self.total(),
            self.percentage
        )
    }
}

/// Percentage with one decimal, rounding ties to even (`1/16` is `6.2`).
#[allow(clippy::cast_precision_loss)]
fn percentage(correct: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let scaled = 1000 * correct;
    let mut tenths = scaled / total;
    let twice_rem = 2 * (scaled % total);
    if twice_rem > total || (twice_rem == total && tenths % 2 == 1) {
        tenths += 1;
    }
    tenths as f64 / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use timeline_core::time::fixed_now;

    fn outcome(number: usize, is_correct: bool) -> QuestionOutcome {
        QuestionOutcome {
            number,
            prompt: format!("Q{number}"),
            selected: is_correct.then(|| "yes".to_string()),
            correct: "yes".to_string(),
            is_correct,
        }
    }

    fn report(correct: usize, total: usize) -> QuizReport {
        let outcomes = (1..=total).map(|n| outcome(n, n <= correct)).collect();
        QuizReport::new(outcomes, fixed_now(), fixed_now())
    }

    #[test]
    fn percentage_rounds_to_one_decimal() {
        assert!((report(1, 3).percentage() - 33.3).abs() < 1e-9);
        assert!((report(2, 3).percentage() - 66.7).abs() < 1e-9);
        assert!((report(6, 8).percentage() - 75.0).abs() < 1e-9);
    }

    #[test]
    fn grade_thresholds_are_inclusive() {
        assert_eq!(GradeTier::from_percentage(90.0), GradeTier::Excellent);
        assert_eq!(GradeTier::from_percentage(89.9), GradeTier::VeryGood);
        assert_eq!(GradeTier::from_percentage(70.0), GradeTier::VeryGood);
        assert_eq!(GradeTier::from_percentage(50.0), GradeTier::Passing);
        assert_eq!(GradeTier::from_percentage(49.9), GradeTier::NeedsReview);
    }

    #[test]
    fn eight_question_scores_map_to_tiers() {
        assert_eq!(report(8, 8).grade(), GradeTier::Excellent);
        assert_eq!(report(7, 8).grade(), GradeTier::VeryGood);
        assert_eq!(report(6, 8).grade(), GradeTier::VeryGood);
        assert_eq!(report(4, 8).grade(), GradeTier::Passing);
        assert_eq!(report(3, 8).grade(), GradeTier::NeedsReview);
    }

    #[test]
    fn percentage_ties_round_to_even() {
        assert!((report(1, 16).percentage() - 6.2).abs() < 1e-9);
        assert!((report(3, 16).percentage() - 18.8).abs() < 1e-9);
        assert_eq!(report(1, 16).score_line(), "1/16 correct (6.2%)");
    }

    #[test]
    fn elapsed_spans_start_to_finish() {
        let start = fixed_now();
        let report = QuizReport::new(vec![outcome(1, true)], start, start + Duration::seconds(95));
        assert_eq!(report.elapsed(), Duration::seconds(95));
    }
}

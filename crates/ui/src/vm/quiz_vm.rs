use services::{QuizReport, QuizSession};
use timeline_core::model::OptionIndex;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Select(OptionIndex),
    Next,
    Prev,
    Finish,
    Close,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizOptionVm {
    pub option: OptionIndex,
    pub text: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizQuestionVm {
    pub progress_label: String,
    pub prompt: String,
    pub options: Vec<QuizOptionVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizOutcomeVm {
    pub heading: String,
    pub your_answer: String,
    pub correct_answer: String,
    pub is_correct: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizReportVm {
    pub score_line: String,
    pub grade_label: String,
    pub elapsed_label: String,
    pub outcomes: Vec<QuizOutcomeVm>,
}

fn format_elapsed(elapsed: chrono::Duration) -> String {
    let seconds = elapsed.num_seconds().max(0);
    format!("Time: {}:{:02}", seconds / 60, seconds % 60)
}

impl From<&QuizReport> for QuizReportVm {
    fn from(report: &QuizReport) -> Self {
        Self {
            score_line: report.score_line(),
            grade_label: report.grade().label().to_string(),
            elapsed_label: format_elapsed(report.elapsed()),
            outcomes: report
                .outcomes()
                .iter()
                .map(|outcome| QuizOutcomeVm {
                    heading: format!("Question {}: {}", outcome.number, outcome.prompt),
                    your_answer: outcome
                        .selected
                        .clone()
                        .unwrap_or_else(|| "(unanswered)".to_string()),
                    correct_answer: outcome.correct.clone(),
                    is_correct: outcome.is_correct,
                })
                .collect(),
        }
    }
}

#[must_use]
pub fn map_quiz_question(session: &QuizSession) -> QuizQuestionVm {
    let question = session.current_question();
    let answer = session.current_answer();
    QuizQuestionVm {
        progress_label: session.progress().label(),
        prompt: question.prompt().to_string(),
        options: OptionIndex::ALL
            .iter()
            .map(|option| QuizOptionVm {
                option: *option,
                text: question.option(*option).to_string(),
                selected: answer == Some(*option),
            })
            .collect(),
    }
}

/// Lifecycle of the quiz page.
#[derive(Debug, Default)]
pub enum QuizStage {
    #[default]
    NotStarted,
    InProgress(QuizSession),
    Finished(QuizReportVm),
}

impl QuizStage {
    #[must_use]
    pub fn question(&self) -> Option<QuizQuestionVm> {
        match self {
            Self::InProgress(session) => Some(map_quiz_question(session)),
            _ => None,
        }
    }

    pub fn start(&mut self, session: QuizSession) {
        *self = Self::InProgress(session);
    }

    pub fn apply(&mut self, intent: QuizIntent) {
        if intent == QuizIntent::Close {
            *self = Self::NotStarted;
            return;
        }
        let Self::InProgress(session) = self else {
            return;
        };
        match intent {
            QuizIntent::Select(option) => session.select_answer(option),
            QuizIntent::Next => session.next(),
            QuizIntent::Prev => session.prev(),
            QuizIntent::Finish => {
                if let Self::InProgress(session) = std::mem::take(self) {
                    let report = session.finish();
                    *self = Self::Finished(QuizReportVm::from(&report));
                }
            }
            QuizIntent::Close => {}
        }
    }
}

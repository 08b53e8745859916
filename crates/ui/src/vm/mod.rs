mod export_vm;
mod narration_vm;
mod quiz_vm;
mod timeline_vm;

pub use export_vm::export_message;
pub use narration_vm::{NarrationState, NarrationStatus};
pub use quiz_vm::{
    QuizIntent, QuizOptionVm, QuizOutcomeVm, QuizQuestionVm, QuizReportVm, QuizStage,
    map_quiz_question,
};
pub use timeline_vm::{
    DecadeOptionVm, MilestoneDetailVm, MilestoneRowVm, TimelineIntent, TimelineVm,
    decade_option_label,
};

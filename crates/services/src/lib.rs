#![forbid(unsafe_code)]

pub mod app_services;
pub mod assets;
pub mod error;
pub mod export_service;
pub mod narration;
pub mod quiz;
pub mod timeline_service;

pub use timeline_core::Clock;

pub use app_services::AppServices;
pub use assets::AssetResolver;
pub use error::{AppServicesError, ExportError, QuizError, SpeechError};
pub use export_service::{ExportFormat, ExportRecord, ExportService, ExportSummary};
pub use narration::{
    CancelToken, CommandSpeech, NarrationController, NarrationTicket, SpeechBackend, SpeechEnd,
    SpeechSettings,
};
pub use quiz::{GradeTier, QuestionOutcome, QuizProgress, QuizReport, QuizSession};
pub use timeline_service::TimelineBrowser;

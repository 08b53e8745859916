mod app_settings;
mod era;
mod ids;
mod milestone;
mod quiz;

pub use app_settings::{AppSettings, AppSettingsDraft, AppSettingsError};
pub use era::EraOverview;
pub use ids::MilestoneId;
pub use milestone::{DecadeLabel, DecadeLabelError, Milestone};
pub use quiz::{OptionIndex, QuizQuestion};

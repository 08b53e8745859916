use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use timeline_core::model::AppSettings;

use crate::error::SpeechError;

/// How a single utterance ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeechEnd {
    Finished,
    Cancelled,
}

/// Cooperative cancellation flag shared between the controller and a backend.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// A speech synthesizer.
///
/// `speak` blocks until the text has been spoken or `cancel` fires; it is
/// always called off the interaction thread. Implementations must check the
/// token often enough that cancellation feels immediate.
pub trait SpeechBackend: Send + Sync {
    fn name(&self) -> &str;

    /// # Errors
    ///
    /// Returns `SpeechError` when synthesis fails mid-way.
    fn speak(&self, text: &str, cancel: &CancelToken) -> Result<SpeechEnd, SpeechError>;
}

/// Voice parameters handed to a backend. All of them are best effort.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechSettings {
    pub rate_wpm: u32,
    pub volume: f32,
    pub voice: Option<String>,
}

impl From<&AppSettings> for SpeechSettings {
    fn from(settings: &AppSettings) -> Self {
        Self {
            rate_wpm: settings.speech_rate_wpm(),
            volume: settings.speech_volume(),
            voice: settings.voice().map(str::to_string),
        }
    }
}

impl Default for SpeechSettings {
    fn default() -> Self {
        Self::from(&AppSettings::default())
    }
}

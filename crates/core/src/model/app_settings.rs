use std::path::{Path, PathBuf};

use thiserror::Error;

pub const DEFAULT_ASSETS_DIR: &str = "assets";
pub const DEFAULT_SPEECH_RATE_WPM: u32 = 150;
pub const DEFAULT_SPEECH_VOLUME: f32 = 0.9;
pub const DEFAULT_VOICE: &str = "es";

/// Validated runtime settings for the timeline app.
#[derive(Clone, Debug, PartialEq)]
pub struct AppSettings {
    assets_dir: PathBuf,
    speech_rate_wpm: u32,
    speech_volume: f32,
    voice: Option<String>,
    narration_enabled: bool,
}

#[derive(Clone, Debug, Default)]
pub struct AppSettingsDraft {
    pub assets_dir: Option<PathBuf>,
    pub speech_rate_wpm: Option<u32>,
    pub speech_volume: Option<f32>,
    pub voice: Option<String>,
    pub narration_enabled: Option<bool>,
}

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum AppSettingsError {
    #[error("speech rate must be greater than zero")]
    InvalidRate,
    #[error("speech volume must be within 0.0..=1.0, got {provided}")]
    InvalidVolume { provided: f32 },
}

impl AppSettingsDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and fill defaults.
    ///
    /// # Errors
    ///
    /// Returns `AppSettingsError` if the rate is zero or the volume is out of range.
    pub fn validate(self) -> Result<AppSettings, AppSettingsError> {
        let assets_dir = self
            .assets_dir
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSETS_DIR));

        let speech_rate_wpm = self.speech_rate_wpm.unwrap_or(DEFAULT_SPEECH_RATE_WPM);
        if speech_rate_wpm == 0 {
            return Err(AppSettingsError::InvalidRate);
        }

        let speech_volume = self.speech_volume.unwrap_or(DEFAULT_SPEECH_VOLUME);
        if !(0.0..=1.0).contains(&speech_volume) {
            return Err(AppSettingsError::InvalidVolume {
                provided: speech_volume,
            });
        }

        let voice = match self.voice {
            Some(voice) => normalize_optional(voice),
            None => Some(DEFAULT_VOICE.to_string()),
        };

        Ok(AppSettings {
            assets_dir,
            speech_rate_wpm,
            speech_volume,
            voice,
            narration_enabled: self.narration_enabled.unwrap_or(true),
        })
    }
}

impl AppSettings {
    #[must_use]
    pub fn assets_dir(&self) -> &Path {
        &self.assets_dir
    }

    #[must_use]
    pub fn speech_rate_wpm(&self) -> u32 {
        self.speech_rate_wpm
    }

    #[must_use]
    pub fn speech_volume(&self) -> f32 {
        self.speech_volume
    }

    /// Preferred voice; synthesizers fall back to their default when absent.
    #[must_use]
    pub fn voice(&self) -> Option<&str> {
        self.voice.as_deref()
    }

    #[must_use]
    pub fn narration_enabled(&self) -> bool {
        self.narration_enabled
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            speech_rate_wpm: DEFAULT_SPEECH_RATE_WPM,
            speech_volume: DEFAULT_SPEECH_VOLUME,
            voice: Some(DEFAULT_VOICE.to_string()),
            narration_enabled: true,
        }
    }
}

fn normalize_optional(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

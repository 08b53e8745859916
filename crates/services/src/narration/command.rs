use std::process::{Command, Stdio};
use std::thread;
use std::time::Duration;

use super::backend::{CancelToken, SpeechBackend, SpeechEnd, SpeechSettings};
use crate::error::SpeechError;

const POLL_INTERVAL: Duration = Duration::from_millis(25);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Synthesizer {
    Say,
    EspeakNg,
    Espeak,
}

impl Synthesizer {
    fn candidates() -> &'static [Synthesizer] {
        #[cfg(target_os = "macos")]
        {
            &[Synthesizer::Say, Synthesizer::EspeakNg, Synthesizer::Espeak]
        }
        #[cfg(all(unix, not(target_os = "macos")))]
        {
            &[Synthesizer::EspeakNg, Synthesizer::Espeak]
        }
        #[cfg(not(unix))]
        {
            &[]
        }
    }

    fn program(self) -> &'static str {
        match self {
            Self::Say => "say",
            Self::EspeakNg => "espeak-ng",
            Self::Espeak => "espeak",
        }
    }

    fn check_args(self) -> &'static [&'static str] {
        match self {
            Self::Say => &["-v", "?"],
            Self::EspeakNg | Self::Espeak => &["--version"],
        }
    }

    fn is_installed(self) -> bool {
        Command::new(self.program())
            .args(self.check_args())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .is_ok_and(|status| status.success())
    }

    /// Whether `settings` make this synthesizer pass `-v`.
    fn uses_voice(self, settings: &SpeechSettings) -> bool {
        match self {
            // `say` only knows named voices; language codes fall back to the default.
            Self::Say => settings.voice.as_deref().is_some_and(|voice| voice.len() > 3),
            Self::EspeakNg | Self::Espeak => settings.voice.is_some(),
        }
    }

    fn command(
        self,
        program: &str,
        text: &str,
        settings: &SpeechSettings,
        with_voice: bool,
    ) -> Command {
        let mut cmd = Command::new(program);
        let voice = settings
            .voice
            .as_deref()
            .filter(|_| with_voice && self.uses_voice(settings));
        match self {
            Self::Say => {
                cmd.arg("-r").arg(settings.rate_wpm.to_string());
            }
            Self::EspeakNg | Self::Espeak => {
                cmd.arg("-s").arg(settings.rate_wpm.to_string());
                let amplitude = (settings.volume.clamp(0.0, 1.0) * 100.0).round() as u32;
                cmd.arg("-a").arg(amplitude.to_string());
            }
        }
        if let Some(voice) = voice {
            cmd.arg("-v").arg(voice);
        }
        cmd.arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        cmd
    }
}

/// Speech backend driving a platform synthesizer process (`say`, `espeak-ng`,
/// `espeak`). Cancelling kills the process.
#[derive(Debug, Clone)]
pub struct CommandSpeech {
    synth: Synthesizer,
    program: String,
    settings: SpeechSettings,
}

impl CommandSpeech {
    /// Find the first synthesizer that is installed.
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::Unavailable` if none of the candidates run.
    pub fn detect(settings: SpeechSettings) -> Result<Self, SpeechError> {
        let candidates = Synthesizer::candidates();
        candidates
            .iter()
            .copied()
            .find(|synth| synth.is_installed())
            .map(|synth| Self::with_synthesizer(synth, settings))
            .ok_or_else(|| SpeechError::Unavailable {
                tried: candidates
                    .iter()
                    .map(|synth| synth.program())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }

    fn with_synthesizer(synth: Synthesizer, settings: SpeechSettings) -> Self {
        Self {
            synth,
            program: synth.program().to_string(),
            settings,
        }
    }

    #[must_use]
    pub fn settings(&self) -> &SpeechSettings {
        &self.settings
    }

    fn run_once(
        &self,
        text: &str,
        cancel: &CancelToken,
        with_voice: bool,
    ) -> Result<SpeechEnd, SpeechError> {
        if cancel.is_cancelled() {
            return Ok(SpeechEnd::Cancelled);
        }

        let mut child = self
            .synth
            .command(&self.program, text, &self.settings, with_voice)
            .spawn()
            .map_err(|source| SpeechError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        loop {
            if cancel.is_cancelled() {
                let _ = child.kill();
                let _ = child.wait();
                return Ok(SpeechEnd::Cancelled);
            }
            let status = match child.try_wait() {
                Ok(status) => status,
                Err(err) => {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(err.into());
                }
            };
            if let Some(status) = status {
                if status.success() {
                    return Ok(SpeechEnd::Finished);
                }
                return Err(SpeechError::Failed {
                    program: self.program.clone(),
                    status: status.to_string(),
                });
            }
            thread::sleep(POLL_INTERVAL);
        }
    }
}

impl SpeechBackend for CommandSpeech {
    fn name(&self) -> &str {
        self.synth.program()
    }

    /// Speaks with the configured voice, retrying once with the synthesizer's
    /// default voice when that run fails.
    fn speak(&self, text: &str, cancel: &CancelToken) -> Result<SpeechEnd, SpeechError> {
        let with_voice = self.synth.uses_voice(&self.settings);
        match self.run_once(text, cancel, with_voice) {
            Err(SpeechError::Failed { status, .. }) if with_voice => {
                tracing::warn!(
                    program = %self.program,
                    voice = self.settings.voice.as_deref().unwrap_or_default(),
                    %status,
                    "voice rejected, falling back to default voice"
                );
                self.run_once(text, cancel, false)
            }
            outcome => outcome,
        }
    }
}

//! Text-to-speech narration behind an injected capability.

mod backend;
mod command;
mod controller;

pub use crate::error::SpeechError;
pub use backend::{CancelToken, SpeechBackend, SpeechEnd, SpeechSettings};
pub use command::CommandSpeech;
pub use controller::{NarrationController, NarrationTicket};

use services::{NarrationController, NarrationTicket};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NarrationStatus {
    #[default]
    Idle,
    Speaking,
    Completed,
    Stopped,
}

impl NarrationStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "",
            Self::Speaking => "Reading aloud...",
            Self::Completed => "Reading finished",
            Self::Stopped => "Stopped",
        }
    }
}

/// UI-side narration status keyed by the ticket of the latest `speak`.
///
/// Completion signals for older tickets are ignored so a late signal can
/// never overwrite the status of a newer narration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NarrationState {
    status: NarrationStatus,
    ticket: Option<NarrationTicket>,
}

impl NarrationState {
    #[must_use]
    pub fn status(&self) -> NarrationStatus {
        self.status
    }

    #[must_use]
    pub fn ticket(&self) -> Option<NarrationTicket> {
        self.ticket
    }

    pub fn speak<F>(
        &mut self,
        controller: &NarrationController,
        text: String,
        on_complete: F,
    ) -> Option<NarrationTicket>
    where
        F: FnOnce() + Send + 'static,
    {
        let ticket = controller.speak(text, on_complete)?;
        self.status = NarrationStatus::Speaking;
        self.ticket = Some(ticket);
        Some(ticket)
    }

    pub fn finished(&mut self, ticket: NarrationTicket) {
        if self.ticket == Some(ticket) {
            self.status = NarrationStatus::Completed;
            self.ticket = None;
        }
    }

    /// The narration for `ticket` ended without completing (backend failure
    /// or the callback was dropped). Only the current ticket returns to idle.
    pub fn ended(&mut self, ticket: NarrationTicket) {
        if self.ticket == Some(ticket) {
            self.status = NarrationStatus::Idle;
            self.ticket = None;
        }
    }

    /// Explicit user stop.
    pub fn stop(&mut self, controller: &NarrationController) {
        controller.stop();
        if self.status == NarrationStatus::Speaking {
            self.status = NarrationStatus::Stopped;
        }
        self.ticket = None;
    }

    /// Stop because the displayed content changed; clears the status.
    pub fn reset(&mut self, controller: &NarrationController) {
        controller.stop();
        self.status = NarrationStatus::Idle;
        self.ticket = None;
    }
}

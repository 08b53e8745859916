use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};

use super::backend::{CancelToken, SpeechBackend, SpeechEnd};
use crate::error::SpeechError;

/// Identifies one `speak` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NarrationTicket(u64);

impl NarrationTicket {
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

struct Active {
    ticket: NarrationTicket,
    cancel: CancelToken,
    worker: Option<JoinHandle<()>>,
}

#[derive(Default)]
struct State {
    last_ticket: u64,
    active: Option<Active>,
}

type SharedState = Arc<Mutex<State>>;

fn lock(state: &SharedState) -> MutexGuard<'_, State> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Runs at most one narration at a time on a background thread.
///
/// `speak` cancels whatever is playing before starting, and `stop` returns
/// only once the previous narration can no longer report completion. A
/// completion callback therefore never fires for a narration that has been
/// stopped or replaced.
///
/// Completion callbacks run on the narration thread while the controller is
/// locked, so they must not call back into the controller. Forward the signal
/// (channel, task wakeup) instead.
pub struct NarrationController {
    backend: Option<Arc<dyn SpeechBackend>>,
    state: SharedState,
}

impl NarrationController {
    #[must_use]
    pub fn new(backend: Arc<dyn SpeechBackend>) -> Self {
        Self {
            backend: Some(backend),
            state: SharedState::default(),
        }
    }

    /// A controller whose narration is permanently disabled.
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            backend: None,
            state: SharedState::default(),
        }
    }

    /// Wrap the outcome of backend initialization. Failure disables narration
    /// for the lifetime of the controller.
    pub fn from_init<B>(init: Result<B, SpeechError>) -> Self
    where
        B: SpeechBackend + 'static,
    {
        match init {
            Ok(backend) => {
                tracing::info!(backend = backend.name(), "narration available");
                Self::new(Arc::new(backend))
            }
            Err(err) => {
                tracing::warn!(error = %err, "narration unavailable");
                Self::unavailable()
            }
        }
    }

    #[must_use]
    pub fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    #[must_use]
    pub fn is_speaking(&self) -> bool {
        lock(&self.state).active.is_some()
    }

    /// Start narrating `text`, replacing any narration in progress.
    ///
    /// `on_complete` fires once if the text is spoken to the end. It is
    /// dropped without being called on cancellation or backend failure.
    /// Returns `None` when narration is unavailable.
    pub fn speak<F>(&self, text: impl Into<String>, on_complete: F) -> Option<NarrationTicket>
    where
        F: FnOnce() + Send + 'static,
    {
        let backend = Arc::clone(self.backend.as_ref()?);
        self.stop();

        let text = text.into();
        let cancel = CancelToken::new();
        let mut state = lock(&self.state);
        state.last_ticket += 1;
        let ticket = NarrationTicket(state.last_ticket);

        // The worker cannot observe `state` before `active` is set below.
        let spawned = {
            let shared = Arc::clone(&self.state);
            let cancel = cancel.clone();
            thread::Builder::new()
                .name("narration".to_string())
                .spawn(move || run(&shared, backend.as_ref(), &text, ticket, &cancel, on_complete))
        };

        match spawned {
            Ok(worker) => {
                state.active = Some(Active {
                    ticket,
                    cancel,
                    worker: Some(worker),
                });
                tracing::debug!(ticket = ticket.value(), "narration started");
                Some(ticket)
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to spawn narration thread");
                None
            }
        }
    }

    /// Cancel the running narration and wait for its thread. No-op when idle.
    pub fn stop(&self) {
        let Some(mut active) = lock(&self.state).active.take() else {
            return;
        };
        active.cancel.cancel();
        if let Some(worker) = active.worker.take() {
            if worker.join().is_err() {
                tracing::warn!(ticket = active.ticket.value(), "narration thread panicked");
            }
        }
        tracing::debug!(ticket = active.ticket.value(), "narration stopped");
    }
}

fn run<F>(
    shared: &SharedState,
    backend: &dyn SpeechBackend,
    text: &str,
    ticket: NarrationTicket,
    cancel: &CancelToken,
    on_complete: F,
) where
    F: FnOnce(),
{
    let outcome = backend.speak(text, cancel);

    let mut state = lock(shared);
    let is_current = state
        .active
        .as_ref()
        .is_some_and(|active| active.ticket == ticket);
    if !is_current {
        return;
    }
    state.active = None;

    match outcome {
        Ok(SpeechEnd::Finished) => {
            tracing::debug!(ticket = ticket.value(), "narration finished");
            on_complete();
        }
        Ok(SpeechEnd::Cancelled) => {}
        Err(err) => {
            tracing::warn!(ticket = ticket.value(), error = %err, "narration failed");
        }
    }
}

impl Drop for NarrationController {
    fn drop(&mut self) {
        self.stop();
    }
}

impl fmt::Debug for NarrationController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NarrationController")
            .field("backend", &self.backend.as_ref().map(|backend| backend.name()))
            .field("speaking", &self.is_speaking())
            .finish()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::mpsc;
    use std::time::{Duration, Instant};

    const WAIT: Duration = Duration::from_secs(2);

    /// Speaks until released or cancelled.
    #[derive(Default)]
    struct GatedSpeech {
        released: AtomicBool,
        fail: AtomicBool,
        started: AtomicUsize,
    }

    impl GatedSpeech {
        fn release(&self) {
            self.released.store(true, Ordering::Release);
        }
    }

    impl SpeechBackend for GatedSpeech {
        fn name(&self) -> &str {
            "gated"
        }

        fn speak(&self, _text: &str, cancel: &CancelToken) -> Result<SpeechEnd, SpeechError> {
            self.started.fetch_add(1, Ordering::AcqRel);
            loop {
                if cancel.is_cancelled() {
                    return Ok(SpeechEnd::Cancelled);
                }
                if self.released.load(Ordering::Acquire) {
                    if self.fail.load(Ordering::Acquire) {
                        return Err(SpeechError::Failed {
                            program: "gated".to_string(),
                            status: "exit status: 1".to_string(),
                        });
                    }
                    return Ok(SpeechEnd::Finished);
                }
                thread::sleep(Duration::from_millis(2));
            }
        }
    }

    fn controller() -> (NarrationController, Arc<GatedSpeech>) {
        let backend = Arc::new(GatedSpeech::default());
        let controller = NarrationController::new(backend.clone());
        (controller, backend)
    }

    fn wait_idle(controller: &NarrationController) {
        let deadline = Instant::now() + WAIT;
        while controller.is_speaking() {
            assert!(Instant::now() < deadline, "narration never went idle");
            thread::sleep(Duration::from_millis(2));
        }
    }

    #[test]
    fn natural_completion_fires_callback_once() {
        let (controller, backend) = controller();
        let (tx, rx) = mpsc::channel();
        let ticket = controller.speak("hola", move || tx.send(()).unwrap());
        assert!(ticket.is_some());
        assert!(controller.is_speaking());

        backend.release();
        rx.recv_timeout(WAIT).expect("completion callback");
        wait_idle(&controller);
        assert!(rx.recv_timeout(Duration::from_millis(20)).is_err());
    }

    #[test]
    fn second_speak_disowns_the_first() {
        let (controller, backend) = controller();
        let (first_tx, first_rx) = mpsc::channel::<()>();
        let (second_tx, second_rx) = mpsc::channel::<()>();

        let first = controller.speak("uno", move || first_tx.send(()).unwrap());
        let second = controller.speak("dos", move || second_tx.send(()).unwrap());
        assert!(first < second);

        backend.release();
        second_rx.recv_timeout(WAIT).expect("second completes");
        // The first callback was dropped, never called.
        assert_eq!(first_rx.recv_timeout(WAIT), Err(mpsc::RecvTimeoutError::Disconnected));
        assert_eq!(backend.started.load(Ordering::Acquire), 2);
    }

    #[test]
    fn stop_cancels_without_callback() {
        let (controller, backend) = controller();
        let (tx, rx) = mpsc::channel::<()>();
        controller.speak("hola", move || tx.send(()).unwrap());

        controller.stop();
        assert!(!controller.is_speaking());
        backend.release();
        assert_eq!(rx.recv_timeout(WAIT), Err(mpsc::RecvTimeoutError::Disconnected));
    }

    #[test]
    fn stop_when_idle_is_a_no_op() {
        let (controller, _backend) = controller();
        controller.stop();
        controller.stop();
        assert!(!controller.is_speaking());
    }

    #[test]
    fn backend_failure_returns_to_idle_silently() {
        let (controller, backend) = controller();
        backend.fail.store(true, Ordering::Release);
        let (tx, rx) = mpsc::channel::<()>();
        controller.speak("hola", move || tx.send(()).unwrap());

        backend.release();
        assert_eq!(rx.recv_timeout(WAIT), Err(mpsc::RecvTimeoutError::Disconnected));
        wait_idle(&controller);
    }

    #[test]
    fn unavailable_controller_ignores_everything() {
        let controller = NarrationController::from_init::<GatedSpeech>(Err(
            SpeechError::Unavailable {
                tried: "espeak".to_string(),
            },
        ));
        assert!(!controller.is_available());
        assert!(controller.speak("hola", || {}).is_none());
        assert!(!controller.is_speaking());
        controller.stop();
    }
}

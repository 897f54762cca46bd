//! Speech-to-text capability boundary.
//!
//! The browser never talks to a speech engine directly. It drives an injected
//! [`SpeechRecognizer`] through one single-shot session and keeps at most one
//! final transcript from it.

mod command;
mod voice_error;

pub use command::CommandRecognizer;
pub use voice_error::{CaptureFailure, VoiceError};

use std::sync::mpsc::{self, Sender};

/// Lifecycle events of one capture session, in the order a recognizer emits
/// them. `Ended` is sent exactly once, whatever the outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechEvent {
    Started,
    Interim(String),
    Final(String),
    Failed(CaptureFailure),
    Ended,
}

pub trait SpeechRecognizer: Send + Sync {
    fn is_available(&self) -> bool;

    /// Begins a capture session. Events are delivered on `events` until
    /// `Ended`; dropping the sender also ends the session.
    fn start(&self, events: Sender<SpeechEvent>) -> Result<(), VoiceError>;

    /// Requests an early end to the running session, if any.
    fn stop(&self);
}

/// Stand-in used when no speech engine is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableRecognizer;

impl SpeechRecognizer for UnavailableRecognizer {
    fn is_available(&self) -> bool {
        false
    }

    fn start(&self, _events: Sender<SpeechEvent>) -> Result<(), VoiceError> {
        Err(VoiceError::Unavailable)
    }

    fn stop(&self) {}
}

// Clears the listening indicator on every exit path, including panics.
struct ListeningGuard<F: FnMut(bool)> {
    on_listening: F,
    active: bool,
}

impl<F: FnMut(bool)> ListeningGuard<F> {
    fn started(&mut self) {
        if !self.active {
            self.active = true;
            (self.on_listening)(true);
        }
    }
}

impl<F: FnMut(bool)> Drop for ListeningGuard<F> {
    fn drop(&mut self) {
        if self.active {
            (self.on_listening)(false);
        }
    }
}

/// Runs one capture session to completion and returns its final transcript.
///
/// Interim results are discarded. The first terminating outcome wins: a
/// failure after a final transcript is ignored and vice versa. `Ok(None)`
/// means the session ended (or was stopped) without speech.
pub fn capture_transcript<F>(
    recognizer: &dyn SpeechRecognizer,
    on_listening: F,
) -> Result<Option<String>, VoiceError>
where
    F: FnMut(bool),
{
    if !recognizer.is_available() {
        return Err(VoiceError::Unavailable);
    }

    let (tx, rx) = mpsc::channel();
    recognizer.start(tx)?;

    let mut guard = ListeningGuard {
        on_listening,
        active: false,
    };
    let mut outcome: Option<Result<String, CaptureFailure>> = None;

    for event in rx.iter() {
        match event {
            SpeechEvent::Started => guard.started(),
            SpeechEvent::Interim(text) => tracing::trace!(%text, "interim transcript dropped"),
            SpeechEvent::Final(text) => {
                outcome.get_or_insert(Ok(text));
            }
            SpeechEvent::Failed(failure) => {
                outcome.get_or_insert(Err(failure));
            }
            SpeechEvent::Ended => break,
        }
    }
    drop(guard);

    match outcome {
        Some(Ok(transcript)) => Ok(Some(transcript)),
        Some(Err(failure)) => Err(VoiceError::Capture(failure)),
        None => Ok(None),
    }
}

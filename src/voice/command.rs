// command.rs
use crate::voice::{CaptureFailure, SpeechEvent, SpeechRecognizer, VoiceError};
use std::io::Read;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex, MutexGuard};

// sysexits.h EX_NOPERM
const EXIT_NO_PERMISSION: i32 = 77;

/// The running capture. Whoever takes it out of the slot owns its ending:
/// either the reader thread when stdout closes, or `stop`.
struct Session {
    id: u64,
    child: Child,
    events: Sender<SpeechEvent>,
}

/// Speech capability backed by an external speech-to-text program.
///
/// The program records one utterance and prints transcripts to stdout, one
/// per line. Every line but the last non-empty one is an interim result.
/// Exit status 77 means microphone permission was denied; any other failure
/// status is a device error.
pub struct CommandRecognizer {
    program: String,
    args: Vec<String>,
    session: Arc<Mutex<Option<Session>>>,
    next_id: AtomicU64,
}

impl CommandRecognizer {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            session: Arc::new(Mutex::new(None)),
            next_id: AtomicU64::new(0),
        }
    }

    /// Builds a recognizer from a shell-style command line.
    pub fn from_command_line(line: &str) -> Result<Self, VoiceError> {
        let mut words = shell_words::split(line).map_err(|e| VoiceError::Spawn(e.to_string()))?;
        if words.is_empty() {
            return Err(VoiceError::Spawn("empty speech command".into()));
        }
        let program = words.remove(0);
        Ok(Self::new(program, words))
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn lock_session(session: &Mutex<Option<Session>>) -> MutexGuard<'_, Option<Session>> {
        session.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    // Takes the session only if it is still the one identified by `id`.
    fn claim(session: &Mutex<Option<Session>>, id: u64) -> Option<Session> {
        let mut slot = Self::lock_session(session);
        if slot.as_ref().is_some_and(|s| s.id == id) {
            slot.take()
        } else {
            None
        }
    }

    fn classify(status: ExitStatus, stdout: &str) -> Vec<SpeechEvent> {
        if !status.success() {
            let failure = match status.code() {
                Some(EXIT_NO_PERMISSION) => CaptureFailure::PermissionDenied,
                _ => CaptureFailure::Device(format!("speech command exited with {status}")),
            };
            return vec![SpeechEvent::Failed(failure)];
        }

        let lines: Vec<&str> = stdout
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();

        match lines.split_last() {
            Some((last, interim)) => interim
                .iter()
                .map(|l| SpeechEvent::Interim(l.to_string()))
                .chain(std::iter::once(SpeechEvent::Final(last.to_string())))
                .collect(),
            None => vec![SpeechEvent::Failed(CaptureFailure::NoSpeech)],
        }
    }
}

impl SpeechRecognizer for CommandRecognizer {
    fn is_available(&self) -> bool {
        true
    }

    fn start(&self, events: Sender<SpeechEvent>) -> Result<(), VoiceError> {
        let mut slot = Self::lock_session(&self.session);
        if slot.is_some() {
            return Err(VoiceError::AlreadyListening);
        }

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| VoiceError::Spawn(format!("{}: {e}", self.program)))?;

        let mut stdout = child
            .stdout
            .take()
            .ok_or_else(|| VoiceError::Spawn("speech command has no stdout".into()))?;

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        *slot = Some(Session {
            id,
            child,
            events: events.clone(),
        });
        drop(slot);

        tracing::info!(program = %self.program, session = id, "speech capture started");
        let _ = events.send(SpeechEvent::Started);

        let session = Arc::clone(&self.session);

        std::thread::spawn(move || {
            let mut transcript = String::new();
            // Returns once every holder of the pipe has exited, which may be
            // long after a stop when the command spawned its own children.
            let read = stdout.read_to_string(&mut transcript);

            let Some(Session { mut child, .. }) = Self::claim(&session, id) else {
                tracing::debug!(session = id, "stopped speech capture drained");
                return;
            };

            let script = match (read, child.wait()) {
                (Ok(_), Ok(status)) => Self::classify(status, &transcript),
                (Err(e), _) | (_, Err(e)) => {
                    vec![SpeechEvent::Failed(CaptureFailure::Device(e.to_string()))]
                }
            };

            for event in script {
                let _ = events.send(event);
            }
            let _ = events.send(SpeechEvent::Ended);
        });

        Ok(())
    }

    fn stop(&self) {
        let Some(mut session) = Self::lock_session(&self.session).take() else {
            return;
        };

        if let Err(e) = session.child.kill() {
            tracing::warn!("failed to stop speech command: {e}");
        }
        let _ = session.child.wait();

        tracing::info!(session = session.id, "speech capture stopped");
        let _ = session.events.send(SpeechEvent::Ended);
    }
}

use thiserror::Error;

/// Why a started capture session ended without a transcript.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CaptureFailure {
    #[error("no speech detected")]
    NoSpeech,
    #[error("microphone permission denied")]
    PermissionDenied,
    #[error("device error: {0}")]
    Device(String),
}

/// Errors from the speech capability boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VoiceError {
    #[error("Speech recognition is unavailable")]
    Unavailable,
    #[error("A voice capture is already in progress")]
    AlreadyListening,
    #[error("Capture failed: {0}")]
    Capture(CaptureFailure),
    #[error("Could not start speech recognizer: {0}")]
    Spawn(String),
}

impl VoiceError {
    /// Returns a user-friendly error message suitable for display in the UI.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Unavailable => "Speech recognition is not supported in this environment.",
            Self::AlreadyListening => "Already listening. Finish or stop the current voice search first.",
            Self::Capture(CaptureFailure::NoSpeech) => "No speech was detected. Please try again.",
            Self::Capture(CaptureFailure::PermissionDenied) => {
                "Microphone access was denied. Please check your permissions."
            }
            Self::Capture(CaptureFailure::Device(_)) | Self::Spawn(_) => {
                "A microphone error occurred. Please check your audio settings."
            }
        }
    }
}

use std::sync::Arc;

use crate::application::ports::RecognizerError;
use crate::application::services::CredentialState;

/// Substrings that mark a backend error message as an authorization problem.
/// A compatibility shim kept from the original deployment; the structured
/// `RecognizerError::Unauthenticated` signal is checked first.
const AUTH_ERROR_MARKERS: [&str; 5] = [
    "authentication",
    "permission",
    "credentials",
    "unauthorized",
    "auth",
];

const GENERIC_AUTH_MESSAGE: &str = "Google Cloud credentials are not configured or invalid.";

/// The three response shapes a transcription call can produce. All of them
/// serialize as HTTP 200; only `Failed` carries an error field, and that
/// field is authoritative for callers.
pub enum TranscriptionOutcome {
    Transcript(String),
    MockFallback(String),
    Failed { transcription: String, error: String },
}

pub struct TranscriptionService {
    credentials: Arc<CredentialState>,
}

impl TranscriptionService {
    pub fn new(credentials: Arc<CredentialState>) -> Self {
        Self { credentials }
    }

    pub fn credentials(&self) -> &Arc<CredentialState> {
        &self.credentials
    }

    /// Transcribe one recorded payload. Never returns an error: every
    /// failure mode degrades to one of the [`TranscriptionOutcome`] shapes.
    pub async fn transcribe(&self, audio_data: &[u8]) -> TranscriptionOutcome {
        if self.credentials.using_mock() {
            tracing::info!("Using mock transcription response");
            let reason = self
                .credentials
                .init_error()
                .unwrap_or(GENERIC_AUTH_MESSAGE);
            return TranscriptionOutcome::MockFallback(format!(
                "This is a mock transcription. Authentication error: {}",
                reason
            ));
        }

        // using_mock() is false, so the recognizer is present.
        let recognizer = match self.credentials.recognizer() {
            Some(r) => Arc::clone(r),
            None => {
                return TranscriptionOutcome::MockFallback(format!(
                    "This is a mock transcription. Authentication error: {}",
                    GENERIC_AUTH_MESSAGE
                ));
            }
        };

        match recognizer.recognize(audio_data).await {
            Ok(transcript) => {
                tracing::info!(chars = transcript.len(), "Transcription completed");
                TranscriptionOutcome::Transcript(transcript)
            }
            Err(err) if is_auth_failure(&err) => {
                if self.credentials.degrade() {
                    tracing::warn!(error = %err, "Authentication failure, degrading to mock transcription");
                }
                TranscriptionOutcome::MockFallback(format!(
                    "Mock transcription: Authentication failed: {}",
                    err.message()
                ))
            }
            Err(err) => {
                tracing::error!(error = %err, "Speech recognition call failed");
                let message = err.message().to_string();
                TranscriptionOutcome::Failed {
                    transcription: format!("Error during transcription: {}", message),
                    error: message,
                }
            }
        }
    }
}

fn is_auth_failure(err: &RecognizerError) -> bool {
    if matches!(err, RecognizerError::Unauthenticated(_)) {
        return true;
    }
    let message = err.message().to_lowercase();
    AUTH_ERROR_MARKERS
        .iter()
        .any(|marker| message.contains(marker))
}

mod credential_state;
mod transcription_service;

pub use credential_state::CredentialState;
pub use transcription_service::{TranscriptionOutcome, TranscriptionService};

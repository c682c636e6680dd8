mod credential_probe;
mod credential_resolver;
mod google_speech_engine;
mod mock_recognizer;

pub use credential_probe::{CredentialFileReport, PREVIEW_LENGTH, probe_credentials_file};
pub use credential_resolver::{ACCESS_TOKEN_ENV, resolve_credentials};
pub use google_speech_engine::{GoogleAuthMode, GoogleSpeechEngine};
pub use mock_recognizer::MockSpeechRecognizer;

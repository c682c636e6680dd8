use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::application::ports::SpeechRecognizer;

/// Process-wide credential state, resolved once at startup and injected into
/// the handlers through `AppState`.
///
/// Invariant: a missing recognizer implies mock mode from construction. The
/// only mutation after startup is the one-way `false -> true` flip performed
/// by [`degrade`](Self::degrade) when a backend call is classified as an
/// authentication failure. Concurrent requests may race on the flip; the
/// compare-exchange makes the race benign.
pub struct CredentialState {
    recognizer: Option<Arc<dyn SpeechRecognizer>>,
    using_mock: AtomicBool,
    init_error: Option<String>,
    credentials_path: PathBuf,
}

impl CredentialState {
    /// A usable recognition client was constructed.
    pub fn ready(credentials_path: impl Into<PathBuf>, recognizer: Arc<dyn SpeechRecognizer>) -> Self {
        Self {
            recognizer: Some(recognizer),
            using_mock: AtomicBool::new(false),
            init_error: None,
            credentials_path: credentials_path.into(),
        }
    }

    /// Startup resolution failed; every transcription call will be mocked.
    pub fn degraded(credentials_path: impl Into<PathBuf>, init_error: impl Into<String>) -> Self {
        Self {
            recognizer: None,
            using_mock: AtomicBool::new(true),
            init_error: Some(init_error.into()),
            credentials_path: credentials_path.into(),
        }
    }

    pub fn recognizer(&self) -> Option<&Arc<dyn SpeechRecognizer>> {
        self.recognizer.as_ref()
    }

    pub fn using_mock(&self) -> bool {
        self.recognizer.is_none() || self.using_mock.load(Ordering::Acquire)
    }

    /// One-way flip into mock mode. Returns true when this call performed
    /// the transition (it was not already degraded).
    pub fn degrade(&self) -> bool {
        self.using_mock
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    pub fn init_error(&self) -> Option<&str> {
        self.init_error.as_deref()
    }

    pub fn credentials_path(&self) -> &Path {
        &self.credentials_path
    }
}

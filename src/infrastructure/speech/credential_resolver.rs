use std::path::Path;
use std::sync::Arc;

use crate::application::services::CredentialState;
use crate::domain::ServiceAccountKey;

use super::google_speech_engine::{GoogleAuthMode, GoogleSpeechEngine};

pub const ACCESS_TOKEN_ENV: &str = "GOOGLE_ACCESS_TOKEN";

/// One-shot startup resolution of the credential document into either a
/// usable recognition client or a degraded state. Never re-attempted per
/// request; credential hot-reload is out of scope.
pub fn resolve_credentials(path: &Path) -> CredentialState {
    tracing::info!(path = %path.display(), "Attempting to load credentials");

    if !path.exists() {
        let error = format!("credentials file not found at {}", path.display());
        tracing::error!(path = %path.display(), "Credentials file not found");
        return CredentialState::degraded(path, error);
    }

    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let error = format!("Error initializing with credentials file: {}", e);
            tracing::error!(error = %e, "Failed to read credentials file");
            return CredentialState::degraded(path, error);
        }
    };

    let key = match ServiceAccountKey::parse(&content) {
        Ok(key) => key,
        Err(e) => {
            let error = format!("Error initializing with credentials file: {}", e);
            tracing::error!(error = %e, "Failed to parse credentials file");
            return CredentialState::degraded(path, error);
        }
    };

    let auth = match resolve_auth_mode(&key) {
        Some(auth) => auth,
        None => {
            let error = format!(
                "Error initializing with credentials file: no usable auth material \
                 (expected an api_key field or {})",
                ACCESS_TOKEN_ENV
            );
            tracing::error!("No usable auth material in credentials");
            return CredentialState::degraded(path, error);
        }
    };

    tracing::info!(project_id = %key.project_id, "Initialized Speech client with credentials");

    let engine = GoogleSpeechEngine::new(key.project_id, auth, None);
    CredentialState::ready(path, Arc::new(engine))
}

/// A raw service-account private key cannot mint tokens without an RSA
/// signer, so the client requires either an API key in the document or a
/// pre-issued access token from the environment.
fn resolve_auth_mode(key: &ServiceAccountKey) -> Option<GoogleAuthMode> {
    if let Some(api_key) = key.api_key.as_ref().filter(|k| !k.is_empty()) {
        return Some(GoogleAuthMode::ApiKey(api_key.clone()));
    }
    std::env::var(ACCESS_TOKEN_ENV)
        .ok()
        .filter(|t| !t.is_empty())
        .map(GoogleAuthMode::BearerToken)
}

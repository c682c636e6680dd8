use async_trait::async_trait;

#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    async fn recognize(&self, audio_data: &[u8]) -> Result<String, RecognizerError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RecognizerError {
    /// The backend rejected the call as unauthenticated (HTTP 401, Google
    /// status UNAUTHENTICATED, or gRPC code 16).
    #[error("unauthenticated: {0}")]
    Unauthenticated(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl RecognizerError {
    pub fn message(&self) -> &str {
        match self {
            RecognizerError::Unauthenticated(m)
            | RecognizerError::ApiRequestFailed(m)
            | RecognizerError::InvalidResponse(m) => m,
        }
    }
}

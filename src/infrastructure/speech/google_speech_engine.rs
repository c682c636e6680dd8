use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::application::ports::{RecognizerError, SpeechRecognizer};

const DEFAULT_BASE_URL: &str = "https://speech.googleapis.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// gRPC code for UNAUTHENTICATED, as surfaced in REST error bodies.
const GRPC_UNAUTHENTICATED: i32 = 16;

/// How the recognition call authenticates against the API.
#[derive(Clone)]
pub enum GoogleAuthMode {
    /// API key passed as a query parameter.
    ApiKey(String),
    /// Pre-issued OAuth2 access token passed as a bearer header.
    BearerToken(String),
}

/// Batch client for the Google Cloud Speech-to-Text v1 REST API
/// (`POST /v1/speech:recognize`).
///
/// Configuration is fixed for this service: single-channel WEBM_OPUS input,
/// en-US, automatic punctuation. The browser records audio/webm, so no
/// sample rate is declared; OPUS carries it in the container.
pub struct GoogleSpeechEngine {
    client: reqwest::Client,
    auth: GoogleAuthMode,
    base_url: String,
    project_id: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RecognitionConfig {
    encoding: &'static str,
    language_code: &'static str,
    enable_automatic_punctuation: bool,
}

#[derive(Serialize)]
struct RecognitionAudio {
    content: String,
}

#[derive(Serialize)]
struct RecognizeRequest {
    config: RecognitionConfig,
    audio: RecognitionAudio,
}

#[derive(Deserialize)]
struct SpeechRecognitionAlternative {
    #[serde(default)]
    transcript: String,
}

#[derive(Deserialize)]
struct SpeechRecognitionResult {
    #[serde(default)]
    alternatives: Vec<SpeechRecognitionAlternative>,
}

#[derive(Deserialize)]
struct RecognizeResponse {
    #[serde(default)]
    results: Vec<SpeechRecognitionResult>,
}

#[derive(Deserialize)]
struct GoogleErrorDetail {
    #[serde(default)]
    code: Option<i32>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    status: Option<String>,
}

#[derive(Deserialize)]
struct GoogleErrorResponse {
    error: GoogleErrorDetail,
}

impl GoogleSpeechEngine {
    pub fn new(project_id: String, auth: GoogleAuthMode, base_url: Option<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .connect_timeout(CONNECT_TIMEOUT)
                .build()
                .unwrap_or_default(),
            auth,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            project_id,
        }
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    fn endpoint(&self) -> String {
        let base = format!("{}/v1/speech:recognize", self.base_url.trim_end_matches('/'));
        match &self.auth {
            GoogleAuthMode::ApiKey(key) => format!("{}?key={}", base, key),
            GoogleAuthMode::BearerToken(_) => base,
        }
    }

    fn build_request(&self, audio_data: &[u8]) -> RecognizeRequest {
        RecognizeRequest {
            config: RecognitionConfig {
                encoding: "WEBM_OPUS",
                language_code: "en-US",
                enable_automatic_punctuation: true,
            },
            audio: RecognitionAudio {
                content: base64::engine::general_purpose::STANDARD.encode(audio_data),
            },
        }
    }

    /// Map a non-success response to a recognizer error, preferring the
    /// structured status over the raw body.
    fn classify_error(status: reqwest::StatusCode, body: &str) -> RecognizerError {
        let detail = serde_json::from_str::<GoogleErrorResponse>(body)
            .ok()
            .map(|r| r.error);

        let message = detail
            .as_ref()
            .and_then(|d| d.message.clone())
            .unwrap_or_else(|| body.to_string());

        let unauthenticated = status == reqwest::StatusCode::UNAUTHORIZED
            || detail.as_ref().is_some_and(|d| {
                d.status.as_deref() == Some("UNAUTHENTICATED")
                    || d.code == Some(GRPC_UNAUTHENTICATED)
            });

        if unauthenticated {
            RecognizerError::Unauthenticated(message)
        } else {
            RecognizerError::ApiRequestFailed(format!("status {}: {}", status, message))
        }
    }
}

#[async_trait]
impl SpeechRecognizer for GoogleSpeechEngine {
    async fn recognize(&self, audio_data: &[u8]) -> Result<String, RecognizerError> {
        let request = self.build_request(audio_data);

        tracing::debug!(
            bytes = audio_data.len(),
            project_id = %self.project_id,
            "Sending recognition request to Google Cloud"
        );

        let mut builder = self.client.post(self.endpoint()).json(&request);
        if let GoogleAuthMode::BearerToken(token) = &self.auth {
            builder = builder.bearer_auth(token);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| RecognizerError::ApiRequestFailed(format!("request: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| RecognizerError::ApiRequestFailed(format!("body: {}", e)))?;

        if !status.is_success() {
            return Err(Self::classify_error(status, &body));
        }

        let parsed: RecognizeResponse = serde_json::from_str(&body)
            .map_err(|e| RecognizerError::InvalidResponse(format!("parse response: {}", e)))?;

        let transcript = parsed
            .results
            .iter()
            .filter_map(|result| result.alternatives.first())
            .map(|alternative| alternative.transcript.as_str())
            .filter(|transcript| !transcript.is_empty())
            .collect::<Vec<_>>()
            .join("\n");

        tracing::info!(chars = transcript.len(), "Google Speech transcription completed");

        Ok(transcript)
    }
}

use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::services::TranscriptionOutcome;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct TranscriptionResponse {
    pub transcription: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize)]
pub struct FailureResponse {
    pub error: String,
    pub details: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechModeResponse {
    pub using_mock_transcription: bool,
    pub status: String,
    pub auth_error: Option<String>,
    pub credentials_file: String,
}

#[derive(Serialize)]
pub struct StreamingStubResponse {
    pub message: String,
}

/// `POST /speech`: transcribe one recorded audio payload uploaded as the
/// multipart field `audio`.
#[tracing::instrument(skip(state, multipart))]
pub async fn transcribe_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let mut audio_data = None;

    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                if field.name() != Some("audio") {
                    continue;
                }
                match field.bytes().await {
                    Ok(bytes) => {
                        audio_data = Some(bytes);
                        break;
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to read audio field");
                        return (
                            StatusCode::INTERNAL_SERVER_ERROR,
                            Json(FailureResponse {
                                error: "Failed to process speech".to_string(),
                                details: e.to_string(),
                            }),
                        )
                            .into_response();
                    }
                }
            }
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart form");
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(FailureResponse {
                        error: "Failed to process speech".to_string(),
                        details: e.to_string(),
                    }),
                )
                    .into_response();
            }
        }
    }

    let audio_data = match audio_data {
        Some(bytes) if !bytes.is_empty() => bytes,
        _ => {
            tracing::warn!("Transcription request with no audio file");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "No audio file provided".to_string(),
                }),
            )
                .into_response();
        }
    };

    tracing::debug!(bytes = audio_data.len(), "Audio payload received");

    let response = match state.transcription_service.transcribe(&audio_data).await {
        TranscriptionOutcome::Transcript(transcription)
        | TranscriptionOutcome::MockFallback(transcription) => TranscriptionResponse {
            transcription,
            error: None,
        },
        TranscriptionOutcome::Failed {
            transcription,
            error,
        } => TranscriptionResponse {
            transcription,
            error: Some(error),
        },
    };

    (StatusCode::OK, Json(response)).into_response()
}

/// `GET /speech`: report whether responses are currently mocked, from the
/// startup-resolved credential state.
pub async fn speech_mode_handler(State(state): State<AppState>) -> impl IntoResponse {
    let credentials = state.transcription_service.credentials();

    (
        StatusCode::OK,
        Json(SpeechModeResponse {
            using_mock_transcription: credentials.using_mock(),
            status: "ok".to_string(),
            auth_error: credentials.init_error().map(String::from),
            credentials_file: credentials.credentials_path().display().to_string(),
        }),
    )
}

/// `PUT /speech`: reserved for streaming recognition. Deliberately a stub:
/// it touches neither the credential state nor the backend.
pub async fn streaming_stub_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(StreamingStubResponse {
            message: "Streaming not yet implemented".to_string(),
        }),
    )
}

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::infrastructure::speech::probe_credentials_file;
use crate::presentation::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub status: String,
    pub using_mock_transcription: bool,
    pub environment: String,
    pub credentials: CredentialsReport,
    pub debug: DebugInfo,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialsReport {
    pub path: String,
    pub exists: bool,
    pub size: u64,
    pub is_valid_json: bool,
    pub preview: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugInfo {
    pub timestamp: String,
    pub toolchain_version: String,
}

/// `GET /speech/status`: diagnostic snapshot of credential-file health.
///
/// Probes the filesystem fresh on every call, independent of the cached
/// startup state, so a file fixed after boot shows healthy here even though
/// transcription stays degraded until restart. The preview never exceeds
/// the fixed prefix length.
#[tracing::instrument(skip(state))]
pub async fn speech_status_handler(State(state): State<AppState>) -> impl IntoResponse {
    let path = &state.settings.speech.credentials_path;
    let report = probe_credentials_file(path).await;

    (
        StatusCode::OK,
        Json(StatusResponse {
            status: "ok".to_string(),
            using_mock_transcription: report.using_mock(),
            environment: state.settings.environment.as_str().to_string(),
            credentials: CredentialsReport {
                path: path.display().to_string(),
                exists: report.exists,
                size: report.size,
                is_valid_json: report.is_valid_json,
                preview: report.preview,
            },
            debug: DebugInfo {
                timestamp: chrono::Utc::now().to_rfc3339(),
                toolchain_version: std::env::var("RUSTUP_TOOLCHAIN")
                    .unwrap_or_else(|_| "unknown".to_string()),
            },
        }),
    )
}

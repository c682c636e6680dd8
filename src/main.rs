use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use tokio::net::TcpListener;

use voxrelay::application::services::TranscriptionService;
use voxrelay::infrastructure::observability::{TracingConfig, init_tracing};
use voxrelay::infrastructure::speech::resolve_credentials;
use voxrelay::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();

    init_tracing(
        TracingConfig {
            environment: settings.environment.to_string(),
            json_format: settings.logging.enable_json,
            ..TracingConfig::default()
        },
        settings.server.port,
    );

    let credential_state = Arc::new(resolve_credentials(&settings.speech.credentials_path));
    if credential_state.using_mock() {
        tracing::warn!(
            error = credential_state.init_error().unwrap_or("unknown"),
            "Speech client unavailable, serving mock transcriptions"
        );
    }

    let transcription_service = Arc::new(TranscriptionService::new(credential_state));

    let state = AppState {
        transcription_service,
        settings: settings.clone(),
    };

    let router = create_router(state);

    let host: IpAddr = settings.server.host.parse()?;
    let addr = SocketAddr::new(host, settings.server.port);
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

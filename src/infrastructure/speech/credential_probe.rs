use std::path::Path;

/// Content preview is capped well below anything secret-bearing; the
/// credential document's first bytes are only ever `{\n  "type": ...`.
pub const PREVIEW_LENGTH: usize = 20;

/// Point-in-time health of the credentials file, recomputed from the
/// filesystem on every status request. Independent of the startup
/// resolution: a file fixed after boot shows healthy here even though the
/// process stays degraded until restart.
pub struct CredentialFileReport {
    pub exists: bool,
    pub size: u64,
    pub is_valid_json: bool,
    pub preview: Option<String>,
}

impl CredentialFileReport {
    fn missing() -> Self {
        Self {
            exists: false,
            size: 0,
            is_valid_json: false,
            preview: None,
        }
    }

    pub fn using_mock(&self) -> bool {
        !self.exists || self.size == 0 || !self.is_valid_json
    }
}

/// Probe the credentials file. Any stat/read failure reports a missing
/// file rather than propagating.
pub async fn probe_credentials_file(path: &Path) -> CredentialFileReport {
    let size = match tokio::fs::metadata(path).await {
        Ok(metadata) if metadata.is_file() => metadata.len(),
        _ => return CredentialFileReport::missing(),
    };

    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!(error = %e, path = %path.display(), "Failed to read credentials file");
            return CredentialFileReport {
                exists: true,
                size,
                is_valid_json: false,
                preview: None,
            };
        }
    };

    let prefix: String = content.chars().take(PREVIEW_LENGTH).collect();

    CredentialFileReport {
        exists: true,
        size,
        is_valid_json: serde_json::from_str::<serde_json::Value>(&content).is_ok(),
        preview: Some(format!("{}...", prefix)),
    }
}

use std::path::PathBuf;

use super::Environment;

pub const CREDENTIALS_PATH_ENV: &str = "GOOGLE_APPLICATION_CREDENTIALS";
pub const DEFAULT_CREDENTIALS_FILE: &str = "google-credentials.json";

#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub speech: SpeechSettings,
    pub logging: LoggingSettings,
    pub environment: Environment,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct SpeechSettings {
    pub credentials_path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub enable_json: bool,
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            server: ServerSettings {
                host: std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: std::env::var("SERVER_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(3000),
            },
            speech: SpeechSettings {
                credentials_path: std::env::var(CREDENTIALS_PATH_ENV)
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from(DEFAULT_CREDENTIALS_FILE)),
            },
            logging: LoggingSettings {
                enable_json: std::env::var("LOG_FORMAT")
                    .map(|v| v.to_lowercase() == "json")
                    .unwrap_or(false),
            },
            environment: Environment::from_env(),
        }
    }
}

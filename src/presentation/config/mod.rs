mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    CREDENTIALS_PATH_ENV, DEFAULT_CREDENTIALS_FILE, LoggingSettings, ServerSettings, Settings,
    SpeechSettings,
};

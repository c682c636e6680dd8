mod health;
mod speech;
mod speech_status;
mod ui;

pub use health::health_handler;
pub use speech::{speech_mode_handler, streaming_stub_handler, transcribe_handler};
pub use speech_status::speech_status_handler;
pub use ui::ui_handler;

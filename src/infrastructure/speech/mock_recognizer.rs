use crate::application::ports::{RecognizerError, SpeechRecognizer};

/// Recognizer that returns a canned transcript, for router-level tests.
pub struct MockSpeechRecognizer {
    transcript: String,
}

impl MockSpeechRecognizer {
    pub fn new(transcript: impl Into<String>) -> Self {
        Self {
            transcript: transcript.into(),
        }
    }
}

#[async_trait::async_trait]
impl SpeechRecognizer for MockSpeechRecognizer {
    async fn recognize(&self, _audio_data: &[u8]) -> Result<String, RecognizerError> {
        Ok(self.transcript.clone())
    }
}

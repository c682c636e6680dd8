mod speech_recognizer;

pub use speech_recognizer::{RecognizerError, SpeechRecognizer};

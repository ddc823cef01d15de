use std::path::Path;
use std::sync::Arc;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::domain::{LanguageHint, TranscriptFailure, TranscriptResult};

/// Reads a decoded waveform file and classifies the engine outcome.
pub struct TranscriptionClient {
    engine: Arc<dyn TranscriptionEngine>,
}

impl TranscriptionClient {
    pub fn new(engine: Arc<dyn TranscriptionEngine>) -> Self {
        Self { engine }
    }

    pub async fn transcribe(&self, decoded_path: &Path, language: &LanguageHint) -> TranscriptResult {
        let audio = match tokio::fs::read(decoded_path).await {
            Ok(audio) => audio,
            Err(e) => {
                tracing::warn!(error = %e, path = %decoded_path.display(), "Failed to read decoded audio");
                return TranscriptResult::Failure(TranscriptFailure::Unexpected(format!(
                    "could not read decoded audio: {}",
                    e.kind()
                )));
            }
        };

        tracing::debug!(bytes = audio.len(), language = %language, "Submitting audio for recognition");

        match self.engine.transcribe(&audio, language).await {
            Ok(text) => {
                let text = text.trim();
                if text.is_empty() {
                    TranscriptResult::Failure(TranscriptFailure::Unintelligible)
                } else {
                    TranscriptResult::Text(text.to_string())
                }
            }
            Err(TranscriptionError::NoSpeech) => {
                TranscriptResult::Failure(TranscriptFailure::Unintelligible)
            }
            Err(TranscriptionError::ApiRequestFailed(detail)) => {
                TranscriptResult::Failure(TranscriptFailure::ServiceUnavailable(detail))
            }
            Err(e @ (TranscriptionError::InvalidResponse(_) | TranscriptionError::Configuration(_))) => {
                TranscriptResult::Failure(TranscriptFailure::Unexpected(e.to_string()))
            }
        }
    }
}

use async_trait::async_trait;

use crate::domain::LanguageHint;

/// A remote speech-to-text backend that turns one utterance into text.
#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    async fn transcribe(
        &self,
        audio_data: &[u8],
        language: &LanguageHint,
    ) -> Result<String, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("no speech recognized")]
    NoSpeech,
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("engine misconfigured: {0}")]
    Configuration(String),
}

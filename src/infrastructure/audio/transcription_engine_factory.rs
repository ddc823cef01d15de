use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};

use super::google_speech_engine::GoogleSpeechEngine;
use super::openai_whisper_engine::OpenAiWhisperEngine;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscriptionProvider {
    Google,
    OpenAi,
}

pub struct TranscriptionEngineFactory;

impl TranscriptionEngineFactory {
    pub fn create(
        provider: TranscriptionProvider,
        api_key: Option<String>,
        base_url: Option<String>,
        model: Option<String>,
        timeout: Duration,
    ) -> Result<Arc<dyn TranscriptionEngine>, TranscriptionError> {
        let key = api_key.filter(|k| !k.trim().is_empty()).ok_or_else(|| {
            TranscriptionError::Configuration(format!(
                "API key required for {:?} transcription",
                provider
            ))
        })?;

        match provider {
            TranscriptionProvider::Google => {
                let engine = GoogleSpeechEngine::new(key, base_url, timeout)?;
                Ok(Arc::new(engine))
            }
            TranscriptionProvider::OpenAi => {
                let engine = OpenAiWhisperEngine::new(key, base_url, model, timeout)?;
                Ok(Arc::new(engine))
            }
        }
    }
}

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::domain::LanguageHint;

use super::http_errors::{request_failed, require_success};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "whisper-1";

/// OpenAI-compatible `/audio/transcriptions` endpoint.
///
/// Whisper takes ISO-639-1 codes, so only the primary subtag of the hint is sent.
pub struct OpenAiWhisperEngine {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
    model: String,
}

impl OpenAiWhisperEngine {
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        model: Option<String>,
        timeout: Duration,
    ) -> Result<Self, TranscriptionError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TranscriptionError::Configuration(format!("http client: {}", e)))?;
        let base_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            client,
            api_key,
            endpoint: format!("{}/audio/transcriptions", base_url.trim_end_matches('/')),
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        })
    }

    fn form(&self, audio_data: &[u8], language: &LanguageHint) -> Result<Form, TranscriptionError> {
        let wav = Part::bytes(audio_data.to_vec())
            .file_name("voice.wav")
            .mime_str("audio/wav")
            .map_err(|e| TranscriptionError::Configuration(format!("mime: {}", e)))?;

        Ok(Form::new()
            .text("model", self.model.clone())
            .text("language", language.primary().to_string())
            .text("response_format", "text")
            .part("file", wav))
    }
}

#[async_trait]
impl TranscriptionEngine for OpenAiWhisperEngine {
    async fn transcribe(
        &self,
        audio_data: &[u8],
        language: &LanguageHint,
    ) -> Result<String, TranscriptionError> {
        let form = self.form(audio_data, language)?;

        tracing::debug!(
            endpoint = %self.endpoint,
            model = %self.model,
            language = language.primary(),
            "Uploading audio for transcription"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(request_failed)?;

        let transcript = require_success(response)
            .await?
            .text()
            .await
            .map_err(|e| TranscriptionError::InvalidResponse(format!("read body: {}", e)))?;
        let transcript = transcript.trim();

        tracing::info!(model = %self.model, chars = transcript.len(), "Transcription received");

        Ok(transcript.to_string())
    }
}

use std::time::Duration;

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::domain::LanguageHint;

use super::http_errors::{request_failed, require_success};

const DEFAULT_BASE_URL: &str = "https://speech.googleapis.com/v1";

/// Google Cloud Speech-to-Text `speech:recognize` for short, synchronous utterances.
pub struct GoogleSpeechEngine {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
}

impl GoogleSpeechEngine {
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        timeout: Duration,
    ) -> Result<Self, TranscriptionError> {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TranscriptionError::Configuration(format!("http client: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            endpoint: format!("{}/speech:recognize", base_url.trim_end_matches('/')),
        })
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RecognizeRequest<'a> {
    config: RecognitionConfig<'a>,
    audio: RecognitionAudio,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RecognitionConfig<'a> {
    encoding: &'static str,
    language_code: &'a str,
}

#[derive(Serialize)]
struct RecognitionAudio {
    content: String,
}

#[derive(Deserialize)]
struct RecognizeResponse {
    #[serde(default)]
    results: Vec<RecognitionResult>,
}

#[derive(Deserialize)]
struct RecognitionResult {
    #[serde(default)]
    alternatives: Vec<Alternative>,
}

#[derive(Deserialize)]
struct Alternative {
    #[serde(default)]
    transcript: String,
}

impl RecognizeResponse {
    fn best_transcript(&self) -> String {
        self.results
            .iter()
            .filter_map(|r| r.alternatives.first())
            .map(|a| a.transcript.trim())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[async_trait]
impl TranscriptionEngine for GoogleSpeechEngine {
    async fn transcribe(
        &self,
        audio_data: &[u8],
        language: &LanguageHint,
    ) -> Result<String, TranscriptionError> {
        let body = RecognizeRequest {
            config: RecognitionConfig {
                encoding: "LINEAR16",
                language_code: language.as_str(),
            },
            audio: RecognitionAudio {
                content: STANDARD.encode(audio_data),
            },
        };

        tracing::debug!(endpoint = %self.endpoint, language = %language, "Sending audio to Google Speech-to-Text");

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(request_failed)?;

        let result: RecognizeResponse = require_success(response)
            .await?
            .json()
            .await
            .map_err(|e| TranscriptionError::InvalidResponse(format!("parse response: {}", e)))?;

        let transcript = result.best_transcript();
        if transcript.is_empty() {
            return Err(TranscriptionError::NoSpeech);
        }

        tracing::info!(
            chars = transcript.len(),
            "Google Speech-to-Text transcription completed"
        );

        Ok(transcript)
    }
}

use std::path::PathBuf;
use std::time::Duration;

use config::{Config, ConfigError, File, Map};
use serde::Deserialize;

use super::Environment;
use crate::application::services::{PipelineOptions, ReplyTemplates};
use crate::domain::LanguageHint;
use crate::infrastructure::audio::{DEFAULT_CHANNELS, DEFAULT_SAMPLE_RATE, TranscriptionProvider};
use crate::infrastructure::observability::ENVIRONMENT_VAR;

const ENV_PREFIX: &str = "APP";
const BOT_TOKEN_FALLBACK: &str = "BOT_TOKEN";
const BOT_TOKEN_VAR: &str = "APP_TELEGRAM__BOT_TOKEN";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub telegram: TelegramSettings,
    pub transcription: TranscriptionSettings,
    pub audio: AudioSettings,
    pub replies: ReplySettings,
}

#[derive(Clone, Deserialize)]
pub struct TelegramSettings {
    pub bot_token: String,
    pub max_voice_size_mb: u64,
}

impl std::fmt::Debug for TelegramSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramSettings")
            .field("bot_token", &"[REDACTED]")
            .field("max_voice_size_mb", &self.max_voice_size_mb)
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionSettings {
    pub provider: TranscriptionProviderSetting,
    pub language: String,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranscriptionProviderSetting {
    Google,
    #[serde(rename = "openai")]
    OpenAi,
}

impl From<TranscriptionProviderSetting> for TranscriptionProvider {
    fn from(setting: TranscriptionProviderSetting) -> Self {
        match setting {
            TranscriptionProviderSetting::Google => TranscriptionProvider::Google,
            TranscriptionProviderSetting::OpenAi => TranscriptionProvider::OpenAi,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AudioSettings {
    pub ffmpeg_path: String,
    pub sample_rate: u32,
    pub channels: u16,
    pub scratch_dir: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReplySettings {
    pub transcript: String,
    pub unintelligible: String,
    pub service_unavailable: String,
    pub unexpected: String,
    pub download_failed: String,
    pub transcode_failed: String,
}

impl From<ReplySettings> for ReplyTemplates {
    fn from(s: ReplySettings) -> Self {
        Self {
            transcript: s.transcript,
            unintelligible: s.unintelligible,
            service_unavailable: s.service_unavailable,
            unexpected: s.unexpected,
            download_failed: s.download_failed,
            transcode_failed: s.transcode_failed,
        }
    }
}

impl Settings {
    /// Loads settings for the environment named by `APP_ENVIRONMENT` from the
    /// optional settings file and the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        let environment: Environment = std::env::var(ENVIRONMENT_VAR)
            .unwrap_or_else(|_| "local".into())
            .try_into()
            .map_err(ConfigError::Message)?;

        Self::from_sources(environment, std::env::vars().collect())
    }

    /// Layers defaults, `config/appsettings.<env>.toml` and the given
    /// environment variables, later layers winning.
    pub fn from_sources(
        environment: Environment,
        vars: Map<String, String>,
    ) -> Result<Self, ConfigError> {
        let replies = ReplyTemplates::default();
        let scratch_dir = std::env::temp_dir().join("voxnote");

        let bot_token_fallback = if vars.contains_key(BOT_TOKEN_VAR) {
            None
        } else {
            vars.get(BOT_TOKEN_FALLBACK).cloned()
        };

        let configuration = Config::builder()
            .set_default("telegram.bot_token", "")?
            .set_default("telegram.max_voice_size_mb", 20)?
            .set_default("transcription.provider", "google")?
            .set_default("transcription.language", LanguageHint::DEFAULT)?
            .set_default("transcription.request_timeout_secs", 60)?
            .set_default("audio.ffmpeg_path", "ffmpeg")?
            .set_default("audio.sample_rate", i64::from(DEFAULT_SAMPLE_RATE))?
            .set_default("audio.channels", i64::from(DEFAULT_CHANNELS))?
            .set_default("audio.scratch_dir", scratch_dir.display().to_string())?
            .set_default("replies.transcript", replies.transcript)?
            .set_default("replies.unintelligible", replies.unintelligible)?
            .set_default("replies.service_unavailable", replies.service_unavailable)?
            .set_default("replies.unexpected", replies.unexpected)?
            .set_default("replies.download_failed", replies.download_failed)?
            .set_default("replies.transcode_failed", replies.transcode_failed)?
            .add_source(File::with_name(&environment.settings_file()).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(Some(vars)),
            )
            .set_override_option("telegram.bot_token", bot_token_fallback)?
            .build()?;

        let settings: Settings = configuration.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.telegram.bot_token.trim().is_empty() {
            return Err(ConfigError::Message(format!(
                "telegram.bot_token is required (set {} or {})",
                BOT_TOKEN_VAR, BOT_TOKEN_FALLBACK
            )));
        }
        if self.audio.sample_rate == 0 || self.audio.channels == 0 {
            return Err(ConfigError::Message(
                "audio.sample_rate and audio.channels must be positive".to_string(),
            ));
        }
        self.language_hint()?;
        Ok(())
    }

    pub fn language_hint(&self) -> Result<LanguageHint, ConfigError> {
        LanguageHint::new(self.transcription.language.clone()).map_err(ConfigError::Message)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.transcription.request_timeout_secs)
    }

    pub fn scratch_dir(&self) -> PathBuf {
        PathBuf::from(&self.audio.scratch_dir)
    }

    pub fn pipeline_options(&self) -> Result<PipelineOptions, ConfigError> {
        Ok(PipelineOptions {
            language: self.language_hint()?,
            max_voice_bytes: self.telegram.max_voice_size_mb.saturating_mul(1024 * 1024),
            replies: self.replies.clone().into(),
        })
    }
}

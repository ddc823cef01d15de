use std::sync::Arc;

use tracing::Instrument;

use crate::application::ports::{
    ArtifactStore, AudioTranscoder, ChatGateway, ChatGatewayError, ScratchError, TranscodeError,
};
use crate::domain::{
    ArtifactKind, LanguageHint, PipelineStage, RunId, TranscriptFailure, TranscriptResult,
    VoiceMessage,
};

use super::artifact_scope::ArtifactScope;
use super::reply_templates::ReplyTemplates;
use super::transcription_client::TranscriptionClient;

/// Telegram bots cannot download files larger than this.
pub const DEFAULT_MAX_VOICE_BYTES: u64 = 20 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct PipelineOptions {
    pub language: LanguageHint,
    pub max_voice_bytes: u64,
    pub replies: ReplyTemplates,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            language: LanguageHint::default(),
            max_voice_bytes: DEFAULT_MAX_VOICE_BYTES,
            replies: ReplyTemplates::default(),
        }
    }
}

/// Summary of one run, returned for logging and tests.
#[derive(Debug, Clone)]
pub struct PipelineReport {
    pub run_id: RunId,
    pub reply: String,
    pub failed_at: Option<PipelineStage>,
    pub reply_sent: bool,
    pub artifacts_acquired: usize,
    pub artifacts_released: usize,
}

impl PipelineReport {
    pub fn succeeded(&self) -> bool {
        self.failed_at.is_none()
    }
}

pub struct VoicePipeline {
    gateway: Arc<dyn ChatGateway>,
    artifacts: Arc<dyn ArtifactStore>,
    transcoder: Arc<dyn AudioTranscoder>,
    transcription: TranscriptionClient,
    options: PipelineOptions,
}

impl VoicePipeline {
    pub fn new(
        gateway: Arc<dyn ChatGateway>,
        artifacts: Arc<dyn ArtifactStore>,
        transcoder: Arc<dyn AudioTranscoder>,
        transcription: TranscriptionClient,
        options: PipelineOptions,
    ) -> Self {
        Self {
            gateway,
            artifacts,
            transcoder,
            transcription,
            options,
        }
    }

    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    /// Runs download, transcode, transcribe, reply and cleanup for one voice
    /// message. Never fails: every error becomes the single reply.
    pub async fn handle(&self, voice: &VoiceMessage) -> PipelineReport {
        let run_id = RunId::new();
        let span = tracing::info_span!(
            "voice_run",
            run_id = %run_id,
            chat_id = voice.chat_id,
            message_id = voice.message_id,
        );
        self.run(run_id, voice).instrument(span).await
    }

    async fn run(&self, run_id: RunId, voice: &VoiceMessage) -> PipelineReport {
        let mut scope = ArtifactScope::new(Arc::clone(&self.artifacts));
        let mut stage = PipelineStage::Idle;

        let outcome = self.process(run_id, voice, &mut scope, &mut stage).await;

        let (reply, failed_at) = match &outcome {
            Ok(text) => {
                tracing::info!(chars = text.len(), "Voice message transcribed");
                (self.options.replies.for_transcript(text), None)
            }
            Err(e) => {
                tracing::warn!(error = %e, stage = %stage, "Voice pipeline failed");
                (self.options.replies.for_error(e), Some(stage))
            }
        };

        transition(&mut stage, PipelineStage::Replying);
        let reply_sent = match self.gateway.send_reply(voice, &reply).await {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(error = %e, "Failed to send reply");
                false
            }
        };

        transition(&mut stage, PipelineStage::Cleanup);
        let artifacts_acquired = scope.acquired();
        let artifacts_released = scope.release_all().await;

        transition(&mut stage, PipelineStage::Done);

        PipelineReport {
            run_id,
            reply,
            failed_at,
            reply_sent,
            artifacts_acquired,
            artifacts_released,
        }
    }

    async fn process(
        &self,
        run_id: RunId,
        voice: &VoiceMessage,
        scope: &mut ArtifactScope,
        stage: &mut PipelineStage,
    ) -> Result<String, PipelineError> {
        transition(stage, PipelineStage::Downloading);
        if voice.exceeds(self.options.max_voice_bytes) {
            return Err(PipelineError::Download(ChatGatewayError::FileTooLarge {
                size: u64::from(voice.byte_length),
                limit: self.options.max_voice_bytes,
            }));
        }

        let compressed = scope.acquire(voice, run_id, ArtifactKind::Compressed).await?;
        let downloaded = self
            .gateway
            .download_voice(voice, compressed.path())
            .await
            .map_err(PipelineError::Download)?;
        tracing::debug!(bytes = downloaded, "Voice message downloaded");

        transition(stage, PipelineStage::Transcoding);
        let decoded = scope.acquire(voice, run_id, ArtifactKind::Decoded).await?;
        self.transcoder
            .transcode(compressed.path(), decoded.path())
            .await
            .map_err(PipelineError::Transcode)?;

        transition(stage, PipelineStage::Transcribing);
        match self
            .transcription
            .transcribe(decoded.path(), &self.options.language)
            .await
        {
            TranscriptResult::Text(text) => Ok(text),
            TranscriptResult::Failure(failure) => Err(PipelineError::Recognition(failure)),
        }
    }
}

fn transition(stage: &mut PipelineStage, next: PipelineStage) {
    tracing::debug!(from = %stage, to = %next, "Pipeline stage transition");
    *stage = next;
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("download: {0}")]
    Download(ChatGatewayError),
    #[error("transcode: {0}")]
    Transcode(TranscodeError),
    #[error("scratch storage: {0}")]
    Scratch(#[from] ScratchError),
    #[error("recognition: {0}")]
    Recognition(TranscriptFailure),
}

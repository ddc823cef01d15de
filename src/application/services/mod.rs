mod artifact_scope;
mod reply_templates;
mod transcription_client;
mod voice_pipeline;

pub use artifact_scope::ArtifactScope;
pub use reply_templates::ReplyTemplates;
pub use transcription_client::TranscriptionClient;
pub use voice_pipeline::{
    DEFAULT_MAX_VOICE_BYTES, PipelineError, PipelineOptions, PipelineReport, VoicePipeline,
};

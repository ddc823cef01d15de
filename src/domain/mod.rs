mod artifact;
mod language_hint;
mod pipeline_stage;
mod run_id;
mod transcript;
mod voice_message;

pub use artifact::{ArtifactKind, TemporaryArtifact};
pub use language_hint::LanguageHint;
pub use pipeline_stage::PipelineStage;
pub use run_id::RunId;
pub use transcript::{TranscriptFailure, TranscriptResult};
pub use voice_message::{FileLocator, VoiceMessage};

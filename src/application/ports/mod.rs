mod artifact_store;
mod audio_transcoder;
mod chat_gateway;
mod transcription_engine;

pub use artifact_store::{ArtifactStore, ScratchError};
pub use audio_transcoder::{AudioTranscoder, TranscodeError};
pub use chat_gateway::{ChatGateway, ChatGatewayError};
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};

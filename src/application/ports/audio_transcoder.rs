use std::io;
use std::path::Path;

use async_trait::async_trait;

/// Converts a compressed voice container into a PCM waveform file.
#[async_trait]
pub trait AudioTranscoder: Send + Sync {
    async fn transcode(&self, input: &Path, output: &Path) -> Result<(), TranscodeError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscodeError {
    #[error("input not found: {0}")]
    InputMissing(String),
    #[error("audio decoding failed: {0}")]
    DecodingFailed(String),
    #[error("transcoder unavailable: {0}")]
    BinaryUnavailable(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

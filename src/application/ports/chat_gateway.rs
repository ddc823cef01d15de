use std::io;
use std::path::Path;

use async_trait::async_trait;

use crate::domain::VoiceMessage;

#[async_trait]
pub trait ChatGateway: Send + Sync {
    /// Writes the raw voice bytes to `destination`, returning the byte count.
    async fn download_voice(
        &self,
        voice: &VoiceMessage,
        destination: &Path,
    ) -> Result<u64, ChatGatewayError>;

    async fn send_reply(&self, voice: &VoiceMessage, text: &str) -> Result<(), ChatGatewayError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ChatGatewayError {
    #[error("voice message is {size} bytes, limit is {limit}")]
    FileTooLarge { size: u64, limit: u64 },
    #[error("download failed: {0}")]
    DownloadFailed(String),
    #[error("send failed: {0}")]
    SendFailed(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

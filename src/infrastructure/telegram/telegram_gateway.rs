use std::path::Path;

use async_trait::async_trait;
use teloxide::net::Download;
use teloxide::prelude::*;
use teloxide::types::{MessageId, ReplyParameters};
use tokio::io::AsyncWriteExt;

use crate::application::ports::{ChatGateway, ChatGatewayError};
use crate::domain::{FileLocator, VoiceMessage};
use crate::infrastructure::observability::redact_secrets;

/// Maximum length of a Telegram text message.
pub const TELEGRAM_MESSAGE_LIMIT: usize = 4096;

pub struct TelegramGateway {
    bot: Bot,
}

impl TelegramGateway {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl ChatGateway for TelegramGateway {
    async fn download_voice(
        &self,
        voice: &VoiceMessage,
        destination: &Path,
    ) -> Result<u64, ChatGatewayError> {
        let file = self
            .bot
            .get_file(voice.locator.as_str().to_string())
            .await
            .map_err(|e| ChatGatewayError::DownloadFailed(redact_secrets(&e.to_string())))?;

        let mut dst = tokio::fs::File::create(destination).await?;
        self.bot
            .download_file(&file.path, &mut dst)
            .await
            .map_err(|e| ChatGatewayError::DownloadFailed(redact_secrets(&e.to_string())))?;
        dst.flush().await?;

        Ok(dst.metadata().await?.len())
    }

    async fn send_reply(&self, voice: &VoiceMessage, text: &str) -> Result<(), ChatGatewayError> {
        self.bot
            .send_message(ChatId(voice.chat_id), fit_message(text, TELEGRAM_MESSAGE_LIMIT))
            .reply_parameters(ReplyParameters::new(MessageId(voice.message_id)))
            .await
            .map_err(|e| ChatGatewayError::SendFailed(redact_secrets(&e.to_string())))?;
        Ok(())
    }
}

/// Extracts the voice note of a message, if it carries one.
pub fn voice_from_message(message: &Message) -> Option<VoiceMessage> {
    let voice = message.voice()?;

    let mut result = VoiceMessage::new(
        message.chat.id.0,
        message.id.0,
        FileLocator::new(voice.file.id.clone()),
        voice.file.size,
    )
    .with_duration(voice.duration.seconds());

    if let Some(mime) = voice.mime_type.as_ref() {
        result = result.with_mime_type(mime.essence_str());
    }

    Some(result)
}

/// Truncates `text` to at most `limit` UTF-16 code units, the unit Telegram
/// counts message length in, marking the cut with an ellipsis.
pub fn fit_message(text: &str, limit: usize) -> String {
    if text.encode_utf16().count() <= limit {
        return text.to_string();
    }

    let budget = limit.saturating_sub('…'.len_utf16());
    let mut used = 0;
    let mut truncated = String::new();
    for c in text.chars() {
        used += c.len_utf16();
        if used > budget {
            break;
        }
        truncated.push(c);
    }
    truncated.push('…');
    truncated
}

use std::fmt;

/// Platform handle used to fetch the raw bytes of a voice note.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileLocator(String);

impl FileLocator {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FileLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An inbound voice note as delivered by the chat platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceMessage {
    pub chat_id: i64,
    pub message_id: i32,
    pub locator: FileLocator,
    pub byte_length: u32,
    pub duration_secs: Option<u32>,
    pub mime_type: Option<String>,
}

impl VoiceMessage {
    pub fn new(chat_id: i64, message_id: i32, locator: FileLocator, byte_length: u32) -> Self {
        Self {
            chat_id,
            message_id,
            locator,
            byte_length,
            duration_secs: None,
            mime_type: None,
        }
    }

    pub fn with_duration(mut self, duration_secs: u32) -> Self {
        self.duration_secs = Some(duration_secs);
        self
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    pub fn exceeds(&self, max_bytes: u64) -> bool {
        u64::from(self.byte_length) > max_bytes
    }
}

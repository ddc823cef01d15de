mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    AudioSettings, ReplySettings, Settings, TelegramSettings, TranscriptionProviderSetting,
    TranscriptionSettings,
};

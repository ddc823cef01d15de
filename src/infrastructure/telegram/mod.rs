mod telegram_gateway;

pub use telegram_gateway::{TELEGRAM_MESSAGE_LIMIT, TelegramGateway, fit_message, voice_from_message};

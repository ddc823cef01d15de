use teloxide::RequestError;

#[derive(Debug, thiserror::Error)]
pub enum BotError {
    #[error("telegram api error: {0}")]
    Telegram(#[from] RequestError),
}

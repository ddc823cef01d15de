use teloxide::prelude::*;
use teloxide::types::ReplyParameters;
use teloxide::utils::command::BotCommands;

use crate::domain::LanguageHint;
use crate::presentation::error::BotError;
use crate::presentation::state::AppState;

#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "These commands are supported:")]
pub enum Command {
    #[command(description = "start the bot")]
    Start,
    #[command(description = "how to use the bot")]
    Help,
}

pub const START_TEXT: &str = "Hello Im a Voice-to-text bot\n\
    Send me a voice message and I'll transcribe it for you.\n\
    Type /help for more info.";

pub fn help_text(language: &LanguageHint) -> String {
    format!(
        "How to use:\n\
        1. Record a voice message ({language})\n\
        2. Send it to me\n\
        3. I'll reply with the transcribed text\n\n\
        Supported language: {language}"
    )
}

#[tracing::instrument(skip(bot, message, state), fields(chat_id = %message.chat.id))]
pub async fn command_handler(
    bot: Bot,
    message: Message,
    command: Command,
    state: AppState,
) -> Result<(), BotError> {
    let text = match command {
        Command::Start => START_TEXT.to_string(),
        Command::Help => help_text(state.language()),
    };

    bot.send_message(message.chat.id, text)
        .reply_parameters(ReplyParameters::new(message.id))
        .await?;

    Ok(())
}

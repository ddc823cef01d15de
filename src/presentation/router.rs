use teloxide::dispatching::{
    Dispatcher, HandlerExt, MessageFilterExt, UpdateFilterExt, UpdateHandler,
};
use teloxide::dptree;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

use crate::presentation::error::BotError;
use crate::presentation::handlers::{Command, command_handler, voice_handler};
use crate::presentation::state::AppState;

/// Routes commands and voice notes; every other update is ignored.
pub fn create_handler() -> UpdateHandler<BotError> {
    dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<Command>()
                .endpoint(command_handler),
        )
        .branch(
            Update::filter_message()
                .branch(Message::filter_voice().endpoint(voice_handler)),
        )
}

pub async fn run_bot(bot: Bot, state: AppState) -> Result<(), BotError> {
    bot.set_my_commands(Command::bot_commands()).await?;

    let me = bot.get_me().await?;
    tracing::info!(username = %me.username(), language = %state.language(), "Bot is running");

    Dispatcher::builder(bot, create_handler())
        .dependencies(dptree::deps![state.clone()])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    state.drain().await;
    tracing::info!("Bot stopped");
    Ok(())
}

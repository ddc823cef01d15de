use teloxide::types::Message;

use crate::infrastructure::telegram::voice_from_message;
use crate::presentation::error::BotError;
use crate::presentation::state::AppState;

/// Hands the voice note to the pipeline on its own task so the dispatcher
/// keeps serving other updates, including ones from the same chat.
pub async fn voice_handler(message: Message, state: AppState) -> Result<(), BotError> {
    let Some(voice) = voice_from_message(&message) else {
        tracing::warn!(chat_id = %message.chat.id, "Voice filter matched a message without voice");
        return Ok(());
    };

    tracing::debug!(
        chat_id = voice.chat_id,
        message_id = voice.message_id,
        bytes = voice.byte_length,
        duration_secs = ?voice.duration_secs,
        "Voice message received"
    );

    state.spawn_run(voice);

    Ok(())
}

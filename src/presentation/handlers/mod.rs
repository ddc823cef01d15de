mod commands;
mod voice;

pub use commands::{Command, START_TEXT, command_handler, help_text};
pub use voice::voice_handler;

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use config::{Environment, Settings};
pub use error::BotError;
pub use router::{create_handler, run_bot};
pub use state::AppState;

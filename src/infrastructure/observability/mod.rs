mod init_tracing;
mod secret_redactor;
mod tracing_config;

pub use init_tracing::init_tracing;
pub use secret_redactor::redact_secrets;
pub use tracing_config::{ENVIRONMENT_VAR, TracingConfig};

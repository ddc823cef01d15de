const DEFAULT_FILTER: &str = "info,voxnote=debug";

/// Names the runtime environment for both logging and settings.
pub const ENVIRONMENT_VAR: &str = "APP_ENVIRONMENT";
const LOG_FORMAT_VAR: &str = "LOG_FORMAT";

/// Configuration for tracing initialization.
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
    pub default_filter: String,
}

impl TracingConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            environment: lookup(ENVIRONMENT_VAR).unwrap_or_else(|| "local".to_string()),
            json_format: lookup(LOG_FORMAT_VAR)
                .map(|v| v.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
            default_filter: DEFAULT_FILTER.to_string(),
        }
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

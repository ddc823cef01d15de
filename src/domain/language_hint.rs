use std::fmt;

/// BCP-47 language tag passed to the recognition backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageHint(String);

impl LanguageHint {
    pub const DEFAULT: &'static str = "en-US";

    pub fn new(tag: impl Into<String>) -> Result<Self, String> {
        let tag = tag.into().trim().to_string();
        let valid = !tag.is_empty()
            && tag
                .split('-')
                .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_alphanumeric()));
        if valid {
            Ok(Self(tag))
        } else {
            Err(format!("Invalid language hint: {:?}", tag))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The primary subtag, e.g. `en` for `en-US`.
    pub fn primary(&self) -> &str {
        self.0.split('-').next().unwrap_or(&self.0)
    }
}

impl Default for LanguageHint {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl fmt::Display for LanguageHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

use std::fmt;

/// Why a recognition attempt produced no usable text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptFailure {
    Unintelligible,
    ServiceUnavailable(String),
    Unexpected(String),
}

impl fmt::Display for TranscriptFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranscriptFailure::Unintelligible => f.write_str("no speech recognized"),
            TranscriptFailure::ServiceUnavailable(detail) => {
                write!(f, "recognition service unavailable: {}", detail)
            }
            TranscriptFailure::Unexpected(message) => write!(f, "unexpected error: {}", message),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptResult {
    Text(String),
    Failure(TranscriptFailure),
}

impl TranscriptResult {
    pub fn is_text(&self) -> bool {
        matches!(self, TranscriptResult::Text(_))
    }
}

use super::PipelineError;
use crate::application::ports::TranscodeError;
use crate::domain::TranscriptFailure;

/// User-facing texts for every way a run can end.
///
/// `{text}` in `transcript` and `{error}` in `unexpected` are substituted.
/// Error details that can carry server paths stay in the logs; replies only
/// get a short fixed summary for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyTemplates {
    pub transcript: String,
    pub unintelligible: String,
    pub service_unavailable: String,
    pub unexpected: String,
    pub download_failed: String,
    pub transcode_failed: String,
}

impl Default for ReplyTemplates {
    fn default() -> Self {
        Self {
            transcript: "Transcribed text:\n\n{text}".to_string(),
            unintelligible:
                "Sorry, I couldn't understand the audio. Please speak clearly in English."
                    .to_string(),
            service_unavailable: "Error! I couldn't process the audio. Please try again."
                .to_string(),
            unexpected: "An error occurred: {error}".to_string(),
            download_failed: "Sorry, I couldn't download your voice message. Please try again."
                .to_string(),
            transcode_failed:
                "Sorry, I couldn't read that voice message. Please record it again."
                    .to_string(),
        }
    }
}

impl ReplyTemplates {
    pub fn for_transcript(&self, text: &str) -> String {
        self.transcript.replace("{text}", text)
    }

    pub fn for_error(&self, error: &PipelineError) -> String {
        match error {
            PipelineError::Download(_) => self.download_failed.clone(),
            PipelineError::Transcode(TranscodeError::InputMissing(_) | TranscodeError::DecodingFailed(_)) => {
                self.transcode_failed.clone()
            }
            PipelineError::Transcode(TranscodeError::BinaryUnavailable(_) | TranscodeError::Io(_)) => {
                self.unexpected.replace("{error}", "audio conversion is unavailable")
            }
            PipelineError::Scratch(_) => self.unexpected.replace("{error}", "temporary storage failed"),
            PipelineError::Recognition(TranscriptFailure::Unintelligible) => {
                self.unintelligible.clone()
            }
            PipelineError::Recognition(TranscriptFailure::ServiceUnavailable(_)) => {
                self.service_unavailable.clone()
            }
            PipelineError::Recognition(TranscriptFailure::Unexpected(message)) => {
                self.unexpected.replace("{error}", message)
            }
        }
    }
}

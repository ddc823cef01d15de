use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{AudioTranscoder, TranscodeError};

pub const DEFAULT_SAMPLE_RATE: u32 = 16_000;
pub const DEFAULT_CHANNELS: u16 = 1;

/// Transcodes OGG/Opus voice notes to 16-bit PCM WAV with an `ffmpeg` child process.
pub struct FfmpegAudioTranscoder {
    binary: PathBuf,
    sample_rate: u32,
    channels: u16,
}

impl FfmpegAudioTranscoder {
    pub fn new(binary: impl Into<PathBuf>, sample_rate: u32, channels: u16) -> Self {
        Self {
            binary: binary.into(),
            sample_rate,
            channels,
        }
    }
}

impl Default for FfmpegAudioTranscoder {
    fn default() -> Self {
        Self::new("ffmpeg", DEFAULT_SAMPLE_RATE, DEFAULT_CHANNELS)
    }
}

#[async_trait]
impl AudioTranscoder for FfmpegAudioTranscoder {
    async fn transcode(&self, input: &Path, output: &Path) -> Result<(), TranscodeError> {
        let input_len = match tokio::fs::metadata(input).await {
            Ok(metadata) => metadata.len(),
            Err(e) => {
                discard_output(output).await;
                return Err(TranscodeError::InputMissing(format!(
                    "{}: {}",
                    input.display(),
                    e
                )));
            }
        };
        if input_len == 0 {
            discard_output(output).await;
            return Err(TranscodeError::DecodingFailed("input is empty".to_string()));
        }

        let sample_rate = self.sample_rate.to_string();
        let channels = self.channels.to_string();

        let result = Command::new(&self.binary)
            .args(["-hide_banner", "-nostdin", "-loglevel", "error", "-y", "-i"])
            .arg(input)
            .args(["-vn", "-ac", &channels, "-ar", &sample_rate])
            .args(["-c:a", "pcm_s16le", "-f", "wav"])
            .arg(output)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await;

        let result = match result {
            Ok(r) => r,
            Err(e) => {
                discard_output(output).await;
                return Err(TranscodeError::BinaryUnavailable(format!(
                    "{}: {}",
                    self.binary.display(),
                    e
                )));
            }
        };

        if !result.status.success() {
            discard_output(output).await;
            let stderr = String::from_utf8_lossy(&result.stderr);
            let reason = stderr
                .lines()
                .rev()
                .find(|l| !l.trim().is_empty())
                .unwrap_or("unknown error")
                .trim()
                .to_string();
            return Err(TranscodeError::DecodingFailed(format!(
                "ffmpeg exited with {}: {}",
                result.status, reason
            )));
        }

        tracing::debug!(
            input = %input.display(),
            output = %output.display(),
            sample_rate = self.sample_rate,
            channels = self.channels,
            "Audio transcoded to PCM WAV"
        );

        Ok(())
    }
}

async fn discard_output(output: &Path) {
    if let Err(e) = tokio::fs::remove_file(output).await
        && e.kind() != std::io::ErrorKind::NotFound
    {
        tracing::warn!(error = %e, path = %output.display(), "Failed to remove partial transcoder output");
    }
}

/// Runs `<binary> -version` and returns the first line of its output.
pub async fn check_ffmpeg_binary(binary: &Path) -> Result<String, TranscodeError> {
    let output = Command::new(binary)
        .arg("-version")
        .stdin(Stdio::null())
        .output()
        .await
        .map_err(|e| TranscodeError::BinaryUnavailable(format!("{}: {}", binary.display(), e)))?;

    if !output.status.success() {
        return Err(TranscodeError::BinaryUnavailable(format!(
            "{} -version exited with {}",
            binary.display(),
            output.status
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout)
        .lines()
        .next()
        .unwrap_or_default()
        .to_string())
}

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use voxnote::application::ports::{
    ArtifactStore, AudioTranscoder, ChatGateway, ChatGatewayError, ScratchError, TranscodeError,
    TranscriptionEngine, TranscriptionError,
};
use voxnote::application::services::{PipelineOptions, TranscriptionClient, VoicePipeline};
use voxnote::domain::{ArtifactKind, FileLocator, LanguageHint, RunId, TemporaryArtifact, VoiceMessage};
use voxnote::infrastructure::storage::LocalScratchStore;

pub fn voice(message_id: i32) -> VoiceMessage {
    VoiceMessage::new(1001, message_id, FileLocator::new(format!("file-{}", message_id)), 5_120)
        .with_duration(3)
        .with_mime_type("audio/ogg")
}

pub fn build_wav(sample_rate: u32, samples: &[i16]) -> Vec<u8> {
    let num_samples = samples.len() as u32;
    let byte_rate = sample_rate * 2;
    let data_size = num_samples * 2;
    let file_size = 36 + data_size;

    let mut wav = Vec::with_capacity(44 + data_size as usize);
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&file_size.to_le_bytes());
    wav.extend_from_slice(b"WAVE");
    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&16u32.to_le_bytes());
    wav.extend_from_slice(&1u16.to_le_bytes()); // PCM
    wav.extend_from_slice(&1u16.to_le_bytes()); // mono
    wav.extend_from_slice(&sample_rate.to_le_bytes());
    wav.extend_from_slice(&byte_rate.to_le_bytes());
    wav.extend_from_slice(&2u16.to_le_bytes()); // block align
    wav.extend_from_slice(&16u16.to_le_bytes()); // bits per sample
    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&data_size.to_le_bytes());
    for &s in samples {
        wav.extend_from_slice(&s.to_le_bytes());
    }
    wav
}

pub fn ffmpeg_available() -> bool {
    std::process::Command::new("ffmpeg")
        .arg("-version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

pub fn dir_entries(dir: &Path) -> Vec<PathBuf> {
    std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect()
}

/// Chat gateway that serves fixed bytes and records every reply.
pub struct MockChatGateway {
    payload: Option<Vec<u8>>,
    fail_send: bool,
    downloads: Mutex<Vec<PathBuf>>,
    replies: Mutex<Vec<String>>,
}

impl MockChatGateway {
    pub fn serving(payload: Vec<u8>) -> Self {
        Self {
            payload: Some(payload),
            fail_send: false,
            downloads: Mutex::new(Vec::new()),
            replies: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_download() -> Self {
        Self {
            payload: None,
            ..Self::serving(Vec::new())
        }
    }

    pub fn failing_send(payload: Vec<u8>) -> Self {
        Self {
            fail_send: true,
            ..Self::serving(payload)
        }
    }

    pub fn replies(&self) -> Vec<String> {
        self.replies.lock().unwrap().clone()
    }

    pub fn downloads(&self) -> Vec<PathBuf> {
        self.downloads.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl ChatGateway for MockChatGateway {
    async fn download_voice(
        &self,
        _voice: &VoiceMessage,
        destination: &Path,
    ) -> Result<u64, ChatGatewayError> {
        self.downloads.lock().unwrap().push(destination.to_path_buf());
        match &self.payload {
            Some(bytes) => {
                tokio::fs::write(destination, bytes).await?;
                Ok(bytes.len() as u64)
            }
            None => Err(ChatGatewayError::DownloadFailed(
                "connection reset by peer".to_string(),
            )),
        }
    }

    async fn send_reply(&self, _voice: &VoiceMessage, text: &str) -> Result<(), ChatGatewayError> {
        self.replies.lock().unwrap().push(text.to_string());
        if self.fail_send {
            return Err(ChatGatewayError::SendFailed("chat not found".to_string()));
        }
        Ok(())
    }
}

/// Transcoder that copies its input, or fails the way a corrupt container does.
pub struct StubTranscoder {
    fail: bool,
}

impl StubTranscoder {
    pub fn passthrough() -> Self {
        Self { fail: false }
    }

    pub fn failing() -> Self {
        Self { fail: true }
    }
}

#[async_trait::async_trait]
impl AudioTranscoder for StubTranscoder {
    async fn transcode(&self, input: &Path, output: &Path) -> Result<(), TranscodeError> {
        if self.fail {
            let _ = tokio::fs::remove_file(output).await;
            return Err(TranscodeError::DecodingFailed(
                "Invalid data found when processing input".to_string(),
            ));
        }
        tokio::fs::copy(input, output).await?;
        Ok(())
    }
}

#[derive(Clone, Copy)]
pub enum StubOutcome {
    Text(&'static str),
    /// Answers with the text after the given number of milliseconds.
    Slow(&'static str, u64),
    NoSpeech,
    Unavailable,
    InvalidResponse,
}

/// Recognition engine with a scripted outcome.
pub struct StubEngine {
    outcome: StubOutcome,
    calls: Mutex<Vec<(usize, String)>>,
}

impl StubEngine {
    pub fn new(outcome: StubOutcome) -> Self {
        Self {
            outcome,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Audio length and language of every call.
    pub fn calls(&self) -> Vec<(usize, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl TranscriptionEngine for StubEngine {
    async fn transcribe(
        &self,
        audio_data: &[u8],
        language: &LanguageHint,
    ) -> Result<String, TranscriptionError> {
        self.calls
            .lock()
            .unwrap()
            .push((audio_data.len(), language.as_str().to_string()));
        match self.outcome {
            StubOutcome::Text(text) => Ok(text.to_string()),
            StubOutcome::Slow(text, millis) => {
                tokio::time::sleep(std::time::Duration::from_millis(millis)).await;
                Ok(text.to_string())
            }
            StubOutcome::NoSpeech => Err(TranscriptionError::NoSpeech),
            StubOutcome::Unavailable => Err(TranscriptionError::ApiRequestFailed(
                "request: error sending request: connection refused".to_string(),
            )),
            StubOutcome::InvalidResponse => Err(TranscriptionError::InvalidResponse(
                "parse response: expected value at line 1 column 1".to_string(),
            )),
        }
    }
}

/// Scratch store that counts acquisitions and releases.
pub struct CountingStore {
    inner: LocalScratchStore,
    acquired: AtomicUsize,
    released: AtomicUsize,
}

impl CountingStore {
    pub fn new(dir: PathBuf) -> Self {
        Self {
            inner: LocalScratchStore::new(dir).unwrap(),
            acquired: AtomicUsize::new(0),
            released: AtomicUsize::new(0),
        }
    }

    pub fn acquired(&self) -> usize {
        self.acquired.load(Ordering::SeqCst)
    }

    pub fn released(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl ArtifactStore for CountingStore {
    async fn acquire(
        &self,
        voice: &VoiceMessage,
        run_id: RunId,
        kind: ArtifactKind,
    ) -> Result<TemporaryArtifact, ScratchError> {
        let artifact = self.inner.acquire(voice, run_id, kind).await?;
        self.acquired.fetch_add(1, Ordering::SeqCst);
        Ok(artifact)
    }

    async fn release(&self, artifact: &TemporaryArtifact) -> Result<(), ScratchError> {
        self.inner.release(artifact).await?;
        self.released.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn release_now(&self, artifact: &TemporaryArtifact) -> Result<(), ScratchError> {
        self.inner.release_now(artifact)?;
        self.released.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

pub struct Harness {
    pub dir: tempfile::TempDir,
    pub gateway: Arc<MockChatGateway>,
    pub store: Arc<CountingStore>,
    pub engine: Arc<StubEngine>,
    pub pipeline: VoicePipeline,
}

pub fn harness(
    gateway: MockChatGateway,
    transcoder: Arc<dyn AudioTranscoder>,
    outcome: StubOutcome,
    options: PipelineOptions,
) -> Harness {
    let dir = tempfile::TempDir::new().unwrap();
    let gateway = Arc::new(gateway);
    let store = Arc::new(CountingStore::new(dir.path().to_path_buf()));
    let engine = Arc::new(StubEngine::new(outcome));

    let pipeline = VoicePipeline::new(
        gateway.clone(),
        store.clone(),
        transcoder,
        TranscriptionClient::new(engine.clone()),
        options,
    );

    Harness {
        dir,
        gateway,
        store,
        engine,
        pipeline,
    }
}

/// Writes an executable shell script standing in for ffmpeg. It writes
/// `partial` to the output path (the last argument) and echoes the input
/// path (argument 7) in ffmpeg's error format before exiting with `exit_code`.
#[cfg(unix)]
pub fn fake_ffmpeg(dir: &Path, exit_code: i32) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let script = format!(
        "#!/bin/sh\n\
         for last; do :; done\n\
         printf 'partial' > \"$last\"\n\
         if [ {exit_code} -ne 0 ]; then\n\
         echo \"$7: Invalid data found when processing input\" >&2\n\
         fi\n\
         exit {exit_code}\n"
    );
    let path = dir.join(format!("fake-ffmpeg-{}.sh", exit_code));
    std::fs::write(&path, script).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

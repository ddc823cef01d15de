mod ffmpeg_transcoder;
mod google_speech_engine;
mod http_errors;
mod openai_whisper_engine;
mod transcription_engine_factory;

pub use ffmpeg_transcoder::{
    DEFAULT_CHANNELS, DEFAULT_SAMPLE_RATE, FfmpegAudioTranscoder, check_ffmpeg_binary,
};
pub use google_speech_engine::GoogleSpeechEngine;
pub use openai_whisper_engine::OpenAiWhisperEngine;
pub use transcription_engine_factory::{TranscriptionEngineFactory, TranscriptionProvider};

use std::path::PathBuf;
use std::sync::Arc;

use teloxide::Bot;

use voxnote::application::services::{TranscriptionClient, VoicePipeline};
use voxnote::infrastructure::audio::{
    FfmpegAudioTranscoder, TranscriptionEngineFactory, check_ffmpeg_binary,
};
use voxnote::infrastructure::observability::{TracingConfig, init_tracing};
use voxnote::infrastructure::storage::LocalScratchStore;
use voxnote::infrastructure::telegram::TelegramGateway;
use voxnote::presentation::{AppState, Settings, run_bot};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    init_tracing(&TracingConfig::default());

    let settings = Settings::load()?;
    tracing::info!(
        provider = ?settings.transcription.provider,
        language = %settings.transcription.language,
        scratch_dir = %settings.audio.scratch_dir,
        "Settings loaded"
    );

    let ffmpeg_path = PathBuf::from(&settings.audio.ffmpeg_path);
    let ffmpeg_version = check_ffmpeg_binary(&ffmpeg_path).await?;
    tracing::info!(version = %ffmpeg_version, "ffmpeg available");

    let engine = TranscriptionEngineFactory::create(
        settings.transcription.provider.into(),
        settings.transcription.api_key.clone(),
        settings.transcription.base_url.clone(),
        settings.transcription.model.clone(),
        settings.request_timeout(),
    )?;

    let bot = Bot::new(settings.telegram.bot_token.clone());

    let pipeline = Arc::new(VoicePipeline::new(
        Arc::new(TelegramGateway::new(bot.clone())),
        Arc::new(LocalScratchStore::new(settings.scratch_dir())?),
        Arc::new(FfmpegAudioTranscoder::new(
            ffmpeg_path,
            settings.audio.sample_rate,
            settings.audio.channels,
        )),
        TranscriptionClient::new(engine),
        settings.pipeline_options()?,
    ));

    run_bot(bot, AppState::new(pipeline)).await?;

    Ok(())
}

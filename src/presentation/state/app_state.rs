use std::sync::Arc;

use tokio_util::task::TaskTracker;

use crate::application::services::{PipelineReport, VoicePipeline};
use crate::domain::{LanguageHint, VoiceMessage};

/// Shared dependencies injected into every update handler.
///
/// Voice runs are spawned through the tracker so shutdown can wait for every
/// in-flight run to send its reply.
#[derive(Clone)]
pub struct AppState {
    pipeline: Arc<VoicePipeline>,
    runs: TaskTracker,
}

impl AppState {
    pub fn new(pipeline: Arc<VoicePipeline>) -> Self {
        Self {
            pipeline,
            runs: TaskTracker::new(),
        }
    }

    pub fn pipeline(&self) -> &Arc<VoicePipeline> {
        &self.pipeline
    }

    pub fn language(&self) -> &LanguageHint {
        &self.pipeline.options().language
    }

    pub fn in_flight(&self) -> usize {
        self.runs.len()
    }

    /// Starts one pipeline run on its own task.
    pub fn spawn_run(&self, voice: VoiceMessage) -> tokio::task::JoinHandle<PipelineReport> {
        let pipeline = Arc::clone(&self.pipeline);
        self.runs.spawn(async move {
            let report = pipeline.handle(&voice).await;
            tracing::info!(
                run_id = %report.run_id,
                succeeded = report.succeeded(),
                failed_at = ?report.failed_at,
                reply_sent = report.reply_sent,
                artifacts_released = report.artifacts_released,
                "Voice run finished"
            );
            report
        })
    }

    /// Stops accepting runs and waits until every spawned run has finished.
    pub async fn drain(&self) {
        self.runs.close();
        if !self.runs.is_empty() {
            tracing::info!(in_flight = self.runs.len(), "Waiting for voice runs to finish");
        }
        self.runs.wait().await;
    }
}

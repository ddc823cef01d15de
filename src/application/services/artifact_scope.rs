use std::sync::Arc;

use crate::application::ports::{ArtifactStore, ScratchError};
use crate::domain::{ArtifactKind, RunId, TemporaryArtifact, VoiceMessage};

/// Tracks every artifact a run acquires so that all of them get released.
///
/// `release_all` is the normal path. Anything still held when the scope is
/// dropped (a panic, or the run's task being cancelled) is removed
/// synchronously.
pub struct ArtifactScope {
    store: Arc<dyn ArtifactStore>,
    held: Vec<TemporaryArtifact>,
    acquired: usize,
}

impl ArtifactScope {
    pub fn new(store: Arc<dyn ArtifactStore>) -> Self {
        Self {
            store,
            held: Vec::new(),
            acquired: 0,
        }
    }

    pub async fn acquire(
        &mut self,
        voice: &VoiceMessage,
        run_id: RunId,
        kind: ArtifactKind,
    ) -> Result<TemporaryArtifact, ScratchError> {
        let artifact = self.store.acquire(voice, run_id, kind).await?;
        tracing::debug!(artifact = %artifact, kind = %kind, "Artifact acquired");
        self.held.push(artifact.clone());
        self.acquired += 1;
        Ok(artifact)
    }

    pub fn acquired(&self) -> usize {
        self.acquired
    }

    /// Releases everything held and returns how many artifacts were released.
    pub async fn release_all(&mut self) -> usize {
        let mut released = 0;
        let mut failed = Vec::new();

        for artifact in self.held.drain(..) {
            match self.store.release(&artifact).await {
                Ok(()) => released += 1,
                Err(e) => {
                    tracing::warn!(error = %e, artifact = %artifact, "Failed to release artifact");
                    failed.push(artifact);
                }
            }
        }

        self.held = failed;
        released
    }
}

impl Drop for ArtifactScope {
    fn drop(&mut self) {
        for artifact in self.held.drain(..) {
            if let Err(e) = self.store.release_now(&artifact) {
                tracing::warn!(error = %e, artifact = %artifact, "Failed to release artifact on drop");
            }
        }
    }
}

use std::io;

use async_trait::async_trait;

use crate::domain::{ArtifactKind, RunId, TemporaryArtifact, VoiceMessage};

/// Scratch storage for the transient files of a pipeline run.
#[async_trait]
pub trait ArtifactStore: Send + Sync {
    /// Creates a fresh, empty backing file. Fails rather than reuse an existing name.
    async fn acquire(
        &self,
        voice: &VoiceMessage,
        run_id: RunId,
        kind: ArtifactKind,
    ) -> Result<TemporaryArtifact, ScratchError>;

    /// Deletes the backing file. Releasing an absent file succeeds.
    async fn release(&self, artifact: &TemporaryArtifact) -> Result<(), ScratchError>;

    /// Blocking variant of [`ArtifactStore::release`] for use from `Drop`.
    fn release_now(&self, artifact: &TemporaryArtifact) -> Result<(), ScratchError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ScratchError {
    #[error("artifact already exists: {0}")]
    AlreadyExists(String),
    #[error("scratch io error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::application::ports::{ArtifactStore, ScratchError};
use crate::domain::{ArtifactKind, RunId, TemporaryArtifact, VoiceMessage};

/// Keeps run artifacts as plain files in one scratch directory.
pub struct LocalScratchStore {
    dir: PathBuf,
}

impl LocalScratchStore {
    pub fn new(dir: PathBuf) -> Result<Self, ScratchError> {
        std::fs::create_dir_all(&dir).map_err(|source| ScratchError::Io {
            path: dir.display().to_string(),
            source,
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl ArtifactStore for LocalScratchStore {
    async fn acquire(
        &self,
        voice: &VoiceMessage,
        run_id: RunId,
        kind: ArtifactKind,
    ) -> Result<TemporaryArtifact, ScratchError> {
        let artifact = TemporaryArtifact::new(&self.dir, voice.message_id, run_id, kind);

        tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(artifact.path())
            .await
            .map_err(|source| match source.kind() {
                io::ErrorKind::AlreadyExists => {
                    ScratchError::AlreadyExists(artifact.path().display().to_string())
                }
                _ => ScratchError::Io {
                    path: artifact.path().display().to_string(),
                    source,
                },
            })?;

        Ok(artifact)
    }

    async fn release(&self, artifact: &TemporaryArtifact) -> Result<(), ScratchError> {
        match tokio::fs::remove_file(artifact.path()).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(ScratchError::Io {
                path: artifact.path().display().to_string(),
                source,
            }),
        }
    }

    fn release_now(&self, artifact: &TemporaryArtifact) -> Result<(), ScratchError> {
        match std::fs::remove_file(artifact.path()) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(ScratchError::Io {
                path: artifact.path().display().to_string(),
                source,
            }),
        }
    }
}

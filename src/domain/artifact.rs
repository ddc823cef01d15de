use std::fmt;
use std::path::{Path, PathBuf};

use super::RunId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Compressed,
    Decoded,
}

impl ArtifactKind {
    pub fn extension(&self) -> &'static str {
        match self {
            ArtifactKind::Compressed => "ogg",
            ArtifactKind::Decoded => "wav",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactKind::Compressed => "compressed",
            ArtifactKind::Decoded => "decoded",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scratch file owned by exactly one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemporaryArtifact {
    path: PathBuf,
    kind: ArtifactKind,
    run_id: RunId,
}

impl TemporaryArtifact {
    pub fn new(dir: &Path, message_id: i32, run_id: RunId, kind: ArtifactKind) -> Self {
        let filename = format!(
            "voice-{}-{}.{}",
            message_id,
            run_id.as_uuid(),
            kind.extension()
        );
        Self {
            path: dir.join(filename),
            kind,
            run_id,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> ArtifactKind {
        self.kind
    }

    pub fn run_id(&self) -> RunId {
        self.run_id
    }
}

impl fmt::Display for TemporaryArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipelineStage {
    Idle,
    Downloading,
    Transcoding,
    Transcribing,
    Replying,
    Cleanup,
    Done,
}

impl PipelineStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineStage::Idle => "IDLE",
            PipelineStage::Downloading => "DOWNLOADING",
            PipelineStage::Transcoding => "TRANSCODING",
            PipelineStage::Transcribing => "TRANSCRIBING",
            PipelineStage::Replying => "REPLYING",
            PipelineStage::Cleanup => "CLEANUP",
            PipelineStage::Done => "DONE",
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

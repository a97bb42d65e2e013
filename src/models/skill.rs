use serde::{Deserialize, Serialize};

/// One raw phrase exploded out of a posting's skill text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillMention {
    pub job_id: String,
    pub raw: String,
}

/// A canonical tag attached to a job. Extraction yields each pair at most once.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SkillTag {
    pub job_id: String,
    pub tag: String,
}

impl SkillTag {
    pub fn new(job_id: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            job_id: job_id.into(),
            tag: tag.into(),
        }
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    /// 1-based, contiguous.
    pub rank: usize,
    pub key: String,
    pub metric: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RankingKind {
    SkillCount,
    MeanSalary,
}

impl std::fmt::Display for RankingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RankingKind::SkillCount => write!(f, "Postings"),
            RankingKind::MeanSalary => write!(f, "Mean Yearly Salary"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedTable {
    pub title: String,
    pub key_label: String,
    pub kind: RankingKind,
    pub entries: Vec<RankedEntry>,
}

impl RankedTable {
    pub fn new(
        title: impl Into<String>,
        key_label: impl Into<String>,
        kind: RankingKind,
        entries: Vec<RankedEntry>,
    ) -> Self {
        Self {
            title: title.into(),
            key_label: key_label.into(),
            kind,
            entries,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

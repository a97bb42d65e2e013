use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ranking::RankedTable;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketReport {
    pub generated_at: DateTime<Utc>,
    pub postings_total: usize,
    pub postings_normalized: usize,
    pub postings_with_skills: usize,
    pub top_skills: RankedTable,
    pub top_titles: RankedTable,
    pub top_locations: RankedTable,
}

impl MarketReport {
    pub fn tables(&self) -> [&RankedTable; 3] {
        [&self.top_skills, &self.top_titles, &self.top_locations]
    }
}

use std::collections::HashMap;

use crate::config::RankingConfig;
use crate::models::{NormalizedPosting, RankedEntry, RankedTable, RankingKind, SkillTag};

pub struct RankingAggregator {
    config: RankingConfig,
}

impl RankingAggregator {
    pub fn new(config: RankingConfig) -> Self {
        Self { config }
    }

    pub fn skills_table(&self, tags: &[SkillTag]) -> RankedTable {
        RankedTable::new(
            "Top Skills",
            "Skill",
            RankingKind::SkillCount,
            top_skills(tags, self.config.top_skills),
        )
    }

    pub fn titles_table(&self, normalized: &[NormalizedPosting]) -> RankedTable {
        RankedTable::new(
            "Highest Paying Titles",
            "Title",
            RankingKind::MeanSalary,
            top_titles(normalized, self.config.top_titles),
        )
    }

    pub fn locations_table(&self, normalized: &[NormalizedPosting]) -> RankedTable {
        RankedTable::new(
            "Highest Paying Locations",
            "Location",
            RankingKind::MeanSalary,
            top_locations(normalized, self.config.top_locations),
        )
    }
}

impl Default for RankingAggregator {
    fn default() -> Self {
        Self::new(RankingConfig::default())
    }
}

/// Number of distinct jobs carrying each tag. Expects the deduplicated pairs
/// from extraction, in input order.
pub fn top_skills(tags: &[SkillTag], n: usize) -> Vec<RankedEntry> {
    let mut groups = Groups::default();
    for tag in tags {
        groups.add(&tag.tag, 1.0);
    }

    let ranked = rank(groups.sums(), n);
    tracing::debug!("Ranked {} of {} skill tags", ranked.len(), groups.len());
    ranked
}

pub fn top_titles(normalized: &[NormalizedPosting], n: usize) -> Vec<RankedEntry> {
    top_mean_salary(normalized, n, |p| p.title.as_str())
}

pub fn top_locations(normalized: &[NormalizedPosting], n: usize) -> Vec<RankedEntry> {
    top_mean_salary(normalized, n, |p| p.location.as_str())
}

fn top_mean_salary<F>(normalized: &[NormalizedPosting], n: usize, key: F) -> Vec<RankedEntry>
where
    F: Fn(&NormalizedPosting) -> &str,
{
    let mut groups = Groups::default();
    for posting in normalized {
        groups.add(key(posting), posting.salary_yearly);
    }

    let ranked = rank(groups.means(), n);
    tracing::debug!("Ranked {} of {} salary groups", ranked.len(), groups.len());
    ranked
}

/// Sorts descending by metric and keeps the first `n`. The sort is stable, so
/// ties stay in the order the keys were first encountered.
pub fn rank(mut metrics: Vec<(String, f64)>, n: usize) -> Vec<RankedEntry> {
    if n == 0 {
        return Vec::new();
    }

    metrics.sort_by(|a, b| b.1.total_cmp(&a.1));

    metrics
        .into_iter()
        .take(n)
        .enumerate()
        .map(|(i, (key, metric))| RankedEntry {
            rank: i + 1,
            key,
            metric,
        })
        .collect()
}

/// Running sum and count per key, keyed in first-seen order.
#[derive(Default)]
struct Groups {
    keys: Vec<String>,
    totals: Vec<(f64, usize)>,
    index: HashMap<String, usize>,
}

impl Groups {
    fn add(&mut self, key: &str, value: f64) {
        let slot = match self.index.get(key) {
            Some(&slot) => slot,
            None => {
                self.keys.push(key.to_string());
                self.totals.push((0.0, 0));
                self.index.insert(key.to_string(), self.keys.len() - 1);
                self.keys.len() - 1
            }
        };

        let (sum, count) = &mut self.totals[slot];
        *sum += value;
        *count += 1;
    }

    fn len(&self) -> usize {
        self.keys.len()
    }

    fn sums(&self) -> Vec<(String, f64)> {
        self.keys
            .iter()
            .cloned()
            .zip(self.totals.iter().map(|(sum, _)| *sum))
            .collect()
    }

    fn means(&self) -> Vec<(String, f64)> {
        self.keys
            .iter()
            .cloned()
            .zip(self.totals.iter().map(|(sum, count)| sum / *count as f64))
            .collect()
    }
}

use std::collections::{BTreeMap, BTreeSet};
use std::env;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::taxonomy;

#[derive(Debug, Clone)]
pub struct Config {
    pub data_path: String,
    pub analysis: AnalysisConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let data_path = env::var("JOBMARKET_DATA_PATH")
            .unwrap_or_else(|_| "postings.csv".to_string());

        let mut analysis = match env::var("JOBMARKET_OVERRIDES") {
            Ok(path) => AnalysisConfig::from_json_file(path)?,
            Err(_) => AnalysisConfig::default(),
        };

        analysis.apply_overrides(|key| env::var(key).ok());

        Ok(Self {
            data_path,
            analysis,
        })
    }
}

/// Every tunable of the analysis, passed to each stage at construction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub normalizer: NormalizerConfig,
    pub skills: SkillConfig,
    pub ranking: RankingConfig,
}

impl AnalysisConfig {
    /// Loads a (possibly partial) JSON override file. Missing keys keep their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("cannot read overrides {}: {}", path.display(), e))
        })?;

        Self::from_json_str(&raw)
    }

    /// Applies the `OUTLIER_CUTOFF`, `DROP_NON_POSITIVE` and `TOP_*` settings
    /// found through `lookup`. Unparseable values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let parse = |key: &str| lookup(key).map(|v| v.trim().to_string());

        if let Some(cutoff) = parse("OUTLIER_CUTOFF").and_then(|v| v.parse().ok()) {
            self.normalizer.outlier_cutoff = cutoff;
        }
        if let Some(drop) = parse("DROP_NON_POSITIVE") {
            self.normalizer.drop_non_positive = drop.to_lowercase() == "true";
        }
        if let Some(n) = parse("TOP_SKILLS").and_then(|v| v.parse().ok()) {
            self.ranking.top_skills = n;
        }
        if let Some(n) = parse("TOP_TITLES").and_then(|v| v.parse().ok()) {
            self.ranking.top_titles = n;
        }
        if let Some(n) = parse("TOP_LOCATIONS").and_then(|v| v.parse().ok()) {
            self.ranking.top_locations = n;
        }
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        let mut config: Self = serde_json::from_str(raw)
            .map_err(|e| Error::Config(format!("invalid overrides: {}", e)))?;
        config.skills = config.skills.canonicalized();
        Ok(config)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// 40 hours a week, 52 weeks a year.
    pub hourly_multiplier: f64,
    pub monthly_multiplier: f64,
    /// Rows at or above this yearly figure are dropped.
    pub outlier_cutoff: f64,
    pub drop_non_positive: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            hourly_multiplier: 40.0 * 52.0,
            monthly_multiplier: 12.0,
            outlier_cutoff: 500_000.0,
            drop_non_positive: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillConfig {
    pub boilerplate: String,
    pub irrelevant_terms: BTreeSet<String>,
    pub synonyms: BTreeMap<String, String>,
}

impl SkillConfig {
    /// Trims and lowercases every key so lookups match the normalized phrases.
    pub fn canonicalized(self) -> Self {
        Self {
            boilerplate: self.boilerplate,
            irrelevant_terms: self
                .irrelevant_terms
                .into_iter()
                .map(|t| t.trim().to_lowercase())
                .collect(),
            synonyms: self
                .synonyms
                .into_iter()
                .map(|(raw, tag)| (raw.trim().to_lowercase(), tag))
                .collect(),
        }
    }
}

impl Default for SkillConfig {
    fn default() -> Self {
        Self {
            boilerplate: taxonomy::DEFAULT_BOILERPLATE.to_string(),
            irrelevant_terms: taxonomy::default_irrelevant_terms(),
            synonyms: taxonomy::default_synonyms(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    pub top_skills: usize,
    pub top_titles: usize,
    pub top_locations: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            top_skills: 30,
            top_titles: 10,
            top_locations: 10,
        }
    }
}

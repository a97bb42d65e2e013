use std::collections::{BTreeMap, BTreeSet};

use crate::config::SkillConfig;

pub const DEFAULT_BOILERPLATE: &str = "This position requires the following skills:";

/// Protected-characteristic terms that show up in skill lists but say nothing about the job.
pub fn default_irrelevant_terms() -> BTreeSet<String> {
    [
        "color",
        "religion",
        "age",
        "national origin",
        "sexual orientation",
        "sex",
        "disability",
        "gender identity",
    ]
    .iter()
    .map(|t| t.to_string())
    .collect()
}

pub fn default_synonyms() -> BTreeMap<String, String> {
    [
        ("verbal / written communication", "communication"),
        ("csr / volunteer coordination", "volunteer coordination"),
        ("elder care", "healthcare"),
        ("networking", "people skills"),
    ]
    .iter()
    .map(|(raw, tag)| (raw.to_string(), tag.to_string()))
    .collect()
}

/// Exact-match lookups over already trimmed and lowercased phrases.
pub struct SkillTaxonomy {
    irrelevant: BTreeSet<String>,
    aliases: BTreeMap<String, String>,
}

impl SkillTaxonomy {
    pub fn new() -> Self {
        Self::from_config(&SkillConfig::default())
    }

    pub fn from_config(config: &SkillConfig) -> Self {
        let config = config.clone().canonicalized();
        Self {
            irrelevant: config.irrelevant_terms,
            aliases: config.synonyms,
        }
    }

    pub fn is_irrelevant(&self, phrase: &str) -> bool {
        self.irrelevant.contains(phrase)
    }

    /// Maps a phrase to its canonical tag; unknown phrases are their own tag.
    pub fn normalize_skill_name(&self, phrase: &str) -> String {
        self.aliases
            .get(phrase)
            .cloned()
            .unwrap_or_else(|| phrase.to_string())
    }
}

impl Default for SkillTaxonomy {
    fn default() -> Self {
        Self::new()
    }
}

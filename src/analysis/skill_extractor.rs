use std::collections::HashSet;

use regex::Regex;

use crate::config::SkillConfig;
use crate::error::Result;
use crate::models::{Posting, SkillMention, SkillTag};
use crate::taxonomy::SkillTaxonomy;

/// Explodes the free-text skill list of each posting into canonical tags.
///
/// The text goes through a fixed sequence of steps, each exposed on its own:
/// [`strip_boilerplate`](Self::strip_boilerplate), [`split_phrases`],
/// [`remove_irrelevant`](Self::remove_irrelevant), [`canonicalize`](Self::canonicalize).
/// [`extract_skills`](Self::extract_skills) runs the same steps per mention and
/// then drops repeated (job id, tag) pairs.
pub struct SkillExtractor {
    boilerplate: Option<Regex>,
    taxonomy: SkillTaxonomy,
}

impl SkillExtractor {
    pub fn new(config: &SkillConfig) -> Result<Self> {
        Ok(Self {
            boilerplate: boilerplate_pattern(&config.boilerplate)?,
            taxonomy: SkillTaxonomy::from_config(config),
        })
    }

    /// Removes the leading boilerplate sentence, if present.
    pub fn strip_boilerplate<'a>(&self, text: &'a str) -> &'a str {
        match &self.boilerplate {
            Some(pattern) => match pattern.find(text) {
                Some(m) => &text[m.end()..],
                None => text,
            },
            None => text,
        }
    }

    pub fn remove_irrelevant(&self, phrases: Vec<String>) -> Vec<String> {
        phrases
            .into_iter()
            .filter(|p| !self.taxonomy.is_irrelevant(p))
            .collect()
    }

    pub fn canonicalize(&self, phrases: Vec<String>) -> Vec<String> {
        phrases
            .into_iter()
            .map(|p| self.taxonomy.normalize_skill_name(&p))
            .collect()
    }

    /// Canonical tags for one skill text, in order, duplicates included.
    pub fn tag_phrases(&self, text: &str) -> Vec<String> {
        let phrases = split_phrases(self.strip_boilerplate(text));
        self.canonicalize(self.remove_irrelevant(phrases))
    }

    /// One mention per raw phrase, after boilerplate removal and case folding.
    pub fn mentions(&self, postings: &[Posting]) -> Vec<SkillMention> {
        postings
            .iter()
            .filter_map(|p| p.skills_desc.as_deref().map(|text| (p, text)))
            .flat_map(|(p, text)| {
                split_phrases(self.strip_boilerplate(text))
                    .into_iter()
                    .map(move |raw| SkillMention {
                        job_id: p.job_id.clone(),
                        raw,
                    })
            })
            .collect()
    }

    /// Canonical tag for one mention, or `None` when the phrase is irrelevant.
    pub fn canonicalize_mention(&self, mention: SkillMention) -> Option<SkillTag> {
        if self.taxonomy.is_irrelevant(&mention.raw) {
            return None;
        }
        let tag = self.taxonomy.normalize_skill_name(&mention.raw);
        Some(SkillTag::new(mention.job_id, tag))
    }

    /// Distinct (job id, tag) pairs in input row order. A pair repeated within
    /// a posting, or across rows sharing a job id, is kept at its first position.
    pub fn extract_skills(&self, postings: &[Posting]) -> Vec<SkillTag> {
        let mentions = self.mentions(postings);
        let mention_count = mentions.len();

        let mut seen: HashSet<SkillTag> = HashSet::new();
        let tags: Vec<SkillTag> = mentions
            .into_iter()
            .filter_map(|m| self.canonicalize_mention(m))
            .filter(|t| seen.insert(t.clone()))
            .collect();

        tracing::info!(
            "Extracted skills: {} postings in, {} mentions, {} distinct job tags",
            postings.len(),
            mention_count,
            tags.len()
        );

        tags
    }
}

/// Number of distinct job ids among the tags.
pub fn distinct_jobs(tags: &[SkillTag]) -> usize {
    tags.iter()
        .map(|t| t.job_id.as_str())
        .collect::<HashSet<_>>()
        .len()
}

/// Splits on commas, trims and lowercases each phrase; blank phrases are dropped.
pub fn split_phrases(text: &str) -> Vec<String> {
    text.split(',')
        .map(|p| p.trim().to_lowercase())
        .filter(|p| !p.is_empty())
        .collect()
}

fn boilerplate_pattern(phrase: &str) -> Result<Option<Regex>> {
    let words: Vec<String> = phrase.split_whitespace().map(regex::escape).collect();
    if words.is_empty() {
        return Ok(None);
    }

    let pattern = format!(r"(?i)^\s*{}\s*", words.join(r"\s+"));
    Ok(Some(Regex::new(&pattern)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::DEFAULT_BOILERPLATE;

    fn extractor() -> SkillExtractor {
        SkillExtractor::new(&SkillConfig::default()).unwrap()
    }

    fn posting(job_id: &str, skills: Option<&str>) -> Posting {
        Posting {
            job_id: job_id.to_string(),
            skills_desc: skills.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_strip_boilerplate() {
        let extractor = extractor();
        let text = "This position requires the following skills: Python, SQL";
        assert_eq!(split_phrases(extractor.strip_boilerplate(text)), vec!["python", "sql"]);
    }

    #[test]
    fn test_strip_boilerplate_is_tolerant() {
        let extractor = extractor();
        assert_eq!(
            extractor.strip_boilerplate("  this POSITION requires\tthe following  skills:Sales"),
            "Sales"
        );
        assert_eq!(extractor.strip_boilerplate("Sales, Marketing"), "Sales, Marketing");
    }

    #[test]
    fn test_strip_boilerplate_only_when_leading() {
        let extractor = extractor();
        let text = format!("Sales, {}", DEFAULT_BOILERPLATE);
        assert_eq!(extractor.strip_boilerplate(&text), text);
    }

    #[test]
    fn test_split_phrases() {
        assert_eq!(
            split_phrases(" Project Management ,SQL,, Customer Service ,"),
            vec!["project management", "sql", "customer service"]
        );
        assert!(split_phrases("").is_empty());
    }

    #[test]
    fn test_remove_irrelevant_after_case_folding() {
        let extractor = extractor();
        let tags = extractor.tag_phrases("COLOR, Religion, Sales,  National Origin ");
        assert_eq!(tags, vec!["sales"]);
    }

    #[test]
    fn test_canonicalize() {
        let extractor = extractor();
        let tags = extractor.canonicalize(vec![
            "verbal / written communication".to_string(),
            "elder care".to_string(),
            "welding".to_string(),
        ]);
        assert_eq!(tags, vec!["communication", "healthcare", "welding"]);
    }

    fn pairs(tags: &[SkillTag]) -> Vec<(&str, &str)> {
        tags.iter().map(|t| (t.job_id.as_str(), t.tag.as_str())).collect()
    }

    #[test]
    fn test_dedup_within_posting() {
        let tags = extractor().extract_skills(&[posting("J1", Some("Color, COLOR, Networking, networking"))]);
        assert_eq!(pairs(&tags), vec![("J1", "people skills")]);
    }

    #[test]
    fn test_synonyms_merge_into_one_tag() {
        let tags = extractor().extract_skills(&[posting(
            "J1",
            Some("Communication, Verbal / Written Communication, Sales"),
        )]);
        assert_eq!(pairs(&tags), vec![("J1", "communication"), ("J1", "sales")]);
    }

    #[test]
    fn test_repeated_job_ids_keep_row_order() {
        let tags = extractor().extract_skills(&[
            posting("J1", Some("Sales")),
            posting("J2", Some("Marketing")),
            posting("J1", Some("sales, Negotiation")),
        ]);

        assert_eq!(
            pairs(&tags),
            vec![("J1", "sales"), ("J2", "marketing"), ("J1", "negotiation")]
        );
        assert_eq!(distinct_jobs(&tags), 2);
    }

    #[test]
    fn test_missing_skills_contribute_nothing() {
        let tags = extractor().extract_skills(&[
            posting("J1", None),
            posting("J2", Some("This position requires the following skills:")),
            posting("J3", Some("Age, Sex")),
        ]);
        assert!(tags.is_empty());
        assert_eq!(distinct_jobs(&tags), 0);
    }

    #[test]
    fn test_canonicalize_mention() {
        let extractor = extractor();
        let mention = |raw: &str| SkillMention { job_id: "J1".to_string(), raw: raw.to_string() };

        assert_eq!(extractor.canonicalize_mention(mention("color")), None);
        assert_eq!(
            extractor.canonicalize_mention(mention("elder care")),
            Some(SkillTag::new("J1", "healthcare"))
        );
    }

    #[test]
    fn test_mentions_keep_raw_phrases() {
        let mentions = extractor().mentions(&[
            posting("J1", Some("This position requires the following skills: Elder Care, Color")),
            posting("J2", None),
        ]);

        assert_eq!(
            mentions,
            vec![
                SkillMention { job_id: "J1".to_string(), raw: "elder care".to_string() },
                SkillMention { job_id: "J1".to_string(), raw: "color".to_string() },
            ]
        );
    }

    #[test]
    fn test_custom_config() {
        let config = SkillConfig {
            boilerplate: "Skills needed:".to_string(),
            irrelevant_terms: ["misc".to_string()].into_iter().collect(),
            synonyms: [("js".to_string(), "javascript".to_string())].into_iter().collect(),
        };
        let extractor = SkillExtractor::new(&config).unwrap();

        assert_eq!(extractor.tag_phrases("skills NEEDED: JS, Misc, Color"), vec!["javascript", "color"]);
    }

    #[test]
    fn test_deterministic() {
        let rows = vec![
            posting("J1", Some("Sales, Marketing, Elder Care")),
            posting("J2", Some("Healthcare, Sales")),
        ];
        let extractor = extractor();
        assert_eq!(extractor.extract_skills(&rows), extractor.extract_skills(&rows));
    }
}

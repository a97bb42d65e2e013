use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};

use crate::analysis::ranking::RankingAggregator;
use crate::analysis::salary_normalizer::SalaryNormalizer;
use crate::analysis::skill_extractor::{distinct_jobs, SkillExtractor};
use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::models::{MarketReport, Posting};

const STAGES: u64 = 5;

pub struct AnalysisPipeline {
    normalizer: SalaryNormalizer,
    skill_extractor: SkillExtractor,
    aggregator: RankingAggregator,
    show_progress: bool,
}

impl AnalysisPipeline {
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        Ok(Self {
            normalizer: SalaryNormalizer::new(config.normalizer),
            skill_extractor: SkillExtractor::new(&config.skills)?,
            aggregator: RankingAggregator::new(config.ranking),
            show_progress: false,
        })
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Runs both pipelines over the same postings and ranks their outputs.
    pub fn run(&self, postings: &[Posting]) -> MarketReport {
        tracing::info!("Analyzing {} postings", postings.len());
        let pb = self.progress_bar();

        // Step 1: Salaries
        pb.set_message("normalizing salaries");
        let normalized = self.normalizer.normalize(postings);
        pb.inc(1);

        // Step 2: Skills
        pb.set_message("extracting skills");
        let tags = self.skill_extractor.extract_skills(postings);
        pb.inc(1);

        if normalized.is_empty() {
            tracing::warn!("No postings survived salary normalization");
        }

        // Step 3-5: Rankings
        pb.set_message("ranking skills");
        let top_skills = self.aggregator.skills_table(&tags);
        pb.inc(1);

        pb.set_message("ranking titles");
        let top_titles = self.aggregator.titles_table(&normalized);
        pb.inc(1);

        pb.set_message("ranking locations");
        let top_locations = self.aggregator.locations_table(&normalized);
        pb.inc(1);

        pb.finish_with_message("Analysis complete");

        MarketReport {
            generated_at: Utc::now(),
            postings_total: postings.len(),
            postings_normalized: normalized.len(),
            postings_with_skills: distinct_jobs(&tags),
            top_skills,
            top_titles,
            top_locations,
        }
    }

    fn progress_bar(&self) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(STAGES);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        {
            pb.set_style(style.progress_chars("#>-"));
        }
        pb
    }
}

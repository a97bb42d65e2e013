pub mod pipeline;
pub mod salary_normalizer;
pub mod skill_extractor;
pub mod ranking;

pub use pipeline::AnalysisPipeline;
pub use salary_normalizer::SalaryNormalizer;
pub use skill_extractor::SkillExtractor;
pub use ranking::RankingAggregator;

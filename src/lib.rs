pub mod config;
pub mod error;
pub mod models;
pub mod source;
pub mod taxonomy;
pub mod analysis;
pub mod report;

pub use config::{AnalysisConfig, Config, NormalizerConfig, RankingConfig, SkillConfig};
pub use error::{Error, Result};
pub use source::PostingTable;
pub use analysis::{AnalysisPipeline, RankingAggregator, SalaryNormalizer, SkillExtractor};
pub use report::OutputFormat;

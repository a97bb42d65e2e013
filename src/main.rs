use clap::Parser;
use tracing_subscriber::EnvFilter;

use jobmarket::report::{self, OutputFormat};
use jobmarket::{AnalysisConfig, AnalysisPipeline, Config, PostingTable};

#[derive(Parser, Debug)]
#[command(name = "jobmarket")]
#[command(version = "0.1.0")]
#[command(about = "Rank job postings by skill demand and yearly pay")]
struct Args {
    /// Postings CSV (defaults to JOBMARKET_DATA_PATH)
    #[arg(short, long)]
    input: Option<String>,

    /// Output format (json, text, markdown)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<String>,

    /// JSON file overriding the analysis configuration
    #[arg(long)]
    config: Option<String>,

    /// Number of skills to rank
    #[arg(long)]
    top_skills: Option<usize>,

    /// Number of job titles to rank
    #[arg(long)]
    top_titles: Option<usize>,

    /// Number of locations to rank
    #[arg(long)]
    top_locations: Option<usize>,

    /// Hide the progress bar
    #[arg(long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("jobmarket=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let format: OutputFormat = args.format.parse()?;

    let config = Config::from_env()?;
    let analysis = build_analysis_config(&args, config.analysis)?;
    let input = args.input.clone().unwrap_or(config.data_path);

    tracing::info!("Loading postings from {}", input);
    let table = PostingTable::from_path(&input)?;
    let postings = table.postings()?;

    let pipeline = AnalysisPipeline::new(analysis)?.with_progress(!args.quiet);
    let report = pipeline.run(&postings);

    let output = report::render(&report, format)?;
    if let Some(ref path) = args.output {
        std::fs::write(path, &output)?;
        tracing::info!("Output written to: {}", path);
    } else {
        println!("{}", output);
    }

    Ok(())
}

fn build_analysis_config(args: &Args, base: AnalysisConfig) -> anyhow::Result<AnalysisConfig> {
    // Environment settings still win over the file
    let mut analysis = match args.config {
        Some(ref path) => {
            let mut from_file = AnalysisConfig::from_json_file(path)?;
            from_file.apply_overrides(|key| std::env::var(key).ok());
            from_file
        }
        None => base,
    };

    if let Some(n) = args.top_skills {
        analysis.ranking.top_skills = n;
    }
    if let Some(n) = args.top_titles {
        analysis.ranking.top_titles = n;
    }
    if let Some(n) = args.top_locations {
        analysis.ranking.top_locations = n;
    }

    Ok(analysis)
}

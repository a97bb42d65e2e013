use std::str::FromStr;

use crate::error::{Error, Result};
use crate::models::{MarketReport, RankedTable, RankingKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Markdown,
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "json" => Ok(OutputFormat::Json),
            other => Err(Error::Config(format!("unknown output format: {}", other))),
        }
    }
}

pub fn render(report: &MarketReport, format: OutputFormat) -> Result<String> {
    let output = match format {
        OutputFormat::Json => serde_json::to_string_pretty(report)?,
        OutputFormat::Markdown => format_markdown(report),
        OutputFormat::Text => format_text(report),
    };
    Ok(output)
}

/// `$` plus thousands separators, rounded to whole dollars.
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("{}${}", sign, grouped)
}

pub fn format_metric(kind: RankingKind, metric: f64) -> String {
    match kind {
        RankingKind::SkillCount => format!("{:.0}", metric),
        RankingKind::MeanSalary => format_currency(metric),
    }
}

fn format_text(report: &MarketReport) -> String {
    let mut output = String::new();

    output.push_str("\n=== Job Market Analysis ===\n\n");
    output.push_str(&format!("Postings: {}\n", report.postings_total));
    output.push_str(&format!(
        "With usable salary: {}\n",
        report.postings_normalized
    ));
    output.push_str(&format!(
        "With listed skills: {}\n",
        report.postings_with_skills
    ));

    for table in report.tables() {
        output.push_str(&format!("\n{}:\n", table.title));
        if table.is_empty() {
            output.push_str("  (none)\n");
            continue;
        }

        let width = key_width(table);
        for entry in &table.entries {
            output.push_str(&format!(
                "  {:>3}. {:<width$}  {}\n",
                entry.rank,
                entry.key,
                format_metric(table.kind, entry.metric),
                width = width
            ));
        }
    }

    output.push_str(&format!(
        "\nGenerated on: {}\n",
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}

fn format_markdown(report: &MarketReport) -> String {
    let mut output = String::new();

    output.push_str("# Job Market Analysis\n\n");
    output.push_str("| Metric | Value |\n|--------|-------|\n");
    output.push_str(&format!("| Postings | {} |\n", report.postings_total));
    output.push_str(&format!(
        "| With usable salary | {} |\n",
        report.postings_normalized
    ));
    output.push_str(&format!(
        "| With listed skills | {} |\n",
        report.postings_with_skills
    ));

    for table in report.tables() {
        output.push_str(&format!("\n## {}\n\n", table.title));
        if table.is_empty() {
            output.push_str("_No entries._\n");
            continue;
        }

        output.push_str(&format!("| Rank | {} | {} |\n", table.key_label, table.kind));
        output.push_str("|------|------|------|\n");
        for entry in &table.entries {
            output.push_str(&format!(
                "| {} | {} | {} |\n",
                entry.rank,
                entry.key.replace('|', "\\|"),
                format_metric(table.kind, entry.metric)
            ));
        }
    }

    output.push_str(&format!(
        "\n---\n*Generated on {}*\n",
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}

fn key_width(table: &RankedTable) -> usize {
    table
        .entries
        .iter()
        .map(|e| e.key.chars().count())
        .max()
        .unwrap_or(0)
}

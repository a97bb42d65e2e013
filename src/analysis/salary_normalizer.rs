use crate::config::NormalizerConfig;
use crate::models::{NormalizedPosting, PayPeriod, Posting};

/// Turns raw postings into rows with a comparable yearly salary.
pub struct SalaryNormalizer {
    config: NormalizerConfig,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct DropCounts {
    missing_fields: usize,
    non_positive: usize,
    outliers: usize,
}

impl SalaryNormalizer {
    pub fn new(config: NormalizerConfig) -> Self {
        Self { config }
    }

    pub fn normalize(&self, postings: &[Posting]) -> Vec<NormalizedPosting> {
        let mut drops = DropCounts::default();

        let normalized: Vec<NormalizedPosting> = postings
            .iter()
            .filter_map(|posting| self.normalize_one(posting, &mut drops))
            .collect();

        tracing::info!(
            "Normalized salaries: {} in, {} kept ({} missing fields, {} non-positive, {} outliers)",
            postings.len(),
            normalized.len(),
            drops.missing_fields,
            drops.non_positive,
            drops.outliers
        );

        normalized
    }

    fn normalize_one(&self, posting: &Posting, drops: &mut DropCounts) -> Option<NormalizedPosting> {
        let med_salary = impute_median(posting);

        let (Some(title), Some(location), Some(med_salary), Some(pay_period)) = (
            posting.title.as_ref(),
            posting.location.as_ref(),
            med_salary,
            posting.pay_period.as_ref(),
        ) else {
            tracing::debug!("Dropping posting {}: missing required fields", posting.job_id);
            drops.missing_fields += 1;
            return None;
        };

        let salary_yearly = self.annualize(med_salary, pay_period);

        if !self.in_range(salary_yearly) {
            if salary_yearly >= self.config.outlier_cutoff {
                drops.outliers += 1;
            } else {
                drops.non_positive += 1;
            }
            tracing::debug!(
                "Dropping posting {}: yearly salary {} out of range",
                posting.job_id,
                salary_yearly
            );
            return None;
        }

        Some(NormalizedPosting {
            job_id: posting.job_id.clone(),
            title: title.clone(),
            location: location.clone(),
            min_salary: posting.min_salary,
            max_salary: posting.max_salary,
            med_salary,
            pay_period: pay_period.clone(),
            skills_desc: posting.skills_desc.clone(),
            salary_yearly,
        })
    }

    /// Unknown periods are taken to be yearly already.
    pub fn annualize(&self, med_salary: f64, pay_period: &PayPeriod) -> f64 {
        match pay_period {
            PayPeriod::Hourly => med_salary * self.config.hourly_multiplier,
            PayPeriod::Monthly => med_salary * self.config.monthly_multiplier,
            PayPeriod::Yearly | PayPeriod::Other(_) => med_salary,
        }
    }

    fn in_range(&self, salary_yearly: f64) -> bool {
        if !salary_yearly.is_finite() || salary_yearly >= self.config.outlier_cutoff {
            return false;
        }
        if self.config.drop_non_positive {
            salary_yearly > 0.0
        } else {
            salary_yearly >= 0.0
        }
    }
}

impl Default for SalaryNormalizer {
    fn default() -> Self {
        Self::new(NormalizerConfig::default())
    }
}

/// The reported median, or the midpoint of min and max when only those are present.
pub fn impute_median(posting: &Posting) -> Option<f64> {
    posting.med_salary.or(match (posting.min_salary, posting.max_salary) {
        (Some(min), Some(max)) => Some((min + max) / 2.0),
        _ => None,
    })
}

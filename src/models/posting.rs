use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PayPeriod {
    Hourly,
    Monthly,
    Yearly,
    Other(String),
}

impl PayPeriod {
    /// Case-insensitive over the trimmed value. Blank input means the period is missing.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        let period = match trimmed.to_lowercase().as_str() {
            "hourly" => PayPeriod::Hourly,
            "monthly" => PayPeriod::Monthly,
            "yearly" => PayPeriod::Yearly,
            _ => PayPeriod::Other(trimmed.to_string()),
        };
        Some(period)
    }
}

impl std::fmt::Display for PayPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PayPeriod::Hourly => write!(f, "Hourly"),
            PayPeriod::Monthly => write!(f, "Monthly"),
            PayPeriod::Yearly => write!(f, "Yearly"),
            PayPeriod::Other(raw) => write!(f, "{}", raw),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Posting {
    pub job_id: String,
    pub title: Option<String>,
    pub location: Option<String>,
    pub min_salary: Option<f64>,
    pub max_salary: Option<f64>,
    pub med_salary: Option<f64>,
    pub pay_period: Option<PayPeriod>,
    pub skills_desc: Option<String>,
}

/// A posting that survived salary normalization. `med_salary` holds the
/// imputed value when the source omitted it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPosting {
    pub job_id: String,
    pub title: String,
    pub location: String,
    pub min_salary: Option<f64>,
    pub max_salary: Option<f64>,
    pub med_salary: f64,
    pub pay_period: PayPeriod,
    pub skills_desc: Option<String>,
    pub salary_yearly: f64,
}

impl From<NormalizedPosting> for Posting {
    fn from(normalized: NormalizedPosting) -> Self {
        Self {
            job_id: normalized.job_id,
            title: Some(normalized.title),
            location: Some(normalized.location),
            min_salary: normalized.min_salary,
            max_salary: normalized.max_salary,
            med_salary: Some(normalized.med_salary),
            pay_period: Some(normalized.pay_period),
            skills_desc: normalized.skills_desc,
        }
    }
}

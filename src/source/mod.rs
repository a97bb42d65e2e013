use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{Error, Result};
use crate::models::{PayPeriod, Posting};

pub const REQUIRED_COLUMNS: [&str; 8] = [
    "job_id",
    "title",
    "location",
    "min_salary",
    "max_salary",
    "med_salary",
    "pay_period",
    "skills_desc",
];

/// The raw job postings relation: a header row and string cells.
#[derive(Debug, Clone, Default)]
pub struct PostingTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Positions of the consumed columns within a row.
struct ColumnIndex {
    job_id: usize,
    title: usize,
    location: usize,
    min_salary: usize,
    max_salary: usize,
    med_salary: usize,
    pay_period: usize,
    skills_desc: usize,
}

impl PostingTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = rdr
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for record in rdr.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        tracing::debug!("Read {} rows from CSV", rows.len());
        Ok(Self { headers, rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn column(&self, name: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| Error::Schema {
                column: name.to_string(),
            })
    }

    fn column_index(&self) -> Result<ColumnIndex> {
        Ok(ColumnIndex {
            job_id: self.column("job_id")?,
            title: self.column("title")?,
            location: self.column("location")?,
            min_salary: self.column("min_salary")?,
            max_salary: self.column("max_salary")?,
            med_salary: self.column("med_salary")?,
            pay_period: self.column("pay_period")?,
            skills_desc: self.column("skills_desc")?,
        })
    }

    /// Types every row. Fails only when a required column is absent; bad cells become missing values.
    pub fn postings(&self) -> Result<Vec<Posting>> {
        let idx = self.column_index()?;

        let postings = self
            .rows
            .iter()
            .enumerate()
            .map(|(line, row)| {
                let cell = |i: usize| row.get(i).map(String::as_str).unwrap_or("");
                let number = |i: usize, name: &str| parse_amount(cell(i), name, line);

                Posting {
                    job_id: cell(idx.job_id).trim().to_string(),
                    title: parse_text(cell(idx.title)),
                    location: parse_text(cell(idx.location)),
                    min_salary: number(idx.min_salary, "min_salary"),
                    max_salary: number(idx.max_salary, "max_salary"),
                    med_salary: number(idx.med_salary, "med_salary"),
                    pay_period: PayPeriod::parse(cell(idx.pay_period)),
                    skills_desc: parse_text(cell(idx.skills_desc)),
                }
            })
            .collect();

        Ok(postings)
    }
}

fn parse_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn parse_amount(raw: &str, column: &str, line: usize) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Some(value),
        _ => {
            tracing::warn!("Row {}: ignoring invalid {} value {:?}", line + 1, column, trimmed);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
job_id,company_name,title,location,min_salary,max_salary,med_salary,pay_period,skills_desc
1,Acme,Nurse,\"Austin, TX\",,,30,HOURLY,\"Elder Care, Communication\"
2,Acme,Engineer,Remote,100000,140000,,YEARLY,
3,Acme,,Boston,abc,-5,,,
";

    #[test]
    fn test_from_reader_parses_rows() {
        let table = PostingTable::from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(table.headers.len(), 9);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_postings_types_cells() {
        let table = PostingTable::from_reader(SAMPLE.as_bytes()).unwrap();
        let postings = table.postings().unwrap();

        assert_eq!(postings[0].job_id, "1");
        assert_eq!(postings[0].location.as_deref(), Some("Austin, TX"));
        assert_eq!(postings[0].med_salary, Some(30.0));
        assert_eq!(postings[0].pay_period, Some(PayPeriod::Hourly));
        assert_eq!(postings[0].skills_desc.as_deref(), Some("Elder Care, Communication"));

        assert_eq!(postings[1].med_salary, None);
        assert_eq!(postings[1].min_salary, Some(100_000.0));
        assert_eq!(postings[1].skills_desc, None);

        assert_eq!(postings[2].title, None);
        assert_eq!(postings[2].min_salary, None);
        assert_eq!(postings[2].max_salary, None);
        assert_eq!(postings[2].pay_period, None);
    }

    #[test]
    fn test_missing_column_is_schema_error() {
        let table = PostingTable::from_reader("job_id,title,location\n1,a,b\n".as_bytes()).unwrap();
        let err = table.postings().unwrap_err();
        assert!(err.is_schema());
        assert!(matches!(err, Error::Schema { ref column } if column == "min_salary"));
    }

    #[test]
    fn test_short_rows_read_as_missing() {
        let table = PostingTable::new(
            REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect(),
            vec![vec!["7".to_string(), "Chef".to_string()]],
        );
        let postings = table.postings().unwrap();

        assert_eq!(postings.len(), 1);
        assert_eq!(postings[0].title.as_deref(), Some("Chef"));
        assert_eq!(postings[0].location, None);
        assert_eq!(postings[0].skills_desc, None);
    }

    #[test]
    fn test_empty_table_is_valid() {
        let table = PostingTable::new(REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect(), vec![]);
        assert!(table.is_empty());
        assert!(table.postings().unwrap().is_empty());
    }
}

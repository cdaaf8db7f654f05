//! Load loans from a debts CSV

use super::Loan;
use crate::portfolio::Portfolio;
use csv::Reader;
use log::warn;
use std::error::Error;
use std::path::Path;

/// Raw CSV row matching the debts file columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Balance")]
    balance: f64,
    #[serde(rename = "Interest Rate")]
    interest_rate: f64,
    #[serde(rename = "Start Month")]
    start_month: u32,
}

impl CsvRow {
    fn to_loan(self) -> Result<Loan, Box<dyn Error>> {
        Ok(Loan::new(self.balance, self.interest_rate, self.start_month)?)
    }
}

/// Load all loans from a CSV file
pub fn load_loans<P: AsRef<Path>>(path: P) -> Result<Vec<Loan>, Box<dyn Error>> {
    let mut reader = Reader::from_path(path)?;
    let mut loans = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        let loan = row.to_loan()?;
        loans.push(loan);
    }

    Ok(loans)
}

/// Load loans from any reader (e.g., string buffer, network stream)
pub fn load_loans_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<Loan>, Box<dyn Error>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut loans = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        let loan = row.to_loan()?;
        loans.push(loan);
    }

    Ok(loans)
}

/// Load a full portfolio: loans from the file plus a title derived from its path
pub fn load_portfolio<P: AsRef<Path>>(path: P) -> Result<Portfolio, Box<dyn Error>> {
    let source = path.as_ref().to_string_lossy().into_owned();
    let loans = load_loans(&path)?;
    Ok(Portfolio::new(loans, extract_title(&source)))
}

/// Derive a display title from a source identifier.
///
/// Takes the path segment after the first `/` and before the first `_`,
/// capitalizing its first letter ("debts/tristan_loans.csv" -> "Tristan").
/// Falls back to the raw identifier with a warning when the pattern does
/// not match.
pub fn extract_title(source: &str) -> String {
    match title_from_source(source) {
        Some(title) => title,
        None => {
            warn!("could not decipher a title from {source:?}, using it verbatim");
            source.to_string()
        }
    }
}

fn title_from_source(source: &str) -> Option<String> {
    let after_slash = source.split_once('/')?.1;
    let stem = after_slash.split('_').next().unwrap_or(after_slash);

    let mut chars = stem.chars();
    let first = chars.next()?;
    Some(first.to_uppercase().collect::<String>() + chars.as_str())
}

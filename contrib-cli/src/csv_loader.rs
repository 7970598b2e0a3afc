//! CSV loader for batches of contribution requests.
//!
//! ## CSV Format
//!
//! Headers are matched by name, so column order does **not** matter. Values
//! are trimmed; an empty cell means the field is absent.
//!
//! | Column                       | Required | Type    | Notes |
//! |------------------------------|----------|---------|-------|
//! | `monthly_income`             | yes      | decimal | e.g. `5000000` |
//! | `contributes_to_risk`        | no       | bool    | `true` / `false`, empty or missing is `false` |
//! | `risk_level`                 | no       | string  | `I`..`V` or `1`..`5` |
//! | `contributes_to_family_fund` | no       | bool    | `true` / `false`, empty or missing is `false` |
//! | `family_fund_percent`        | no       | decimal | `0.6` or `2.0` |
//!
//! Rows are loaded as submitted: a flag without its detail (or the reverse)
//! is kept so that validation can report it per row.
//!
//! ### Example
//!
//! ```csv
//! monthly_income,contributes_to_risk,risk_level,contributes_to_family_fund,family_fund_percent
//! 5000000,false,,false,
//! 15000000,true,III,true,2.0
//! ```

use std::path::{Path, PathBuf};

use contrib_core::{ContributionRequest, RiskLevel};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(deserialize_with = "deserialize_decimal")]
    monthly_income: Decimal,
    #[serde(default, deserialize_with = "deserialize_flag")]
    contributes_to_risk: bool,
    risk_level: Option<String>,
    #[serde(default, deserialize_with = "deserialize_flag")]
    contributes_to_family_fund: bool,
    #[serde(default, deserialize_with = "deserialize_optional_decimal")]
    family_fund_percent: Option<Decimal>,
}

// Decimals are read from the raw cell text so the value keeps the exact
// digits written in the file.
fn deserialize_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    s.trim()
        .parse::<Decimal>()
        .map_err(serde::de::Error::custom)
}

fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

// An empty cell is an unset flag.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s.as_deref().map(str::trim) {
        None | Some("") => Ok(false),
        Some(s) => s.parse::<bool>().map_err(serde::de::Error::custom),
    }
}

/// Errors that can occur while loading request rows.
#[derive(Debug, Error)]
pub enum CsvLoadError {
    /// The CSV is structurally invalid or a cell has the wrong type.
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// `row` is 1-based, not counting the header.
    #[error("unrecognised risk level '{level}' on row {row}")]
    InvalidRiskLevel { level: String, row: usize },

    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn convert_row(
    row: CsvRow,
    row_number: usize,
) -> Result<ContributionRequest, CsvLoadError> {
    let risk_level = row
        .risk_level
        .map(|level| {
            RiskLevel::parse(&level).ok_or(CsvLoadError::InvalidRiskLevel {
                level,
                row: row_number,
            })
        })
        .transpose()?;

    Ok(ContributionRequest {
        monthly_income: row.monthly_income,
        contributes_to_risk: row.contributes_to_risk,
        risk_level,
        contributes_to_family_fund: row.contributes_to_family_fund,
        family_fund_percent: row.family_fund_percent,
    })
}

/// Parses CSV text into requests, in file order.
///
/// # Errors
///
/// * [`CsvLoadError::Parse`] – the CSV is malformed or a required field is
///   missing or mistyped.
/// * [`CsvLoadError::InvalidRiskLevel`] – a row names an unknown risk level.
pub fn load_from_str(input: &str) -> Result<Vec<ContributionRequest>, CsvLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input.as_bytes());

    reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, result)| convert_row(result?, idx + 1))
        .collect()
}

/// Reads a file from disk and delegates to [`load_from_str`].
pub fn load_from_file(path: &Path) -> Result<Vec<ContributionRequest>, CsvLoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CsvLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_from_str(&contents)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    const MINIMAL_CSV: &str = "\
monthly_income
5000000
";

    const FULL_CSV: &str = "\
monthly_income,contributes_to_risk,risk_level,contributes_to_family_fund,family_fund_percent
15000000,true,III,true,2.0
";

    const MIXED_CSV: &str = "\
monthly_income,contributes_to_risk,risk_level,contributes_to_family_fund,family_fund_percent
5000000,false,,false,
1000000,true,1,false,
100000000,true,NIVEL_V,true,0.6
";

    #[test]
    fn test_minimal_csv_defaults_to_no_elections() {
        let requests = load_from_str(MINIMAL_CSV).expect("should parse minimal CSV");

        assert_eq!(requests, vec![ContributionRequest::new(dec!(5000000))]);
    }

    #[test]
    fn test_full_csv_populates_every_field() {
        let requests = load_from_str(FULL_CSV).expect("should parse full CSV");

        assert_eq!(
            requests,
            vec![
                ContributionRequest::new(dec!(15000000))
                    .with_risk_level(RiskLevel::Level3)
                    .with_family_fund_percent(dec!(2))
            ]
        );
    }

    #[test]
    fn test_mixed_rows_keep_file_order() {
        let requests = load_from_str(MIXED_CSV).expect("should parse");

        let incomes: Vec<Decimal> = requests.iter().map(|r| r.monthly_income).collect();
        assert_eq!(incomes, vec![dec!(5000000), dec!(1000000), dec!(100000000)]);
        assert_eq!(requests[1].risk_level, Some(RiskLevel::Level1));
        assert_eq!(requests[2].risk_level, Some(RiskLevel::Level5));
        assert_eq!(requests[2].family_fund_percent, Some(dec!(0.6)));
    }

    #[test]
    fn test_empty_cells_are_absent() {
        let requests = load_from_str(MIXED_CSV).expect("should parse");

        assert_eq!(requests[0].risk_level, None);
        assert_eq!(requests[0].family_fund_percent, None);
    }

    #[test]
    fn test_empty_flag_cells_are_unset() {
        let csv = "\
monthly_income,contributes_to_risk,risk_level,contributes_to_family_fund,family_fund_percent
5000000,,,,
";

        let requests = load_from_str(csv).expect("empty cells should parse");

        assert_eq!(requests, vec![ContributionRequest::new(dec!(5000000))]);
    }

    #[test]
    fn test_invalid_flag_is_parse_error() {
        let csv = "\
monthly_income,contributes_to_risk
5000000,maybe
";

        let err = load_from_str(csv).unwrap_err();

        assert!(matches!(err, CsvLoadError::Parse(_)));
    }

    #[test]
    fn test_inconsistent_rows_are_loaded_as_submitted() {
        let csv = "\
monthly_income,contributes_to_risk,risk_level
5000000,false,II
";

        let requests = load_from_str(csv).expect("should parse");

        assert!(!requests[0].contributes_to_risk);
        assert_eq!(requests[0].risk_level, Some(RiskLevel::Level2));
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let csv = "\
monthly_income , contributes_to_risk , risk_level
 5000000 , true , IV
";

        let requests = load_from_str(csv).expect("should parse");

        assert_eq!(
            requests,
            vec![ContributionRequest::new(dec!(5000000)).with_risk_level(RiskLevel::Level4)]
        );
    }

    #[test]
    fn test_unknown_risk_level_reports_row() {
        let csv = "\
monthly_income,contributes_to_risk,risk_level
5000000,true,II
5000000,true,VII
";

        let err = load_from_str(csv).unwrap_err();

        match err {
            CsvLoadError::InvalidRiskLevel { level, row } => {
                assert_eq!(level, "VII");
                assert_eq!(row, 2);
            }
            other => panic!("expected InvalidRiskLevel, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_income_column_is_parse_error() {
        let csv = "\
contributes_to_risk
false
";

        let err = load_from_str(csv).unwrap_err();

        assert!(matches!(err, CsvLoadError::Parse(_)));
    }

    #[test]
    fn test_non_numeric_income_is_parse_error() {
        let csv = "\
monthly_income
lots
";

        let err = load_from_str(csv).unwrap_err();

        assert!(matches!(err, CsvLoadError::Parse(_)));
    }

    #[test]
    fn test_header_only_yields_no_requests() {
        let requests = load_from_str("monthly_income\n").expect("should parse");

        assert!(requests.is_empty());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_from_file(Path::new("does/not/exist.csv")).unwrap_err();

        assert!(matches!(err, CsvLoadError::Io { .. }));
    }
}

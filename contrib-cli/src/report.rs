//! Batch evaluation and plain-text / CSV output.

use std::fmt::Write as _;
use std::io::Write;

use contrib_core::{
    ContributionCalculator, ContributionConfig, ContributionRequest, FamilyFundRate, RiskLevel,
    SolidarityFundBracket,
};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, warn};

/// One output line of a batch run.
///
/// Either every amount is present and `error` is empty, or the row was
/// rejected and only `error` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchRow {
    /// 1-based, not counting the header.
    pub row: usize,
    pub monthly_income: Decimal,
    pub base: Option<Decimal>,
    pub health: Option<Decimal>,
    pub pension: Option<Decimal>,
    pub solidarity_fund: Option<Decimal>,
    pub risk: Option<Decimal>,
    pub family_fund: Option<Decimal>,
    pub total: Option<Decimal>,
    pub error: Option<String>,
}

impl BatchRow {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Validates and calculates every request, in input order.
///
/// A rejected request does not stop the batch; its row carries the error
/// message instead of amounts.
pub fn calculate_batch(
    calculator: &ContributionCalculator,
    requests: &[ContributionRequest],
) -> Vec<BatchRow> {
    requests
        .iter()
        .enumerate()
        .map(|(idx, request)| {
            let row = idx + 1;
            match calculator.validate_and_calculate(request) {
                Ok(breakdown) => {
                    debug!(row, total = %breakdown.total, "row calculated");
                    BatchRow {
                        row,
                        monthly_income: request.monthly_income.normalize(),
                        base: Some(breakdown.base.normalize()),
                        health: Some(breakdown.health.normalize()),
                        pension: Some(breakdown.pension.normalize()),
                        solidarity_fund: Some(breakdown.solidarity_fund.normalize()),
                        risk: Some(breakdown.risk.normalize()),
                        family_fund: Some(breakdown.family_fund.normalize()),
                        total: Some(breakdown.total.normalize()),
                        error: None,
                    }
                }
                Err(error) => {
                    warn!(row, %error, "row rejected");
                    BatchRow {
                        row,
                        monthly_income: request.monthly_income.normalize(),
                        base: None,
                        health: None,
                        pension: None,
                        solidarity_fund: None,
                        risk: None,
                        family_fund: None,
                        total: None,
                        error: Some(error.to_string()),
                    }
                }
            }
        })
        .collect()
}

/// Writes `rows` as CSV with a header line.
pub fn write_batch_csv<W: Write>(
    rows: &[BatchRow],
    writer: W,
) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Renders the active configuration and every rate table.
pub fn render_rates(config: &ContributionConfig) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(out, "Minimum wage:            {}", config.minimum_wage.normalize());
    let _ = writeln!(
        out,
        "Contribution base:       {}% of income, between {} and {}",
        percent(config.base_fraction),
        config.base_floor().normalize(),
        config.base_ceiling().normalize()
    );
    let _ = writeln!(out, "Health:                  {}%", percent(config.health_rate));
    let _ = writeln!(out, "Pension:                 {}%", percent(config.pension_rate));

    let _ = writeln!(out, "\nOccupational risk (ARL)");
    for level in RiskLevel::ALL {
        let _ = writeln!(out, "  {:<4} {:>6}%", level.as_str(), level.rate().normalize());
    }

    let _ = writeln!(out, "\nSolidarity fund (FSP)");
    for bracket in SolidarityFundBracket::ALL {
        let _ = writeln!(out, "  {:<24} {:>4}%", bracket.to_string(), percent(bracket.rate()));
    }

    let _ = writeln!(out, "\nFamily fund (CCF)");
    for rate in FamilyFundRate::ALL {
        let _ = writeln!(out, "  {rate}");
    }

    out
}

fn percent(fraction: Decimal) -> Decimal {
    (fraction * Decimal::ONE_HUNDRED).normalize()
}

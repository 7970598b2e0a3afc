use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Occupational-risk (ARL) classification of the work performed.
///
/// Each level carries its contribution rate in percentage points, so
/// `Level1.rate()` is `0.522` meaning 0.522 % of the contribution base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Minimal risk, e.g. office work.
    #[serde(rename = "I")]
    Level1,
    /// Low risk, e.g. retail.
    #[serde(rename = "II")]
    Level2,
    /// Medium risk, e.g. manufacturing.
    #[serde(rename = "III")]
    Level3,
    /// High risk, e.g. construction.
    #[serde(rename = "IV")]
    Level4,
    /// Maximum risk, e.g. underground mining.
    #[serde(rename = "V")]
    Level5,
}

impl RiskLevel {
    /// Every level, lowest risk first.
    pub const ALL: [RiskLevel; 5] = [
        Self::Level1,
        Self::Level2,
        Self::Level3,
        Self::Level4,
        Self::Level5,
    ];

    /// Contribution rate in percentage points.
    pub fn rate(&self) -> Decimal {
        match self {
            Self::Level1 => dec!(0.522),
            Self::Level2 => dec!(1.044),
            Self::Level3 => dec!(2.436),
            Self::Level4 => dec!(4.350),
            Self::Level5 => dec!(6.960),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Level1 => "I",
            Self::Level2 => "II",
            Self::Level3 => "III",
            Self::Level4 => "IV",
            Self::Level5 => "V",
        }
    }

    /// Parses a level code.
    ///
    /// Accepts roman numerals (`I`..`V`) or digits (`1`..`5`), optionally
    /// prefixed with `NIVEL_` or `LEVEL_`, in any case.
    pub fn parse(s: &str) -> Option<Self> {
        let upper = s.trim().to_ascii_uppercase();
        let code = upper
            .strip_prefix("NIVEL_")
            .or_else(|| upper.strip_prefix("LEVEL_"))
            .unwrap_or(&upper);

        match code {
            "I" | "1" => Some(Self::Level1),
            "II" | "2" => Some(Self::Level2),
            "III" | "3" => Some(Self::Level3),
            "IV" | "4" => Some(Self::Level4),
            "V" | "5" => Some(Self::Level5),
            _ => None,
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

mod contribution_breakdown;
mod contribution_config;
mod contribution_request;
mod family_fund_rate;
mod risk_level;
mod solidarity_fund_bracket;

pub use contribution_breakdown::ContributionBreakdown;
pub use contribution_config::{ConfigError, ContributionConfig};
pub use contribution_request::{ContributionRequest, FamilyFundElection, RiskElection};
pub use family_fund_rate::FamilyFundRate;
pub use risk_level::RiskLevel;
pub use solidarity_fund_bracket::SolidarityFundBracket;

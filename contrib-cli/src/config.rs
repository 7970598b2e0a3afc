//! Loads [`ContributionConfig`] overrides from a TOML file.
//!
//! Every key is optional; missing keys keep the legal default. Values may be
//! written as integers or quoted decimals:
//!
//! ```toml
//! minimum_wage = 1423500
//! base_fraction = "0.40"
//! base_ceiling_multiple = 25
//! health_rate = "0.125"
//! pension_rate = "0.16"
//! ```
//!
//! Range checks happen once, in [`ContributionCalculator::new`].

use std::path::{Path, PathBuf};

use contrib_core::{ConfigError, ContributionCalculator, ContributionConfig};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("cannot read config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid rate configuration: {0}")]
    Invalid(#[from] ConfigError),
}

/// Parses a TOML document. Values are not range-checked here.
pub fn parse_config(input: &str) -> Result<ContributionConfig, ConfigLoadError> {
    Ok(toml::from_str(input)?)
}

/// Reads `path` and delegates to [`parse_config`].
pub fn load_config(path: &Path) -> Result<ContributionConfig, ConfigLoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&contents)
}

/// Builds a calculator from the config at `path`.
///
/// # Errors
///
/// * [`ConfigLoadError::Io`] – the file cannot be read.
/// * [`ConfigLoadError::Parse`] – the TOML is malformed or has an unknown key.
/// * [`ConfigLoadError::Invalid`] – a value is out of range.
pub fn load_calculator(path: &Path) -> Result<ContributionCalculator, ConfigLoadError> {
    let config = load_config(path)?;
    Ok(ContributionCalculator::new(config)?)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = parse_config("").expect("empty TOML is valid");

        assert_eq!(config, ContributionConfig::default());
    }

    #[test]
    fn partial_document_overrides_only_given_keys() {
        let config = parse_config("minimum_wage = 1300000\n").expect("should parse");

        assert_eq!(config.minimum_wage, dec!(1300000));
        assert_eq!(config.health_rate, dec!(0.125));
        assert_eq!(config.base_ceiling(), dec!(32500000));
    }

    #[test]
    fn quoted_decimals_are_accepted() {
        let config = parse_config("health_rate = \"0.12\"\npension_rate = \"0.15\"\n")
            .expect("should parse");

        assert_eq!(config.health_rate, dec!(0.12));
        assert_eq!(config.pension_rate, dec!(0.15));
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = parse_config("minimum_wag = 1300000\n").unwrap_err();

        assert!(matches!(err, ConfigLoadError::Parse(_)));
    }

    #[test]
    fn out_of_range_file_is_rejected() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
            .join("invalid_rates.toml");

        let result = load_calculator(&path);

        assert!(matches!(
            result,
            Err(ConfigLoadError::Invalid(ConfigError::InvalidBaseFraction(_)))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_calculator(Path::new("does/not/exist.toml")).unwrap_err();

        assert!(matches!(err, ConfigLoadError::Io { .. }));
    }
}

//! Pricing table loader from TOML configuration
//!
//! Every key is optional; omitted keys keep the default rate.
//!
//! ```toml
//! base_price = 3500
//! price_per_km = 1300
//!
//! [weather]
//! rain = 1.25
//!
//! [shopping]
//! free_items = 3
//! ```

use std::fs;
use std::path::Path;

use tracing::info;

use errand_domain::model::PricingTable;
use errand_types::{ConfigError, Error, Result};

/// Load and validate a pricing table from a TOML file
pub fn load_pricing_table(path: &Path) -> Result<PricingTable> {
    let content = fs::read_to_string(path).map_err(|e| {
        Error::Config(ConfigError::ParseError(format!(
            "Failed to read pricing file {}: {}",
            path.display(),
            e
        )))
    })?;

    let table = parse_pricing_table(&content)?;
    info!(path = %path.display(), "loaded pricing table override");
    Ok(table)
}

/// Parse and validate a pricing table from a TOML string
pub fn parse_pricing_table(toml_content: &str) -> Result<PricingTable> {
    let table: PricingTable = toml::from_str(toml_content).map_err(|e| {
        Error::Config(ConfigError::ParseError(format!(
            "Failed to parse pricing TOML: {}",
            e
        )))
    })?;
    table.validate()?;
    Ok(table)
}

/// Render a pricing table as TOML, e.g. to seed an override file
pub fn pricing_table_to_toml(table: &PricingTable) -> Result<String> {
    toml::to_string_pretty(table).map_err(|e| {
        Error::Config(ConfigError::SaveError(format!(
            "Failed to serialize pricing table: {}",
            e
        )))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const TEST_TOML: &str = r#"
base_price = 3500
price_per_km = 1300

[weather]
rain = 1.25

[shopping]
free_items = 3
"#;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let table = parse_pricing_table(TEST_TOML).unwrap();
        assert_eq!(table.base_price, 3500);
        assert_eq!(table.price_per_km, 1300);
        assert_eq!(table.weather.rain, 1.25);
        assert_eq!(table.weather.snow, 1.4);
        assert_eq!(table.shopping.free_items, 3);
        assert_eq!(table.shopping.base_price, 5000);
        assert_eq!(table.time.late_night, 5000);
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(parse_pricing_table("").unwrap(), PricingTable::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let result = parse_pricing_table("min_price = 3050");
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let result = parse_pricing_table("base_price = \"cheap\"");
        assert!(matches!(result, Err(Error::Config(ConfigError::ParseError(_)))));
    }

    #[test]
    fn test_default_table_serializes_and_parses() {
        let toml = pricing_table_to_toml(&PricingTable::default()).unwrap();
        assert!(toml.contains("base_price = 3000"));
        assert_eq!(parse_pricing_table(&toml).unwrap(), PricingTable::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pricing.toml");
        fs::write(&path, TEST_TOML).unwrap();
        let table = load_pricing_table(&path).unwrap();
        assert_eq!(table.base_price, 3500);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let result = load_pricing_table(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(Error::Config(ConfigError::ParseError(_)))));
    }
}

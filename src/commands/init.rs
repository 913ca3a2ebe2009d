use crate::config::CONFIG_FILE_NAME;
use crate::errors::{QuotemapError, Result};
use crate::io;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG: &str = r#"# Quotemap Configuration

[pricing]
minimum_monthly_fee = 10000.0
annual_discount_percent = 20.0
min_nodes = 100
max_nodes = 1000000
default_node_count = 10000

# Tiers are walked in order; the last tier has no upper_bound.
[[pricing.tiers]]
upper_bound = 10000
unit_price = 1.00

[[pricing.tiers]]
upper_bound = 50000
unit_price = 0.75

[[pricing.tiers]]
upper_bound = 100000
unit_price = 0.50

[[pricing.tiers]]
upper_bound = 250000
unit_price = 0.35

[[pricing.tiers]]
upper_bound = 500000
unit_price = 0.25

[[pricing.tiers]]
unit_price = 0.20

[roi]
mttd_reduction = 0.75
false_positive_reduction = 0.90
investigation_time_reduction = 0.60
breach_prevention = 0.40
# Flat share of breach cost; independent of mttd_reduction
mttd_savings_of_breach_cost = 0.15

[output]
default_format = "terminal"
"#;

pub fn init_config(force: bool) -> Result<PathBuf> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    init_config_at(&config_path, force)?;
    Ok(config_path)
}

pub fn init_config_at(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        return Err(QuotemapError::already_exists(
            config_path,
            "Configuration file already exists. Use --force to overwrite.",
        ));
    }

    io::write_file(config_path, DEFAULT_CONFIG)?;
    log::info!("Wrote {}", config_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_and_validate_config;
    use crate::pricing::PricingPlan;
    use crate::roi::RoiCoefficients;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_matches_built_in_defaults() {
        let config = parse_and_validate_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.pricing_plan(), PricingPlan::default());
        assert_eq!(config.roi_coefficients(), RoiCoefficients::default());
    }

    #[test]
    fn test_refuses_to_overwrite_without_force() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "# mine").unwrap();

        let err = init_config_at(&path, false).unwrap_err();
        assert!(err.is_user_fixable());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# mine");

        init_config_at(&path, true).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
    }
}

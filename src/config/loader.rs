//! Config file discovery and loading.
//!
//! Discovery is forgiving: an unreadable or unparseable `.quotemap.toml`
//! logs a warning and the search falls through to defaults. A file named
//! explicitly with `--config` must exist and parse.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::core::QuotemapConfig;
use super::pricing::PricingConfig;
use super::roi::RoiConfig;
use crate::errors::{ErrorCode, QuotemapError, Result};

pub const CONFIG_FILE_NAME: &str = ".quotemap.toml";
const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Parse a TOML document and validate its sections.
///
/// Syntax errors fail the whole document. A section that parses but breaks
/// an invariant is replaced by its defaults with a warning.
pub fn parse_and_validate_config(contents: &str) -> std::result::Result<QuotemapConfig, String> {
    let mut config = toml::from_str::<QuotemapConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))?;

    if let Some(Err(e)) = config.pricing.as_ref().map(PricingConfig::to_plan) {
        log::warn!("Invalid [pricing] section: {}. Using defaults.", e);
        config.pricing = Some(PricingConfig::default());
    }

    if let Some(Err(e)) = config.roi.as_ref().map(RoiConfig::to_coefficients) {
        log::warn!("Invalid [roi] section: {}. Using defaults.", e);
        config.roi = Some(RoiConfig::default());
    }

    Ok(config)
}

/// `start` followed by its parents, at most `max_depth` directories.
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    start
        .ancestors()
        .take(max_depth)
        .map(Path::to_path_buf)
        .collect::<Vec<_>>()
        .into_iter()
}

/// Candidate file during discovery. `None` moves the search to the parent.
fn discover_at(candidate: &Path) -> Option<QuotemapConfig> {
    let contents = match fs::read_to_string(candidate) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return None,
        Err(e) => {
            log::warn!("Skipping {}: {}", candidate.display(), e);
            return None;
        }
    };

    parse_and_validate_config(&contents)
        .inspect(|_| log::debug!("Loaded config from {}", candidate.display()))
        .inspect_err(|e| log::warn!("{}. Using defaults.", e))
        .ok()
}

/// Search `start` and its ancestors for `.quotemap.toml`.
pub fn load_config_in(start: PathBuf) -> QuotemapConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .find_map(|dir| discover_at(&dir.join(CONFIG_FILE_NAME)))
        .unwrap_or_else(|| {
            log::debug!("No {} found, using defaults", CONFIG_FILE_NAME);
            QuotemapConfig::default()
        })
}

/// Discover config from the working directory.
pub fn load_config() -> QuotemapConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_in(dir),
        Err(e) => {
            log::warn!("Cannot read working directory ({}), using defaults", e);
            QuotemapConfig::default()
        }
    }
}

/// Load an explicitly named config file.
pub fn load_config_from(path: &Path) -> Result<QuotemapConfig> {
    let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => QuotemapError::config(
            ErrorCode::CONFIG_FILE_NOT_FOUND,
            format!("Config file {} not found", path.display()),
            Some(path),
        ),
        _ => QuotemapError::from_io(e, Some(path)),
    })?;

    parse_and_validate_config(&contents)
        .map_err(|message| QuotemapError::config(ErrorCode::CONFIG_INVALID, message, Some(path)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_empty_document_is_default() {
        let config = parse_and_validate_config("").unwrap();
        assert_eq!(config, QuotemapConfig::default());
    }

    #[test]
    fn test_parse_custom_tiers() {
        let config = parse_and_validate_config(indoc! {r#"
            [pricing]
            minimum_monthly_fee = 500.0

            [[pricing.tiers]]
            upper_bound = 1000
            unit_price = 2.0

            [[pricing.tiers]]
            unit_price = 1.0
        "#})
        .unwrap();

        let plan = config.pricing_plan();
        assert_eq!(plan.schedule.len(), 2);
        assert_eq!(plan.minimum_monthly_fee, 500.0);
        assert_eq!(plan.annual_discount_percent, 20.0);
    }

    #[test]
    fn test_invalid_pricing_section_falls_back_to_defaults() {
        let config = parse_and_validate_config(indoc! {r#"
            [[pricing.tiers]]
            upper_bound = 1000
            unit_price = 1.0
        "#})
        .unwrap();
        assert_eq!(config.pricing, Some(PricingConfig::default()));
    }

    #[test]
    fn test_invalid_roi_section_falls_back_to_defaults() {
        let config = parse_and_validate_config(indoc! {r#"
            [roi]
            breach_prevention = 4.0
        "#})
        .unwrap();
        assert_eq!(config.roi, Some(RoiConfig::default()));
    }

    #[test]
    fn test_syntax_error_is_reported() {
        let err = parse_and_validate_config("[pricing\nfoo = ").unwrap_err();
        assert!(err.contains(CONFIG_FILE_NAME));
    }

    #[test]
    fn test_directory_ancestors_respects_depth() {
        let dirs: Vec<PathBuf> = directory_ancestors(PathBuf::from("/a/b/c/d"), 3).collect();
        assert_eq!(
            dirs,
            vec![
                PathBuf::from("/a/b/c/d"),
                PathBuf::from("/a/b/c"),
                PathBuf::from("/a/b"),
            ]
        );
    }

    #[test]
    fn test_load_config_in_finds_parent_file() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "[output]\ndefault_format = \"json\"\n",
        )
        .unwrap();
        let nested = temp.path().join("site").join("pricing");
        fs::create_dir_all(&nested).unwrap();

        let config = load_config_in(nested);
        assert_eq!(config.output_format(), Some(crate::io::OutputFormat::Json));
    }

    #[test]
    fn test_load_config_in_skips_unparseable_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "pricing = [").unwrap();

        let config = load_config_in(temp.path().to_path_buf());
        assert_eq!(config, QuotemapConfig::default());
    }

    #[test]
    fn test_load_config_from_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = load_config_from(&temp.path().join("nope.toml")).unwrap_err();
        assert_eq!(err.code(), ErrorCode::CONFIG_FILE_NOT_FOUND);
    }

    #[test]
    fn test_load_config_from_unparseable_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.toml");
        fs::write(&path, "pricing = [").unwrap();
        let err = load_config_from(&path).unwrap_err();
        assert_eq!(err.code(), ErrorCode::CONFIG_INVALID);
    }
}

// Run configuration: induction thresholds and report layout.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CrabError, Result};
use crate::protostem::DEFAULT_MIN_STEM_LENGTH;

/// Default report width, in columns.
pub const DEFAULT_REPORT_WIDTH: usize = 80;

// Narrower widths leave no room for the "Suffixes: " label.
const MIN_REPORT_WIDTH: usize = 20;

/// Parameters of the induction core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InductionConfig {
    /// Shortest accepted protostem, in characters.
    pub min_stem_length: usize,
}

impl Default for InductionConfig {
    fn default() -> Self {
        Self {
            min_stem_length: DEFAULT_MIN_STEM_LENGTH,
        }
    }
}

/// Layout of the text report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Rule width and wrap column.
    pub width: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_REPORT_WIDTH,
        }
    }
}

/// Full configuration, as read from a JSON file. Missing sections and fields
/// take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CrabConfig {
    pub induction: InductionConfig,
    pub report: ReportConfig,
}

impl CrabConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|e| CrabError::io(path, e))?;
        Self::from_json(&json)
    }

    /// Check that every setting is usable.
    pub fn validate(&self) -> Result<()> {
        if self.induction.min_stem_length == 0 {
            return Err(CrabError::config(
                "induction.min_stem_length",
                "must be at least 1",
            ));
        }
        if self.report.width < MIN_REPORT_WIDTH {
            return Err(CrabError::config(
                "report.width",
                format!("must be at least {MIN_REPORT_WIDTH}"),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CrabConfig::default();
        assert_eq!(config.induction.min_stem_length, 3);
        assert_eq!(config.report.width, 80);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = CrabConfig::from_json(r#"{"induction": {"min_stem_length": 4}}"#).unwrap();
        assert_eq!(config.induction.min_stem_length, 4);
        assert_eq!(config.report.width, 80);
    }

    #[test]
    fn test_empty_object() {
        assert_eq!(CrabConfig::from_json("{}").unwrap(), CrabConfig::default());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = CrabConfig::from_json(r#"{"induction": {"min_stem_len": 4}}"#).unwrap_err();
        assert!(matches!(err, CrabError::ConfigFormat(_)));
    }

    #[test]
    fn test_zero_stem_length_rejected() {
        let err = CrabConfig::from_json(r#"{"induction": {"min_stem_length": 0}}"#).unwrap_err();
        assert!(matches!(err, CrabError::Config { ref field, .. } if field == "induction.min_stem_length"));
    }

    #[test]
    fn test_narrow_width_rejected() {
        let err = CrabConfig::from_json(r#"{"report": {"width": 10}}"#).unwrap_err();
        assert!(err.to_string().contains("report.width"));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("crab.json");
        fs::write(&path, r#"{"report": {"width": 60}}"#).unwrap();
        let config = CrabConfig::from_file(&path).unwrap();
        assert_eq!(config.report.width, 60);
    }

    #[test]
    fn test_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = CrabConfig::from_file(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, CrabError::IoFailure { .. }));
    }
}

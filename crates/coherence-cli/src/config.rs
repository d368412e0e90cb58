//! Optional TOML configuration.
//!
//! Lookup order: `--config <path>`, then `COHERENCE_CONFIG`, then built-in
//! defaults. Every field is optional.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use coherence_core::{DISPLAY_PRECISION, EvaluatorConfig, ForceConfig, MAX_DISPLAY_PRECISION};
use serde::Deserialize;

pub const CONFIG_ENV: &str = "COHERENCE_CONFIG";

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub evaluator: EvaluatorConfig,
    pub force: ForceConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Decimal places shown for every numeric field.
    pub precision: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            precision: DISPLAY_PRECISION,
        }
    }
}

fn config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| std::env::var(CONFIG_ENV).ok().map(PathBuf::from))
}

pub fn load(explicit: Option<&Path>) -> Result<CliConfig> {
    let Some(path) = config_path(explicit) else {
        tracing::debug!("no config file, using defaults");
        return Ok(CliConfig::default());
    };
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config = parse(&content).with_context(|| format!("invalid config {}", path.display()))?;
    tracing::debug!("loaded config from {}: {config:?}", path.display());
    Ok(config)
}

pub fn parse(content: &str) -> Result<CliConfig> {
    let config: CliConfig = toml::from_str(content)?;
    if config.output.precision > MAX_DISPLAY_PRECISION {
        bail!(
            "output.precision {} exceeds the maximum of {MAX_DISPLAY_PRECISION}",
            config.output.precision
        );
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use coherence_core::Validation;

    #[test]
    fn test_empty_config_is_default() {
        let config = parse("").unwrap();
        assert_eq!(config.evaluator, EvaluatorConfig::default());
        assert_eq!(config.force, ForceConfig::default());
        assert_eq!(config.output.precision, 3);
    }

    #[test]
    fn test_partial_sections() {
        let config = parse(
            r#"
[evaluator]
threshold = 0.5
validation = "strict"

[output]
precision = 5
"#,
        )
        .unwrap();
        assert_eq!(config.evaluator.threshold, 0.5);
        assert_eq!(config.evaluator.alpha, 0.5);
        assert_eq!(config.evaluator.validation, Validation::Strict);
        assert_eq!(config.output.precision, 5);
        assert_eq!(config.force.k, 100.0);
    }

    #[test]
    fn test_force_section() {
        let config = parse("[force]\nn = 2.0\nr_min = 0.01\n").unwrap();
        assert_eq!(config.force.n, 2.0);
        assert_eq!(config.force.r_min, 0.01);
        assert_eq!(config.force.k, 100.0);
    }

    #[test]
    fn test_precision_bound() {
        assert_eq!(parse("[output]\nprecision = 15\n").unwrap().output.precision, 15);
        let err = parse("[output]\nprecision = 16\n").unwrap_err();
        assert!(err.to_string().contains("output.precision 16"));
        assert!(parse("[output]\nprecision = 400\n").is_err());
    }

    #[test]
    fn test_unknown_section_rejected() {
        assert!(parse("[evaluatr]\nalpha = 1.0\n").is_err());
    }

    #[test]
    fn test_bad_validation_value_rejected() {
        assert!(parse("[evaluator]\nvalidation = \"lenient\"\n").is_err());
    }
}

//! Analysis parameters shared by the statistics commands.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

const fn default_alpha() -> f64 {
    0.05
}

const fn default_top_species() -> usize {
    10
}

const fn default_intervention_rows() -> usize {
    8
}

fn default_no_mask_label() -> String {
    String::from("None")
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AnalysisConfig {
    /// Significance level used to accept the alternative hypothesis.
    #[serde(default = "default_alpha")]
    pub alpha: f64,

    /// Number of species shown before the remainder is folded into "other".
    #[serde(default = "default_top_species")]
    pub top_species: usize,

    /// Leading diary rows that belong to the intervention period.
    #[serde(default = "default_intervention_rows")]
    pub intervention_rows: usize,

    /// Mask type value that marks a day without a mask.
    #[serde(default = "default_no_mask_label")]
    pub no_mask_label: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            alpha: default_alpha(),
            top_species: default_top_species(),
            intervention_rows: default_intervention_rows(),
            no_mask_label: default_no_mask_label(),
        }
    }
}

impl AnalysisConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !(self.alpha > 0.0 && self.alpha < 1.0) {
            return Err(ConfigError::InvalidValue {
                field: String::from("analysis.alpha"),
                reason: format!("must be between 0 and 1 (exclusive), got {}", self.alpha),
            });
        }
        if self.top_species == 0 {
            return Err(ConfigError::InvalidValue {
                field: String::from("analysis.top_species"),
                reason: String::from("must be at least 1"),
            });
        }
        if self.no_mask_label.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: String::from("analysis.no_mask_label"),
                reason: String::from("must not be empty"),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = AnalysisConfig::default();
        assert!((config.alpha - 0.05).abs() < f64::EPSILON);
        assert_eq!(config.top_species, 10);
        assert_eq!(config.intervention_rows, 8);
        assert_eq!(config.no_mask_label, "None");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn alpha_out_of_range_is_rejected() {
        for alpha in [0.0, 1.0, -0.5, 2.0, f64::NAN] {
            let config = AnalysisConfig {
                alpha,
                ..AnalysisConfig::default()
            };
            assert!(config.validate().is_err(), "alpha {alpha} should fail");
        }
    }

    #[test]
    fn zero_top_species_is_rejected() {
        let config = AnalysisConfig {
            top_species: 0,
            ..AnalysisConfig::default()
        };
        assert!(config.validate().is_err());
    }
}

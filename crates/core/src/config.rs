//! Allocation run configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Length;

/// Configuration for a cutting-stock allocation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlanConfig {
    /// Material lost per saw pass (kerf), in the same unit as the lengths.
    /// Zero disables kerf accounting.
    pub tolerance: Length,

    /// Offcut length at which a leftover counts as reusable stock.
    /// `None` uses the smallest profile length of the run.
    pub reuse_threshold: Option<Length>,
}

impl PlanConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the kerf width.
    pub fn with_tolerance(mut self, tolerance: Length) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the reusable-offcut threshold.
    pub fn with_reuse_threshold(mut self, threshold: Length) -> Self {
        self.reuse_threshold = Some(threshold);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PlanConfig::default();
        assert_eq!(config.tolerance, 0);
        assert_eq!(config.reuse_threshold, None);
    }

    #[test]
    fn test_builder() {
        let config = PlanConfig::new().with_tolerance(5).with_reuse_threshold(250);

        assert_eq!(config.tolerance, 5);
        assert_eq!(config.reuse_threshold, Some(250));
    }
}

//! Configuration of the reliability `Estimator`.

use crate::likelihood::Reversible;
use crate::util::{CredenceError, Result};

use serde::Deserialize;

use std::ops::RangeInclusive;


/// How link quality and user reliability are estimated
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Quality and reliability are `Pmf`s over a grid of fractions, updated by Bayes' rule
    Bayes,

    /// Quality is the fraction of upvotes; reliability is the fraction of votes that agree with
    /// the links' current quality
    Simple
}


impl Default for Strategy {
    fn default() -> Self {
        Strategy::Bayes
    }
}


/// Parameters of an `Estimator` run.
///
/// Every field has a default, so a YAML document only needs the fields it changes:
///
/// ```yaml
/// strategy: bayes
/// uncertainty: 0.1
/// tie_band: 0.001
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EstimatorConfig {

    /// The estimation strategy
    pub strategy: Strategy,

    /// Probability that a recorded vote is the opposite of what the voter meant
    pub uncertainty: f64,

    /// Links whose quality is within this distance of one half are too close to call, and votes
    /// on them say nothing about the voter's reliability
    pub tie_band: f64,

    /// Number of grid points of the quality and reliability `Pmf`s. Hypothesis `h` in
    /// `1..=resolution` stands for the fraction `h / resolution`
    pub resolution: u32,

    /// Reliability assumed for a user none of whose votes could be judged yet
    pub default_reliability: f64,

    /// Discount the votes of unreliable users when estimating link quality
    pub weight_by_reliability: bool

}


impl Default for EstimatorConfig {
    fn default() -> Self {
        EstimatorConfig {
            strategy: Strategy::Bayes,
            uncertainty: 0.0,
            tie_band: 0.001,
            resolution: 100,
            default_reliability: 1.0,
            weight_by_reliability: true
        }
    }
}


impl EstimatorConfig {

    pub fn new() -> Self {
        EstimatorConfig::default()
    }


    /// Parse and validate a configuration from YAML
    pub fn from_yaml(doc: &str) -> Result<Self> {
        let config: EstimatorConfig = serde_yaml::from_str(doc)
            .map_err(|e| CredenceError::InvalidConfig(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }


    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }


    pub fn with_uncertainty(mut self, uncertainty: f64) -> Self {
        self.uncertainty = uncertainty;
        self
    }


    pub fn with_tie_band(mut self, tie_band: f64) -> Self {
        self.tie_band = tie_band;
        self
    }


    pub fn with_resolution(mut self, resolution: u32) -> Self {
        self.resolution = resolution;
        self
    }


    pub fn with_default_reliability(mut self, reliability: f64) -> Self {
        self.default_reliability = reliability;
        self
    }


    pub fn with_weight_by_reliability(mut self, weight: bool) -> Self {
        self.weight_by_reliability = weight;
        self
    }


    /// Check every field is within range
    ///
    /// # Errors
    /// * `CredenceError::InvalidConfig` naming the first offending field
    pub fn validate(&self) -> Result<()> {
        if ! (0.0..=1.0).contains(&self.uncertainty) {
            return Err(CredenceError::InvalidConfig(
                format!("uncertainty must be within [0, 1], got {}", self.uncertainty)
            ));
        }

        if ! (0.0..0.5).contains(&self.tie_band) {
            return Err(CredenceError::InvalidConfig(
                format!("tie_band must be within [0, 0.5), got {}", self.tie_band)
            ));
        }

        // a single grid point at 1 gives a down vote no support at all
        if self.resolution < 2 {
            return Err(CredenceError::InvalidConfig(
                format!("resolution must be at least 2, got {}", self.resolution)
            ));
        }

        if ! (0.0..=1.0).contains(&self.default_reliability) {
            return Err(CredenceError::InvalidConfig(
                format!("default_reliability must be within [0, 1], got {}", self.default_reliability)
            ));
        }

        Ok(())
    }


    /// The measurement channel every vote passes through
    pub fn measurement(&self) -> Result<Reversible> {
        Reversible::new(self.uncertainty)
    }


    /// The hypotheses of a quality or reliability `Pmf`
    pub fn grid(&self) -> RangeInclusive<u32> {
        1..=self.resolution
    }


    /// The fraction that grid point `h` stands for
    pub fn fraction(&self, h: u32) -> f64 {
        h as f64 / self.resolution as f64
    }

}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = EstimatorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(Strategy::Bayes, config.strategy);
        assert_eq!(100, config.grid().count());
        assert_eq!(0.25, config.fraction(25));
    }

    #[test]
    fn from_yaml() {
        let config = EstimatorConfig::from_yaml("strategy: simple\nuncertainty: 0.25\n").unwrap();
        assert_eq!(Strategy::Simple, config.strategy);
        assert_eq!(0.25, config.uncertainty);
        assert_eq!(0.001, config.tie_band);
        assert_eq!(100, config.resolution);
    }

    #[test]
    fn from_yaml_errors() {
        match EstimatorConfig::from_yaml("uncertainty: 2.0\n") {
            Err(CredenceError::InvalidConfig(msg)) => assert!(msg.contains("uncertainty")),
            _ => panic!("wrong error type")
        };

        match EstimatorConfig::from_yaml("tie: 0.1\n") {
            Err(CredenceError::InvalidConfig(_)) => (),
            _ => panic!("unknown fields must be rejected")
        };
    }

    #[test]
    fn builder() {
        let config = EstimatorConfig::new()
            .with_strategy(Strategy::Simple)
            .with_tie_band(0.6);

        assert!(config.validate().is_err());
        assert!(config.with_tie_band(0.05).with_resolution(0).validate().is_err());
    }

    #[test]
    fn single_point_grid() {
        assert!(EstimatorConfig::default().with_resolution(1).validate().is_err());
        assert!(EstimatorConfig::from_yaml("resolution: 1\n").is_err());

        let config = EstimatorConfig::default().with_resolution(2);
        assert!(config.validate().is_ok());
        assert_eq!(vec![ 1, 2 ], config.grid().collect::<Vec<_>>());
    }
}

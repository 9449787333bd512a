//! Defines the `Error` type for the credence library

use std::error::Error;
use std::fmt;
use std::result;

pub type Result<T> = result::Result<T, CredenceError>;

/// Tolerance used when checking that a set of probabilities sums to (at most) one.
pub const PROBABILITY_TOLERANCE: f64 = 1e-6;

#[derive(Clone, Debug, PartialEq)]
pub enum CredenceError {

    /// Represents an operation on a hypothesis that is not part of the `Pmf`
    MissingHypothesis,

    /// Every hypothesis has been refuted by the evidence - the total weight of the `Pmf` is zero
    /// and it cannot be normalized
    DegenerateDistribution,

    /// A numeric query (mean, percentile...) was made against hypotheses that have no numeric
    /// value
    NonNumericHypothesis,

    /// A percentile outside of `[0, 100]` was requested
    InvalidPercentile,

    /// Represents a prior weight that was negative or not finite
    NegativeWeight,

    /// Represents a likelihood that was negative or not finite
    InvalidLikelihood,

    /// The same datum appeared twice in one likelihood table
    DuplicateData,

    /// Two hypotheses with the same name were provided
    DuplicateHypothesis,

    /// The likelihoods of a hypothesis add up to more than one
    LikelihoodSumExceedsOne,

    /// A configuration value was out of range. The value describes the offending field
    InvalidConfig(String),

    /// A general error with the given description
    General(String)

}

impl Error for CredenceError {}

impl fmt::Display for CredenceError {

    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            &CredenceError::MissingHypothesis => write!(f, "The hypothesis is not part of the distribution"),
            &CredenceError::DegenerateDistribution => write!(f, "Every hypothesis was refuted by the data"),
            &CredenceError::NonNumericHypothesis => write!(f, "Requires hypotheses with numeric values"),
            &CredenceError::InvalidPercentile => write!(f, "Percentile must be within [0, 100]"),
            &CredenceError::NegativeWeight => write!(f, "Encountered a negative weight"),
            &CredenceError::InvalidLikelihood => write!(f, "Encountered a negative or non-finite likelihood"),
            &CredenceError::DuplicateData => write!(f, "A datum was encountered twice"),
            &CredenceError::DuplicateHypothesis => write!(f, "A hypothesis was encountered twice"),
            &CredenceError::LikelihoodSumExceedsOne => write!(f, "Likelihoods of a hypothesis sum to more than one"),
            &CredenceError::InvalidConfig(ref field) => write!(f, "Invalid configuration: {}", field),
            &CredenceError::General(ref err) => write!(f, "{}", err)
        }
    }

}


/// Check that a value may be used as a probability weight (finite and non-negative)
pub fn is_valid_weight(w: f64) -> bool {
    w.is_finite() && w >= 0.0
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            format!("{}", CredenceError::InvalidConfig(String::from("tie_band"))),
            "Invalid configuration: tie_band"
        );
        assert_eq!(format!("{}", CredenceError::General(String::from("oops"))), "oops");
    }

    #[test]
    fn valid_weight() {
        assert!(is_valid_weight(0.));
        assert!(is_valid_weight(3.5));
        assert!(! is_valid_weight(-0.1));
        assert!(! is_valid_weight(std::f64::NAN));
        assert!(! is_valid_weight(std::f64::INFINITY));
    }
}

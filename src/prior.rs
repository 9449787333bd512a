//! Module containing the routines that seed a `Pmf` with prior probabilities.

use crate::pmf::{Hypothesis, Pmf};
use crate::util::{CredenceError, Result};

use tracing::trace;


/// Defines possible ways to initialize the prior distribution over a set of hypotheses.
#[derive(Clone, Debug)]
pub enum Prior<'a> {
    /// Every hypothesis is equally likely
    Uniform,

    /// A triangle over the numeric hypotheses: the weight rises linearly from the smallest value
    /// up to `peak`, then falls linearly to the largest value. Both extremes get a weight of zero.
    Triangle {
        peak: f64
    },

    /// A power law ```P(x) ~ x^(-alpha)``` over numeric hypotheses
    PowerLaw {
        alpha: f64
    },

    /// Explicit weights, one for each hypothesis in the order they are given
    Weights(&'a [f64])
}


impl<'a> Prior<'a> {

    /// Build a normalized `Pmf` over `hypotheses`, initialized based on ```self```
    ///
    /// # Errors
    /// * `CredenceError::NonNumericHypothesis` if a numeric prior is requested for labels
    /// * `CredenceError::General` if the number of weights does not match the hypotheses
    /// * `CredenceError::NegativeWeight` if a computed or provided weight is negative
    /// * `CredenceError::DegenerateDistribution` if every weight is zero
    pub fn build<H, I>(&self, hypotheses: I) -> Result<Pmf<H>>
        where H: Hypothesis,
              I: IntoIterator<Item = H>
    {
        let hypotheses: Vec<H> = hypotheses.into_iter().collect();

        let weights: Vec<f64> = match self {
            &Prior::Uniform => vec![1.0; hypotheses.len()],

            &Prior::Triangle { peak } => {
                let xs = numeric_values(&hypotheses)?;
                let low = xs.iter().cloned().fold(std::f64::INFINITY, f64::min);
                let high = xs.iter().cloned().fold(std::f64::NEG_INFINITY, f64::max);

                xs.iter()
                  .map(|&x| if x <= peak { x - low } else { high - x })
                  .collect()
            },

            &Prior::PowerLaw { alpha } => {
                numeric_values(&hypotheses)?.iter().map(|&x| x.powf(-alpha)).collect()
            },

            &Prior::Weights(ws) => {
                if ws.len() != hypotheses.len() {
                    return Err(CredenceError::General(
                        String::from("Invalid arguments. Number of weights must match number of hypotheses")
                    ));
                }

                ws.to_vec()
            }
        };

        let mut pmf = Pmf::from_weights(hypotheses.into_iter().zip(weights))?;
        pmf.normalize()?;

        trace!(prior = ?self, hypotheses = pmf.len(), "built prior");
        Ok(pmf)
    }

}


/// The numeric value of every hypothesis
fn numeric_values<H: Hypothesis>(hypotheses: &[H]) -> Result<Vec<f64>> {
    hypotheses.iter()
              .map(|h| h.numeric().ok_or(CredenceError::NonNumericHypothesis))
              .collect()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform() {
        let pmf = Prior::Uniform.build(vec![ "HA", "HB", "HC", "HD" ]).unwrap();
        for (_, w) in pmf.iter() {
            assert!((w - 0.25).abs() < 1e-12);
        }
    }

    #[test]
    fn triangle() {
        let pmf = Prior::Triangle { peak: 50. }.build(0..=100u32).unwrap();

        assert_eq!(0.0, pmf.probability(&0));
        assert_eq!(0.0, pmf.probability(&100));
        assert_eq!(Some(&50), pmf.maximum_likelihood());
        assert!((pmf.probability(&25) - pmf.probability(&75)).abs() < 1e-12);
        assert!((pmf.mean().unwrap() - 50.0).abs() < 1e-9);
        assert!((pmf.total() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn power_law() {
        let pmf = Prior::PowerLaw { alpha: 1.0 }.build(1..=4u32).unwrap();

        // weights 1, 1/2, 1/3, 1/4
        let total = 1.0 + 0.5 + 1.0 / 3.0 + 0.25;
        assert!((pmf.probability(&2) - 0.5 / total).abs() < 1e-12);
    }

    #[test]
    fn weights() {
        let pmf = Prior::Weights(&[ 3.0, 1.0 ]).build(vec![ "Bowl1", "Bowl2" ]).unwrap();
        assert!((pmf.probability(&"Bowl1") - 0.75).abs() < 1e-12);
    }

    #[test]
    fn errors() {
        let res = Prior::Weights(&[ 1.0 ]).build(vec![ 1, 2 ]);
        match res {
            Err(CredenceError::General(_)) => (),
            _ => panic!("wrong error type")
        };

        let res = Prior::Triangle { peak: 0.5 }.build(vec![ "a", "b" ]);
        assert_eq!(Err(CredenceError::NonNumericHypothesis), res);

        let res = Prior::Weights(&[ 0.0, 0.0 ]).build(vec![ 1, 2 ]);
        assert_eq!(Err(CredenceError::DegenerateDistribution), res);

        let res = Prior::Weights(&[ -1.0, 2.0 ]).build(vec![ 1, 2 ]);
        assert_eq!(Err(CredenceError::NegativeWeight), res);
    }
}

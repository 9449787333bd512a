//! Defines the `Likelihood` capability: ```L(data, hypothesis) = P(data | hypothesis)```
//!
//! Any closure `Fn(&D, &H) -> f64` is a `Likelihood`. Problems that need some state (a
//! reversibility, a lookup table...) implement the trait on a small struct instead.

use crate::util::{CredenceError, Result};


/// The probability of observing `data` under `hypothesis`.
///
/// Implementations must return a finite, non-negative value. They need not be normalized over
/// the data; only relative values across hypotheses matter to an update.
pub trait Likelihood<D, H> {

    fn likelihood(&self, data: &D, hypothesis: &H) -> f64;

}


impl<D, H, F> Likelihood<D, H> for F
    where F: Fn(&D, &H) -> f64
{
    fn likelihood(&self, data: &D, hypothesis: &H) -> f64 {
        self(data, hypothesis)
    }
}


/// The two outcomes of a binary observation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Polarity {
    /// The outcome whose probability is the hypothesis fraction (heads, an upvote, an agreeing
    /// vote...)
    Positive,

    /// The complementary outcome
    Negative
}


impl Polarity {

    /// The opposite outcome
    pub fn reversed(self) -> Self {
        match self {
            Polarity::Positive => Polarity::Negative,
            Polarity::Negative => Polarity::Positive
        }
    }

}


/// A binary observation recorded through a noisy channel.
///
/// The hypothesis is a fraction `x` in `[0, 1]`, the probability that the true outcome is
/// `Positive`. With probability `reversibility` (`r`) the recorded outcome is the opposite of the
/// true one, which gives:
///
/// ```text
/// P(Positive | x) = x * (1 - r) + (1 - x) * r
/// P(Negative | x) = (1 - x) * (1 - r) + x * r
/// ```
///
/// When `r = 0` these reduce exactly to ```x``` and ```1 - x```.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reversible {

    /// Probability that a recorded outcome is flipped
    reversibility: f64

}


impl Reversible {

    /// Construct a channel that flips outcomes with probability `reversibility`
    ///
    /// # Errors
    /// * `CredenceError::InvalidConfig` if `reversibility` is not within `[0, 1]`
    pub fn new(reversibility: f64) -> Result<Self> {
        if ! (0.0..=1.0).contains(&reversibility) {
            return Err(CredenceError::InvalidConfig(
                format!("reversibility must be within [0, 1], got {}", reversibility)
            ));
        }

        Ok(Reversible { reversibility })
    }


    /// A channel that never flips outcomes
    pub fn noiseless() -> Self {
        Reversible { reversibility: 0.0 }
    }


    /// The probability that an outcome is flipped
    pub fn reversibility(&self) -> f64 {
        self.reversibility
    }


    /// A channel equivalent to passing an outcome through `self` and then through `other`.
    ///
    /// The outcome ends up flipped if exactly one of the two channels flips it.
    pub fn then(&self, other: &Reversible) -> Reversible {
        let (r1, r2) = (self.reversibility, other.reversibility);
        Reversible { reversibility: r1 * (1.0 - r2) + r2 * (1.0 - r1) }
    }


    /// The probability of recording `observed` when the true outcome is `Positive` with
    /// probability `x`
    pub fn probability(&self, x: f64, observed: Polarity) -> f64 {
        let r = self.reversibility;
        let positive = x;
        let negative = 1.0 - x;

        match observed {
            Polarity::Positive => positive * (1.0 - r) + negative * r,
            Polarity::Negative => negative * (1.0 - r) + positive * r
        }
    }

}


impl Default for Reversible {
    fn default() -> Self {
        Reversible::noiseless()
    }
}

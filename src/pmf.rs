//! Definition of the pmf module
//!
//! A `Pmf` is a probability mass function: a mapping from a finite set of hypotheses to their
//! (non-negative) weights. It is the structure every other part of credence updates.

use crate::util::{is_valid_weight, CredenceError, Result};

use indexmap::IndexMap;
use itertools::Itertools;
use ndarray::prelude as nd;

use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;


/// A `Hypothesis` is a candidate explanation of the observed data.
///
/// Hypotheses are opaque labels as far as updating is concerned. A hypothesis that lies on a
/// numeric scale reports its value through `numeric`, which enables the summary statistics of a
/// `Pmf` (mean, percentiles, credible intervals).
pub trait Hypothesis: Clone + Eq + Hash + fmt::Debug {

    /// The position of this hypothesis on a numeric scale, if there is one
    fn numeric(&self) -> Option<f64> {
        None
    }

}

macro_rules! numeric_hypothesis {
    ($($t:ty),*) => {
        $(
            impl Hypothesis for $t {
                fn numeric(&self) -> Option<f64> {
                    Some(*self as f64)
                }
            }
        )*
    };
}

numeric_hypothesis!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl Hypothesis for String {}
impl Hypothesis for &'static str {}
impl Hypothesis for char {}
impl<A: Hypothesis, B: Hypothesis> Hypothesis for (A, B) {}


/// A probability mass function over hypotheses of type `H`.
///
/// # Representation
/// Weights are held in insertion order. Iteration, `Display`, and tie-breaking in
/// `maximum_likelihood` all follow the order in which hypotheses were first added.
#[derive(Clone, Debug, PartialEq)]
pub struct Pmf<H: Hypothesis> {

    /// The weight of each hypothesis. Weights are only guaranteed to sum to one directly after
    /// a successful call to `normalize`
    weights: IndexMap<H, f64>

}


impl<H: Hypothesis> Default for Pmf<H> {
    fn default() -> Self {
        Pmf::new()
    }
}


impl<H: Hypothesis> Pmf<H> {

    /// Create an empty `Pmf`
    pub fn new() -> Self {
        Pmf { weights: IndexMap::new() }
    }


    /// Create a `Pmf` that gives every hypothesis a weight of one.
    ///
    /// The result is not normalized. Repeated hypotheses collapse into a single entry.
    pub fn from_hypotheses<I>(hypotheses: I) -> Self
        where I: IntoIterator<Item = H>
    {
        Pmf { weights: hypotheses.into_iter().map(|h| (h, 1.0)).collect() }
    }


    /// Create a `Pmf` from explicit `(hypothesis, weight)` pairs.
    ///
    /// # Errors
    /// * `CredenceError::NegativeWeight` if any weight is negative or not finite
    pub fn from_weights<I>(weights: I) -> Result<Self>
        where I: IntoIterator<Item = (H, f64)>
    {
        let mut pmf = Pmf::new();
        for (h, w) in weights {
            pmf.set(h, w)?;
        }

        Ok(pmf)
    }


    /// Assign the weight of a hypothesis, overwriting any previous weight. Does not normalize.
    ///
    /// # Errors
    /// * `CredenceError::NegativeWeight` if `weight` is negative or not finite
    pub fn set(&mut self, hypothesis: H, weight: f64) -> Result<()> {
        if ! is_valid_weight(weight) {
            return Err(CredenceError::NegativeWeight);
        }

        self.weights.insert(hypothesis, weight);
        Ok(())
    }


    /// Add `weight` to the weight of a hypothesis, adding the hypothesis if it is absent.
    pub fn incr(&mut self, hypothesis: H, weight: f64) -> Result<()> {
        let current = self.probability(&hypothesis);
        self.set(hypothesis, current + weight)
    }


    /// Scale the weight of a hypothesis by `factor`.
    ///
    /// A factor of zero refutes the hypothesis; it stays at zero until it is `set` again.
    ///
    /// # Errors
    /// * `CredenceError::MissingHypothesis` if the hypothesis is not in the `Pmf`
    /// * `CredenceError::InvalidLikelihood` if `factor` is negative or not finite
    pub fn multiply(&mut self, hypothesis: &H, factor: f64) -> Result<()> {
        if ! is_valid_weight(factor) {
            return Err(CredenceError::InvalidLikelihood);
        }

        match self.weights.get_mut(hypothesis) {
            Some(w) => {
                *w *= factor;
                Ok(())
            },
            None => Err(CredenceError::MissingHypothesis)
        }
    }


    /// Normalize the `Pmf` so that its weights sum to one.
    ///
    /// # Returns
    /// the total weight before normalization. After an update this is the probability of the
    /// data relative to the prior mass.
    ///
    /// # Errors
    /// * `CredenceError::DegenerateDistribution` if the total weight is zero, i.e. every
    ///   hypothesis has been refuted (an empty `Pmf` is degenerate as well). The weights are left
    ///   untouched.
    pub fn normalize(&mut self) -> Result<f64> {
        let total = self.total();
        if total == 0.0 {
            return Err(CredenceError::DegenerateDistribution);
        }

        for w in self.weights.values_mut() {
            *w /= total;
        }

        Ok(total)
    }


    /// The weight of a hypothesis, or zero if it is absent
    pub fn probability(&self, hypothesis: &H) -> f64 {
        self.weights.get(hypothesis).cloned().unwrap_or(0.0)
    }


    /// The sum of all weights
    pub fn total(&self) -> f64 {
        self.weights.values().sum()
    }


    /// The number of hypotheses
    pub fn len(&self) -> usize {
        self.weights.len()
    }


    /// Check if the `Pmf` holds no hypotheses
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }


    /// Check if the `Pmf` holds the given hypothesis
    pub fn contains(&self, hypothesis: &H) -> bool {
        self.weights.contains_key(hypothesis)
    }


    /// Iterate over `(hypothesis, weight)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&H, f64)> {
        self.weights.iter().map(|(h, &w)| (h, w))
    }


    /// Iterate over the hypotheses in insertion order
    pub fn hypotheses(&self) -> impl Iterator<Item = &H> {
        self.weights.keys()
    }


    /// The hypothesis with the greatest weight. Ties go to the hypothesis added first.
    pub fn maximum_likelihood(&self) -> Option<&H> {
        let mut best: Option<(&H, f64)> = None;
        for (h, &w) in self.weights.iter() {
            match best {
                Some((_, bw)) if bw >= w => (),
                _ => best = Some((h, w))
            }
        }

        best.map(|(h, _)| h)
    }


    /// The mean of the hypotheses' numeric values: ```sum(value(h) * P(h))```
    ///
    /// # Errors
    /// * `CredenceError::NonNumericHypothesis` if any hypothesis has no numeric value
    pub fn mean(&self) -> Result<f64> {
        Ok(self.numeric_weights()?.iter().map(|&(x, p)| x * p).sum())
    }


    /// Build the cumulative distribution of this `Pmf`
    ///
    /// # Errors
    /// * `CredenceError::NonNumericHypothesis` if any hypothesis has no numeric value
    /// * `CredenceError::DegenerateDistribution` if the total weight is zero
    pub fn cdf(&self) -> Result<Cdf> {
        Cdf::from_weights(self.numeric_weights()?)
    }


    /// The smallest hypothesis value whose cumulative probability is at least `p` percent
    pub fn percentile(&self, p: f64) -> Result<f64> {
        self.cdf()?.percentile(p)
    }


    /// The central interval of hypothesis values containing `p` percent of the mass
    pub fn credible_interval(&self, p: f64) -> Result<(f64, f64)> {
        self.cdf()?.credible_interval(p)
    }


    /// The numeric value and weight of every hypothesis
    fn numeric_weights(&self) -> Result<Vec<(f64, f64)>> {
        self.weights
            .iter()
            .map(|(h, &w)| h.numeric().map(|x| (x, w)).ok_or(CredenceError::NonNumericHypothesis))
            .collect()
    }

}


impl<H: Hypothesis + fmt::Display> fmt::Display for Pmf<H> {

    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (h, w) in self.weights.iter() {
            writeln!(f, "{} {}", h, w)?;
        }

        Ok(())
    }

}


/// A cumulative distribution function over numeric hypothesis values.
///
/// Values are sorted ascending; `probs[i]` is the probability mass of all values `<= values[i]`.
#[derive(Clone, Debug)]
pub struct Cdf {

    /// The sorted hypothesis values
    values: nd::Array1<f64>,

    /// The cumulative probability at each value
    probs: nd::Array1<f64>

}


impl Cdf {

    /// Build a `Cdf` from unsorted, possibly unnormalized `(value, weight)` pairs
    fn from_weights(weights: Vec<(f64, f64)>) -> Result<Self> {
        let total: f64 = weights.iter().map(|&(_, w)| w).sum();
        if total == 0.0 {
            return Err(CredenceError::DegenerateDistribution);
        }

        let (values, probs): (Vec<f64>, Vec<f64>) = weights
            .into_iter()
            .sorted_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal))
            .map(|(x, w)| (x, w / total))
            .unzip();

        let mut probs = nd::Array1::from(probs);
        probs.accumulate_axis_inplace(nd::Axis(0), |&prev, curr| *curr += prev);

        Ok(Cdf { values: nd::Array1::from(values), probs })
    }


    /// The sorted hypothesis values
    pub fn values(&self) -> &nd::Array1<f64> {
        &self.values
    }


    /// The cumulative probabilities, aligned with `values`
    pub fn probs(&self) -> &nd::Array1<f64> {
        &self.probs
    }


    /// The cumulative probability of all values `<= x`
    pub fn probability(&self, x: f64) -> f64 {
        match self.values.iter().rposition(|&v| v <= x) {
            Some(idx) => self.probs[idx],
            None => 0.0
        }
    }


    /// The smallest value whose cumulative probability is `>= p`, for `p` in `[0, 1]`
    pub fn value(&self, p: f64) -> Result<f64> {
        if ! (0.0..=1.0).contains(&p) {
            return Err(CredenceError::InvalidPercentile);
        }

        // rounding may leave the final cumulative probability just shy of 1
        let idx = self.probs
                      .iter()
                      .position(|&c| c >= p)
                      .unwrap_or(self.probs.len() - 1);

        Ok(self.values[idx])
    }


    /// The smallest value whose cumulative probability is at least `p` percent
    ///
    /// # Errors
    /// * `CredenceError::InvalidPercentile` if `p` is not within `[0, 100]`
    pub fn percentile(&self, p: f64) -> Result<f64> {
        self.value(p / 100.0)
    }


    /// The central interval containing `p` percent of the probability mass:
    /// ```(percentile(50 - p/2), percentile(50 + p/2))```
    pub fn credible_interval(&self, p: f64) -> Result<(f64, f64)> {
        if ! (0.0..=100.0).contains(&p) {
            return Err(CredenceError::InvalidPercentile);
        }

        let prob = (100.0 - p) / 2.0;
        Ok((self.percentile(prob)?, self.percentile(100.0 - prob)?))
    }

}


// Unit tests
#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn set_overwrites() {
        let mut pmf = Pmf::new();
        pmf.set("a", 1.0).unwrap();
        pmf.set("b", 2.0).unwrap();
        pmf.set("a", 5.0).unwrap();

        assert_eq!(2, pmf.len());
        assert_eq!(5.0, pmf.probability(&"a"));
        assert_eq!(7.0, pmf.total());
        assert_eq!(0.0, pmf.probability(&"c"));
    }

    #[test]
    fn set_negative() {
        let mut pmf = Pmf::new();
        assert_eq!(Err(CredenceError::NegativeWeight), pmf.set(1, -1.0));
        assert!(pmf.is_empty());

        let res = Pmf::from_weights(vec![ (1, 0.5), (2, std::f64::NAN) ]);
        assert_eq!(Err(CredenceError::NegativeWeight), res);
    }

    #[test]
    fn incr() {
        let mut pmf = Pmf::new();
        pmf.incr('x', 0.25).unwrap();
        pmf.incr('x', 0.5).unwrap();
        assert!((pmf.probability(&'x') - 0.75).abs() < EPSILON);
    }

    #[test]
    fn multiply() {
        let mut pmf = Pmf::from_hypotheses(vec![ 1, 2, 3 ]);
        pmf.multiply(&2, 0.5).unwrap();
        pmf.multiply(&3, 0.0).unwrap();

        assert_eq!(1.0, pmf.probability(&1));
        assert_eq!(0.5, pmf.probability(&2));
        assert_eq!(0.0, pmf.probability(&3));
        assert!(pmf.contains(&3));

        assert_eq!(Err(CredenceError::MissingHypothesis), pmf.multiply(&4, 2.0));
        assert_eq!(Err(CredenceError::InvalidLikelihood), pmf.multiply(&1, -2.0));
    }

    #[test]
    fn normalize() {
        let mut pmf = Pmf::from_weights(vec![ (1, 3.0), (2, 1.0), (5, 4.0) ]).unwrap();
        let total = pmf.normalize().unwrap();

        assert_eq!(8.0, total);
        assert!((pmf.total() - 1.0).abs() < EPSILON);
        assert!((pmf.probability(&5) - 0.5).abs() < EPSILON);
    }

    #[test]
    fn normalize_degenerate() {
        let mut pmf = Pmf::from_hypotheses(vec![ "a", "b" ]);
        pmf.multiply(&"a", 0.0).unwrap();
        pmf.multiply(&"b", 0.0).unwrap();

        assert_eq!(Err(CredenceError::DegenerateDistribution), pmf.normalize());
        assert!(pmf.iter().all(|(_, w)| w == 0.0));

        let mut empty: Pmf<u32> = Pmf::new();
        assert_eq!(Err(CredenceError::DegenerateDistribution), empty.normalize());
    }

    #[test]
    fn maximum_likelihood() {
        let pmf = Pmf::from_weights(vec![ ("a", 0.2), ("b", 0.4), ("c", 0.4) ]).unwrap();
        assert_eq!(Some(&"b"), pmf.maximum_likelihood());

        let empty: Pmf<&str> = Pmf::new();
        assert_eq!(None, empty.maximum_likelihood());
    }

    #[test]
    fn mean() {
        let mut pmf = Pmf::from_hypotheses(1..5);
        pmf.normalize().unwrap();
        assert!((pmf.mean().unwrap() - 2.5).abs() < EPSILON);

        let labels = Pmf::from_hypotheses(vec![ String::from("Bowl1") ]);
        assert_eq!(Err(CredenceError::NonNumericHypothesis), labels.mean());
        assert!(labels.percentile(50.).is_err());
    }

    #[test]
    fn percentile() {
        // inserted out of order on purpose
        let pmf = Pmf::from_weights(vec![ (30, 0.25), (10, 0.25), (20, 0.5) ]).unwrap();

        assert_eq!(10.0, pmf.percentile(0.).unwrap());
        assert_eq!(10.0, pmf.percentile(25.).unwrap());
        assert_eq!(20.0, pmf.percentile(26.).unwrap());
        assert_eq!(20.0, pmf.percentile(75.).unwrap());
        assert_eq!(30.0, pmf.percentile(100.).unwrap());
        assert_eq!(Err(CredenceError::InvalidPercentile), pmf.percentile(101.));
    }

    #[test]
    fn credible_interval() {
        let mut pmf = Pmf::from_hypotheses(0..10u32);
        pmf.normalize().unwrap();

        let (low, high) = pmf.credible_interval(90.).unwrap();
        assert_eq!(0.0, low);
        assert_eq!(9.0, high);

        let (low, high) = pmf.credible_interval(50.).unwrap();
        assert_eq!(2.0, low);
        assert_eq!(7.0, high);
    }

    #[test]
    fn cdf() {
        let pmf = Pmf::from_weights(vec![ (2, 1.0), (1, 1.0), (4, 2.0) ]).unwrap();
        let cdf = pmf.cdf().unwrap();

        assert_eq!(&nd::arr1(&[ 1., 2., 4. ]), cdf.values());
        assert!((cdf.probs()[2] - 1.0).abs() < EPSILON);
        assert_eq!(0.0, cdf.probability(0.5));
        assert!((cdf.probability(3.0) - 0.5).abs() < EPSILON);
        assert!((cdf.probability(10.0) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn display() {
        let pmf = Pmf::from_weights(vec![ ("HA", 0.5), ("HB", 0.5) ]).unwrap();
        assert_eq!("HA 0.5\nHB 0.5\n", format!("{}", pmf));
    }
}

//! Sequential Bayesian updating of a `Pmf`.
//!
//! An update multiplies the weight of every hypothesis by the likelihood of the observed datum
//! under that hypothesis, then normalizes. A batch of data is folded in one datum at a time,
//! normalizing after every step to keep the intermediate weights bounded.

use crate::likelihood::Likelihood;
use crate::pmf::{Hypothesis, Pmf};
use crate::util::{is_valid_weight, CredenceError, Result};

use tracing::{trace, warn};

use std::fmt;


/// Update `pmf` in place with a single observation.
///
/// The likelihood of every hypothesis is computed before any weight changes, so an invalid
/// likelihood leaves the `Pmf` untouched.
///
/// # Returns
/// the normalizing constant, ```sum_h P(h) * L(datum, h)```
///
/// # Errors
/// * `CredenceError::InvalidLikelihood` if the likelihood function returned a negative or
///   non-finite value
/// * `CredenceError::DegenerateDistribution` if the datum is impossible under every hypothesis.
///   This is terminal for the `Pmf`: every weight is zero afterwards.
pub fn update<D, H, L>(pmf: &mut Pmf<H>, likelihood: &L, datum: &D) -> Result<f64>
    where H: Hypothesis,
          L: Likelihood<D, H> + ?Sized
{
    let factors: Vec<(H, f64)> = pmf.hypotheses()
                                    .map(|h| (h.clone(), likelihood.likelihood(datum, h)))
                                    .collect();

    if factors.iter().any(|&(_, l)| ! is_valid_weight(l)) {
        return Err(CredenceError::InvalidLikelihood);
    }

    for (h, l) in factors.iter() {
        pmf.multiply(h, *l)?;
    }

    match pmf.normalize() {
        Ok(total) => {
            trace!(evidence = total, "updated pmf");
            Ok(total)
        },
        Err(e) => {
            warn!(hypotheses = pmf.len(), "every hypothesis was refuted by the data");
            Err(e)
        }
    }
}


/// Update `pmf` in place with a sequence of observations, left to right.
///
/// # Returns
/// the product of the normalizing constants of every step, i.e. the probability of the whole
/// sequence under the prior. This underflows to zero on long sequences.
///
/// # Errors
/// The first error encountered by `update`. Data after the failing datum are not consumed.
pub fn update_set<'d, D, H, L, I>(pmf: &mut Pmf<H>, likelihood: &L, data: I) -> Result<f64>
    where D: 'd,
          H: Hypothesis,
          L: Likelihood<D, H> + ?Sized,
          I: IntoIterator<Item = &'d D>
{
    let mut evidence = 1.0;
    for datum in data {
        evidence *= update(pmf, likelihood, datum)?;
    }

    Ok(evidence)
}


/// A `Suite` bundles a `Pmf` with the `Likelihood` used to update it.
///
/// This is the usual shape of a toy problem: build a prior over the hypotheses, then feed it
/// observations.
pub struct Suite<H: Hypothesis, L> {

    /// The current distribution over the hypotheses
    pmf: Pmf<H>,

    /// How likely each datum is under each hypothesis
    likelihood: L,

    /// A label for reports
    name: String

}


impl<H: Hypothesis, L> Suite<H, L> {

    /// Construct a new `Suite` starting from the prior `pmf`
    pub fn new(name: &str, pmf: Pmf<H>, likelihood: L) -> Self {
        Suite { pmf, likelihood, name: String::from(name) }
    }


    /// Update the `Suite` with a single observation. See `update`
    pub fn update<D>(&mut self, datum: &D) -> Result<f64>
        where L: Likelihood<D, H>
    {
        trace!(suite = %self.name, "updating suite");
        update(&mut self.pmf, &self.likelihood, datum)
    }


    /// Update the `Suite` with a sequence of observations. See `update_set`
    pub fn update_set<'d, D, I>(&mut self, data: I) -> Result<f64>
        where D: 'd,
              L: Likelihood<D, H>,
              I: IntoIterator<Item = &'d D>
    {
        update_set(&mut self.pmf, &self.likelihood, data)
    }


    /// The current distribution
    pub fn pmf(&self) -> &Pmf<H> {
        &self.pmf
    }


    /// The likelihood function of this `Suite`
    pub fn likelihood(&self) -> &L {
        &self.likelihood
    }


    /// The label of this `Suite`
    pub fn name(&self) -> &str {
        &self.name
    }


    /// Consume the `Suite`, returning the current distribution
    pub fn into_pmf(self) -> Pmf<H> {
        self.pmf
    }

}


impl<H, L> fmt::Display for Suite<H, L>
    where H: Hypothesis + fmt::Display
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        write!(f, "{}", self.pmf)
    }
}

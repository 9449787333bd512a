//! A one-shot Bayes solver over named hypotheses.
//!
//! Each `Hypo` carries its own table of data likelihoods. `solve` starts from equal priors and
//! returns the posterior ```P(H | D)``` over the hypothesis names after a single datum.
//!
//! Likelihood tables are validated, never rescaled: the entries of a table must be non-negative
//! and sum to at most one. A hypothesis may leave part of its mass unassigned (Monty Hall's
//! "car behind A" hypothesis only accounts for half of the data), and a datum missing from a
//! table has likelihood zero.

use crate::pmf::{Hypothesis, Pmf};
use crate::util::{is_valid_weight, CredenceError, Result, PROBABILITY_TOLERANCE};

use indexmap::IndexMap;
use tracing::debug;

use std::collections::HashSet;


/// A named hypothesis and the likelihood of each datum under it
#[derive(Clone, Debug)]
pub struct Hypo<D: Hypothesis> {

    /// The name of the hypothesis
    name: String,

    /// ```P(datum | self)``` for every datum the hypothesis accounts for
    table: IndexMap<D, f64>

}


impl<D: Hypothesis> Hypo<D> {

    /// Create a new `Hypo` from `(datum, likelihood)` pairs
    ///
    /// # Errors
    /// * `CredenceError::DuplicateData` if a datum appears more than once
    /// * `CredenceError::InvalidLikelihood` if a likelihood is negative or not finite
    /// * `CredenceError::LikelihoodSumExceedsOne` if the likelihoods sum to more than one
    pub fn new<I>(name: &str, likelihoods: I) -> Result<Self>
        where I: IntoIterator<Item = (D, f64)>
    {
        let mut table = IndexMap::new();

        for (datum, l) in likelihoods {
            if ! is_valid_weight(l) {
                return Err(CredenceError::InvalidLikelihood);
            }

            if table.insert(datum, l).is_some() {
                return Err(CredenceError::DuplicateData);
            }
        }

        if table.values().sum::<f64>() > 1.0 + PROBABILITY_TOLERANCE {
            return Err(CredenceError::LikelihoodSumExceedsOne);
        }

        Ok(Hypo { name: String::from(name), table })
    }


    /// The name of this `Hypo`
    pub fn name(&self) -> &str {
        &self.name
    }


    /// Every datum this `Hypo` accounts for
    pub fn all_data(&self) -> impl Iterator<Item = &D> {
        self.table.keys()
    }


    /// The likelihood of `datum` under this `Hypo`; zero if the datum is not in the table
    pub fn likelihood(&self, datum: &D) -> f64 {
        self.table.get(datum).cloned().unwrap_or(0.0)
    }

}


/// Calculate ```P(H | datum)``` for every hypothesis, assuming equal priors.
///
/// # Returns
/// a normalized `Pmf` over the hypothesis names, in the order the hypotheses were given
///
/// # Errors
/// * `CredenceError::DuplicateHypothesis` if two hypotheses share a name
/// * `CredenceError::DegenerateDistribution` if `hypos` is empty, or the datum has likelihood
///   zero under every hypothesis
pub fn solve<D: Hypothesis>(hypos: &[Hypo<D>], datum: &D) -> Result<Pmf<String>> {
    let mut seen = HashSet::new();
    if ! hypos.iter().all(|h| seen.insert(h.name())) {
        return Err(CredenceError::DuplicateHypothesis);
    }

    let mut pmf = Pmf::from_hypotheses(hypos.iter().map(|h| String::from(h.name())));

    // Equal priors are already proportional; normalizing here keeps the protocol identical to a
    // sequential update
    pmf.normalize()?;

    for h in hypos {
        pmf.multiply(&String::from(h.name()), h.likelihood(datum))?;
    }

    let evidence = pmf.normalize()?;
    debug!(hypotheses = hypos.len(), evidence, datum = ?datum, "solved");

    Ok(pmf)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hypo() {
        let h = Hypo::new("Bowl1", vec![ ("vanilla", 0.75), ("chocolate", 0.25) ]).unwrap();

        assert_eq!("Bowl1", h.name());
        assert_eq!(0.75, h.likelihood(&"vanilla"));
        assert_eq!(0.0, h.likelihood(&"strawberry"));
        assert_eq!(vec![ &"vanilla", &"chocolate" ], h.all_data().collect::<Vec<_>>());
    }

    #[test]
    fn hypo_errors() {
        let res = Hypo::new("Bowl1", vec![ ("vanilla", 0.5), ("vanilla", 0.25) ]);
        assert_eq!(Some(CredenceError::DuplicateData), res.err());

        let res = Hypo::new("Bowl1", vec![ ("vanilla", -0.5) ]);
        assert_eq!(Some(CredenceError::InvalidLikelihood), res.err());

        let res = Hypo::new("Bowl1", vec![ ("vanilla", 30.), ("chocolate", 10.) ]);
        assert_eq!(Some(CredenceError::LikelihoodSumExceedsOne), res.err());

        // within tolerance
        assert!(Hypo::new("Bowl1", vec![ ("a", 1. / 3.), ("b", 1. / 3.), ("c", 1. / 3.) ]).is_ok());
    }

    #[test]
    fn solve_cookie() {
        let hypos = vec![
            Hypo::new("Bowl1", vec![ ("vanilla", 30. / 40.), ("chocolate", 10. / 40.) ]).unwrap(),
            Hypo::new("Bowl2", vec![ ("vanilla", 20. / 40.), ("chocolate", 20. / 40.) ]).unwrap()
        ];

        let pmf = solve(&hypos, &"vanilla").unwrap();
        assert!((pmf.probability(&String::from("Bowl1")) - 0.6).abs() < 1e-4);
        assert!((pmf.probability(&String::from("Bowl2")) - 0.4).abs() < 1e-4);
    }

    #[test]
    fn solve_monty_hall() {
        let hypos = vec![
            Hypo::new("HA", vec![ ("data", 0.5) ]).unwrap(),
            Hypo::new("HB", vec![ ("data", 0.) ]).unwrap(),
            Hypo::new("HC", vec![ ("data", 1.) ]).unwrap()
        ];

        let pmf = solve(&hypos, &"data").unwrap();
        assert!((pmf.probability(&String::from("HA")) - 0.33333).abs() < 1e-4);
        assert_eq!(0.0, pmf.probability(&String::from("HB")));
        assert!((pmf.probability(&String::from("HC")) - 0.66666).abs() < 1e-4);
    }

    #[test]
    fn solve_errors() {
        let hypos = vec![
            Hypo::new("HA", vec![ ("data", 0.5) ]).unwrap(),
            Hypo::new("HA", vec![ ("data", 0.5) ]).unwrap()
        ];
        assert_eq!(Some(CredenceError::DuplicateHypothesis), solve(&hypos, &"data").err());

        let hypos = vec![ Hypo::new("HA", vec![ ("data", 0.5) ]).unwrap() ];
        assert_eq!(Some(CredenceError::DegenerateDistribution), solve(&hypos, &"other").err());

        let hypos: Vec<Hypo<&str>> = vec![];
        assert_eq!(Some(CredenceError::DegenerateDistribution), solve(&hypos, &"data").err());
    }
}

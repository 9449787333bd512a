//! Discrete Bayesian inference over finite hypothesis sets.
//!
//! A `Pmf` holds a distribution over hypotheses, a `Prior` seeds it, and a `Likelihood` updates it
//! one observation at a time. `solve` answers single-observation problems from per-hypothesis
//! likelihood tables, and `reliability` jointly estimates link quality and voter reliability
//! from a stream of votes.

pub mod util;
pub mod pmf;
pub mod prior;
pub mod likelihood;
pub mod suite;
pub mod solver;
pub mod reliability;
pub mod problems;

pub use util::{Result, CredenceError};
pub use pmf::{Cdf, Hypothesis, Pmf};
pub use prior::Prior;
pub use likelihood::{Likelihood, Polarity, Reversible};
pub use suite::{update, update_set, Suite};
pub use solver::{solve, Hypo};
pub use reliability::{Estimator, EstimatorConfig, Strategy, VoteDir};

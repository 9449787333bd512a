//! Defines a `User`, a voter whose reliability is estimated from how their votes compare with
//! the assessed quality of the links they voted on.

use super::config::{EstimatorConfig, Strategy};
use super::vote::{Judgement, LinkId, UserId};
use crate::likelihood::Reversible;
use crate::pmf::Pmf;
use crate::prior::Prior;
use crate::suite;
use crate::util::Result;

use indexmap::IndexSet;
use tracing::trace;


/// How a user's reliability is held
#[derive(Clone, Debug)]
enum Reliability {

    /// A `Pmf` over grid points; grid point `h` stands for reliability `h / resolution`
    Bayes {
        pmf: Pmf<u32>,
        resolution: u32
    },

    /// The fraction of judged votes that agree with the link's quality
    Ratio(Option<f64>)

}


#[derive(Clone, Debug)]
pub struct User {

    /// The id of the `User`
    id: UserId,

    /// The current reliability estimate
    reliability: Reliability,

    /// The links this `User` has voted on, in the order of their first vote
    links: IndexSet<LinkId>,

    /// The number of votes that could be judged at the last refit
    judged: usize

}


impl User {

    /// Construct a new `User` with no votes
    pub fn new(id: UserId, config: &EstimatorConfig) -> Result<Self> {
        let reliability = match config.strategy {
            Strategy::Bayes => Reliability::Bayes {
                pmf: Prior::Uniform.build(config.grid())?,
                resolution: config.resolution
            },
            Strategy::Simple => Reliability::Ratio(None)
        };

        Ok(User { id, reliability, links: IndexSet::new(), judged: 0 })
    }


    pub fn id(&self) -> UserId {
        self.id
    }


    /// The estimated probability that this `User` votes the way a link's quality calls for.
    ///
    /// `None` until at least one of the user's votes could be judged
    pub fn reliability(&self) -> Option<f64> {
        if self.judged == 0 {
            return None;
        }

        match self.reliability {
            Reliability::Bayes { ref pmf, resolution } => pmf.mean().ok().map(|m| m / resolution as f64),
            Reliability::Ratio(ratio) => ratio
        }
    }


    /// The reliability `Pmf` under the Bayes strategy
    pub fn reliability_pmf(&self) -> Option<&Pmf<u32>> {
        match self.reliability {
            Reliability::Bayes { ref pmf, .. } => Some(pmf),
            Reliability::Ratio(_) => None
        }
    }


    /// The number of this user's votes that could be judged
    pub fn judged(&self) -> usize {
        self.judged
    }


    /// The links this `User` has voted on
    pub fn links(&self) -> impl Iterator<Item = LinkId> + '_ {
        self.links.iter().cloned()
    }


    /// Remember that this `User` voted on `link`
    pub(crate) fn record_link(&mut self, link: LinkId) {
        self.links.insert(link);
    }


    /// Re-estimate the reliability of this `User` from scratch, given a verdict on each of the
    /// user's votes.
    ///
    /// Under the Bayes strategy the reliability `Pmf` restarts from a uniform prior and is updated
    /// with every verdict, observed through `measurement`. Unjudgable votes have a constant
    /// likelihood and leave the `Pmf` unchanged.
    pub(crate) fn refit(&mut self, judgements: &[Judgement], measurement: &Reversible) -> Result<()> {
        self.judged = judgements.iter().filter(|&&j| j != Judgement::Unjudgable).count();

        match self.reliability {
            Reliability::Bayes { ref mut pmf, resolution } => {
                let mut fresh = Prior::Uniform.build(pmf.hypotheses().cloned())?;

                let likelihood = |j: &Judgement, h: &u32| match j.polarity() {
                    Some(p) => measurement.probability(*h as f64 / resolution as f64, p),
                    None => 1.0
                };

                suite::update_set(&mut fresh, &likelihood, judgements)?;
                *pmf = fresh;
            },
            Reliability::Ratio(ref mut ratio) => {
                let agree = judgements.iter().filter(|&&j| j == Judgement::Agree).count();
                *ratio = if self.judged == 0 {
                    None
                } else {
                    Some(agree as f64 / self.judged as f64)
                };
            }
        }

        trace!(user = self.id, judged = self.judged, "refit reliability");
        Ok(())
    }

}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_user() {
        let user = User::new(3, &EstimatorConfig::default()).unwrap();
        assert_eq!(3, user.id());
        assert_eq!(None, user.reliability());
        assert_eq!(100, user.reliability_pmf().unwrap().len());
    }

    #[test]
    fn refit_bayes() {
        let mut user = User::new(3, &EstimatorConfig::default()).unwrap();
        let judgements = vec![ Judgement::Agree, Judgement::Agree, Judgement::Disagree ];
        user.refit(&judgements, &Reversible::noiseless()).unwrap();

        assert_eq!(3, user.judged());
        let r = user.reliability().unwrap();
        assert!(r > 0.5 && r < 1.0);

        // refitting starts over instead of accumulating
        user.refit(&judgements, &Reversible::noiseless()).unwrap();
        assert!((r - user.reliability().unwrap()).abs() < 1e-12);
    }

    #[test]
    fn refit_noiseless_matches_direct_model() {
        let mut user = User::new(3, &EstimatorConfig::default()).unwrap();
        let judgements = vec![
            Judgement::Agree, Judgement::Disagree, Judgement::Unjudgable, Judgement::Agree, Judgement::Agree
        ];
        user.refit(&judgements, &Reversible::new(0.0).unwrap()).unwrap();

        let mut direct = Prior::Uniform.build(1..=100u32).unwrap();
        let model = |j: &Judgement, h: &u32| {
            let x = *h as f64 / 100.;
            match j {
                Judgement::Agree => x,
                Judgement::Disagree => 1. - x,
                Judgement::Unjudgable => 1.
            }
        };
        suite::update_set(&mut direct, &model, &judgements).unwrap();

        let pmf = user.reliability_pmf().unwrap();
        for (h, w) in direct.iter() {
            assert!((w - pmf.probability(h)).abs() < 1e-12);
        }
    }

    #[test]
    fn refit_unjudgable() {
        let mut user = User::new(3, &EstimatorConfig::default()).unwrap();
        let prior = user.reliability_pmf().unwrap().clone();
        user.refit(&[ Judgement::Unjudgable, Judgement::Unjudgable ], &Reversible::noiseless()).unwrap();

        assert_eq!(None, user.reliability());
        for (h, w) in prior.iter() {
            assert!((w - user.reliability_pmf().unwrap().probability(h)).abs() < 1e-12);
        }
    }

    #[test]
    fn refit_simple() {
        let config = EstimatorConfig::default().with_strategy(Strategy::Simple);
        let mut user = User::new(3, &config).unwrap();
        user.refit(
            &[ Judgement::Agree, Judgement::Unjudgable, Judgement::Disagree, Judgement::Agree ],
            &Reversible::noiseless()
        ).unwrap();

        assert_eq!(3, user.judged());
        assert!((user.reliability().unwrap() - 2. / 3.).abs() < 1e-12);
        assert!(user.reliability_pmf().is_none());
    }

    #[test]
    fn links() {
        let mut user = User::new(3, &EstimatorConfig::default()).unwrap();
        user.record_link(10);
        user.record_link(4);
        user.record_link(10);
        assert_eq!(vec![ 10, 4 ], user.links().collect::<Vec<_>>());
    }
}

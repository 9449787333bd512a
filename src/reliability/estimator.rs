//! Defines the `Estimator`, the context object of one voting simulation.
//!
//! The `Estimator` owns every `User` and `Link` of the run. Each call to `vote` stages the vote
//! on its link, commits it (updating the link's quality with the voter's current reliability),
//! and then re-estimates the reliability of the users whose votes may now be judged
//! differently.

use super::config::{EstimatorConfig, Strategy};
use super::link::{CommittedVote, Link};
use super::user::User;
use super::vote::{Judgement, LinkId, UserId, Vote, VoteDir};
use crate::likelihood::Reversible;
use crate::util::{CredenceError, Result};

use indexmap::IndexMap;
use itertools::Itertools;
use tracing::debug;

use std::fmt;


pub struct Estimator {

    /// The parameters of this run
    config: EstimatorConfig,

    /// The measurement channel every vote passes through
    measurement: Reversible,

    /// Every `User` seen so far, in order of first appearance
    users: IndexMap<UserId, User>,

    /// Every `Link` seen so far, in order of first appearance
    links: IndexMap<LinkId, Link>

}


impl Estimator {

    /// Construct a new `Estimator` with no users or links
    ///
    /// # Errors
    /// * `CredenceError::InvalidConfig` if the configuration does not validate
    pub fn new(config: EstimatorConfig) -> Result<Self> {
        config.validate()?;
        let measurement = config.measurement()?;

        Ok(Estimator { config, measurement, users: IndexMap::new(), links: IndexMap::new() })
    }


    /// The parameters of this run
    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }


    /// Record a vote by `user_id` on `link_id`, creating either on first reference.
    ///
    /// # Errors
    /// Any error from the quality or reliability updates. A failed vote may leave the link or its
    /// voters partially updated.
    pub fn vote(&mut self, user_id: UserId, link_id: LinkId, dir: VoteDir) -> Result<()> {
        if ! self.users.contains_key(&user_id) {
            self.users.insert(user_id, User::new(user_id, &self.config)?);
        }
        if ! self.links.contains_key(&link_id) {
            self.links.insert(link_id, Link::new(link_id, &self.config)?);
        }

        debug!(user = user_id, link = link_id, dir = %dir, "vote");

        {
            let users = &self.users;
            let config = &self.config;
            let measurement = &self.measurement;
            let link = self.links.get_mut(&link_id).ok_or_else(|| missing("link", link_id))?;

            link.stage(Vote::new(user_id, dir));
            link.commit(|voter| voter_channel(config, measurement, users.get(&voter)))?;
        }

        self.users
            .get_mut(&user_id)
            .ok_or_else(|| missing("user", user_id))?
            .record_link(link_id);

        // Bayes judgements are fixed by each vote's quality_before, so only the new vote can
        // change a verdict. The simple ratio moves for every voter of the link
        let voters: Vec<UserId> = match self.config.strategy {
            Strategy::Bayes => vec![ user_id ],
            Strategy::Simple => self.links[&link_id].voters().collect()
        };
        for voter in voters {
            self.refit_user(voter)?;
        }

        Ok(())
    }


    /// Look up a `User`
    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.get(&id)
    }


    /// Look up a `Link`
    pub fn link(&self, id: LinkId) -> Option<&Link> {
        self.links.get(&id)
    }


    /// Every `User`, in order of first appearance
    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }


    /// Every `Link`, in order of first appearance
    pub fn links(&self) -> impl Iterator<Item = &Link> {
        self.links.values()
    }


    /// Summarize every user and link, each sorted by id
    pub fn summary(&self) -> Summary {
        let users = self.users
                        .values()
                        .sorted_by_key(|u| u.id())
                        .map(|u| UserSummary { id: u.id(), votes: u.links().count(), reliability: u.reliability() })
                        .collect();

        let links = self.links
                        .values()
                        .sorted_by_key(|l| l.id())
                        .map(|l| {
                            let (up, down) = l.tally();
                            LinkSummary { id: l.id(), up, down, quality: l.quality() }
                        })
                        .collect();

        Summary { users, links }
    }


    /// The quality a committed vote is judged against.
    ///
    /// The Bayes strategy uses the quality the link had before the vote was committed, so a vote
    /// never counts as evidence of its own correctness. The simple strategy uses the link's
    /// current quality.
    fn assessed_quality(&self, link: &Link, vote: &CommittedVote) -> Option<f64> {
        match self.config.strategy {
            Strategy::Bayes => vote.quality_before,
            Strategy::Simple => link.quality()
        }
    }


    /// Re-estimate a user's reliability from every vote they have cast
    fn refit_user(&mut self, id: UserId) -> Result<()> {
        let user = self.users.get(&id).ok_or_else(|| missing("user", id))?;

        let judgements: Vec<Judgement> = user.links()
            .filter_map(|l| self.links.get(&l))
            .filter_map(|link| {
                link.vote_of(id).map(|v| {
                    Judgement::of(v.dir, self.assessed_quality(link, v), self.config.tie_band)
                })
            })
            .collect();

        let measurement = self.measurement;
        self.users
            .get_mut(&id)
            .ok_or_else(|| missing("user", id))?
            .refit(&judgements, &measurement)
    }

}


/// The channel a voter's votes pass through: the voter's own chance of voting against a link's
/// merit, followed by the measurement channel
fn voter_channel(config: &EstimatorConfig, measurement: &Reversible, user: Option<&User>) -> Result<Reversible> {
    if ! config.weight_by_reliability {
        return Ok(*measurement);
    }

    let reliability = user.and_then(|u| u.reliability()).unwrap_or(config.default_reliability);
    // a pmf mean may stray from [0, 1] by rounding
    let voter = Reversible::new((1.0 - reliability).max(0.0).min(1.0))?;

    Ok(voter.then(measurement))
}


fn missing(kind: &str, id: u64) -> CredenceError {
    CredenceError::General(format!("Unknown {} {}", kind, id))
}


/// A report row for one user
#[derive(Clone, Debug, PartialEq)]
pub struct UserSummary {
    pub id: UserId,
    pub votes: usize,
    pub reliability: Option<f64>
}


/// A report row for one link
#[derive(Clone, Debug, PartialEq)]
pub struct LinkSummary {
    pub id: LinkId,
    pub up: usize,
    pub down: usize,
    pub quality: Option<f64>
}


/// The state of every user and link of an `Estimator`
#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    pub users: Vec<UserSummary>,
    pub links: Vec<LinkSummary>
}


fn fmt_estimate(estimate: Option<f64>) -> String {
    match estimate {
        Some(v) => format!("{:.4}", v),
        None => String::from("-")
    }
}


impl fmt::Display for Summary {

    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Users")?;
        for u in self.users.iter() {
            writeln!(f, "  user: {}, votes: {}, reliability: {}", u.id, u.votes, fmt_estimate(u.reliability))?;
        }

        writeln!(f, "Links")?;
        for l in self.links.iter() {
            writeln!(f, "  link: {}, up: {}, down: {}, quality: {}", l.id, l.up, l.down, fmt_estimate(l.quality))?;
        }

        Ok(())
    }

}

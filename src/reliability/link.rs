//! Defines a `Link`, the thing users vote on.
//!
//! Votes reach a link in two phases. `stage` buffers a vote without touching the link's
//! quality; `commit` folds every staged vote into the quality estimate and then moves them into
//! the committed history. Each committed vote remembers the quality the link had before that
//! vote was committed, so the vote can later be judged without counting itself.

use super::config::{EstimatorConfig, Strategy};
use super::vote::{LinkId, UserId, Vote, VoteDir};
use crate::likelihood::Reversible;
use crate::pmf::Pmf;
use crate::prior::Prior;
use crate::suite;
use crate::util::Result;

use indexmap::IndexMap;
use tracing::debug;


/// A vote that has been folded into a link's quality
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CommittedVote {

    /// The direction of the vote
    pub dir: VoteDir,

    /// The quality of the link before this vote was committed. `None` if it was the first vote
    pub quality_before: Option<f64>

}


/// How a link's quality is held
#[derive(Clone, Debug)]
enum Quality {

    /// A `Pmf` over grid points; grid point `h` stands for quality `h / resolution`
    Bayes {
        pmf: Pmf<u32>,
        resolution: u32
    },

    /// The fraction of committed votes that are upvotes
    Ratio(Option<f64>)

}


#[derive(Clone, Debug)]
pub struct Link {

    /// The id of the `Link`
    id: LinkId,

    /// The current quality estimate
    quality: Quality,

    /// Votes waiting for the next `commit`
    staged: Vec<Vote>,

    /// The committed votes, one per voter. A later vote from the same user replaces the earlier
    votes: IndexMap<UserId, CommittedVote>

}


impl Link {

    /// Construct a new `Link` with no votes. Under the Bayes strategy its quality starts from a
    /// uniform prior over the configured grid
    pub fn new(id: LinkId, config: &EstimatorConfig) -> Result<Self> {
        let quality = match config.strategy {
            Strategy::Bayes => Quality::Bayes {
                pmf: Prior::Uniform.build(config.grid())?,
                resolution: config.resolution
            },
            Strategy::Simple => Quality::Ratio(None)
        };

        Ok(Link { id, quality, staged: Vec::new(), votes: IndexMap::new() })
    }


    pub fn id(&self) -> LinkId {
        self.id
    }


    /// Buffer a vote until the next `commit`. The quality and the committed votes are unchanged
    pub fn stage(&mut self, vote: Vote) {
        self.staged.push(vote);
    }


    /// The votes waiting for the next `commit`
    pub fn staged(&self) -> &[Vote] {
        &self.staged
    }


    /// Fold every staged vote into the quality of this `Link` and commit them.
    ///
    /// # Args
    /// * `channel_of`: the noise channel of each voter, i.e. the probability that the recorded
    ///   direction of their vote is the opposite of the link's true merit. Only consulted by the
    ///   Bayes strategy
    ///
    /// # Errors
    /// Any error from `channel_of` or from the quality update. Staged votes are kept on error.
    pub fn commit<F>(&mut self, channel_of: F) -> Result<()>
        where F: Fn(UserId) -> Result<Reversible>
    {
        if self.staged.is_empty() {
            return Ok(());
        }

        let quality_before = self.quality();

        // fold the staged votes into the quality before they become part of the history
        if let Quality::Bayes { ref mut pmf, resolution } = self.quality {
            let data = self.staged
                           .iter()
                           .map(|v| channel_of(v.user).map(|ch| (v.dir, ch)))
                           .collect::<Result<Vec<(VoteDir, Reversible)>>>()?;

            let likelihood = |vote: &(VoteDir, Reversible), h: &u32| {
                let (dir, ch) = *vote;
                ch.probability(*h as f64 / resolution as f64, dir.polarity())
            };

            suite::update_set(pmf, &likelihood, &data)?;
        }

        for vote in self.staged.drain(..) {
            self.votes.insert(vote.user, CommittedVote { dir: vote.dir, quality_before });
        }

        if let Quality::Ratio(ref mut ratio) = self.quality {
            let up = self.votes.values().filter(|v| v.dir == VoteDir::Up).count();
            *ratio = Some(up as f64 / self.votes.len() as f64);
        }

        debug!(link = self.id, votes = self.votes.len(), quality = ?self.quality(), "committed votes");
        Ok(())
    }


    /// The assessed quality of this `Link`: the probability that an upvote is the right call.
    ///
    /// `None` until at least one vote has been committed
    pub fn quality(&self) -> Option<f64> {
        if self.votes.is_empty() {
            return None;
        }

        match self.quality {
            Quality::Bayes { ref pmf, resolution } => pmf.mean().ok().map(|m| m / resolution as f64),
            Quality::Ratio(ratio) => ratio
        }
    }


    /// The most likely quality of this `Link`. Identical to `quality` under the simple strategy
    pub fn max_likelihood(&self) -> Option<f64> {
        if self.votes.is_empty() {
            return None;
        }

        match self.quality {
            Quality::Bayes { ref pmf, resolution } => {
                pmf.maximum_likelihood().map(|&h| h as f64 / resolution as f64)
            },
            Quality::Ratio(ratio) => ratio
        }
    }


    /// The quality `Pmf` under the Bayes strategy
    pub fn quality_pmf(&self) -> Option<&Pmf<u32>> {
        match self.quality {
            Quality::Bayes { ref pmf, .. } => Some(pmf),
            Quality::Ratio(_) => None
        }
    }


    /// The committed vote of a user, if any
    pub fn vote_of(&self, user: UserId) -> Option<&CommittedVote> {
        self.votes.get(&user)
    }


    /// The committed votes, in the order the voters first voted
    pub fn votes(&self) -> impl Iterator<Item = (UserId, &CommittedVote)> {
        self.votes.iter().map(|(&u, v)| (u, v))
    }


    /// The users with a committed vote on this `Link`
    pub fn voters(&self) -> impl Iterator<Item = UserId> + '_ {
        self.votes.keys().cloned()
    }


    /// The number of committed `(upvotes, downvotes)`
    pub fn tally(&self) -> (usize, usize) {
        let up = self.votes.values().filter(|v| v.dir == VoteDir::Up).count();
        (up, self.votes.len() - up)
    }

}

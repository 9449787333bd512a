//! Votes, and how a vote is judged against the assessed quality of the link it was cast on.

use crate::likelihood::Polarity;

use std::fmt;


/// Identifies a `User`
pub type UserId = u64;

/// Identifies a `Link`
pub type LinkId = u64;


/// The direction of a vote
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VoteDir {
    Up,
    Down
}


impl VoteDir {

    /// The outcome this vote represents when it is treated as evidence of link quality: an
    /// upvote is the positive outcome
    pub fn polarity(self) -> Polarity {
        match self {
            VoteDir::Up => Polarity::Positive,
            VoteDir::Down => Polarity::Negative
        }
    }


    /// The opposite direction
    pub fn reversed(self) -> Self {
        match self {
            VoteDir::Up => VoteDir::Down,
            VoteDir::Down => VoteDir::Up
        }
    }

}


impl fmt::Display for VoteDir {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            &VoteDir::Up => write!(f, "UP"),
            &VoteDir::Down => write!(f, "DOWN")
        }
    }
}


/// A vote cast by a user on a link
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Vote {
    pub user: UserId,
    pub dir: VoteDir
}


impl Vote {
    pub fn new(user: UserId, dir: VoteDir) -> Self {
        Vote { user, dir }
    }
}


/// The verdict on a single vote, used as evidence of the voter's reliability
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Judgement {
    /// The vote matches the direction the link's quality calls for
    Agree,

    /// The vote opposes the direction the link's quality calls for
    Disagree,

    /// The link's quality is unknown, or too close to even to call a direction
    Unjudgable
}


impl Judgement {

    /// Judge a vote in direction `dir` against the assessed quality of a link.
    ///
    /// A quality within `tie_band` of one half calls for neither direction.
    pub fn of(dir: VoteDir, quality: Option<f64>, tie_band: f64) -> Self {
        let expected = match quality {
            Some(q) if q > 0.5 + tie_band => VoteDir::Up,
            Some(q) if q < 0.5 - tie_band => VoteDir::Down,
            _ => return Judgement::Unjudgable
        };

        if dir == expected { Judgement::Agree } else { Judgement::Disagree }
    }


    /// The outcome this verdict represents as reliability evidence. `None` for unjudgable votes,
    /// which carry no evidence at all
    pub fn polarity(self) -> Option<Polarity> {
        match self {
            Judgement::Agree => Some(Polarity::Positive),
            Judgement::Disagree => Some(Polarity::Negative),
            Judgement::Unjudgable => None
        }
    }

}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn judge() {
        assert_eq!(Judgement::Agree, Judgement::of(VoteDir::Up, Some(0.8), 0.001));
        assert_eq!(Judgement::Disagree, Judgement::of(VoteDir::Down, Some(0.8), 0.001));
        assert_eq!(Judgement::Agree, Judgement::of(VoteDir::Down, Some(0.2), 0.001));
        assert_eq!(Judgement::Disagree, Judgement::of(VoteDir::Up, Some(0.2), 0.001));
    }

    #[test]
    fn judge_unjudgable() {
        assert_eq!(Judgement::Unjudgable, Judgement::of(VoteDir::Up, None, 0.001));
        assert_eq!(Judgement::Unjudgable, Judgement::of(VoteDir::Up, Some(0.5), 0.001));
        assert_eq!(Judgement::Unjudgable, Judgement::of(VoteDir::Down, Some(0.5009), 0.001));
        assert_eq!(Judgement::Agree, Judgement::of(VoteDir::Up, Some(0.5011), 0.001));

        // a wider band swallows more links
        assert_eq!(Judgement::Unjudgable, Judgement::of(VoteDir::Up, Some(0.55), 0.1));
        assert_eq!(None, Judgement::Unjudgable.polarity());
    }

    #[test]
    fn directions() {
        assert_eq!(Polarity::Positive, VoteDir::Up.polarity());
        assert_eq!(VoteDir::Up, VoteDir::Down.reversed());
        assert_eq!("DOWN", format!("{}", VoteDir::Down));
    }
}

//! Joint estimation of link quality and voter reliability from a stream of votes.
//!
//! Each `Link` owns a quality estimate and each `User` owns a reliability estimate. The two are
//! coupled: a vote counts towards a link's quality according to how reliable its voter is, and a
//! voter's reliability is judged by how their votes compare with the quality of the links they
//! voted on. The `Estimator` runs the loop for one simulation.

mod config;
mod estimator;
mod link;
mod user;
mod vote;
pub mod testvec;

pub use self::config::{EstimatorConfig, Strategy};
pub use self::estimator::{Estimator, LinkSummary, Summary, UserSummary};
pub use self::link::{CommittedVote, Link};
pub use self::user::User;
pub use self::vote::{Judgement, LinkId, UserId, Vote, VoteDir};

//! Generates a reproducible stream of votes for exercising the `Estimator`.
//!
//! Links are planned to be either good (every user means to upvote them) or bad (every user
//! means to downvote them). Users' reliabilities are spaced evenly from `max_reliability` down to
//! `min_reliability`; a user with reliability `p` casts the intended vote with probability `p`
//! and the opposite vote otherwise. Each user votes once on each link.

use super::vote::{LinkId, UserId, VoteDir};
use crate::util::{CredenceError, Result};

use indexmap::IndexMap;
use ndarray::prelude as nd;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Deserialize;
use tracing::info;


/// Parameters of a generated vote stream
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TestVectorConfig {
    pub users: usize,
    pub links: usize,
    pub good_link_ratio: f64,
    pub max_reliability: f64,
    pub min_reliability: f64,
    pub seed: u64,
    pub shuffle: bool
}


impl Default for TestVectorConfig {
    fn default() -> Self {
        TestVectorConfig {
            users: 8,
            links: 15,
            good_link_ratio: 0.8,
            max_reliability: 1.0,
            min_reliability: 0.5,
            seed: 100,
            shuffle: false
        }
    }
}


impl TestVectorConfig {

    /// Parse a configuration from a YAML document. Missing fields take their defaults
    ///
    /// # Errors
    /// * `CredenceError::InvalidConfig` if the document does not parse or does not validate
    pub fn from_yaml(doc: &str) -> Result<Self> {
        let config: TestVectorConfig = serde_yaml::from_str(doc)
            .map_err(|e| CredenceError::InvalidConfig(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }


    /// Check every field is within range
    pub fn validate(&self) -> Result<()> {
        if self.users == 0 || self.links == 0 {
            return Err(CredenceError::InvalidConfig(String::from("users and links must be positive")));
        }

        if ! (0.0..=1.0).contains(&self.good_link_ratio) {
            return Err(CredenceError::InvalidConfig(
                format!("good_link_ratio must be within [0, 1], got {}", self.good_link_ratio)
            ));
        }

        if ! (0.0 <= self.min_reliability && self.min_reliability <= self.max_reliability && self.max_reliability <= 1.0) {
            return Err(CredenceError::InvalidConfig(
                String::from("reliabilities must satisfy 0 <= min_reliability <= max_reliability <= 1")
            ));
        }

        Ok(())
    }

}


/// A generated vote stream and the plan behind it
#[derive(Clone, Debug, PartialEq)]
pub struct TestVector {

    /// The votes, in the order they should be cast
    pub votes: Vec<(UserId, LinkId, VoteDir)>,

    /// The links every user means to upvote
    pub good_links: Vec<LinkId>,

    /// The links every user means to downvote
    pub bad_links: Vec<LinkId>,

    /// The reliability each user was given
    pub planned_reliability: IndexMap<UserId, f64>,

    /// The fraction of each user's votes that actually went the intended way
    pub simulated_reliability: IndexMap<UserId, f64>

}


impl TestVector {

    /// Check if a link was planned to be good
    pub fn is_good(&self, link: LinkId) -> bool {
        self.good_links.contains(&link)
    }

}


/// The smallest power of ten strictly greater than `v`: 50 -> 100, 99 -> 100, 100 -> 1000
pub fn next_order_of_magnitude(v: u64) -> u64 {
    let mut order = 1;
    while order <= v {
        order *= 10;
    }

    order
}


/// Generate a vote stream.
///
/// Good link ids start at zero; bad link ids start at the next order of magnitude above the last
/// good id, so the two are easy to tell apart in a report.
///
/// # Errors
/// * `CredenceError::InvalidConfig` if the configuration does not validate
pub fn generate(config: &TestVectorConfig) -> Result<TestVector> {
    config.validate()?;

    let mut rng = StdRng::seed_from_u64(config.seed);

    let good_count = (config.links as f64 * config.good_link_ratio).floor() as u64;
    let bad_count = config.links as u64 - good_count;

    let good_links: Vec<LinkId> = (0..good_count).collect();
    let bad_start = if good_count == 0 { 0 } else { next_order_of_magnitude(good_count - 1) };
    let bad_links: Vec<LinkId> = (bad_start..bad_start + bad_count).collect();

    let planned_reliability: IndexMap<UserId, f64> = nd::Array1::linspace(
            config.max_reliability,
            config.min_reliability,
            config.users
        )
        .iter()
        .enumerate()
        .map(|(u, &r)| (u as UserId, r))
        .collect();

    let mut votes = Vec::with_capacity(config.users * config.links);
    let mut simulated_reliability = IndexMap::new();

    for (&user, &reliability) in planned_reliability.iter() {
        let planned = good_links.iter()
                                .map(|&l| (l, VoteDir::Up))
                                .chain(bad_links.iter().map(|&l| (l, VoteDir::Down)));

        let mut intended = 0;
        for (link, intent) in planned {
            // keep the intended direction unless the roll lands within the user's unreliability
            let dir = if 1.0 - reliability < rng.gen::<f64>() { intent } else { intent.reversed() };
            if dir == intent {
                intended += 1;
            }

            votes.push((user, link, dir));
        }

        simulated_reliability.insert(user, intended as f64 / config.links as f64);
    }

    if config.shuffle {
        votes.shuffle(&mut rng);
    }

    info!(
        users = config.users,
        good_links = good_links.len(),
        bad_links = bad_links.len(),
        votes = votes.len(),
        "generated test vector"
    );

    Ok(TestVector { votes, good_links, bad_links, planned_reliability, simulated_reliability })
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_of_magnitude() {
        assert_eq!(10, next_order_of_magnitude(1));
        assert_eq!(100, next_order_of_magnitude(11));
        assert_eq!(100, next_order_of_magnitude(50));
        assert_eq!(100, next_order_of_magnitude(99));
        assert_eq!(1000, next_order_of_magnitude(100));
        assert_eq!(1, next_order_of_magnitude(0));
    }

    #[test]
    fn default_plan() {
        let vec = generate(&TestVectorConfig::default()).unwrap();

        assert_eq!((0..12).collect::<Vec<u64>>(), vec.good_links);
        assert_eq!(vec![ 100, 101, 102 ], vec.bad_links);
        assert_eq!(8 * 15, vec.votes.len());
        assert!(vec.is_good(11));
        assert!(! vec.is_good(100));

        assert_eq!(Some(&1.0), vec.planned_reliability.get(&0));
        assert!((vec.planned_reliability[&7] - 0.5).abs() < 1e-12);

        // a perfectly reliable user always votes as intended
        assert_eq!(Some(&1.0), vec.simulated_reliability.get(&0));
        for &(user, link, dir) in vec.votes.iter().filter(|v| v.0 == 0) {
            assert_eq!(0, user);
            assert_eq!(vec.is_good(link), dir == VoteDir::Up);
        }
    }

    #[test]
    fn reproducible() {
        let config = TestVectorConfig { shuffle: true, ..TestVectorConfig::default() };
        assert_eq!(generate(&config).unwrap(), generate(&config).unwrap());

        let other = TestVectorConfig { seed: 7, ..config.clone() };
        let a = generate(&config).unwrap();
        let b = generate(&other).unwrap();
        assert_eq!(a.votes.len(), b.votes.len());
    }

    #[test]
    fn one_vote_per_pair() {
        let vec = generate(&TestVectorConfig { shuffle: true, ..TestVectorConfig::default() }).unwrap();
        let mut pairs: Vec<(UserId, LinkId)> = vec.votes.iter().map(|&(u, l, _)| (u, l)).collect();
        pairs.sort();
        pairs.dedup();
        assert_eq!(vec.votes.len(), pairs.len());
    }

    #[test]
    fn from_yaml() {
        let config = TestVectorConfig::from_yaml("users: 4\nshuffle: true\n").unwrap();
        assert_eq!(4, config.users);
        assert!(config.shuffle);
        assert_eq!(15, config.links);

        assert!(TestVectorConfig::from_yaml("good_link_ratio: 1.5\n").is_err());
        assert!(TestVectorConfig::from_yaml("voters: 4\n").is_err());
    }

    #[test]
    fn invalid() {
        let config = TestVectorConfig { users: 0, ..TestVectorConfig::default() };
        assert!(generate(&config).is_err());

        let config = TestVectorConfig { min_reliability: 0.9, max_reliability: 0.8, ..TestVectorConfig::default() };
        assert!(generate(&config).is_err());
    }
}

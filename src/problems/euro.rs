//! The Euro problem: a Belgian one-euro coin spun 250 times came up heads 140 times. Is it
//! biased?
//!
//! Hypothesis `x` in `0..=100` is the percentage of spins that come up heads. Each recorded
//! outcome may have been written down wrong with some fixed probability, the reversibility of
//! the recording channel.

use crate::likelihood::{Likelihood, Polarity, Reversible};
use crate::prior::Prior;
use crate::suite::Suite;
use crate::util::Result;

use itertools::Itertools;


#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Heads,
    Tails
}


impl Side {

    /// Heads are the positive outcome
    pub fn polarity(self) -> Polarity {
        match self {
            Side::Heads => Polarity::Positive,
            Side::Tails => Polarity::Negative
        }
    }

}


/// `heads` heads followed by `tails` tails
pub fn spins(heads: usize, tails: usize) -> Vec<Side> {
    std::iter::repeat(Side::Heads).take(heads)
                                  .chain(std::iter::repeat(Side::Tails).take(tails))
                                  .collect()
}


/// `heads` heads and `tails` tails, interleaved so that no run is longer than it has to be
pub fn interleaved(heads: usize, tails: usize) -> Vec<Side> {
    let h = std::iter::repeat(Side::Heads).take(heads);
    let t = std::iter::repeat(Side::Tails).take(tails);
    h.interleave(t).collect()
}


/// The likelihood of a recorded spin given the coin's bias
#[derive(Clone, Copy, Debug, Default)]
pub struct Euro {
    channel: Reversible
}


impl Euro {

    /// Spins recorded through `channel`
    pub fn new(channel: Reversible) -> Self {
        Euro { channel }
    }


    /// Spins recorded without error
    pub fn noiseless() -> Self {
        Euro::new(Reversible::noiseless())
    }


    /// A `Suite` over `0..=100` starting from `prior`
    pub fn suite(self, prior: &Prior) -> Result<Suite<u32, Euro>> {
        let pmf = prior.build(0..=100u32)?;
        Ok(Suite::new("euro", pmf, self))
    }

}


impl Likelihood<Side, u32> for Euro {
    fn likelihood(&self, side: &Side, x: &u32) -> f64 {
        self.channel.probability(*x as f64 / 100.0, side.polarity())
    }
}

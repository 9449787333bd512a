//! The locomotive problem: a railroad numbers its locomotives 1..N. Seeing locomotive 60, how
//! many locomotives does it have?

use super::dice::Dice;
use crate::prior::Prior;
use crate::suite::Suite;
use crate::util::Result;


/// A `Suite` over fleet sizes `1..=upper`.
///
/// Spotting a locomotive is a roll of an N-sided die, so the likelihood is the one of the dice
/// problem.
pub fn suite(upper: u32, prior: &Prior) -> Result<Suite<u32, Dice>> {
    let pmf = prior.build(1..=upper)?;
    Ok(Suite::new("train", pmf, Dice))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_law_prior() {
        let mut even = suite(1000, &Prior::Uniform).unwrap();
        let mut power = suite(1000, &Prior::PowerLaw { alpha: 1.0 }).unwrap();
        even.update(&60).unwrap();
        power.update(&60).unwrap();

        // the power law favours smaller fleets
        assert!(power.pmf().mean().unwrap() < even.pmf().mean().unwrap());
        assert_eq!(0.0, power.pmf().probability(&59));
    }
}

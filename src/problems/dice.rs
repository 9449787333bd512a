//! The dice problem: a die is picked from a box of 4, 6, 8, 12, and 20-sided dice and rolled a
//! few times. How many sides does it have?

use crate::likelihood::Likelihood;
use crate::prior::Prior;
use crate::suite::Suite;
use crate::util::Result;


/// The dice in the box
pub const DICE: [u32; 5] = [ 4, 6, 8, 12, 20 ];


/// A roll of a fair die: every face from 1 to the number of sides is equally likely
#[derive(Clone, Copy, Debug, Default)]
pub struct Dice;


impl Likelihood<u32, u32> for Dice {
    fn likelihood(&self, roll: &u32, sides: &u32) -> f64 {
        if sides < roll || *roll == 0 {
            0.0
        } else {
            1.0 / *sides as f64
        }
    }
}


/// A `Suite` over the dice in the box, with equal priors
pub fn suite() -> Result<Suite<u32, Dice>> {
    let pmf = Prior::Uniform.build(DICE.iter().cloned())?;
    Ok(Suite::new("dice", pmf, Dice))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn likelihood() {
        assert_eq!(0.0, Dice.likelihood(&7, &6));
        assert_eq!(0.0, Dice.likelihood(&0, &6));
        assert_eq!(1.0 / 6.0, Dice.likelihood(&6, &6));
    }
}

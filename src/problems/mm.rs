//! The M&M problem: one bag of M&Ms is from 1994 and one from 1996, but nobody knows which is
//! which. A yellow M&M comes out of bag 1 and a green one out of bag 2. Which bag is from 1994?

use crate::likelihood::Likelihood;
use crate::pmf::Hypothesis;
use crate::prior::Prior;
use crate::suite::Suite;
use crate::util::Result;

use indexmap::IndexMap;

use std::fmt;


#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Bag {
    One,
    Two
}


/// Which bag came from which year
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Assignment {

    /// Bag 1 is from 1994 and bag 2 from 1996
    A,

    /// Bag 1 is from 1996 and bag 2 from 1994
    B

}


impl Hypothesis for Assignment {}


impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            &Assignment::A => write!(f, "A"),
            &Assignment::B => write!(f, "B")
        }
    }
}


impl Assignment {

    /// The year the bag came from under this assignment
    pub fn year(self, bag: Bag) -> u32 {
        match (self, bag) {
            (Assignment::A, Bag::One) | (Assignment::B, Bag::Two) => 1994,
            (Assignment::A, Bag::Two) | (Assignment::B, Bag::One) => 1996
        }
    }

}


/// The color mix of each year, in percent
#[derive(Clone, Debug)]
pub struct Mm {
    mixes: IndexMap<u32, IndexMap<&'static str, f64>>
}


impl Default for Mm {
    fn default() -> Self {
        let mix94 = vec![
            ("brown", 30.), ("yellow", 20.), ("red", 20.), ("green", 10.), ("orange", 10.), ("tan", 10.)
        ];

        let mix96 = vec![
            ("blue", 24.), ("green", 20.), ("orange", 16.), ("yellow", 14.), ("red", 13.), ("brown", 13.)
        ];

        let mut mixes = IndexMap::new();
        mixes.insert(1994, mix94.into_iter().collect());
        mixes.insert(1996, mix96.into_iter().collect());

        Mm { mixes }
    }
}


impl Mm {

    /// A `Suite` over both assignments with equal priors
    pub fn suite(self) -> Result<Suite<Assignment, Mm>> {
        let pmf = Prior::Uniform.build(vec![ Assignment::A, Assignment::B ])?;
        Ok(Suite::new("m&m", pmf, self))
    }

}


impl Likelihood<(Bag, &'static str), Assignment> for Mm {
    fn likelihood(&self, draw: &(Bag, &'static str), assignment: &Assignment) -> f64 {
        let (bag, color) = *draw;

        self.mixes
            .get(&assignment.year(bag))
            .and_then(|mix| mix.get(color))
            .map(|percent| percent / 100.)
            .unwrap_or(0.0)
    }
}

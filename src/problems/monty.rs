//! The Monty Hall problem: the contestant picks door A, and Monty opens door B to reveal no car.
//! Should the contestant switch?

use crate::likelihood::Likelihood;
use crate::pmf::Hypothesis;
use crate::prior::Prior;
use crate::solver::Hypo;
use crate::suite::Suite;
use crate::util::Result;

use std::fmt;


#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Door {
    A,
    B,
    C
}


impl Hypothesis for Door {}


impl fmt::Display for Door {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            &Door::A => write!(f, "A"),
            &Door::B => write!(f, "B"),
            &Door::C => write!(f, "C")
        }
    }
}


pub const DOORS: [Door; 3] = [ Door::A, Door::B, Door::C ];


/// Which door Monty opens, given where the car is. Monty never opens the contestant's door and
/// never reveals the car; when both other doors are empty he picks one at random.
#[derive(Clone, Copy, Debug)]
pub struct Monty {
    picked: Door
}


impl Default for Monty {
    fn default() -> Self {
        Monty::new(Door::A)
    }
}


impl Monty {

    /// Monty's behaviour for a contestant who picked `picked`
    pub fn new(picked: Door) -> Self {
        Monty { picked }
    }


    /// One likelihood table per car location, named `H` followed by the door, over the doors
    /// Monty may open
    pub fn hypos(&self) -> Result<Vec<Hypo<Door>>> {
        DOORS.iter()
             .map(|car| {
                 let opened = DOORS.iter()
                                   .filter(|&&d| d != self.picked)
                                   .map(|&d| (d, self.likelihood(&d, car)));
                 Hypo::new(&format!("H{}", car), opened)
             })
             .collect()
    }


    /// A `Suite` over the car's location with equal priors
    pub fn suite(self) -> Result<Suite<Door, Monty>> {
        let pmf = Prior::Uniform.build(DOORS.iter().cloned())?;
        Ok(Suite::new("monty", pmf, self))
    }

}


impl Likelihood<Door, Door> for Monty {
    fn likelihood(&self, opened: &Door, car: &Door) -> f64 {
        if opened == car || *opened == self.picked {
            0.0
        } else if *car == self.picked {
            0.5
        } else {
            1.0
        }
    }
}

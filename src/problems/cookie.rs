//! The cookie problem: a cookie drawn from one of two bowls turns out to be vanilla. Which bowl
//! was it drawn from?

use crate::likelihood::Likelihood;
use crate::prior::Prior;
use crate::solver::Hypo;
use crate::suite::Suite;
use crate::util::Result;

use indexmap::IndexMap;


/// The flavor mix of each bowl
#[derive(Clone, Debug)]
pub struct Cookie {
    mixes: IndexMap<&'static str, IndexMap<&'static str, f64>>
}


impl Default for Cookie {
    /// Bowl 1 holds 30 vanilla and 10 chocolate cookies, bowl 2 holds 20 of each
    fn default() -> Self {
        let mut mixes = IndexMap::new();
        mixes.insert("Bowl1", vec![ ("vanilla", 0.75), ("chocolate", 0.25) ].into_iter().collect());
        mixes.insert("Bowl2", vec![ ("vanilla", 0.5), ("chocolate", 0.5) ].into_iter().collect());

        Cookie { mixes }
    }
}


impl Cookie {

    /// The bowls, in order
    pub fn bowls(&self) -> Vec<&'static str> {
        self.mixes.keys().cloned().collect()
    }


    /// The mixes as likelihood tables for the one-shot solver
    pub fn hypos(&self) -> Result<Vec<Hypo<&'static str>>> {
        self.mixes
            .iter()
            .map(|(bowl, mix)| Hypo::new(bowl, mix.iter().map(|(&flavor, &p)| (flavor, p))))
            .collect()
    }


    /// A `Suite` over the bowls with equal priors
    pub fn suite(self) -> Result<Suite<&'static str, Cookie>> {
        let pmf = Prior::Uniform.build(self.bowls())?;
        Ok(Suite::new("cookie", pmf, self))
    }

}


impl Likelihood<&'static str, &'static str> for Cookie {
    fn likelihood(&self, flavor: &&'static str, bowl: &&'static str) -> f64 {
        self.mixes
            .get(bowl)
            .and_then(|mix| mix.get(flavor))
            .cloned()
            .unwrap_or(0.0)
    }
}

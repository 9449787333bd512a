//! The locomotive problem: seeing locomotive 60, how many does the railroad own? Compares a
//! uniform prior with a power law for several upper bounds.

use credence as c;
use c::problems::train;

fn main() -> c::Result<()> {
    let priors = [ ("uniform", c::Prior::Uniform), ("power law", c::Prior::PowerLaw { alpha: 1.0 }) ];

    for &(label, ref prior) in priors.iter() {
        for &upper in [ 500, 1000, 2000 ].iter() {
            let mut suite = train::suite(upper, prior)?;
            suite.update_set(&[ 60, 30, 90 ])?;

            let (low, high) = suite.pmf().credible_interval(90.0)?;
            println!(
                "{:>9} prior, upper bound {:>4}: mean {:.1}, 90% interval ({}, {})",
                label, upper, suite.pmf().mean()?, low, high
            );
        }
    }

    Ok(())
}

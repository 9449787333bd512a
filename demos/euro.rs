//! The Euro problem: 140 heads and 110 tails. Shows the posterior under a uniform and a triangle
//! prior, then with outcomes recorded through a noisy channel.

use credence as c;
use c::problems::euro::{self, Euro};
use tracing_subscriber::EnvFilter;

fn main() -> c::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let data = euro::spins(140, 110);

    for (label, prior) in vec![ ("uniform", c::Prior::Uniform), ("triangle", c::Prior::Triangle { peak: 50.0 }) ] {
        let mut suite = Euro::noiseless().suite(&prior)?;
        suite.update_set(&data)?;
        report(label, suite.pmf())?;
    }

    for &r in [ 0.05, 0.1, 0.2 ].iter() {
        let mut suite = Euro::new(c::Reversible::new(r)?).suite(&c::Prior::Uniform)?;
        suite.update_set(&data)?;
        report(&format!("reversibility {}", r), suite.pmf())?;
    }

    Ok(())
}

fn report(label: &str, pmf: &c::Pmf<u32>) -> c::Result<()> {
    let (low, high) = pmf.credible_interval(90.0)?;
    println!(
        "{:>18}: max likelihood {:?}, mean {:.2}, median {}, 90% interval ({}, {})",
        label,
        pmf.maximum_likelihood(),
        pmf.mean()?,
        pmf.percentile(50.0)?,
        low,
        high
    );

    Ok(())
}

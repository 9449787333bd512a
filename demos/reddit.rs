//! Runs the link quality / user reliability estimator on a generated vote stream and compares
//! its estimates with the plan behind the stream.
//!
//! The first argument, if given, is a YAML file holding an `EstimatorConfig`:
//!
//! ```text
//! strategy: bayes
//! uncertainty: 0.05
//! ```
//!
//! The second, if given, is a YAML file holding the `TestVectorConfig` of the vote stream:
//!
//! ```text
//! users: 20
//! links: 40
//! seed: 7
//! ```

use credence as c;
use c::reliability::testvec::{self, TestVectorConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> c::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => c::EstimatorConfig::from_yaml(&read(&path)?)?,
        None => c::EstimatorConfig::default()
    };

    let vector_config = match std::env::args().nth(2) {
        Some(path) => TestVectorConfig::from_yaml(&read(&path)?)?,
        None => TestVectorConfig { shuffle: true, ..TestVectorConfig::default() }
    };

    info!(config = ?config, vectors = ?vector_config, "starting estimator");

    /////////////////////////////////////////////////////
    // Step 1: Generate votes
    let vector = testvec::generate(&vector_config)?;

    /////////////////////////////////////////////////////
    // Step 2: Cast them
    let mut estimator = c::Estimator::new(config)?;
    for &(user, link, dir) in vector.votes.iter() {
        estimator.vote(user, link, dir)?;
    }

    /////////////////////////////////////////////////////
    // Step 3: Compare with the plan
    println!("{}", estimator.summary());

    println!("links");
    for link in estimator.links() {
        println!(
            "  {:>4} {:>4}: quality {:.4}",
            link.id(),
            if vector.is_good(link.id()) { "good" } else { "bad" },
            link.quality().unwrap_or(std::f64::NAN)
        );
    }

    println!("users");
    for user in estimator.users() {
        println!(
            "  {:>2}: planned {:.4}, simulated {:.4}, estimated {:.4}",
            user.id(),
            vector.planned_reliability[&user.id()],
            vector.simulated_reliability[&user.id()],
            user.reliability().unwrap_or(std::f64::NAN)
        );
    }

    Ok(())
}

fn read(path: &str) -> c::Result<String> {
    std::fs::read_to_string(path)
        .map_err(|e| c::CredenceError::General(format!("cannot read {}: {}", path, e)))
}

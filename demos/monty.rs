//! The Monty Hall problem. The contestant picks A and Monty opens B.

use credence as c;
use c::problems::monty::{Door, Monty};

fn main() -> c::Result<()> {
    let monty = Monty::new(Door::A);

    let posterior = c::solve(&monty.hypos()?, &Door::B)?;
    println!("one-shot\n{}", posterior);

    let mut suite = monty.suite()?;
    let evidence = suite.update(&Door::B)?;
    println!("{}", suite);
    println!("P(Monty opens B) = {:.4}", evidence);

    Ok(())
}

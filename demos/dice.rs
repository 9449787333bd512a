//! The dice problem: which die produced a sequence of rolls?

use credence as c;
use c::problems::dice;

fn main() -> c::Result<()> {
    let mut suite = dice::suite()?;

    suite.update(&6)?;
    println!("after a 6\n{}", suite.pmf());

    suite.update_set(&[ 8, 7, 7, 5, 4 ])?;
    println!("after 8, 7, 7, 5, 4\n{}", suite.pmf());

    Ok(())
}

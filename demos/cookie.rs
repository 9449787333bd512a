//! The cookie problem, solved twice: once by sequential updating and once with the one-shot
//! solver.

use credence as c;
use c::problems::cookie::Cookie;

fn main() -> c::Result<()> {
    let cookie = Cookie::default();

    /////////////////////////////////////////////////////
    // One-shot: a likelihood table per bowl
    let hypos = cookie.hypos()?;
    let posterior = c::solve(&hypos, &"vanilla")?;
    println!("one-shot\n{}", posterior);

    /////////////////////////////////////////////////////
    // Sequential: the same question as a Suite
    let mut suite = cookie.suite()?;
    suite.update(&"vanilla")?;
    println!("{}", suite);

    Ok(())
}

//! # Demonstration
//!
//! Compares two fractions, prints one, converts a float into a rational and a rational into a
//! float. Set `RUST_LOG=trace` to see how the float is decomposed.
use log::info;

use rationals::{Rational32, RationalError};

fn main() -> Result<(), RationalError> {
    pretty_env_logger::init();

    let fraction = Rational32::new(4, 8)?;
    let fraction1 = Rational32::new(4, 2)?;
    info!("comparing {fraction:#} with {fraction1:#}");
    println!("{}", fraction >= fraction1);

    println!("{fraction1}");

    let value = 11.154;
    let converted = Rational32::from_f64(value)?;
    info!("{value} is stored as {converted:?}");
    println!("{converted}");

    println!("{}", fraction.to_f64());

    Ok(())
}

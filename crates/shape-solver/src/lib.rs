pub mod number_theory;
pub mod rules;
pub mod solver;

pub use number_theory::{gcd, lcm};
pub use solver::*;

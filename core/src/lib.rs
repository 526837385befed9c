//! Exact arithmetic building blocks: rational/p-adic valuation helpers,
//! p-adic and complex p-adic numbers, polynomials over a generic base ring,
//! and fixed-rank algebraic extensions. Every other crate in the workspace
//! builds on top of this one.

mod algebraic;
mod complex_padic;
mod error;
mod p_adic;
mod polynomial;
mod rational;

pub use algebraic::{mix_rules, AlgebraicElement, MultiplicationRule};
pub use complex_padic::ComplexPAdic;
pub use error::CoreError;
pub use p_adic::PAdic;
pub use polynomial::{Polynomial, Ring};
pub use rational::{gcd, lcm, p_adic_valuation, reduce};

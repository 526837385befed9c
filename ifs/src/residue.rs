//! The [`Residue`] capability a transducer state's p-adic component needs:
//! addition, negation, digit shift, and digit indexing, abstracted so
//! [`shift`] and the transducer's exploration loop (see [`crate::transducer`])
//! are written once and monomorphized over [`PAdic`] and [`ComplexPAdic`]
//! rather than duplicated per variant.

use padic_core::{ComplexPAdic, CoreError, PAdic};

/// A p-adic-like value a transducer state can carry as its residue.
pub trait Residue: Clone + PartialEq + Eq + std::hash::Hash + std::fmt::Debug + std::fmt::Display {
    /// A single digit: `u64` for the real line, `(u64, u64)` (a Gaussian
    /// digit) for the complex plane. `Ord` gives the NDFA/DFA layer a
    /// deterministic order to enumerate a node's outgoing symbols in.
    type Digit: Copy + Eq + std::hash::Hash + Ord + std::fmt::Debug;

    fn zero(p: u64) -> Self;
    fn prime(&self) -> u64;
    fn add(&self, other: &Self) -> Result<Self, CoreError>;
    fn neg(&self) -> Self;
    fn shr(&self, n: usize) -> Self;
    fn digit(&self, index: i64) -> Result<Self::Digit, CoreError>;
    /// Builds a value whose integer part is exactly `digits`
    /// (most-significant first), used to re-embed a shifted-out digit window
    /// as a subtractable residue.
    fn from_digit_window(p: u64, digits: &[Self::Digit]) -> Self;
    /// Renders one shifted-out digit for NDFA/DOT labelling.
    fn digit_label(digit: Self::Digit) -> String;

    fn sub(&self, other: &Self) -> Result<Self, CoreError> {
        self.add(&other.neg())
    }
}

impl Residue for PAdic {
    type Digit = u64;

    fn zero(p: u64) -> Self {
        PAdic::zero(p)
    }

    fn prime(&self) -> u64 {
        self.p()
    }

    fn add(&self, other: &Self) -> Result<Self, CoreError> {
        PAdic::add(self, other)
    }

    fn neg(&self) -> Self {
        PAdic::neg(self)
    }

    fn shr(&self, n: usize) -> Self {
        PAdic::shr(self, n)
    }

    fn digit(&self, index: i64) -> Result<Self::Digit, CoreError> {
        PAdic::digit(self, index)
    }

    fn from_digit_window(p: u64, digits: &[Self::Digit]) -> Self {
        PAdic::from_digits(p, vec![0], digits.to_vec(), Vec::new())
    }

    fn digit_label(digit: Self::Digit) -> String {
        digit.to_string()
    }
}

impl Residue for ComplexPAdic {
    type Digit = (u64, u64);

    fn zero(p: u64) -> Self {
        ComplexPAdic::zero(p)
    }

    fn prime(&self) -> u64 {
        self.p()
    }

    fn add(&self, other: &Self) -> Result<Self, CoreError> {
        ComplexPAdic::add(self, other)
    }

    fn neg(&self) -> Self {
        ComplexPAdic::neg(self)
    }

    fn shr(&self, n: usize) -> Self {
        ComplexPAdic::shr(self, n)
    }

    fn digit(&self, index: i64) -> Result<Self::Digit, CoreError> {
        ComplexPAdic::digit(self, index)
    }

    fn from_digit_window(p: u64, digits: &[Self::Digit]) -> Self {
        ComplexPAdic::from_digit_sequence(p, digits)
    }

    fn digit_label(digit: Self::Digit) -> String {
        format!("{}+{}i", digit.0, digit.1)
    }
}

/// The transducer's shift operator (`spec.md` §4.5): reads the `n` lowest
/// digits of `x`, removes them by subtracting their value and dividing by
/// `p^n`, and returns the quotient alongside the digits shifted out
/// (lowest-position first, matching the source's `x[i] for i in range(n)`).
pub fn shift<R: Residue>(x: &R, n: usize) -> Result<(R, Vec<R::Digit>), CoreError> {
    let mut digits = Vec::with_capacity(n);
    for i in 0..n as i64 {
        digits.push(x.digit(i)?);
    }
    let reversed: Vec<R::Digit> = digits.iter().rev().copied().collect();
    let window = R::from_digit_window(x.prime(), &reversed);
    let remainder = x.sub(&window)?.shr(n);
    Ok((remainder, digits))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_real_extracts_low_digits_and_divides() {
        let p = 3;
        let x = PAdic::from_rational(p, 5, 1).unwrap(); // 5 = 1*3 + 2
        let (rest, digits) = shift(&x, 1).unwrap();
        assert_eq!(digits, vec![2]);
        assert_eq!(rest.to_rational(), (1, 1));
    }

    #[test]
    fn shift_complex_extracts_gaussian_digits() {
        let p = 5;
        let z = ComplexPAdic::from_rational(p, (7, 1), (3, 1)).unwrap();
        let (_, digits) = shift(&z, 1).unwrap();
        assert_eq!(digits, vec![(2, 3)]);
    }
}

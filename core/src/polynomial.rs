//! Dense univariate polynomials over a generic coefficient ring, with
//! pseudo-division and a subresultant-style GCD (Collins-Brown PRS, using
//! primitive-part normalization at every remainder step rather than tracking
//! the `g`/`h` scale factors directly — simpler to state generically, and the
//! primitive-part strip is what actually bounds coefficient growth).

use crate::error::CoreError;

/// The coefficient domain a [`Polynomial`] is built over. Kept small and
/// concrete (no field division) so a pseudo-remainder sequence can be run
/// over, e.g., plain integers.
pub trait Ring: Clone + PartialEq + std::fmt::Debug {
    fn ring_zero() -> Self;
    fn ring_one() -> Self;
    fn ring_add(&self, other: &Self) -> Self;
    fn ring_neg(&self) -> Self;
    fn ring_mul(&self, other: &Self) -> Self;
    /// Scalar gcd, used to compute a polynomial's content. Expected
    /// non-negative for ordered rings (mirrors [`crate::rational::gcd`]).
    fn ring_gcd(&self, other: &Self) -> Self;
    /// `Some(self / other)` when the division is exact, `None` otherwise.
    fn ring_exact_div(&self, other: &Self) -> Option<Self>;

    fn ring_is_zero(&self) -> bool {
        *self == Self::ring_zero()
    }

    fn ring_pow(&self, n: usize) -> Self {
        let mut acc = Self::ring_one();
        for _ in 0..n {
            acc = acc.ring_mul(self);
        }
        acc
    }
}

impl Ring for i64 {
    fn ring_zero() -> Self {
        0
    }

    fn ring_one() -> Self {
        1
    }

    fn ring_add(&self, other: &Self) -> Self {
        self + other
    }

    fn ring_neg(&self) -> Self {
        -self
    }

    fn ring_mul(&self, other: &Self) -> Self {
        self * other
    }

    fn ring_gcd(&self, other: &Self) -> Self {
        crate::rational::gcd(*self, *other)
    }

    fn ring_exact_div(&self, other: &Self) -> Option<Self> {
        if *other == 0 || self % other != 0 {
            None
        } else {
            Some(self / other)
        }
    }
}

/// A dense polynomial, coefficients stored low-degree-first
/// (`coeffs[k]` is the coefficient of `x^k`). Canonical form strips trailing
/// (highest-degree) zero coefficients, so equality and hashing agree with
/// mathematical equality rather than representation.
#[derive(Clone, Debug)]
pub struct Polynomial<T: Ring> {
    coeffs: Vec<T>,
}

impl<T: Ring> PartialEq for Polynomial<T> {
    fn eq(&self, other: &Self) -> bool {
        self.coeffs == other.coeffs
    }
}

impl<T: Ring> Eq for Polynomial<T> {}

impl<T: Ring + std::hash::Hash> std::hash::Hash for Polynomial<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.coeffs.hash(state);
    }
}

impl<T: Ring> Polynomial<T> {
    pub fn new(coeffs: Vec<T>) -> Self {
        let mut coeffs = coeffs;
        while coeffs.last().is_some_and(Ring::ring_is_zero) {
            coeffs.pop();
        }
        Polynomial { coeffs }
    }

    pub fn zero() -> Self {
        Polynomial { coeffs: Vec::new() }
    }

    pub fn constant(c: T) -> Self {
        Polynomial::new(vec![c])
    }

    pub fn coeffs(&self) -> &[T] {
        &self.coeffs
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// `None` for the zero polynomial.
    pub fn degree(&self) -> Option<usize> {
        if self.coeffs.is_empty() {
            None
        } else {
            Some(self.coeffs.len() - 1)
        }
    }

    pub fn leading_coeff(&self) -> Option<&T> {
        self.coeffs.last()
    }

    pub fn coeff(&self, k: usize) -> T {
        self.coeffs.get(k).cloned().unwrap_or_else(T::ring_zero)
    }

    pub fn add(&self, other: &Self) -> Self {
        let len = self.coeffs.len().max(other.coeffs.len());
        let coeffs = (0..len).map(|k| self.coeff(k).ring_add(&other.coeff(k))).collect();
        Polynomial::new(coeffs)
    }

    pub fn neg(&self) -> Self {
        Polynomial::new(self.coeffs.iter().map(Ring::ring_neg).collect())
    }

    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    pub fn scalar_mul(&self, s: &T) -> Self {
        Polynomial::new(self.coeffs.iter().map(|c| c.ring_mul(s)).collect())
    }

    pub fn scalar_exact_div(&self, s: &T) -> Option<Self> {
        let mut out = Vec::with_capacity(self.coeffs.len());
        for c in &self.coeffs {
            out.push(c.ring_exact_div(s)?);
        }
        Some(Polynomial::new(out))
    }

    /// Multiplication by `x^n`.
    pub fn shl(&self, n: usize) -> Self {
        if self.is_zero() {
            return Polynomial::zero();
        }
        let mut coeffs = vec![T::ring_zero(); n];
        coeffs.extend(self.coeffs.iter().cloned());
        Polynomial::new(coeffs)
    }

    /// Division by `x^n`; `None` unless the lowest `n` coefficients are zero.
    pub fn shr(&self, n: usize) -> Option<Self> {
        if self.coeffs.len() < n {
            return if self.is_zero() { Some(Polynomial::zero()) } else { None };
        }
        if self.coeffs[..n].iter().any(|c| !c.ring_is_zero()) {
            return None;
        }
        Some(Polynomial::new(self.coeffs[n..].to_vec()))
    }

    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Polynomial::zero();
        }
        let mut coeffs = vec![T::ring_zero(); self.coeffs.len() + other.coeffs.len() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            for (j, b) in other.coeffs.iter().enumerate() {
                coeffs[i + j] = coeffs[i + j].ring_add(&a.ring_mul(b));
            }
        }
        Polynomial::new(coeffs)
    }

    /// The gcd of all coefficients (`0` for the zero polynomial, by
    /// convention of an empty fold).
    pub fn content(&self) -> T {
        self.coeffs.iter().fold(T::ring_zero(), |acc, c| acc.ring_gcd(c))
    }

    /// `self` divided by its content; the zero polynomial is its own
    /// primitive part.
    pub fn primitive_part(&self) -> Self {
        if self.is_zero() {
            return self.clone();
        }
        let content = self.content();
        self.scalar_exact_div(&content).unwrap_or_else(|| self.clone())
    }

    /// Pseudo-division: finds `q`, `r` with `deg(r) < deg(other)` such that
    /// `lc(other)^delta * self == q * other + r`, where
    /// `delta = deg(self) - deg(other) + 1`. Uses only ring multiplication
    /// and addition, never coefficient division, which is what lets it work
    /// over a non-field base ring.
    pub fn pseudo_div(&self, other: &Self) -> Result<(Self, Self), CoreError> {
        let n = other.degree().ok_or(CoreError::DivisionByZero)?;
        let Some(m) = self.degree() else {
            return Ok((Polynomial::zero(), Polynomial::zero()));
        };
        if m < n {
            return Ok((Polynomial::zero(), self.clone()));
        }
        let delta = m - n + 1;
        let lc_b = other.leading_coeff().unwrap().clone();

        let mut r = self.clone();
        let mut q = Polynomial::new(vec![T::ring_zero(); delta]);
        let mut remaining = delta;
        let bound = delta + 2;

        for _ in 0..bound {
            if r.is_zero() || r.degree().unwrap() < n {
                break;
            }
            let diff = r.degree().unwrap() - n;
            let lc_r = r.leading_coeff().unwrap().clone();
            r = r.scalar_mul(&lc_b);
            q = q.scalar_mul(&lc_b);
            let mut q_coeffs = q.coeffs;
            while q_coeffs.len() <= diff {
                q_coeffs.push(T::ring_zero());
            }
            q_coeffs[diff] = q_coeffs[diff].ring_add(&lc_r);
            q = Polynomial::new(q_coeffs);
            let term = other.shl(diff).scalar_mul(&lc_r);
            r = r.sub(&term);
            remaining -= 1;
        }
        if r.degree().is_some_and(|d| d >= n) {
            return Err(CoreError::PseudoDivOverflow(bound));
        }
        if remaining > 0 {
            let factor = lc_b.ring_pow(remaining);
            r = r.scalar_mul(&factor);
            q = q.scalar_mul(&factor);
        }
        Ok((q, r))
    }

    /// A subresultant-style gcd: repeated pseudo-division with the remainder
    /// replaced by its primitive part at every step.
    pub fn gcd(&self, other: &Self) -> Result<Self, CoreError> {
        let mut a = self.primitive_part();
        let mut b = other.primitive_part();
        if a.is_zero() {
            return Ok(b);
        }
        if b.is_zero() {
            return Ok(a);
        }
        if a.degree() < b.degree() {
            std::mem::swap(&mut a, &mut b);
        }
        let bound = self.coeffs.len() + other.coeffs.len() + 4;
        for _ in 0..bound {
            if b.is_zero() {
                return Ok(a.primitive_part());
            }
            let (_, r) = a.pseudo_div(&b)?;
            a = b;
            b = r.primitive_part();
        }
        Err(CoreError::PseudoDivOverflow(bound))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poly(coeffs: &[i64]) -> Polynomial<i64> {
        Polynomial::new(coeffs.to_vec())
    }

    #[test]
    fn canonicalization_strips_trailing_zeros() {
        assert_eq!(poly(&[1, 2, 0, 0]), poly(&[1, 2]));
        assert_eq!(poly(&[0, 0]), Polynomial::zero());
        assert_eq!(poly(&[0, 0]).degree(), None);
    }

    #[test]
    fn s6_pseudo_division_cubed_minus_one() {
        // A = x^3 - 1, B = x^2 + x + 1 -> Q = x - 1, R = 0
        let a = poly(&[-1, 0, 0, 1]);
        let b = poly(&[1, 1, 1]);
        let (q, r) = a.pseudo_div(&b).unwrap();
        assert_eq!(q, poly(&[-1, 1]));
        assert!(r.is_zero());
    }

    #[test]
    fn pseudo_div_by_higher_degree_returns_self_as_remainder() {
        let a = poly(&[1, 1]);
        let b = poly(&[1, 0, 1]);
        let (q, r) = a.pseudo_div(&b).unwrap();
        assert!(q.is_zero());
        assert_eq!(r, a);
    }

    #[test]
    fn multiplication_distributes_over_addition() {
        let a = poly(&[1, 2]);
        let b = poly(&[3, -1]);
        let c = poly(&[0, 1, 1]);
        assert_eq!(a.mul(&b.add(&c)), a.mul(&b).add(&a.mul(&c)));
    }

    #[test]
    fn shift_round_trips_when_exact() {
        let a = poly(&[1, 2, 3]);
        assert_eq!(a.shl(2).shr(2), Some(a));
        assert_eq!(poly(&[1, 1]).shr(1), None);
    }

    #[test]
    fn gcd_of_shared_factor() {
        // (x-1)(x+1) and (x-1)(x+2) share gcd (x-1) up to a unit/content factor.
        let a = poly(&[-1, 0, 1]); // x^2 - 1
        let b = poly(&[-2, -1, 1]); // x^2 + x - 2
        let g = a.gcd(&b).unwrap();
        assert_eq!(g.degree(), Some(1));
        // gcd should divide both inputs exactly via pseudo-division with zero remainder.
        let (_, ra) = a.pseudo_div(&g).unwrap();
        let (_, rb) = b.pseudo_div(&g).unwrap();
        assert!(ra.is_zero());
        assert!(rb.is_zero());
    }

    #[test]
    fn content_and_primitive_part() {
        let a = poly(&[4, 6, -2]);
        assert_eq!(a.content(), 2);
        assert_eq!(a.primitive_part(), poly(&[2, 3, -1]));
    }

    /// A ring whose `ring_neg` doesn't actually negate breaks the
    /// cancellation pseudo-division relies on: the leading term never
    /// clears, so the remainder's degree can't drop below `deg(b)`. The
    /// iteration cap must surface this as an error, not loop forever or
    /// hand back a remainder that's still too big.
    #[derive(Clone, Debug, PartialEq)]
    struct NonCancelling(i64);

    impl Ring for NonCancelling {
        fn ring_zero() -> Self {
            NonCancelling(0)
        }
        fn ring_one() -> Self {
            NonCancelling(1)
        }
        fn ring_add(&self, other: &Self) -> Self {
            NonCancelling(self.0 + other.0)
        }
        fn ring_neg(&self) -> Self {
            self.clone()
        }
        fn ring_mul(&self, other: &Self) -> Self {
            NonCancelling(self.0 * other.0)
        }
        fn ring_gcd(&self, other: &Self) -> Self {
            NonCancelling(crate::rational::gcd(self.0, other.0))
        }
        fn ring_exact_div(&self, other: &Self) -> Option<Self> {
            if other.0 == 0 || self.0 % other.0 != 0 {
                None
            } else {
                Some(NonCancelling(self.0 / other.0))
            }
        }
    }

    #[test]
    fn pseudo_div_reports_overflow_when_reduction_cannot_terminate() {
        let a = Polynomial::new(vec![
            NonCancelling(-1),
            NonCancelling(0),
            NonCancelling(0),
            NonCancelling(1),
        ]); // x^3 - 1
        let b = Polynomial::new(vec![NonCancelling(1), NonCancelling(1), NonCancelling(1)]); // x^2 + x + 1
        assert!(matches!(a.pseudo_div(&b), Err(CoreError::PseudoDivOverflow(_))));
    }
}

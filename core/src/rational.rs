//! Integer and rational helpers shared by every other module: gcd/lcm,
//! p-adic valuation of a rational, and lowest-terms reduction.

use crate::error::CoreError;

/// Greatest common divisor, always non-negative.
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Least common multiple, always non-negative. `lcm(0, n) == 0`.
pub fn lcm(a: i64, b: i64) -> i64 {
    if a == 0 || b == 0 {
        return 0;
    }
    (a / gcd(a, b)).abs() * b.abs()
}

/// Reduce `num/denom` to lowest terms with a positive denominator.
pub fn reduce(num: i64, denom: i64) -> Result<(i64, i64), CoreError> {
    if denom == 0 {
        return Err(CoreError::DivisionByZero);
    }
    if num == 0 {
        return Ok((0, 1));
    }
    let g = gcd(num, denom);
    let (mut n, mut d) = (num / g, denom / g);
    if d < 0 {
        n = -n;
        d = -d;
    }
    Ok((n, d))
}

/// The p-adic valuation `v_p(x)`: the largest `k` with `p^k | x`. Panics if
/// `x == 0`, mirroring the source's `assert x % 1 == 0` precondition — callers
/// are expected to special-case zero before calling this.
fn highest_power_of_p(mut x: i64, p: u64) -> i64 {
    assert!(x != 0, "highest_power_of_p is undefined at zero");
    let p = p as i64;
    let mut count = 0;
    while x % p == 0 {
        count += 1;
        x /= p;
    }
    count
}

/// `v_p(num) - v_p(denom)`, the p-adic valuation of the rational `num/denom`.
pub fn p_adic_valuation(num: i64, denom: i64, p: u64) -> i64 {
    highest_power_of_p(num, p) - highest_power_of_p(denom, p)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gcd_lcm_basic() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(0, 5), 5);
        assert_eq!(lcm(4, 6), 12);
        assert_eq!(lcm(0, 6), 0);
    }

    #[test]
    fn reduce_normalizes_sign_and_terms() {
        assert_eq!(reduce(4, -8).unwrap(), (-1, 2));
        assert_eq!(reduce(-4, -8).unwrap(), (1, 2));
        assert_eq!(reduce(0, 7).unwrap(), (0, 1));
        assert_eq!(reduce(1, 0), Err(CoreError::DivisionByZero));
    }

    #[test]
    fn p_adic_valuation_matches_factorization() {
        assert_eq!(p_adic_valuation(18, 4, 3), 2);
        assert_eq!(p_adic_valuation(1, 2, 5), 0);
        assert_eq!(p_adic_valuation(9, 27, 3), -1);
    }
}

//! IFS simplification (`spec.md` §4.5 "Simplification (optional)"): conjugate
//! the IFS by a fixed affine change of variables so the first map's constant
//! term becomes zero, rescaling the rest. The rewrite is carried out in exact
//! rational arithmetic (never p-adic multiplication, per the core's
//! Non-goals) and only the final constants are re-embedded as p-adics.
//!
//! `spec.md` §9 Open Question (i) leaves the complex case's correctness
//! unresolved in the source; [`simplify_complex`] implements the same
//! bookkeeping as [`simplify_real`] but is not claimed to be proven correct,
//! matching that note (see `DESIGN.md`).

use padic_core::{reduce, ComplexPAdic, PAdic};

use crate::error::IfsError;
use crate::ifs_map::{ComplexMap, IfsMap, RealMap};

type Rat = (i64, i64);

fn rat_add(a: Rat, b: Rat) -> Rat {
    reduce(a.0 * b.1 + b.0 * a.1, a.1 * b.1).expect("denominators are never zero")
}

fn rat_sub(a: Rat, b: Rat) -> Rat {
    rat_add(a, (-b.0, b.1))
}

fn rat_mul(a: Rat, b: Rat) -> Rat {
    reduce(a.0 * b.0, a.1 * b.1).expect("denominators are never zero")
}

fn rat_div(a: Rat, b: Rat) -> Rat {
    reduce(a.0 * b.1, a.1 * b.0).expect("division by the zero rational is a caller bug")
}

/// Conjugates a real IFS by a translation `x = y + c` chosen so the first
/// map's constant term vanishes: `c` is `f_0`'s fixed point, and every map's
/// new constant is `f_i(c) - c`.
pub fn simplify_real(p: u64, maps: &[RealMap]) -> Result<Vec<RealMap>, IfsError> {
    assert!(!maps.is_empty(), "an IFS needs at least one map");
    let scale = |m: &RealMap| -> Rat {
        let pk = (p as i64).pow(m.k() as u32);
        (m.epsilon() as i64 * pk, 1)
    };
    let constants: Vec<Rat> = maps.iter().map(|m| m.d().to_rational()).collect();
    let scales: Vec<Rat> = maps.iter().map(scale).collect();

    // c solves c = scale_0 * c + d_0, i.e. c = d_0 / (1 - scale_0).
    let one: Rat = (1, 1);
    let c = rat_div(constants[0], rat_sub(one, scales[0]));

    let mut rewritten = Vec::with_capacity(maps.len());
    for (m, (&scale_i, &d_i)) in maps.iter().zip(scales.iter().zip(constants.iter())) {
        // d_i' = scale_i * c + d_i - c = c * (scale_i - 1) + d_i.
        let d_prime = rat_add(rat_mul(c, rat_sub(scale_i, one)), d_i);
        let new_d = PAdic::from_rational(p, d_prime.0, d_prime.1)?;
        rewritten.push(RealMap::new(m.name().to_string(), new_d, m.k(), m.epsilon())?);
    }
    Ok(rewritten)
}

/// A Gaussian rational `re + im*i`, used only as scratch precision for
/// [`simplify_complex`]'s conjugation arithmetic.
#[derive(Clone, Copy)]
struct CRat {
    re: Rat,
    im: Rat,
}

impl CRat {
    fn real(r: Rat) -> Self {
        CRat { re: r, im: (0, 1) }
    }

    fn one() -> Self {
        CRat::real((1, 1))
    }

    fn add(self, other: Self) -> Self {
        CRat { re: rat_add(self.re, other.re), im: rat_add(self.im, other.im) }
    }

    fn sub(self, other: Self) -> Self {
        CRat { re: rat_sub(self.re, other.re), im: rat_sub(self.im, other.im) }
    }

    fn mul(self, other: Self) -> Self {
        // (a+bi)(c+di) = (ac - bd) + (ad + bc)i
        CRat {
            re: rat_sub(rat_mul(self.re, other.re), rat_mul(self.im, other.im)),
            im: rat_add(rat_mul(self.re, other.im), rat_mul(self.im, other.re)),
        }
    }

    fn conj(self) -> Self {
        CRat { re: self.re, im: (-self.im.0, self.im.1) }
    }

    fn div(self, other: Self) -> Self {
        let norm = rat_add(rat_mul(other.re, other.re), rat_mul(other.im, other.im));
        let numerator = self.mul(other.conj());
        CRat { re: rat_div(numerator.re, norm), im: rat_div(numerator.im, norm) }
    }

    /// Multiplication by `i^n`, matching [`ComplexPAdic::rotate`]'s
    /// `(re, im) -> (-im, re)` step repeated `n mod 4` times.
    fn rotate(self, n: i64) -> Self {
        let mut v = self;
        for _ in 0..n.rem_euclid(4) {
            v = CRat { re: (-v.im.0, v.im.1), im: v.re };
        }
        v
    }

    fn from_complex_padic(z: &ComplexPAdic) -> Self {
        CRat { re: z.re().to_rational(), im: z.im().to_rational() }
    }
}

/// As [`simplify_real`], but the affine conjugation is by a complex
/// translation and each map's linear part is `i^epsilon * p^k`. See the
/// module note on Open Question (i): implemented, not proven correct.
pub fn simplify_complex(p: u64, maps: &[ComplexMap]) -> Result<Vec<ComplexMap>, IfsError> {
    assert!(!maps.is_empty(), "an IFS needs at least one map");
    let scale = |m: &ComplexMap| -> CRat {
        let pk = (p as i64).pow(m.k() as u32);
        CRat::real((pk, 1)).rotate(m.epsilon() as i64)
    };
    let constants: Vec<CRat> = maps.iter().map(|m| CRat::from_complex_padic(m.d())).collect();
    let scales: Vec<CRat> = maps.iter().map(scale).collect();

    let one = CRat::one();
    let c = constants[0].div(one.sub(scales[0]));

    let mut rewritten = Vec::with_capacity(maps.len());
    for (m, (&scale_i, &d_i)) in maps.iter().zip(scales.iter().zip(constants.iter())) {
        let d_prime = c.mul(scale_i.sub(one)).add(d_i);
        let new_d = ComplexPAdic::from_rational(p, d_prime.re, d_prime.im)?;
        rewritten.push(ComplexMap::new(m.name().to_string(), new_d, m.k(), m.epsilon())?);
    }
    Ok(rewritten)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simplify_real_zeroes_the_first_constant() {
        let p = 3;
        let a = RealMap::new("A", PAdic::from_rational(p, 1, 2).unwrap(), 1, 1).unwrap();
        let b = RealMap::new("B", PAdic::from_rational(p, -1, 2).unwrap(), 1, -1).unwrap();
        let rewritten = simplify_real(p, &[a, b]).unwrap();
        assert!(rewritten[0].d().is_zero());
    }

    #[test]
    fn simplify_real_preserves_shift_and_sign() {
        let p = 5;
        let a = RealMap::new("A", PAdic::from_rational(p, 2, 3).unwrap(), 2, 1).unwrap();
        let b = RealMap::new("B", PAdic::from_rational(p, 1, 3).unwrap(), 1, -1).unwrap();
        let rewritten = simplify_real(p, &[a, b]).unwrap();
        assert_eq!(rewritten[0].epsilon(), 1);
        assert_eq!(rewritten[0].k(), 2);
        assert_eq!(rewritten[1].epsilon(), -1);
        assert_eq!(rewritten[1].k(), 1);
    }

    #[test]
    fn simplify_complex_zeroes_the_first_constant() {
        let p = 3;
        let a = ComplexMap::new("A", ComplexPAdic::from_rational(p, (1, 2), (1, 4)).unwrap(), 1, 0)
            .unwrap();
        let b = ComplexMap::new("B", ComplexPAdic::from_rational(p, (-1, 2), (0, 1)).unwrap(), 1, 1)
            .unwrap();
        let rewritten = simplify_complex(p, &[a, b]).unwrap();
        assert!(rewritten[0].d().is_zero());
    }
}

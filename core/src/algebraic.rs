//! Fixed-rank algebraic extensions of a base [`Ring`]: elements are
//! coordinate tuples over a basis `{e_0, ..., e_{n-1}}`, and multiplication is
//! driven by an explicit structure-constant table (a [`MultiplicationRule`])
//! rather than a closure, so rules stay comparable and composable.

use crate::polynomial::Ring;

/// `e_i * e_j = coeff * e_index` for every basis pair `(i, j)`, stored as an
/// `n x n` table of single terms. This is enough to express the extensions
/// this crate needs (quotients by `x^n - c`) without a general bilinear form.
#[derive(Clone, Debug)]
pub struct MultiplicationRule<T: Ring> {
    rank: usize,
    table: Vec<Vec<(usize, T)>>,
}

impl<T: Ring> MultiplicationRule<T> {
    pub fn rank(&self) -> usize {
        self.rank
    }

    fn apply(&self, i: usize, j: usize) -> &(usize, T) {
        &self.table[i][j]
    }

    /// The rule for `Z[alpha] = R[x] / (x^n - c)` with basis
    /// `{1, alpha, ..., alpha^{n-1}}`: `e_i * e_j = e_{i+j}` when `i + j < n`,
    /// and `e_i * e_j = c * e_{i+j-n}` once the exponent wraps past `alpha^n = c`.
    pub fn nth_root_rule(n: usize, c: T) -> Self {
        assert!(n > 0, "extension rank must be positive");
        let table = (0..n)
            .map(|i| {
                (0..n)
                    .map(|j| {
                        let sum = i + j;
                        if sum < n {
                            (sum, T::ring_one())
                        } else {
                            (sum - n, c.clone())
                        }
                    })
                    .collect()
            })
            .collect();
        MultiplicationRule { rank: n, table }
    }

    /// Combines two rules into one over the tensor-product basis (rank
    /// `a.rank * b.rank`), reshaping the pair of indices `(i, j)` into the
    /// single index `i * b.rank + j` and multiplying the two rules'
    /// coefficients. This lets e.g. a p-adic extension and a root-of-unity
    /// extension be combined into one algebraic structure.
    pub fn mix_rules(a: &MultiplicationRule<T>, b: &MultiplicationRule<T>) -> MultiplicationRule<T> {
        let rank = a.rank * b.rank;
        let index = |i: usize, j: usize| i * b.rank + j;
        let mut table = vec![vec![(0usize, T::ring_zero()); rank]; rank];
        for i1 in 0..a.rank {
            for j1 in 0..b.rank {
                for i2 in 0..a.rank {
                    for j2 in 0..b.rank {
                        let (ka, ca) = a.apply(i1, i2);
                        let (kb, cb) = b.apply(j1, j2);
                        table[index(i1, j1)][index(i2, j2)] = (index(*ka, *kb), ca.ring_mul(cb));
                    }
                }
            }
        }
        MultiplicationRule { rank, table }
    }
}

/// The free-standing function form of [`MultiplicationRule::mix_rules`], for
/// call sites that read better without the type-qualified path.
pub fn mix_rules<T: Ring>(a: &MultiplicationRule<T>, b: &MultiplicationRule<T>) -> MultiplicationRule<T> {
    MultiplicationRule::mix_rules(a, b)
}

/// An element of a rank-`n` algebraic extension: a coordinate tuple over the
/// extension's basis. Multiplication needs the extension's
/// [`MultiplicationRule`] since it isn't carried by the element itself.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AlgebraicElement<T: Ring> {
    coords: Vec<T>,
}

impl<T: Ring> AlgebraicElement<T> {
    pub fn new(coords: Vec<T>) -> Self {
        AlgebraicElement { coords }
    }

    pub fn zero(rank: usize) -> Self {
        AlgebraicElement { coords: vec![T::ring_zero(); rank] }
    }

    pub fn basis(rank: usize, i: usize) -> Self {
        let mut coords = vec![T::ring_zero(); rank];
        coords[i] = T::ring_one();
        AlgebraicElement { coords }
    }

    pub fn coords(&self) -> &[T] {
        &self.coords
    }

    pub fn rank(&self) -> usize {
        self.coords.len()
    }

    pub fn add(&self, other: &Self) -> Self {
        AlgebraicElement {
            coords: self.coords.iter().zip(&other.coords).map(|(a, b)| a.ring_add(b)).collect(),
        }
    }

    /// Plain componentwise negation (additive inverse).
    pub fn neg(&self) -> Self {
        AlgebraicElement { coords: self.coords.iter().map(Ring::ring_neg).collect() }
    }

    pub fn mul(&self, other: &Self, rule: &MultiplicationRule<T>) -> Self {
        assert_eq!(self.rank(), rule.rank());
        assert_eq!(other.rank(), rule.rank());
        let mut out = vec![T::ring_zero(); rule.rank()];
        for (i, a) in self.coords.iter().enumerate() {
            if a.ring_is_zero() {
                continue;
            }
            for (j, b) in other.coords.iter().enumerate() {
                if b.ring_is_zero() {
                    continue;
                }
                let (k, c) = rule.apply(i, j);
                out[*k] = out[*k].ring_add(&a.ring_mul(b).ring_mul(c));
            }
        }
        AlgebraicElement { coords: out }
    }

    /// A signed permutation of coordinates: `result[k] = sign_k * self[perm[k]]`.
    /// This is how conjugation-like automorphisms (reordering and
    /// sign-flipping basis vectors) are expressed generically, as an
    /// alternative to plain [`AlgebraicElement::neg`].
    pub fn permute(&self, perm: &[(usize, T)]) -> Self {
        assert_eq!(perm.len(), self.rank());
        let coords = perm.iter().map(|(src, sign)| self.coords[*src].ring_mul(sign)).collect();
        AlgebraicElement { coords }
    }

    /// Constructs the generator `alpha` of `R[x] / (x^n - c)` together with
    /// its multiplication rule.
    pub fn nth_root(n: usize, c: T) -> (Self, MultiplicationRule<T>) {
        (AlgebraicElement::basis(n, 1.min(n - 1)), MultiplicationRule::nth_root_rule(n, c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nth_root_rule_wraps_through_the_defining_relation() {
        // R[x]/(x^3 - 2): alpha^3 = 2.
        let rule = MultiplicationRule::nth_root_rule(3, 2i64);
        let alpha = AlgebraicElement::basis(3, 1);
        let alpha_sq = alpha.mul(&alpha, &rule);
        assert_eq!(alpha_sq.coords(), &[0, 0, 1]);
        let alpha_cubed = alpha_sq.mul(&alpha, &rule);
        assert_eq!(alpha_cubed.coords(), &[2, 0, 0]); // alpha^3 = 2
    }

    #[test]
    fn multiplication_by_one_is_identity() {
        let rule = MultiplicationRule::nth_root_rule(4, 5i64);
        let one = AlgebraicElement::basis(4, 0);
        let x = AlgebraicElement::new(vec![1, 2, 3, 4]);
        assert_eq!(x.mul(&one, &rule), x);
    }

    #[test]
    fn mix_rules_combines_two_extensions() {
        let sqrt2 = MultiplicationRule::nth_root_rule(2, 2i64);
        let sqrt3 = MultiplicationRule::nth_root_rule(2, 3i64);
        let combined = mix_rules(&sqrt2, &sqrt3);
        assert_eq!(combined.rank(), 4);
        // basis index 1 = (alpha, 1), index 2 = (1, beta); their product should
        // land on index 3 = (alpha, beta) with coefficient 1.
        let e1 = AlgebraicElement::basis(4, 1);
        let e2 = AlgebraicElement::basis(4, 2);
        let prod = e1.mul(&e2, &combined);
        assert_eq!(prod.coords(), &[0, 0, 0, 1]);
    }

    #[test]
    fn permute_applies_signs_and_reordering() {
        let x = AlgebraicElement::new(vec![1, 2, 3]);
        let swapped_and_negated = x.permute(&[(1, -1), (0, 1), (2, -1)]);
        assert_eq!(swapped_and_negated.coords(), &[-2, 1, -3]);
    }
}

//! IFS maps `f(x) = rot(epsilon)(p^k * x) + d` (`spec.md` §3.3), in their real
//! (`epsilon` a sign) and complex (`epsilon` a rotation index) flavors. Both
//! share the [`IfsMap`] trait so [`crate::transducer::Transducer`] is written
//! once and monomorphized over either.

use padic_core::{ComplexPAdic, PAdic};

use crate::error::IfsError;
use crate::residue::Residue;

/// The part of a map's behavior the transducer's exploration loop needs:
/// how a state's orientation acts on the shifted sum before the digit shift,
/// and how composing with this map updates the orientation.
pub trait IfsMap: Clone {
    type Residue: Residue;
    type Orientation: Copy + Eq + std::hash::Hash + std::fmt::Debug + std::fmt::Display;

    fn name(&self) -> &str;
    fn k(&self) -> usize;
    fn constant(&self) -> &Self::Residue;
    fn initial_orientation() -> Self::Orientation;
    /// `y = orientation` applied to `sum = residue + d`, before shifting.
    fn orient(&self, sum: &Self::Residue, orientation: Self::Orientation) -> Self::Residue;
    /// The orientation a state transitions to after applying this map.
    fn compose_orientation(&self, orientation: Self::Orientation) -> Self::Orientation;
}

/// A real-line map: `epsilon` is a sign, `+1` or `-1`.
#[derive(Clone, Debug)]
pub struct RealMap {
    name: String,
    d: PAdic,
    k: usize,
    epsilon: i8,
}

impl RealMap {
    pub fn new(name: impl Into<String>, d: PAdic, k: usize, epsilon: i8) -> Result<Self, IfsError> {
        if k == 0 {
            return Err(IfsError::InvalidShift(k));
        }
        assert!(epsilon == 1 || epsilon == -1, "epsilon must be +-1, got {epsilon}");
        Ok(RealMap { name: name.into(), d, k, epsilon })
    }

    pub fn d(&self) -> &PAdic {
        &self.d
    }

    pub fn epsilon(&self) -> i8 {
        self.epsilon
    }
}

impl IfsMap for RealMap {
    type Residue = PAdic;
    type Orientation = i8;

    fn name(&self) -> &str {
        &self.name
    }

    fn k(&self) -> usize {
        self.k
    }

    fn constant(&self) -> &PAdic {
        &self.d
    }

    fn initial_orientation() -> i8 {
        1
    }

    fn orient(&self, sum: &PAdic, orientation: i8) -> PAdic {
        if orientation == 1 {
            sum.clone()
        } else {
            sum.neg()
        }
    }

    fn compose_orientation(&self, orientation: i8) -> i8 {
        orientation * self.epsilon
    }
}

impl std::fmt::Display for RealMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.name.is_empty() {
            write!(f, "{}: ", self.name)?;
        }
        if self.epsilon < 0 {
            write!(f, "-")?;
        }
        write!(f, "{}", self.d.p())?;
        if self.k != 1 {
            write!(f, "^{}", self.k)?;
        }
        write!(f, "x + {}", self.d)
    }
}

/// A complex-plane map: `epsilon` is a rotation index in `0..4`.
#[derive(Clone, Debug)]
pub struct ComplexMap {
    name: String,
    d: ComplexPAdic,
    k: usize,
    epsilon: u8,
}

impl ComplexMap {
    pub fn new(
        name: impl Into<String>,
        d: ComplexPAdic,
        k: usize,
        epsilon: u8,
    ) -> Result<Self, IfsError> {
        if k == 0 {
            return Err(IfsError::InvalidShift(k));
        }
        Ok(ComplexMap { name: name.into(), d, k, epsilon: epsilon % 4 })
    }

    pub fn d(&self) -> &ComplexPAdic {
        &self.d
    }

    pub fn epsilon(&self) -> u8 {
        self.epsilon
    }
}

impl IfsMap for ComplexMap {
    type Residue = ComplexPAdic;
    type Orientation = u8;

    fn name(&self) -> &str {
        &self.name
    }

    fn k(&self) -> usize {
        self.k
    }

    fn constant(&self) -> &ComplexPAdic {
        &self.d
    }

    fn initial_orientation() -> u8 {
        0
    }

    fn orient(&self, sum: &ComplexPAdic, orientation: u8) -> ComplexPAdic {
        sum.rotate(orientation as i64)
    }

    fn compose_orientation(&self, orientation: u8) -> u8 {
        (orientation as u64 + self.epsilon as u64).rem_euclid(4) as u8
    }
}

impl std::fmt::Display for ComplexMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.name.is_empty() {
            write!(f, "{}: ", self.name)?;
        }
        if self.epsilon / 2 % 2 == 1 {
            write!(f, "-")?;
        }
        if self.epsilon % 2 == 1 {
            write!(f, "i * ")?;
        }
        write!(f, "{}", self.d.p())?;
        if self.k != 1 {
            write!(f, "^{}", self.k)?;
        }
        write!(f, " * x")?;
        if !self.d.is_zero() {
            write!(f, " + {}", self.d)?;
        }
        Ok(())
    }
}

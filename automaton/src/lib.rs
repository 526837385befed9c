//! NDFA/DFA subset construction and Hausdorff dimension estimation for
//! transducers built by `padic-ifs`.

mod dfa;
mod dimension;
mod ndfa;

pub use dfa::Dfa;
pub use dimension::{hausdorff_dimension, SpectralRadius};
pub use ndfa::Ndfa;

//! IFS maps and the transducer they generate, plus best-effort IFS
//! simplification. Builds on [`padic_core`]'s p-adic and complex p-adic
//! arithmetic; everything here is pure exploration over that arithmetic, no
//! p-adic multiplication.

mod error;
mod ifs_map;
mod pipeline;
mod residue;
mod simplify;
mod transducer;

pub use error::IfsError;
pub use ifs_map::{ComplexMap, IfsMap, RealMap};
pub use pipeline::BuildTransducer;
pub use residue::{shift, Residue};
pub use simplify::{simplify_complex, simplify_real};
pub use transducer::{Edge, State, Transducer};

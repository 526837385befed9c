//! Wraps transducer exploration as a [`padic_pass::Pass`] stage, so the CLI
//! can chain config parsing straight into transducer construction the same
//! way a multi-stage compiler chains its AST/MIR/IR translation passes.

use std::marker::PhantomData;

use padic_pass::Pass;

use crate::error::IfsError;
use crate::ifs_map::IfsMap;
use crate::transducer::Transducer;

/// Explores the transducer for `(p, maps)`, capping exploration at a fixed
/// state-count budget.
pub struct BuildTransducer<M> {
    cap: usize,
    _map: PhantomData<M>,
}

impl<M: IfsMap> BuildTransducer<M> {
    pub fn new(cap: usize) -> Self {
        BuildTransducer { cap, _map: PhantomData }
    }
}

impl<M: IfsMap> Pass for BuildTransducer<M> {
    type Input<'a> = (u64, Vec<M>);
    type Output<'a> = Transducer<M>;
    type Error = IfsError;

    fn run<'a>(&mut self, input: (u64, Vec<M>)) -> Result<Transducer<M>, IfsError> {
        Transducer::build(input.0, input.1, self.cap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ifs_map::RealMap;
    use padic_core::PAdic;

    #[test]
    fn pass_builds_the_same_transducer_as_the_direct_call() {
        let p = 2;
        let maps =
            vec![RealMap::new("A", PAdic::zero(p), 1, 1).unwrap()];
        let mut pass = BuildTransducer::new(64);
        let t = pass.run((p, maps.clone())).unwrap();
        let direct = Transducer::build(p, maps, 64).unwrap();
        assert_eq!(t.states().len(), direct.states().len());
    }
}

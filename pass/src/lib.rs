//! Minimal compiler-pass infrastructure shared by the config reader and the
//! IFS-to-transducer pipeline.
//!
//! A [`Pass`] takes an immutable input and produces a fresh output or an
//! error; passes compose with [`Pass::chain`] into a single pass that runs
//! each stage in sequence, short-circuiting on the first error.

/// A single stage of a pipeline.
///
/// `Input`/`Output` are generic associated types rather than plain associated
/// types so a pass can borrow from the value passed to [`run`](Pass::run)
/// without forcing every pass in a chain to share one lifetime.
pub trait Pass {
    type Input<'a>;
    type Output<'a>;
    type Error;

    fn run<'a>(&mut self, input: Self::Input<'a>) -> Result<Self::Output<'a>, Self::Error>;

    /// Build a new pass that runs `self`, then feeds its output into `next`.
    fn chain<P>(self, next: P) -> Chain<Self, P>
    where
        Self: Sized,
        P: for<'a> Pass<Input<'a> = Self::Output<'a>, Error = Self::Error>,
    {
        Chain { first: self, second: next }
    }
}

/// The result of [`Pass::chain`]: runs `A` then `B`, propagating `A`'s error
/// type (both stages must agree on it, same as `?` composition would require).
pub struct Chain<A, B> {
    first: A,
    second: B,
}

impl<A, B> Pass for Chain<A, B>
where
    A: Pass,
    B: for<'a> Pass<Input<'a> = A::Output<'a>, Error = A::Error>,
{
    type Input<'a> = A::Input<'a>;
    type Output<'a> = B::Output<'a>;
    type Error = A::Error;

    fn run<'a>(&mut self, input: Self::Input<'a>) -> Result<Self::Output<'a>, Self::Error> {
        let mid = self.first.run(input)?;
        self.second.run(mid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AddOne;
    impl Pass for AddOne {
        type Input<'a> = i64;
        type Output<'a> = i64;
        type Error = ();

        fn run<'a>(&mut self, input: i64) -> Result<i64, ()> {
            Ok(input + 1)
        }
    }

    struct Double;
    impl Pass for Double {
        type Input<'a> = i64;
        type Output<'a> = i64;
        type Error = ();

        fn run<'a>(&mut self, input: i64) -> Result<i64, ()> {
            Ok(input * 2)
        }
    }

    #[test]
    fn chain_runs_stages_in_order() {
        let mut pipeline = AddOne.chain(Double);
        assert_eq!(pipeline.run(5).unwrap(), 12);
    }
}

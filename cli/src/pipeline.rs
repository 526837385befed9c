//! Glues `padic_parser::ParseConfig` into transducer construction as a
//! single chained [`padic_pass::Pass`], the way `air-script`'s own CLI drives
//! its parser straight into later compiler stages. `BuildFromConfig` is the
//! second stage: it takes the [`ParsedConfig`] the first stage produces,
//! simplifies the maps first when the directive calls for it, and builds the
//! transducer via `padic_ifs::BuildTransducer` rather than calling
//! `Transducer::build` directly.

use padic_ifs::{simplify_complex, simplify_real, BuildTransducer, ComplexMap, RealMap, Transducer};
use padic_parser::{Directive, MapSet, ParsedConfig, ParserError};
use padic_pass::Pass;

/// The transducer a config file's maps were built into, still tagged by
/// which grammar (real or complex) produced them. For `SIMPLIFY`, `maps` is
/// the rewritten set the transducer was actually built from; otherwise it's
/// the set the config file named directly.
pub enum Built {
    Real { maps: Vec<RealMap>, transducer: Transducer<RealMap> },
    Complex { maps: Vec<ComplexMap>, transducer: Transducer<ComplexMap> },
}

pub struct BuildFromConfig {
    cap: usize,
}

impl BuildFromConfig {
    pub fn new(cap: usize) -> Self {
        BuildFromConfig { cap }
    }
}

impl Pass for BuildFromConfig {
    type Input<'a> = ParsedConfig;
    type Output<'a> = (Directive, u64, Built);
    type Error = ParserError;

    fn run<'a>(&mut self, input: ParsedConfig) -> Result<Self::Output<'a>, ParserError> {
        let ParsedConfig { prime, directive, maps } = input;
        let built = match maps {
            MapSet::Real(maps) => {
                let maps = if directive == Directive::Simplify { simplify_real(prime, &maps)? } else { maps };
                let transducer = BuildTransducer::new(self.cap).run((prime, maps.clone()))?;
                Built::Real { maps, transducer }
            }
            MapSet::Complex(maps) => {
                let maps = if directive == Directive::Simplify { simplify_complex(prime, &maps)? } else { maps };
                let transducer = BuildTransducer::new(self.cap).run((prime, maps.clone()))?;
                Built::Complex { maps, transducer }
            }
        };
        Ok((directive, prime, built))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use padic_core::PAdic;
    use padic_parser::Directive as D;

    fn config(directive: D, maps: Vec<RealMap>) -> ParsedConfig {
        ParsedConfig { prime: 2, directive, maps: MapSet::Real(maps) }
    }

    #[test]
    fn non_simplify_directives_build_from_the_maps_as_given() {
        let maps = vec![RealMap::new("A", PAdic::zero(2), 1, 1).unwrap()];
        let mut pass = BuildFromConfig::new(64);
        let (directive, p, built) = pass.run(config(D::Dfa, maps)).unwrap();
        assert_eq!(directive, D::Dfa);
        assert_eq!(p, 2);
        match built {
            Built::Real { maps, .. } => assert_eq!(maps.len(), 1),
            Built::Complex { .. } => panic!("expected real maps"),
        }
    }

    #[test]
    fn simplify_directive_builds_from_the_rewritten_maps() {
        let maps = vec![
            RealMap::new("A", PAdic::zero(2), 1, 1).unwrap(),
            RealMap::new("B", PAdic::from_rational(2, 1, 1).unwrap(), 1, 1).unwrap(),
        ];
        let mut pass = BuildFromConfig::new(64);
        let (directive, _, built) = pass.run(config(D::Simplify, maps)).unwrap();
        assert_eq!(directive, D::Simplify);
        match built {
            Built::Real { transducer, .. } => assert!(!transducer.states().is_empty()),
            Built::Complex { .. } => panic!("expected real maps"),
        }
    }
}

//! Wraps [`parse_config`] as a [`padic_pass::Pass`] stage, so the CLI chains
//! raw config text straight into a [`ParsedConfig`] the same way the
//! transducer-building crate chains its own stage (`padic_ifs::BuildTransducer`).

use padic_pass::Pass;

use crate::config::{parse_config, ParsedConfig};
use crate::error::ParserError;

/// Parses a config file's text. `complex` selects the map grammar, exactly
/// as the free function it wraps.
pub struct ParseConfig {
    complex: bool,
}

impl ParseConfig {
    pub fn new(complex: bool) -> Self {
        ParseConfig { complex }
    }
}

impl Pass for ParseConfig {
    type Input<'a> = &'a str;
    type Output<'a> = ParsedConfig;
    type Error = ParserError;

    fn run<'a>(&mut self, input: &'a str) -> Result<ParsedConfig, ParserError> {
        parse_config(input, self.complex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Directive, MapSet};

    #[test]
    fn pass_parses_the_same_config_as_the_direct_call() {
        let text = "p:2\nDFA\nA: 2x + 0\nB: 2x + 1\n";
        let mut pass = ParseConfig::new(false);
        let parsed = pass.run(text).unwrap();
        assert_eq!(parsed.prime, 2);
        assert_eq!(parsed.directive, Directive::Dfa);
        match parsed.maps {
            MapSet::Real(maps) => assert_eq!(maps.len(), 2),
            MapSet::Complex(_) => panic!("expected real maps"),
        }
    }
}

//! The whole-file config shape (`spec.md` §6.1): a prime, a directive, and a
//! list of IFS maps, either all real or all complex. Grounded on
//! `original_source/pIFS_reader.py` and `complex_pIFS_reader.py`'s top-level
//! script bodies, reshaped into data plus a pass rather than a side-effecting
//! script.

use padic_core::{ComplexPAdic, PAdic};
use padic_ifs::{ComplexMap, IfsError, RealMap};

use crate::error::ParserError;
use crate::grammar::{parse_complex_map_line, parse_real_map_line};

/// What the CLI should do with the built transducer (`spec.md` §6.1/§6.2).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    Dfa,
    Ndfa,
    AdjacencyMatrix,
    Dimension,
    Simplify,
    /// Any line-2 string other than the ones above: render the transducer.
    Transducer,
}

impl Directive {
    fn parse(text: &str) -> Self {
        match text.trim().to_uppercase().as_str() {
            "DFA" | "DFS" => Directive::Dfa,
            "NDFA" | "NDFS" => Directive::Ndfa,
            "A" => Directive::AdjacencyMatrix,
            "DIMENSION" => Directive::Dimension,
            "SIMPLIFY" => Directive::Simplify,
            _ => Directive::Transducer,
        }
    }
}

/// The maps making up a config file, either all real or all complex
/// (the file format doesn't mix the two kinds).
pub enum MapSet {
    Real(Vec<RealMap>),
    Complex(Vec<ComplexMap>),
}

/// The fully parsed and validated contents of a config file.
pub struct ParsedConfig {
    pub prime: u64,
    pub directive: Directive,
    pub maps: MapSet,
}

/// Parses a config file's text. `complex` selects which map grammar and
/// constant type line 3 onward uses; the format itself doesn't self-describe
/// this, so the caller (the CLI, via a flag or file extension convention)
/// decides.
pub fn parse_config(text: &str, complex: bool) -> Result<ParsedConfig, ParserError> {
    let mut lines = text.lines();

    let prime_line = lines.next().ok_or_else(|| ParserError::MalformedInput(1, "empty config file".into()))?;
    let prime_text = prime_line
        .strip_prefix("p:")
        .ok_or_else(|| ParserError::MalformedInput(1, format!("expected `p:<prime>`, got {prime_line:?}")))?;
    let prime: u64 = prime_text
        .trim()
        .parse()
        .map_err(|_| ParserError::MalformedInput(1, format!("not a prime: {prime_text:?}")))?;
    if prime < 2 {
        return Err(padic_core::CoreError::InvalidPrime(prime).into());
    }

    let directive_line =
        lines.next().ok_or_else(|| ParserError::MalformedInput(2, "missing directive line".into()))?;
    let directive = Directive::parse(directive_line);

    let maps = if complex {
        MapSet::Complex(parse_complex_maps(lines, prime)?)
    } else {
        MapSet::Real(parse_real_maps(lines, prime)?)
    };

    Ok(ParsedConfig { prime, directive, maps })
}

fn parse_real_maps<'a>(
    lines: impl Iterator<Item = &'a str>,
    prime: u64,
) -> Result<Vec<RealMap>, ParserError> {
    let mut maps = Vec::new();
    for (offset, line) in lines.enumerate() {
        let line_no = offset + 3;
        if line.trim().is_empty() {
            continue;
        }
        let parsed = parse_real_map_line(line, prime, line_no)?;
        let d = PAdic::from_rational(prime, parsed.numerator, parsed.denominator)?;
        let map = RealMap::new(parsed.name, d, parsed.k, parsed.sign)
            .map_err(|err| lift_map_error(err, line_no))?;
        maps.push(map);
    }
    Ok(maps)
}

fn parse_complex_maps<'a>(
    lines: impl Iterator<Item = &'a str>,
    prime: u64,
) -> Result<Vec<ComplexMap>, ParserError> {
    let mut maps = Vec::new();
    for (offset, line) in lines.enumerate() {
        let line_no = offset + 3;
        if line.trim().is_empty() {
            continue;
        }
        let parsed = parse_complex_map_line(line, prime, line_no)?;
        let d = ComplexPAdic::from_rational(
            prime,
            (parsed.re_numerator, parsed.re_denominator),
            (parsed.im_numerator, parsed.im_denominator),
        )?;
        let map = ComplexMap::new(parsed.name, d, parsed.k, parsed.epsilon)
            .map_err(|err| lift_map_error(err, line_no))?;
        maps.push(map);
    }
    Ok(maps)
}

/// A map's own constructor doesn't know which config line it came from;
/// `InvalidShift` is the only error it can raise (`k == 0`), so wrap it back
/// into a line-numbered `MalformedInput`.
fn lift_map_error(err: IfsError, line_no: usize) -> ParserError {
    match err {
        IfsError::InvalidShift(k) => ParserError::MalformedInput(line_no, format!("shift count k must be at least 1, got {k}")),
        other => ParserError::Ifs(other),
    }
}

//! Map-line grammar (`spec.md` §6.1): `<name>: <signed coeff>p[^k] * x [+|-]
//! <constant>`, where the constant is a plain rational for the real pipeline
//! or an `a + b*i`-style complex rational for the complex one. Grounded
//! directly on `original_source/pIFS_reader.py` (real) and
//! `original_source/complex_pIFS_reader.py` (complex, including its
//! `cplx_finder_regex`).

use regex::Regex;

use crate::error::ParserError;

/// The pieces extracted from one map line, before being handed to
/// `RealMap::new`/`ComplexMap::new`.
pub struct RealMapLine {
    pub name: String,
    pub sign: i8,
    pub k: usize,
    pub numerator: i64,
    pub denominator: i64,
}

pub struct ComplexMapLine {
    pub name: String,
    /// 0 = `+1`, 1 = `+i`, 2 = `-1`, 3 = `-i`, matching `ComplexMap`'s rotation index.
    pub epsilon: u8,
    pub k: usize,
    pub re_numerator: i64,
    pub re_denominator: i64,
    pub im_numerator: i64,
    pub im_denominator: i64,
}

/// Splits `<name>: <expression>` and returns the trimmed halves, rejecting
/// lines with no `:` separator.
fn split_name(line: &str, line_no: usize) -> Result<(String, String), ParserError> {
    let (name, _, expression) = match line.split_once(':') {
        Some((n, e)) => (n, ':', e),
        None => {
            return Err(ParserError::MalformedInput(
                line_no,
                format!("expected `<name>: <expression>`, got {line:?}"),
            ))
        }
    };
    Ok((name.trim().to_string(), expression.trim().to_string()))
}

/// Splits `<coefficient>x<constant>` on the first `x`, the way the source
/// reader's `expression.partition('x')` does.
fn split_coefficient(expression: &str, line_no: usize) -> Result<(String, String), ParserError> {
    match expression.split_once('x') {
        Some((coefficient, constant)) => Ok((coefficient.trim().to_string(), constant.trim().to_string())),
        None => Err(ParserError::MalformedInput(line_no, format!("expected an `x` term in {expression:?}"))),
    }
}

/// Parses the `<sign>p[^k]` (or `<sign>i*p[^k]` for complex) coefficient,
/// returning the leftover sign-and-rotation text and the shift count `k`.
fn split_exponent<'a>(
    coefficient: &'a str,
    p: u64,
    line_no: usize,
) -> Result<(&'a str, usize), ParserError> {
    let p_str = p.to_string();
    let (prefix, rest) = match coefficient.split_once(p_str.as_str()) {
        Some((prefix, rest)) => (prefix, rest),
        None => {
            return Err(ParserError::MalformedInput(
                line_no,
                format!("expected prime {p} in coefficient {coefficient:?}"),
            ))
        }
    };
    let exponent = rest.trim_start_matches('^').replace('*', "");
    let exponent = exponent.trim();
    let k = if exponent.is_empty() {
        1
    } else {
        exponent
            .parse()
            .map_err(|_| ParserError::MalformedInput(line_no, format!("bad exponent {exponent:?}")))?
    };
    Ok((prefix.trim(), k))
}

/// Parses a signed rational `a/b` (denominator optional, defaulting to `1`);
/// an empty numerator defaults to `0`.
fn parse_rational(text: &str, line_no: usize) -> Result<(i64, i64), ParserError> {
    let text = text.replace(' ', "");
    let (numerator, _, denominator) = match text.split_once('/') {
        Some((n, d)) => (n, '/', d),
        None => (text.as_str(), '/', ""),
    };
    let numerator = if numerator.is_empty() { 0 } else { parse_i64(numerator, line_no)? };
    let denominator = if denominator.is_empty() { 1 } else { parse_i64(denominator, line_no)? };
    Ok((numerator, denominator))
}

fn parse_i64(text: &str, line_no: usize) -> Result<i64, ParserError> {
    text.parse()
        .map_err(|_| ParserError::MalformedInput(line_no, format!("not an integer: {text:?}")))
}

/// Parses a real map line: `<name>: [-]p[^k]x [+|-] <a>[/<b>]`.
pub fn parse_real_map_line(line: &str, p: u64, line_no: usize) -> Result<RealMapLine, ParserError> {
    let (name, expression) = split_name(line, line_no)?;
    let (coefficient, constant) = split_coefficient(&expression, line_no)?;
    let (sign_text, k) = split_exponent(&coefficient, p, line_no)?;
    let sign = if sign_text.contains('-') { -1 } else { 1 };

    let constant = constant.replace(' ', "");
    let (numerator, denominator) = if constant.is_empty() {
        (0, 1)
    } else {
        let leading_plus = constant.starts_with('+');
        let body = if leading_plus { &constant[1..] } else { constant.as_str() };
        parse_rational(body, line_no)?
    };

    Ok(RealMapLine { name, sign, k, numerator, denominator })
}

/// The complex-constant grammar from `complex_pIFS_reader.py`'s
/// `cplx_finder_regex`, simplified to the cases the map-line grammar
/// actually needs: an optional real part followed by an optional
/// `i`/`j`-tagged imaginary part, in either order.
fn complex_constant_regex() -> Regex {
    Regex::new(
        r"(?x)
        ^
        (?P<re>[+-]\d+(?:/\d+)?)?
        (?P<im>[+-](?:i|j)\*?\d*(?:/\d+)?|[+-]\d+(?:/\d+)?\*?(?:i|j))?
        $
        ",
    )
    .expect("complex constant regex is a fixed literal")
}

fn parse_signed_rational(text: &str, default: (i64, i64), line_no: usize) -> Result<(i64, i64), ParserError> {
    if text.is_empty() {
        return Ok(default);
    }
    let negative = text.starts_with('-');
    let body = text.trim_start_matches(['+', '-']);
    let (n, d) = parse_rational(body, line_no)?;
    Ok(if negative { (-n, d) } else { (n, d) })
}

/// Parses a complex constant such as `+1/2-i*3`, `0`, or `-i`.
fn parse_complex_constant(
    constant: &str,
    line_no: usize,
) -> Result<(i64, i64, i64, i64), ParserError> {
    let constant = constant.replace(' ', "");
    if constant.is_empty() {
        return Ok((0, 1, 0, 1));
    }
    let captures = complex_constant_regex().captures(&constant).ok_or_else(|| {
        ParserError::MalformedInput(line_no, format!("malformed complex constant {constant:?}"))
    })?;

    let re_text = captures.name("re").map(|m| m.as_str()).unwrap_or("");
    let im_text = captures.name("im").map(|m| m.as_str().replace(['i', 'j', '*'], "")).unwrap_or_default();

    let (re_n, re_d) = parse_signed_rational(re_text, (0, 1), line_no)?;
    let (im_n, im_d) = parse_signed_rational(&im_text, (0, 1), line_no)?;
    Ok((re_n, re_d, im_n, im_d))
}

/// Parses a complex map line: `<name>: [-][i*]p[^k] * x [+|-] <complex>`.
pub fn parse_complex_map_line(
    line: &str,
    p: u64,
    line_no: usize,
) -> Result<ComplexMapLine, ParserError> {
    let (name, expression) = split_name(line, line_no)?;
    let (coefficient, constant) = split_coefficient(&expression, line_no)?;
    let (sign_text, k) = split_exponent(&coefficient, p, line_no)?;
    let sign_text = sign_text.replace('*', "");

    let mut epsilon = 0u8;
    if sign_text.contains('-') {
        epsilon += 2;
    }
    if sign_text.contains('i') || sign_text.contains('j') {
        epsilon += 1;
    }

    let (re_numerator, re_denominator, im_numerator, im_denominator) =
        parse_complex_constant(constant.trim(), line_no)?;

    Ok(ComplexMapLine { name, epsilon, k, re_numerator, re_denominator, im_numerator, im_denominator })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_plain_real_map_line() {
        let parsed = parse_real_map_line("A: 3x + 1/2", 3, 3).unwrap();
        assert_eq!(parsed.name, "A");
        assert_eq!(parsed.sign, 1);
        assert_eq!(parsed.k, 1);
        assert_eq!((parsed.numerator, parsed.denominator), (1, 2));
    }

    #[test]
    fn parses_a_negated_shifted_real_map_line() {
        let parsed = parse_real_map_line("B: -3^2x - 1", 3, 4).unwrap();
        assert_eq!(parsed.sign, -1);
        assert_eq!(parsed.k, 2);
        assert_eq!((parsed.numerator, parsed.denominator), (-1, 1));
    }

    #[test]
    fn defaults_missing_constant_to_zero() {
        let parsed = parse_real_map_line("A: 2x", 2, 3).unwrap();
        assert_eq!((parsed.numerator, parsed.denominator), (0, 1));
    }

    #[test]
    fn rejects_a_line_with_no_colon() {
        let err = parse_real_map_line("2x + 1", 2, 5).unwrap_err();
        assert!(matches!(err, ParserError::MalformedInput(5, _)));
    }

    #[test]
    fn parses_a_complex_map_line_with_rotation_and_complex_constant() {
        let parsed = parse_complex_map_line("A: -i*5x + 1/2-i*3", 5, 3).unwrap();
        assert_eq!(parsed.epsilon, 3);
        assert_eq!(parsed.k, 1);
        assert_eq!((parsed.re_numerator, parsed.re_denominator), (1, 2));
        assert_eq!((parsed.im_numerator, parsed.im_denominator), (-3, 1));
    }

    #[test]
    fn parses_a_complex_map_line_with_no_constant() {
        let parsed = parse_complex_map_line("A: 5^2 * x", 5, 3).unwrap();
        assert_eq!(parsed.epsilon, 0);
        assert_eq!(parsed.k, 2);
        assert_eq!((parsed.re_numerator, parsed.im_numerator), (0, 0));
    }
}

//! Coefficient literal parsing.
//!
//! Real literals follow the C `strtod` grammar (decimal, scientific, hex floats,
//! `inf`/`infinity`/`nan`) and must consume the whole token. Complex literals are
//! free-form: `3+2i`, `2i+3`, `-i`, `1e-5-2.5i`, `4i`, `7`.

use num_complex::Complex64;

use crate::core::error::{InputError, LiteralError};

pub const IMAGINARY_MARKER: char = 'i';

/// The three coefficients of `a·x² + b·x + c = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Coefficients {
    Real { a: f64, b: f64, c: f64 },
    Complex { a: Complex64, b: Complex64, c: Complex64 },
}

impl Coefficients {
    pub fn is_real(&self) -> bool {
        matches!(self, Coefficients::Real { .. })
    }
}

/// Parse three tokens. If every token is a plain real the triple stays real,
/// otherwise all three are re-read as complex literals.
pub fn parse_coefficients<S: AsRef<str>>(tokens: &[S]) -> Result<Coefficients, InputError> {
    if tokens.len() < 3 {
        return Err(InputError::Incomplete { found: tokens.len() });
    }
    let toks = [tokens[0].as_ref(), tokens[1].as_ref(), tokens[2].as_ref()];

    if let (Ok(a), Ok(b), Ok(c)) = (parse_real(toks[0]), parse_real(toks[1]), parse_real(toks[2])) {
        return Ok(Coefficients::Real { a, b, c });
    }

    let mut parsed = [Complex64::new(0.0, 0.0); 3];
    for (position, tok) in toks.iter().enumerate() {
        parsed[position] = parse_complex(tok).map_err(|source| InputError::Unparsable {
            position,
            token: tok.to_string(),
            source,
        })?;
    }
    let [a, b, c] = parsed;
    Ok(Coefficients::Complex { a, b, c })
}

fn split_sign(s: &str) -> (bool, &str) {
    match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    }
}

/// Parse a real literal that must span the whole token.
pub fn parse_real(token: &str) -> Result<f64, LiteralError> {
    if token.is_empty() {
        return Err(LiteralError::Empty);
    }
    let value = match token.parse::<f64>() {
        Ok(v) => v,
        Err(_) => parse_hex_float(token).ok_or_else(|| LiteralError::InvalidReal(token.to_string()))?,
    };
    check_range(token, value)?;
    Ok(value)
}

// strtod reports ERANGE for overflow and for results that lose all precision.
fn check_range(token: &str, value: f64) -> Result<(), LiteralError> {
    let (_, body) = split_sign(token);
    let body = body.to_ascii_lowercase();
    if body.starts_with("inf") || body.starts_with("nan") {
        return Ok(());
    }
    if value.is_infinite() || (value != 0.0 && !value.is_normal()) {
        return Err(LiteralError::OutOfRange(token.to_string()));
    }
    if value == 0.0 && mantissa_has_nonzero_digit(&body) {
        return Err(LiteralError::OutOfRange(token.to_string()));
    }
    Ok(())
}

fn mantissa_has_nonzero_digit(body: &str) -> bool {
    if let Some(hex) = body.strip_prefix("0x") {
        let mantissa = hex.split('p').next().unwrap_or("");
        return mantissa.chars().any(|c| c.is_ascii_hexdigit() && c != '0');
    }
    let mantissa = body.split('e').next().unwrap_or("");
    mantissa.chars().any(|c| matches!(c, '1'..='9'))
}

fn parse_hex_float(token: &str) -> Option<f64> {
    let (negative, rest) = split_sign(token);
    let rest = rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X"))?;
    let (mantissa, exponent) = match rest.find(|c: char| c == 'p' || c == 'P') {
        Some(pos) => (&rest[..pos], Some(&rest[pos + 1..])),
        None => (rest, None),
    };
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }

    let mut value = 0.0f64;
    for ch in int_part.chars() {
        value = value * 16.0 + f64::from(ch.to_digit(16)?);
    }
    let mut scale = 1.0 / 16.0;
    for ch in frac_part.chars() {
        value += f64::from(ch.to_digit(16)?) * scale;
        scale /= 16.0;
    }
    let exp: i32 = match exponent {
        Some(e) => e.parse().ok()?,
        None => 0,
    };
    let v = value * 2f64.powi(exp);
    Some(if negative { -v } else { v })
}

fn normalize(token: &str) -> String {
    let compact: String = token
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_lowercase())
        .collect();
    compact.replace("infinity", "inf")
}

/// Index of the sign that starts the second part, skipping exponent signs.
fn split_point(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    (1..bytes.len()).find(|&i| matches!(bytes[i], b'+' | b'-') && bytes[i - 1] != b'e')
}

/// Strip every marker; a bare sign (or nothing) means magnitude 1.
fn parse_imaginary(part: &str) -> Result<f64, LiteralError> {
    let mut magnitude: String = part.chars().filter(|&c| c != IMAGINARY_MARKER).collect();
    if magnitude.is_empty() || magnitude == "+" || magnitude == "-" {
        magnitude.push('1');
    }
    parse_real(&magnitude)
}

#[derive(Debug, Clone, Copy)]
enum PartOrder {
    RealFirst,
    ImaginaryFirst,
}

impl PartOrder {
    fn attempt(self, first: &str, second: &str) -> Option<Complex64> {
        let (real_part, imag_part) = match self {
            PartOrder::RealFirst => (first, second),
            PartOrder::ImaginaryFirst => (second, first),
        };
        if real_part.contains(IMAGINARY_MARKER) {
            return None;
        }
        let re = parse_real(real_part).ok()?;
        let im = parse_imaginary(imag_part).ok()?;
        Some(Complex64::new(re, im))
    }
}

/// Parse a complex literal.
pub fn parse_complex(token: &str) -> Result<Complex64, LiteralError> {
    let norm = normalize(token);
    if norm.is_empty() {
        return Err(LiteralError::Empty);
    }

    if !norm.contains(IMAGINARY_MARKER) {
        return parse_real(&norm).map(|re| Complex64::new(re, 0.0));
    }

    let Some(split) = split_point(&norm) else {
        // Only a leading sign, if any: a pure imaginary literal.
        let im = parse_imaginary(&norm)?;
        return Ok(Complex64::new(0.0, im));
    };

    let (first, second) = norm.split_at(split);
    if first.contains(IMAGINARY_MARKER) == second.contains(IMAGINARY_MARKER) {
        return Err(LiteralError::AmbiguousMarker(norm));
    }

    [PartOrder::RealFirst, PartOrder::ImaginaryFirst]
        .into_iter()
        .find_map(|order| order.attempt(first, second))
        .ok_or(LiteralError::InvalidPart(norm))
}

//! The unit literal scanner.
//!
//! A literal is a decimal number immediately followed by an optional
//! suffix:
//!
//! ```text
//! literal := ws* number suffix?
//! number  := [+-]? (digits ('.' digits?)? | '.' digits) ([eE] [+-]? digits)?
//! suffix  := [A-Za-z0-9/%]+
//! ```
//!
//! The exponent is only consumed when at least one digit follows it, and
//! `inf`, `nan` and hexadecimal floats are not numbers here. A missing
//! suffix yields a dimensionless value. A `/` inside a suffix is an
//! ordinary symbol character, so `m/s` is looked up as one key.

use log::trace;
use metron_core::{DynUnit, Real};

use crate::error::ParseError;
use crate::source::SymbolSource;

/// One scanned literal, before its suffix is resolved.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Literal<'a> {
    /// The parsed number.
    pub number: Real,
    /// The suffix, possibly empty.
    pub symbol: &'a str,
    /// Byte offset where the number starts.
    pub start: usize,
    /// Byte offset where the suffix starts.
    pub symbol_start: usize,
    /// Byte offset just past the literal.
    pub end: usize,
}

/// `true` for bytes that may appear in a unit suffix.
pub fn is_symbol_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'/' || b == b'%'
}

/// `true` if `name` can be reached as a suffix.
///
/// Beyond the symbol alphabet, the name must not start with a digit, and
/// must not start with `e`/`E` followed by a digit, because the scanner
/// would consume either as part of the number.
pub fn is_valid_symbol(name: &str) -> bool {
    let bytes = name.as_bytes();
    match bytes {
        [] => false,
        [first, ..] if first.is_ascii_digit() => false,
        [b'e' | b'E', second, ..] if second.is_ascii_digit() => false,
        _ => bytes.iter().all(|&b| is_symbol_char(b)),
    }
}

/// Index of the first non-whitespace byte at or after `pos`.
pub(crate) fn skip_whitespace(text: &str, pos: usize) -> usize {
    let bytes = text.as_bytes();
    let mut pos = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
        pos += 1;
    }
    pos
}

fn skip_digits(bytes: &[u8], pos: usize) -> usize {
    let mut pos = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    pos
}

/// Scan one literal starting at byte offset `from`.
pub fn scan(text: &str, from: usize) -> Result<Literal<'_>, ParseError> {
    let bytes = text.as_bytes();
    let start = skip_whitespace(text, from);
    if start >= bytes.len() {
        return Err(ParseError::UnexpectedEnd { offset: bytes.len() });
    }

    let mut pos = start;
    if matches!(bytes[pos], b'+' | b'-') {
        pos += 1;
    }
    let int_end = skip_digits(bytes, pos);
    let mut digits = int_end - pos;
    pos = int_end;
    if pos < bytes.len() && bytes[pos] == b'.' {
        let frac_end = skip_digits(bytes, pos + 1);
        digits += frac_end - (pos + 1);
        pos = frac_end;
    }
    if digits == 0 {
        return Err(ParseError::InvalidNumber { offset: start });
    }
    if pos < bytes.len() && matches!(bytes[pos], b'e' | b'E') {
        let mut exp = pos + 1;
        if exp < bytes.len() && matches!(bytes[exp], b'+' | b'-') {
            exp += 1;
        }
        let exp_end = skip_digits(bytes, exp);
        if exp_end > exp {
            pos = exp_end;
        }
    }

    let number: Real = text[start..pos]
        .parse()
        .map_err(|_| ParseError::InvalidNumber { offset: start })?;

    let symbol_start = pos;
    while pos < bytes.len() && is_symbol_char(bytes[pos]) {
        pos += 1;
    }

    Ok(Literal {
        number,
        symbol: &text[symbol_start..pos],
        start,
        symbol_start,
        end: pos,
    })
}

/// Turn a scanned literal into a value using `source` for the suffix.
pub fn resolve<S: SymbolSource + ?Sized>(
    literal: &Literal<'_>,
    source: &S,
) -> Result<DynUnit, ParseError> {
    let value = if literal.symbol.is_empty() {
        DynUnit::dimensionless(literal.number)
    } else {
        source
            .resolve(literal.symbol, literal.number)
            .ok_or_else(|| ParseError::UnknownSymbol {
                symbol: literal.symbol.to_owned(),
                offset: literal.symbol_start,
            })?
    };
    trace!(
        "resolved {}{} to {:?}",
        literal.number,
        literal.symbol,
        value
    );
    Ok(value)
}

/// Parse one literal at the start of `text`, returning the value and the
/// byte offset just past it. Anything after the literal is left alone.
pub fn parse_prefix_with<S: SymbolSource + ?Sized>(
    text: &str,
    source: &S,
) -> Result<(DynUnit, usize), ParseError> {
    let literal = scan(text, 0)?;
    Ok((resolve(&literal, source)?, literal.end))
}

/// Parse `text` as exactly one literal, allowing surrounding whitespace.
pub fn parse_with<S: SymbolSource + ?Sized>(
    text: &str,
    source: &S,
) -> Result<DynUnit, ParseError> {
    let (value, end) = parse_prefix_with(text, source)?;
    let rest = skip_whitespace(text, end);
    if rest < text.len() {
        return Err(ParseError::TrailingInput { offset: rest });
    }
    Ok(value)
}

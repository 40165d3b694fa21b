//! Fixed literal fixtures.
//!
//! Each entry pairs a literal with the magnitude it should parse to and its
//! exponents as `[length, time, mass, current, temperature, substance,
//! intensity]`.

use metron_core::{Exponents, Real};

/// A literal with its expected parse.
#[derive(Clone, Copy, Debug)]
pub struct LiteralCase {
    pub text: &'static str,
    pub value: Real,
    pub exponents: [i8; 7],
}

impl LiteralCase {
    pub fn exponents(&self) -> Exponents {
        Exponents::from_array(self.exponents)
    }
}

const fn case(text: &'static str, value: Real, exponents: [i8; 7]) -> LiteralCase {
    LiteralCase {
        text,
        value,
        exponents,
    }
}

/// Literals that must parse, with their expected values.
pub const VALID_LITERALS: &[LiteralCase] = &[
    case("0", 0.0, [0, 0, 0, 0, 0, 0, 0]),
    case("0.1", 0.1, [0, 0, 0, 0, 0, 0, 0]),
    case("10m", 10.0, [1, 0, 0, 0, 0, 0, 0]),
    case("10um", 10.0e-6, [1, 0, 0, 0, 0, 0, 0]),
    case("10N", 10_000.0, [1, -2, 1, 0, 0, 0, 0]),
    case("10kgm/s2", 10_000.0, [1, -2, 1, 0, 0, 0, 0]),
    case("5min", 300.0, [0, 1, 0, 0, 0, 0, 0]),
    case("10%", 0.1, [0, 0, 0, 0, 0, 0, 0]),
    case("15mM", 15.0, [-3, 0, 0, 0, 0, 1, 0]),
    case("3Hz", 3.0, [0, -1, 0, 0, 0, 0, 0]),
    case("2um/s", 2.0e-6, [1, -1, 0, 0, 0, 0, 0]),
    case("1mPas", 1.0, [-1, -1, 1, 0, 0, 0, 0]),
    case("1e3mm", 1.0, [1, 0, 0, 0, 0, 0, 0]),
    case("-2.5K", -2.5, [0, 0, 0, 0, 1, 0, 0]),
    case("  7cd ", 7.0, [0, 0, 0, 0, 0, 0, 1]),
];

/// Literals that must be rejected by a strict parse of the built-in table.
pub const INVALID_LITERALS: &[&str] = &[
    "",
    "   ",
    "m",
    "1GM",
    "inf",
    "nan",
    "10 m",
    "10m5",
    "10m 5",
    "--1m",
];

/// Whitespace-separated literals of mixed dimension for sequence readers
/// and benchmarks.
pub const MIXED_SEQUENCE: &str = "10um 2.5s 3mg 4mA 300K 5umol 1cd 0.5 15mM 7m/s2";

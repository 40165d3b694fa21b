//! Benchmark inputs for the Metron unit system.
//!
//! - [`literal_corpus`]: deterministic unit literals drawn from the built-in
//!   table
//! - [`reference_registry`]: a registry with a handful of user symbols
//! - [`length_points`]: deterministic 3D positions for vector benchmarks

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use metron_core::{Length, Real, UNIT_DEFINITIONS};
use metron_parse::{SymbolDef, SymbolRegistry, UnitsConfig};
use metron_vector::Vector3;

/// User symbols defined by [`reference_registry`].
pub const USER_SYMBOLS: &[(&str, &str)] = &[
    ("mmHg", "133.322Pa"),
    ("ft", "0.3048m"),
    ("yd", "3ft"),
    ("px", "6.5um"),
    ("day", "24h"),
];

fn mix(i: u64, seed: u64) -> u64 {
    (i ^ seed)
        .wrapping_mul(6364136223846793007)
        .wrapping_add(1442695040888963407)
}

fn magnitude(i: u64, seed: u64) -> Real {
    let bits = mix(i, seed) >> 11;
    (bits % 2_000_000) as Real / 1000.0 - 1000.0
}

/// `count` literals such as `"-12.5um"`, cycling through every built-in
/// symbol. The same seed always yields the same corpus.
pub fn literal_corpus(count: usize, seed: u64) -> Vec<String> {
    (0..count as u64)
        .map(|i| {
            let def = &UNIT_DEFINITIONS[(mix(i, seed) >> 33) as usize % UNIT_DEFINITIONS.len()];
            format!("{}{}", magnitude(i, seed), def.symbol)
        })
        .collect()
}

/// The corpus joined into one whitespace-separated string.
pub fn literal_stream(count: usize, seed: u64) -> String {
    literal_corpus(count, seed).join(" ")
}

/// A registry holding [`USER_SYMBOLS`].
pub fn reference_registry() -> SymbolRegistry {
    let config = UnitsConfig {
        symbols: USER_SYMBOLS
            .iter()
            .map(|&(name, definition)| SymbolDef::new(name, definition))
            .collect(),
    };
    match config.build_registry() {
        Ok(registry) => registry,
        Err(e) => panic!("reference symbols must build: {e}"),
    }
}

/// `count` deterministic positions within a 2 mm cube.
pub fn length_points(count: usize, seed: u64) -> Vec<Vector3<Length>> {
    (0..count as u64)
        .map(|i| {
            let c = |k: u64| Length::new(magnitude(3 * i + k, seed) * 1e-6);
            Vector3::new(c(0), c(1), c(2))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corpus_is_deterministic_and_parses() {
        let a = literal_corpus(200, 7);
        assert_eq!(a, literal_corpus(200, 7));
        assert_ne!(a, literal_corpus(200, 8));
        for text in &a {
            assert!(metron_parse::parse(text).is_ok(), "{text}");
        }
    }

    #[test]
    fn registry_resolves_user_symbols() {
        let registry = reference_registry();
        assert_eq!(registry.len(), USER_SYMBOLS.len());
        let yd: Length = registry.parse_as("1yd").unwrap();
        assert!((yd.value() - 0.9144).abs() < 1e-12);
    }

    #[test]
    fn points_stay_in_range() {
        for p in length_points(100, 3) {
            for c in p {
                assert!(c.value().abs() <= 1e-3);
            }
        }
    }
}

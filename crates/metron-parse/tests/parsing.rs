//! Parsing against the built-in symbol table.

use metron_core::{Force, Length, Mass, UNIT_DEFINITIONS};
use metron_parse::{parse, parse_as, parse_prefix, ParseError, UnitReader};
use metron_test_utils::fixtures::{INVALID_LITERALS, MIXED_SEQUENCE, VALID_LITERALS};
use metron_test_utils::{literal, magnitude, separator, unit_definition};
use proptest::prelude::*;

fn close(a: f64, b: f64) -> bool {
    a == b || (a - b).abs() <= 1e-12 * a.abs().max(b.abs())
}

#[test]
fn fixture_literals_parse() {
    for case in VALID_LITERALS {
        let v = parse(case.text).unwrap_or_else(|e| panic!("{:?}: {e}", case.text));
        assert!(
            close(v.value(), case.value),
            "{:?}: {} != {}",
            case.text,
            v.value(),
            case.value
        );
        assert_eq!(v.exponents(), case.exponents(), "{:?}", case.text);
    }
}

#[test]
fn fixture_literals_rejected() {
    for text in INVALID_LITERALS {
        assert!(parse(text).is_err(), "{text:?} should not parse");
    }
}

#[test]
fn every_symbol_at_representative_values() {
    for def in UNIT_DEFINITIONS {
        for v in [0.0, 1.0, -3.0, 0.25, 1234.5] {
            let parsed = parse(&format!("{v}{}", def.symbol)).unwrap();
            assert_eq!(parsed.value(), v * def.coefficient, "{v}{}", def.symbol);
            assert_eq!(parsed.exponents(), def.exponents, "{}", def.symbol);
        }
    }
}

#[test]
fn narrowing_scenarios() {
    let length: Length = parse_as("10m").unwrap();
    assert_eq!(length.value(), 10.0);

    assert!(matches!(parse_as::<Mass>("0.1"), Err(ParseError::Cast(_))));
    assert_eq!(parse_as::<Mass>("0"), Ok(Mass::ZERO));

    let force: Force = parse_as("10kgm/s2").unwrap();
    assert_eq!(force.value(), 10_000.0);
    assert_eq!(parse_as::<Force>("10N"), Ok(force));

    let ratio: f64 = parse_as("10%").unwrap();
    assert!(close(ratio, 0.1));
}

#[test]
fn unknown_prefix_combination() {
    assert_eq!(
        parse("1GM"),
        Err(ParseError::UnknownSymbol {
            symbol: "GM".into(),
            offset: 1
        })
    );
}

#[test]
fn mixed_sequence_reads_fully() {
    let values = UnitReader::new(MIXED_SEQUENCE)
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    assert_eq!(values.len(), 10);
    assert_eq!(values[7].exponents().to_string(), "1");
}

#[test]
fn prefix_parse_resumes() {
    let text = "3mm 4mm";
    let (first, end) = parse_prefix(text).unwrap();
    let (second, _) = parse_prefix(&text[end..]).unwrap();
    assert_eq!(first.value(), 0.003);
    assert_eq!(second.value(), 0.004);
}

proptest! {
    #[test]
    fn suffix_round_trip(lit in literal()) {
        let (text, v, def) = lit;
        let parsed = parse(&text).unwrap();
        prop_assert_eq!(parsed.value(), v * def.coefficient);
        prop_assert_eq!(parsed.exponents(), def.exponents);
    }

    #[test]
    fn reader_matches_individual_parses(
        parts in prop::collection::vec((magnitude(), unit_definition(), separator()), 1..8)
    ) {
        let text: String = parts
            .iter()
            .map(|(v, def, sep)| format!("{v}{}{sep}", def.symbol))
            .collect();
        let read = UnitReader::new(&text).collect::<Result<Vec<_>, _>>().unwrap();
        prop_assert_eq!(read.len(), parts.len());
        for (value, (v, def, _)) in read.iter().zip(&parts) {
            prop_assert_eq!(value.value(), v * def.coefficient);
        }
    }
}

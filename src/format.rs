//! Canonical rendering of parsed-unit lists.
//!
//! Numerator and denominator are split by exponent sign and joined
//! with `⋅`; a single `/` separates them. `^1` and spaces are never
//! emitted. Parsing the output yields the same sub-unit multiset, so
//! formatting is idempotent up to normalization.

use crate::parse::{ParsedUnit, SEPARATOR};

/// Render a parsed-unit list to its canonical string.
pub fn format_units(units: &[ParsedUnit]) -> String {
    let numerator: Vec<&ParsedUnit> = units.iter().filter(|u| u.power > 0).collect();
    let denominator: Vec<&ParsedUnit> = units.iter().filter(|u| u.power < 0).collect();

    if numerator.is_empty() {
        // Pure reciprocals keep their negative exponents explicit.
        return join(&denominator, |u| atom(u, u.power));
    }

    let head = join(&numerator, |u| atom(u, u.power));
    if denominator.is_empty() {
        head
    } else {
        format!("{head}/{}", join(&denominator, |u| atom(u, -u.power)))
    }
}

fn join(units: &[&ParsedUnit], render: impl Fn(&ParsedUnit) -> String) -> String {
    units
        .iter()
        .map(|u| render(u))
        .collect::<Vec<_>>()
        .join(&SEPARATOR.to_string())
}

fn atom(unit: &ParsedUnit, power: i8) -> String {
    let symbol = format!("{}{}", unit.prefix.unwrap_or(""), unit.unit);
    if power == 1 {
        symbol
    } else {
        format!("{symbol}^{power}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_units;

    fn roundtrip(input: &str) -> String {
        format_units(&parse_units(input).unwrap())
    }

    #[test]
    fn simple_units() {
        assert_eq!(roundtrip("m"), "m");
        assert_eq!(roundtrip("km^2"), "km^2");
        assert_eq!(roundtrip(""), "");
    }

    #[test]
    fn numerator_and_denominator() {
        assert_eq!(roundtrip("kg⋅m/s^2"), "kg⋅m/s^2");
        assert_eq!(roundtrip("m / s"), "m/s");
        assert_eq!(roundtrip("s^4⋅A^2 / kg^1⋅m^2"), "s^4⋅A^2/kg⋅m^2");
    }

    #[test]
    fn pure_denominator_keeps_negative_powers() {
        assert_eq!(roundtrip("/s"), "s^-1");
        assert_eq!(roundtrip("/m^2⋅s"), "m^-2⋅s^-1");
    }

    #[test]
    fn never_emits_power_one() {
        assert_eq!(roundtrip("m^1"), "m");
        assert_eq!(roundtrip("kg^1⋅m^1"), "kg⋅m");
    }
}

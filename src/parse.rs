//! Unit-string parsing.
//!
//! A unit expression has at most one `/` dividing numerator and
//! denominator. Within each side, sub-units are separated by ASCII
//! whitespace or the middle dot `⋅` (U+22C5); each sub-unit is a
//! single unit token with an optional `^exp` suffix.
//!
//! Token resolution order: exact catalogue match, `_custom` synthetic
//! unit, one-character metric prefix on a prefixable unit, then
//! two-character binary prefix on a binary-prefixable unit. Exact
//! matches always win, so `min` is minutes and never milli-inches.

use std::fmt;

use crate::error::UnitError;
use crate::si::{prefixes, units};

/// Sub-unit separator accepted alongside ASCII whitespace.
pub const SEPARATOR: char = '⋅';

/// One tokenized sub-unit: optional prefix, unit symbol, exponent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParsedUnit {
    /// Prefix symbol from the prefix tables, if any.
    pub prefix: Option<&'static str>,
    /// Unit symbol, a catalogue entry or a `_custom` token.
    pub unit: String,
    /// Nonzero integer exponent.
    pub power: i8,
}

impl ParsedUnit {
    /// A bare unit with the given power.
    pub fn new(unit: impl Into<String>, power: i8) -> Self {
        Self {
            prefix: None,
            unit: unit.into(),
            power,
        }
    }

    /// A prefixed unit with the given power.
    pub fn prefixed(prefix: &'static str, unit: impl Into<String>, power: i8) -> Self {
        Self {
            prefix: Some(prefix),
            unit: unit.into(),
            power,
        }
    }

    /// Multiplicative factor of the prefix (1.0 when unprefixed).
    pub fn prefix_factor(&self) -> f64 {
        prefixes::factor(self.prefix)
    }
}

impl fmt::Display for ParsedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.prefix.unwrap_or(""), self.unit)?;
        if self.power != 1 {
            write!(f, "^{}", self.power)?;
        }
        Ok(())
    }
}

/// Parse a compound unit expression into an ordered sub-unit list.
///
/// Denominator sub-units have their exponents negated. The empty
/// string parses to the empty list (dimensionless).
pub fn parse_units(input: &str) -> Result<Vec<ParsedUnit>, UnitError> {
    let mut sides = input.split('/');
    let numerator = sides.next().unwrap_or("");
    let denominator = sides.next();
    if sides.next().is_some() {
        return Err(UnitError::InvalidUnitString(input.to_string()));
    }

    let mut units = Vec::new();
    parse_side(numerator, 1, input, &mut units)?;
    if let Some(denominator) = denominator {
        parse_side(denominator, -1, input, &mut units)?;
    }
    Ok(units)
}

fn parse_side(
    side: &str,
    sign: i8,
    whole: &str,
    out: &mut Vec<ParsedUnit>,
) -> Result<(), UnitError> {
    if side.trim().is_empty() {
        return Ok(());
    }
    for piece in side.split(SEPARATOR) {
        if piece.trim().is_empty() {
            return Err(UnitError::InvalidUnitString(whole.to_string()));
        }
        for token in piece.split_whitespace() {
            let mut parsed = parse_single(token)?;
            parsed.power *= sign;
            out.push(parsed);
        }
    }
    Ok(())
}

/// Tokenize one sub-unit, e.g. `km^2`, `Kib`, `_pax`.
pub fn parse_single(token: &str) -> Result<ParsedUnit, UnitError> {
    let (name, power) = match token.split_once('^') {
        Some((name, raw)) => (name, parse_exponent(raw)?),
        None => (token, 1),
    };
    if name.is_empty() {
        return Err(UnitError::UnknownUnit(token.to_string()));
    }

    if units::lookup(name).is_some() {
        return Ok(ParsedUnit::new(name, power));
    }

    if let Some(tail) = name.strip_prefix('_') {
        if !tail.is_empty() && tail.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Ok(ParsedUnit::new(name, power));
        }
        return Err(UnitError::UnknownUnit(name.to_string()));
    }

    if let Some(first) = name.chars().next() {
        let split = first.len_utf8();
        if split < name.len() {
            let (head, rest) = name.split_at(split);
            if let Some(prefix) = prefixes::metric(head) {
                if units::lookup(rest).is_some_and(|def| def.prefixable) {
                    return Ok(ParsedUnit::prefixed(prefix.symbol, rest, power));
                }
            }
        }
    }

    // Binary prefixes are two ASCII characters, so a byte split is safe
    // once past the boundary check.
    if name.len() > 2 && name.is_char_boundary(2) {
        let (head, rest) = name.split_at(2);
        if let Some(prefix) = prefixes::binary(head) {
            if units::lookup(rest).is_some_and(|def| def.binary_prefixable) {
                return Ok(ParsedUnit::prefixed(prefix.symbol, rest, power));
            }
        }
    }

    Err(UnitError::UnknownUnit(name.to_string()))
}

fn parse_exponent(raw: &str) -> Result<i8, UnitError> {
    let value: i16 = raw
        .parse()
        .map_err(|_| UnitError::InvalidExponent(raw.to_string()))?;
    // Zero is meaningless; i8::MIN is excluded so denominator negation
    // cannot overflow.
    if value == 0 || !(-(i8::MAX as i16)..=i8::MAX as i16).contains(&value) {
        return Err(UnitError::InvalidExponent(raw.to_string()));
    }
    Ok(value as i8)
}

//! Quantities: a magnitude bound to parsed units.
//!
//! A `Quantity` is immutable. The magnitude is normalized to SI base
//! at construction; the parsed unit list is carried along only for
//! display, so conversion is a re-labeling plus one affine transform.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::convert::{reduce, si_units};
use crate::dimension::Dimensions;
use crate::error::UnitError;
use crate::format::format_units;
use crate::parse::{parse_units, ParsedUnit};

/// An immutable physical quantity.
#[derive(Debug, Clone)]
pub struct Quantity {
    /// Magnitude in SI base form.
    magnitude: f64,
    /// Dimensions, carrying the affine offset for degC/degF sources.
    dimensions: Dimensions,
    /// Units the caller asked for, kept for display.
    preferred: Vec<ParsedUnit>,
    /// Composite scale of `preferred`.
    scale: f64,
    /// Composite offset of `preferred`.
    offset: f64,
    /// Verbatim caller-supplied unit string.
    source: String,
}

/// The observable result record: a magnitude and a unit string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub magnitude: f64,
    pub units: String,
}

impl Quantity {
    /// Parse `units` and bind `magnitude` to them.
    ///
    /// The stored magnitude is immediately reduced to SI base form.
    pub fn new(magnitude: f64, units: &str) -> Result<Self, UnitError> {
        let preferred = parse_units(units)?;
        let composite = reduce(&preferred)?;
        trace!(units, scale = composite.scale, "constructed quantity");
        Ok(Self {
            magnitude: composite.to_base(magnitude),
            dimensions: composite.dims.clone().with_offset(composite.offset),
            preferred,
            scale: composite.scale,
            offset: composite.offset,
            source: units.to_string(),
        })
    }

    /// Re-express this quantity in `target` units.
    ///
    /// Fails with `InvalidConversion` unless the target's dimensions
    /// equal the source's (offsets ignored). An empty target is the
    /// dimensionless unit, reachable only from dimensionless sources.
    pub fn convert(&self, target: &str) -> Result<Self, UnitError> {
        let preferred = parse_units(target)?;
        let composite = reduce(&preferred)?;
        if !self.dimensions.same_exponents(&composite.dims) {
            return Err(UnitError::InvalidConversion {
                from: format_units(&self.preferred),
                to: target.to_string(),
            });
        }
        trace!(target, "converted quantity");
        Ok(Self {
            magnitude: self.magnitude,
            dimensions: composite.dims.clone().with_offset(composite.offset),
            preferred,
            scale: composite.scale,
            offset: composite.offset,
            source: target.to_string(),
        })
    }

    /// Re-express this quantity in canonical SI form, preferring named
    /// derived units (N, Pa, J, ...) over base-unit products.
    pub fn to_si(&self) -> Self {
        let preferred = si_units(&self.dimensions);
        let source = format_units(&preferred);
        Self {
            magnitude: self.magnitude,
            dimensions: self.dimensions.clone().without_offset(),
            preferred,
            scale: 1.0,
            offset: 0.0,
            source,
        }
    }

    /// Magnitude in the preferred (display) units.
    pub fn magnitude(&self) -> f64 {
        (self.magnitude - self.offset) / self.scale
    }

    /// Magnitude in SI base form.
    pub fn si_magnitude(&self) -> f64 {
        self.magnitude
    }

    /// Dimensions of this quantity.
    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    /// The preferred display units.
    pub fn units(&self) -> &[ParsedUnit] {
        &self.preferred
    }

    /// Result record with the canonical unit rendering.
    pub fn get(&self) -> Reading {
        Reading {
            magnitude: self.magnitude(),
            units: format_units(&self.preferred),
        }
    }

    /// Result record with the caller-supplied unit string verbatim.
    pub fn get_raw(&self) -> Reading {
        Reading {
            magnitude: self.magnitude(),
            units: self.source.clone(),
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let units = format_units(&self.preferred);
        if units.is_empty() {
            write!(f, "{}", self.magnitude())
        } else {
            write!(f, "{} {}", self.magnitude(), units)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_normalizes_to_si_base() {
        let q = Quantity::new(500.0, "g").unwrap();
        assert_eq!(q.si_magnitude(), 0.5);
        assert_eq!(q.magnitude(), 500.0);
    }

    #[test]
    fn conversion_is_a_relabeling() {
        let q = Quantity::new(1.0, "km").unwrap();
        let m = q.convert("m").unwrap();
        assert_eq!(m.magnitude(), 1000.0);
        // the original is untouched
        assert_eq!(q.magnitude(), 1.0);
        assert_eq!(q.get().units, "km");
    }

    #[test]
    fn incompatible_targets_are_rejected() {
        let q = Quantity::new(1.0, "kg").unwrap();
        let err = q.convert("m").unwrap_err();
        assert!(matches!(err, UnitError::InvalidConversion { .. }));
    }

    #[test]
    fn affine_round_trip() {
        let boiling = Quantity::new(100.0, "degC").unwrap();
        assert!((boiling.si_magnitude() - 373.15).abs() < 1e-9);
        let f = boiling.convert("degF").unwrap();
        assert!((f.magnitude() - 212.0).abs() < 1e-9);
    }

    #[test]
    fn get_and_get_raw() {
        let q = Quantity::new(2.0, "s^4⋅A^2 / kg^1⋅m^2").unwrap();
        assert_eq!(q.get().units, "s^4⋅A^2/kg⋅m^2");
        assert_eq!(q.get_raw().units, "s^4⋅A^2 / kg^1⋅m^2");
        assert_eq!(q.get().magnitude, q.get_raw().magnitude);
    }

    #[test]
    fn to_si_prefers_named_derived_units() {
        let q = Quantity::new(1234.0, "kg⋅m/s^2").unwrap();
        let si = q.to_si();
        assert_eq!(si.get().units, "N");
        assert_eq!(si.get().magnitude, 1234.0);
    }

    #[test]
    fn display() {
        let q = Quantity::new(10.0, "m/s").unwrap();
        assert_eq!(format!("{q}"), "10 m/s");
        let unitless = Quantity::new(0.5, "").unwrap();
        assert_eq!(format!("{unitless}"), "0.5");
    }

    #[test]
    fn reading_serializes() {
        let q = Quantity::new(3.6, "MJ").unwrap();
        let json = serde_json::to_string(&q.get()).unwrap();
        assert_eq!(json, r#"{"magnitude":3.6,"units":"MJ"}"#);
    }
}

//! Composite reduction and canonical-SI synthesis.
//!
//! A parsed-unit list reduces to a composite `(scale, dims, offset)`:
//! magnitudes convert to SI base via `m * scale + offset` and back via
//! `(m - offset) / scale`. Offsets are only admitted for a solitary
//! power-1 affine unit; composite scales with offsets are ill-defined.

use tracing::trace;

use crate::dimension::{axis, Dimensions, BASIC};
use crate::error::UnitError;
use crate::parse::ParsedUnit;
use crate::si::units::{self, UnitDef};

/// Reduced form of a parsed-unit list.
#[derive(Debug, Clone)]
pub(crate) struct Composite {
    pub scale: f64,
    pub dims: Dimensions,
    pub offset: f64,
}

impl Composite {
    /// Magnitude in this composite's units to SI base.
    pub fn to_base(&self, magnitude: f64) -> f64 {
        magnitude * self.scale + self.offset
    }

    /// SI-base magnitude to this composite's units.
    pub fn from_base(&self, magnitude: f64) -> f64 {
        (magnitude - self.offset) / self.scale
    }
}

/// Resolve a unit symbol to its descriptor. `_name` tokens synthesize
/// a unit of scale 1 carrying exponent 1 in the custom dimension
/// `name`.
pub(crate) fn resolve(symbol: &str) -> Result<UnitDef, UnitError> {
    if let Some(def) = units::lookup(symbol) {
        return Ok(def.clone());
    }
    if let Some(tail) = symbol.strip_prefix('_') {
        if !tail.is_empty() {
            return Ok(UnitDef {
                scale: 1.0,
                dims: Dimensions::custom_axis(tail),
                offset: 0.0,
                prefixable: false,
                binary_prefixable: false,
            });
        }
    }
    Err(UnitError::UnknownUnit(symbol.to_string()))
}

/// Reduce a parsed-unit list to its composite.
pub(crate) fn reduce(parsed: &[ParsedUnit]) -> Result<Composite, UnitError> {
    let mut scale = 1.0;
    let mut dims = Dimensions::DIMENSIONLESS;
    let mut offset = 0.0;

    for unit in parsed {
        let def = resolve(&unit.unit)?;
        if def.offset != 0.0 {
            if parsed.len() != 1 || unit.power != 1 {
                return Err(UnitError::InvalidOffsetUse(unit.unit.clone()));
            }
            offset = def.offset;
        }
        let factor = unit.prefix_factor() * def.scale;
        scale *= factor.powi(unit.power as i32);
        dims = dims.combine(&def.dims.pow(unit.power), 1)?;
    }

    trace!(scale, offset, %dims, "reduced unit list");
    Ok(Composite {
        scale,
        dims,
        offset,
    })
}

/// Synthesize the canonical SI parsed-unit list for a dimension.
///
/// Steepest descent over the preferred derived units: each round
/// commits the candidate and sign whose removal most reduces the
/// complexity score (ties go to the earlier candidate, positive power
/// first). Whatever remains is expanded into base units, then custom
/// `_name` tokens. Hz is deliberately absent from the candidates, so
/// pure frequencies come out as `s^-1`.
pub(crate) fn si_units(dims: &Dimensions) -> Vec<ParsedUnit> {
    let mut remaining = dims.clone().without_offset();
    let preferred = units::preferred_derived();
    let mut picked: Vec<(&'static str, i8)> = Vec::new();

    loop {
        let score = remaining.complexity();
        if score == 0 {
            break;
        }
        let mut best: Option<(usize, i8, u32, Dimensions)> = None;
        for (index, (_, derived)) in preferred.iter().enumerate() {
            for sign in [1i8, -1] {
                let reduced = remaining
                    .combine(derived, -sign)
                    .expect("derived units carry no custom dimensions");
                let reduced_score = reduced.complexity();
                if reduced_score < score
                    && best.as_ref().map_or(true, |(_, _, s, _)| reduced_score < *s)
                {
                    best = Some((index, sign, reduced_score, reduced));
                }
            }
        }
        let Some((index, sign, _, reduced)) = best else {
            break;
        };
        remaining = reduced;
        let symbol = preferred[index].0;
        match picked.iter_mut().find(|(s, _)| *s == symbol) {
            Some((_, power)) => *power += sign,
            None => picked.push((symbol, sign)),
        }
    }

    let mut out: Vec<ParsedUnit> = picked
        .into_iter()
        .filter(|(_, power)| *power != 0)
        .map(|(symbol, power)| ParsedUnit::new(symbol, power))
        .collect();

    // Base-unit expansion; the kilogram is the prefixed form of the gram.
    let mass = remaining.exponent(axis::MASS);
    if mass != 0 {
        out.push(ParsedUnit::prefixed("k", "g", mass));
    }
    for (slot, symbol) in [
        (axis::LENGTH, "m"),
        (axis::TIME, "s"),
        (axis::TEMPERATURE, "K"),
        (axis::CURRENT, "A"),
        (axis::SUBSTANCE, "mol"),
        (axis::INFORMATION, "b"),
    ] {
        let exponent = remaining.exponent(slot);
        if exponent != 0 {
            out.push(ParsedUnit::new(symbol, exponent));
        }
    }
    for (slot, name) in remaining.custom_names().iter().enumerate() {
        let exponent = remaining.exponent(BASIC + slot);
        if exponent != 0 {
            out.push(ParsedUnit::new(format!("_{name}"), exponent));
        }
    }

    trace!(%dims, units = out.len(), "synthesized canonical SI form");
    out
}

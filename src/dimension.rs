//! Dimensional algebra over integer exponent vectors.
//!
//! Every quantity carries a `Dimensions`: exponents of the eight basic
//! physical dimensions plus up to four named custom dimensions, and an
//! offset used only by affine temperature scales.
//!
//! Basic slot order: mass, length, time, temperature, current,
//! substance, luminosity, information. Custom slots 8..11 are paired
//! with a sorted list of names (`pax`, `dir`, ...), so equality is
//! exponent-wise *and* name-wise.

use std::fmt;

use crate::error::UnitError;

/// Number of basic dimension slots.
pub const BASIC: usize = 8;
/// Number of reserved custom dimension slots.
pub const CUSTOM_SLOTS: usize = 4;
/// Total vector width.
pub const SLOTS: usize = BASIC + CUSTOM_SLOTS;

/// Fixed indices of the basic dimensions.
pub mod axis {
    pub const MASS: usize = 0;
    pub const LENGTH: usize = 1;
    pub const TIME: usize = 2;
    pub const TEMPERATURE: usize = 3;
    pub const CURRENT: usize = 4;
    pub const SUBSTANCE: usize = 5;
    pub const LUMINOSITY: usize = 6;
    pub const INFORMATION: usize = 7;
}

/// Exponent vector with optional custom dimensions and affine offset.
///
/// The vector is a fixed `[i8; 12]`; slots `8..8+n` are live when `n`
/// custom names are present, the rest stay zero. This keeps the common
/// no-custom case free of heap traffic (`Vec::new` does not allocate).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dimensions {
    exponents: [i8; SLOTS],
    custom: Vec<String>,
    offset: f64,
}

impl Dimensions {
    // ==========================================================================
    // Basic Dimensions
    // ==========================================================================

    /// Dimensionless (pure number)
    pub const DIMENSIONLESS: Self = Self::basic(0, 0, 0, 0, 0, 0, 0, 0);

    /// Mass [M] - kilogram
    pub const MASS: Self = Self::basic(1, 0, 0, 0, 0, 0, 0, 0);

    /// Length [L] - meter
    pub const LENGTH: Self = Self::basic(0, 1, 0, 0, 0, 0, 0, 0);

    /// Time [T] - second
    pub const TIME: Self = Self::basic(0, 0, 1, 0, 0, 0, 0, 0);

    /// Temperature [Θ] - kelvin
    pub const TEMPERATURE: Self = Self::basic(0, 0, 0, 1, 0, 0, 0, 0);

    /// Electric current [I] - ampere
    pub const CURRENT: Self = Self::basic(0, 0, 0, 0, 1, 0, 0, 0);

    /// Amount of substance [N] - mole
    pub const SUBSTANCE: Self = Self::basic(0, 0, 0, 0, 0, 1, 0, 0);

    /// Luminous intensity [J] - candela
    pub const LUMINOSITY: Self = Self::basic(0, 0, 0, 0, 0, 0, 1, 0);

    /// Information [B] - bit
    pub const INFORMATION: Self = Self::basic(0, 0, 0, 0, 0, 0, 0, 1);

    // ==========================================================================
    // Common Derived Dimensions
    // ==========================================================================

    /// Area [L²]
    pub const AREA: Self = Self::basic(0, 2, 0, 0, 0, 0, 0, 0);

    /// Volume [L³]
    pub const VOLUME: Self = Self::basic(0, 3, 0, 0, 0, 0, 0, 0);

    /// Velocity [L T⁻¹]
    pub const VELOCITY: Self = Self::basic(0, 1, -1, 0, 0, 0, 0, 0);

    /// Acceleration [L T⁻²]
    pub const ACCELERATION: Self = Self::basic(0, 1, -2, 0, 0, 0, 0, 0);

    /// Force [M L T⁻²] - newton
    pub const FORCE: Self = Self::basic(1, 1, -2, 0, 0, 0, 0, 0);

    /// Pressure [M L⁻¹ T⁻²] - pascal
    pub const PRESSURE: Self = Self::basic(1, -1, -2, 0, 0, 0, 0, 0);

    /// Energy [M L² T⁻²] - joule
    pub const ENERGY: Self = Self::basic(1, 2, -2, 0, 0, 0, 0, 0);

    /// Power [M L² T⁻³] - watt
    pub const POWER: Self = Self::basic(1, 2, -3, 0, 0, 0, 0, 0);

    /// Frequency [T⁻¹] - hertz
    pub const FREQUENCY: Self = Self::basic(0, 0, -1, 0, 0, 0, 0, 0);

    /// Electric charge [T I] - coulomb
    pub const CHARGE: Self = Self::basic(0, 0, 1, 0, 1, 0, 0, 0);

    /// Voltage [M L² T⁻³ I⁻¹] - volt
    pub const VOLTAGE: Self = Self::basic(1, 2, -3, 0, -1, 0, 0, 0);

    /// Capacitance [M⁻¹ L⁻² T⁴ I²] - farad
    pub const CAPACITANCE: Self = Self::basic(-1, -2, 4, 0, 2, 0, 0, 0);

    /// Resistance [M L² T⁻³ I⁻²] - ohm
    pub const RESISTANCE: Self = Self::basic(1, 2, -3, 0, -2, 0, 0, 0);

    /// Conductance [M⁻¹ L⁻² T³ I²] - siemens
    pub const CONDUCTANCE: Self = Self::basic(-1, -2, 3, 0, 2, 0, 0, 0);

    /// Magnetic flux [M L² T⁻² I⁻¹] - weber
    pub const MAGNETIC_FLUX: Self = Self::basic(1, 2, -2, 0, -1, 0, 0, 0);

    /// Magnetic flux density [M T⁻² I⁻¹] - tesla
    pub const FLUX_DENSITY: Self = Self::basic(1, 0, -2, 0, -1, 0, 0, 0);

    /// Inductance [M L² T⁻² I⁻²] - henry
    pub const INDUCTANCE: Self = Self::basic(1, 2, -2, 0, -2, 0, 0, 0);

    /// Molar concentration [N L⁻³] - mol/m³
    pub const MOLAR_CONCENTRATION: Self = Self::basic(0, -3, 0, 0, 0, 1, 0, 0);

    // ==========================================================================
    // Constructors
    // ==========================================================================

    /// Create a dimension from the eight basic exponents.
    #[allow(clippy::too_many_arguments)]
    pub const fn basic(
        mass: i8,
        length: i8,
        time: i8,
        temperature: i8,
        current: i8,
        substance: i8,
        luminosity: i8,
        information: i8,
    ) -> Self {
        Self {
            exponents: [
                mass,
                length,
                time,
                temperature,
                current,
                substance,
                luminosity,
                information,
                0,
                0,
                0,
                0,
            ],
            custom: Vec::new(),
            offset: 0.0,
        }
    }

    /// Create a dimension from an explicit exponent vector and custom
    /// dimension names.
    ///
    /// The vector length must be `8 + names.len()`; names must be
    /// sorted strictly ascending (no duplicates) and at most 4.
    pub fn new(exponents: &[i8], names: &[&str], offset: f64) -> Result<Self, UnitError> {
        if exponents.len() < BASIC {
            return Err(UnitError::InvalidDimensions(format!(
                "expected at least {BASIC} exponents, got {}",
                exponents.len()
            )));
        }
        if names.len() > CUSTOM_SLOTS {
            return Err(UnitError::InvalidDimensions(format!(
                "at most {CUSTOM_SLOTS} custom dimensions are supported, got {}",
                names.len()
            )));
        }
        if exponents.len() != BASIC + names.len() {
            return Err(UnitError::InvalidDimensions(format!(
                "{} exponents do not match {} custom names",
                exponents.len(),
                names.len()
            )));
        }
        if names.iter().any(|n| n.is_empty()) {
            return Err(UnitError::InvalidDimensions(
                "custom dimension names must be non-empty".into(),
            ));
        }
        if names.windows(2).any(|w| w[0] >= w[1]) {
            return Err(UnitError::InvalidDimensions(
                "custom dimension names must be sorted and unique".into(),
            ));
        }

        let mut slots = [0i8; SLOTS];
        slots[..exponents.len()].copy_from_slice(exponents);
        Ok(Self {
            exponents: slots,
            custom: names.iter().map(|n| n.to_string()).collect(),
            offset,
        })
    }

    /// Dimension of a single custom axis with exponent 1.
    pub(crate) fn custom_axis(name: &str) -> Self {
        let mut exponents = [0i8; SLOTS];
        exponents[BASIC] = 1;
        Self {
            exponents,
            custom: vec![name.to_string()],
            offset: 0.0,
        }
    }

    // ==========================================================================
    // Accessors
    // ==========================================================================

    /// Exponent at a fixed slot index (see [`axis`]).
    #[inline]
    pub fn exponent(&self, slot: usize) -> i8 {
        self.exponents[slot]
    }

    /// Names of the live custom dimensions, sorted ascending.
    #[inline]
    pub fn custom_names(&self) -> &[String] {
        &self.custom
    }

    /// Affine offset (non-zero only for temperature scales).
    #[inline]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Same dimensions with the given offset.
    pub(crate) fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Same dimensions with the offset cleared.
    pub(crate) fn without_offset(mut self) -> Self {
        self.offset = 0.0;
        self
    }

    // ==========================================================================
    // Predicates
    // ==========================================================================

    /// True iff every exponent is zero and the offset is zero.
    pub fn is_dimensionless(&self) -> bool {
        self.exponents.iter().all(|e| *e == 0) && self.offset == 0.0
    }

    /// Exponent-wise equality, offsets ignored.
    ///
    /// This is the compatibility test for conversion: degC and K
    /// compare equal here even though only one carries an offset.
    pub fn same_exponents(&self, other: &Self) -> bool {
        self.exponents == other.exponents && self.custom == other.custom
    }

    // ==========================================================================
    // Operations
    // ==========================================================================

    /// Raise to an integer power (multiply every exponent).
    ///
    /// Offsets are dropped; a scaled affine dimension is meaningless.
    pub fn pow(&self, n: i8) -> Self {
        let mut exponents = [0i8; SLOTS];
        for (slot, e) in self.exponents.iter().enumerate() {
            exponents[slot] = e * n;
        }
        Self {
            exponents,
            custom: self.custom.clone(),
            offset: 0.0,
        }
    }

    /// Element-wise composition: add `rhs_sign · rhs` to `self`.
    ///
    /// Custom dimensions are merged by name (union, sorted); a custom
    /// exponent that cancels to zero drops its slot and name. Offsets
    /// are never composed. Fails with `InvalidDimensions` if the union
    /// needs more than four custom slots.
    pub fn combine(&self, rhs: &Self, rhs_sign: i8) -> Result<Self, UnitError> {
        let mut exponents = [0i8; SLOTS];
        for slot in 0..BASIC {
            exponents[slot] = self.exponents[slot] + rhs_sign * rhs.exponents[slot];
        }

        let mut merged: Vec<(String, i8)> = self
            .custom
            .iter()
            .enumerate()
            .map(|(at, name)| (name.clone(), self.exponents[BASIC + at]))
            .collect();
        for (at, name) in rhs.custom.iter().enumerate() {
            let exp = rhs_sign * rhs.exponents[BASIC + at];
            match merged.binary_search_by(|(n, _)| n.as_str().cmp(name.as_str())) {
                Ok(hit) => merged[hit].1 += exp,
                Err(slot) => merged.insert(slot, (name.clone(), exp)),
            }
        }
        merged.retain(|(_, exp)| *exp != 0);
        if merged.len() > CUSTOM_SLOTS {
            return Err(UnitError::InvalidDimensions(format!(
                "composition needs {} custom dimensions, at most {CUSTOM_SLOTS} are supported",
                merged.len()
            )));
        }

        let mut custom = Vec::with_capacity(merged.len());
        for (at, (name, exp)) in merged.into_iter().enumerate() {
            exponents[BASIC + at] = exp;
            custom.push(name);
        }
        Ok(Self {
            exponents,
            custom,
            offset: 0.0,
        })
    }

    /// Sum of absolute exponents, the score minimized by canonical-SI
    /// synthesis.
    pub fn complexity(&self) -> u32 {
        self.exponents.iter().map(|e| e.unsigned_abs() as u32).sum()
    }

    // ==========================================================================
    // Named Dimension Detection
    // ==========================================================================

    /// Name of this dimension if it matches a known pattern.
    pub fn name(&self) -> Option<&'static str> {
        let named = [
            ("dimensionless", Dimensions::DIMENSIONLESS),
            ("mass", Dimensions::MASS),
            ("length", Dimensions::LENGTH),
            ("time", Dimensions::TIME),
            ("temperature", Dimensions::TEMPERATURE),
            ("electric current", Dimensions::CURRENT),
            ("amount of substance", Dimensions::SUBSTANCE),
            ("luminous intensity", Dimensions::LUMINOSITY),
            ("information", Dimensions::INFORMATION),
            ("area", Dimensions::AREA),
            ("volume", Dimensions::VOLUME),
            ("velocity", Dimensions::VELOCITY),
            ("acceleration", Dimensions::ACCELERATION),
            ("force", Dimensions::FORCE),
            ("pressure", Dimensions::PRESSURE),
            ("energy", Dimensions::ENERGY),
            ("power", Dimensions::POWER),
            ("frequency", Dimensions::FREQUENCY),
            ("electric charge", Dimensions::CHARGE),
            ("voltage", Dimensions::VOLTAGE),
            ("capacitance", Dimensions::CAPACITANCE),
            ("resistance", Dimensions::RESISTANCE),
            ("molar concentration", Dimensions::MOLAR_CONCENTRATION),
        ];
        named
            .iter()
            .find(|(_, dims)| self.same_exponents(dims))
            .map(|(name, _)| *name)
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.exponents.iter().all(|e| *e == 0) {
            return write!(f, "1");
        }

        const SYMBOLS: [&str; BASIC] = ["M", "L", "T", "Θ", "I", "N", "J", "B"];

        let mut num: Vec<String> = Vec::new();
        let mut den: Vec<String> = Vec::new();
        let push = |parts: &mut Vec<String>, symbol: &str, exp: i8| {
            if exp == 1 {
                parts.push(symbol.to_string());
            } else {
                parts.push(format!("{}{}", symbol, superscript(exp)));
            }
        };

        for slot in 0..SLOTS {
            let exp = self.exponents[slot];
            let symbol = if slot < BASIC {
                SYMBOLS[slot]
            } else if let Some(name) = self.custom.get(slot - BASIC) {
                name.as_str()
            } else {
                continue;
            };
            if exp > 0 {
                push(&mut num, symbol, exp);
            } else if exp < 0 {
                push(&mut den, symbol, -exp);
            }
        }

        let num_str = if num.is_empty() {
            "1".to_string()
        } else {
            num.join(" ")
        };
        if den.is_empty() {
            write!(f, "{}", num_str)
        } else {
            write!(f, "{} / {}", num_str, den.join(" "))
        }
    }
}

/// Convert an integer exponent to a superscript string.
fn superscript(n: i8) -> String {
    let mut out = String::new();
    if n < 0 {
        out.push('⁻');
    }
    for digit in n.unsigned_abs().to_string().chars() {
        out.push(match digit {
            '0' => '⁰',
            '1' => '¹',
            '2' => '²',
            '3' => '³',
            '4' => '⁴',
            '5' => '⁵',
            '6' => '⁶',
            '7' => '⁷',
            '8' => '⁸',
            '9' => '⁹',
            _ => digit,
        });
    }
    out
}

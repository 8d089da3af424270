//! The curated unit catalogue.
//!
//! Maps each known unit symbol to its SI scale, dimensions, optional
//! affine offset, and prefixability flags. Scales are the conformance
//! values: multiplying a magnitude in the unit by `scale` (plus
//! `offset` for affine units) yields the SI-base magnitude.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use crate::dimension::Dimensions;

/// Static descriptor of one catalogue unit.
#[derive(Debug, Clone)]
pub struct UnitDef {
    /// Multiplier to the SI-base magnitude.
    pub scale: f64,
    /// Dimensions of the unit (offset-free).
    pub dims: Dimensions,
    /// Additive zero-shift applied after scaling (degC, degF).
    pub offset: f64,
    /// Accepts single-character metric prefixes.
    pub prefixable: bool,
    /// Accepts two-character binary prefixes.
    pub binary_prefixable: bool,
}

fn unit(scale: f64, dims: Dimensions) -> UnitDef {
    UnitDef {
        scale,
        dims,
        offset: 0.0,
        prefixable: false,
        binary_prefixable: false,
    }
}

impl UnitDef {
    fn metric(mut self) -> Self {
        self.prefixable = true;
        self
    }

    fn binary(mut self) -> Self {
        self.binary_prefixable = true;
        self
    }

    fn affine(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }
}

const YEAR: f64 = 3.1536e7; // 365 days

static UNITS: LazyLock<FxHashMap<&'static str, UnitDef>> = LazyLock::new(|| {
    let mut t = FxHashMap::default();

    // Dimensionless ratios
    t.insert("%", unit(1e-2, Dimensions::DIMENSIONLESS));
    t.insert("ppm", unit(1e-6, Dimensions::DIMENSIONLESS));

    // Mass (SI base is the kilogram, so the gram scales by 1e-3)
    t.insert("g", unit(1e-3, Dimensions::MASS).metric());
    t.insert("lb", unit(0.45359237, Dimensions::MASS));

    // Length
    t.insert("m", unit(1.0, Dimensions::LENGTH).metric());
    t.insert("in", unit(2.54e-2, Dimensions::LENGTH));
    t.insert("ft", unit(3.048e-1, Dimensions::LENGTH));
    t.insert("mi", unit(1.609344e3, Dimensions::LENGTH));

    // Time
    t.insert("s", unit(1.0, Dimensions::TIME).metric());
    t.insert("min", unit(60.0, Dimensions::TIME));
    t.insert("h", unit(3600.0, Dimensions::TIME));
    t.insert("day", unit(86400.0, Dimensions::TIME));
    t.insert("week", unit(604800.0, Dimensions::TIME));
    t.insert("yr", unit(YEAR, Dimensions::TIME));
    t.insert("ka", unit(YEAR * 1e3, Dimensions::TIME));
    t.insert("Ma", unit(YEAR * 1e6, Dimensions::TIME));
    t.insert("Ga", unit(YEAR * 1e9, Dimensions::TIME));

    // Temperature. deltaC is a temperature *difference*; degC and degF
    // are affine scales: base = value * scale + offset.
    t.insert("K", unit(1.0, Dimensions::TEMPERATURE).metric());
    t.insert("deltaC", unit(1.0, Dimensions::TEMPERATURE));
    t.insert("degC", unit(1.0, Dimensions::TEMPERATURE).affine(273.15));
    t.insert(
        "degF",
        unit(5.0 / 9.0, Dimensions::TEMPERATURE).affine(459.67 * 5.0 / 9.0),
    );

    // Speed of light, as a velocity unit
    t.insert("c", unit(299_792_458.0, Dimensions::VELOCITY));

    // Pressure
    t.insert("Pa", unit(1.0, Dimensions::PRESSURE).metric());
    t.insert("psi", unit(6894.75729316836, Dimensions::PRESSURE));
    t.insert("atm", unit(101325.0, Dimensions::PRESSURE));

    // Force
    t.insert("N", unit(1.0, Dimensions::FORCE).metric());

    // Energy
    t.insert("J", unit(1.0, Dimensions::ENERGY).metric());
    t.insert("eV", unit(1.602176634e-19, Dimensions::ENERGY).metric());
    t.insert("BTU", unit(1055.05585, Dimensions::ENERGY));
    t.insert("Wh", unit(3600.0, Dimensions::ENERGY).metric());

    // Power
    t.insert("W", unit(1.0, Dimensions::POWER).metric());
    t.insert("HP", unit(745.69987158227, Dimensions::POWER));

    // Volume and area
    t.insert("L", unit(1e-3, Dimensions::VOLUME).metric());
    t.insert("ha", unit(1e4, Dimensions::AREA));

    // Information: bit and byte take both prefix classes
    t.insert("b", unit(1.0, Dimensions::INFORMATION).metric().binary());
    t.insert("B", unit(8.0, Dimensions::INFORMATION).metric().binary());

    // Electrical
    t.insert("A", unit(1.0, Dimensions::CURRENT).metric());
    t.insert("C", unit(1.0, Dimensions::CHARGE).metric());
    t.insert("Ah", unit(3600.0, Dimensions::CHARGE).metric());
    t.insert("V", unit(1.0, Dimensions::VOLTAGE).metric());
    t.insert("F", unit(1.0, Dimensions::CAPACITANCE).metric());
    t.insert("H", unit(1.0, Dimensions::INDUCTANCE).metric());
    t.insert("S", unit(1.0, Dimensions::CONDUCTANCE).metric());
    t.insert("Wb", unit(1.0, Dimensions::MAGNETIC_FLUX).metric());
    t.insert("T", unit(1.0, Dimensions::FLUX_DENSITY).metric());
    t.insert("ohm", unit(1.0, Dimensions::RESISTANCE));

    // Substance
    t.insert("mol", unit(1.0, Dimensions::SUBSTANCE).metric());
    t.insert("M", unit(1e3, Dimensions::MOLAR_CONCENTRATION).metric());

    // Frequency
    t.insert("Hz", unit(1.0, Dimensions::FREQUENCY).metric());

    // Passengers per hour per direction, the curated custom-dimension
    // example: time⁻¹ · dir⁻¹ · pax
    t.insert("pphpd", unit(1.0 / 3600.0, pphpd_dims()));

    t
});

fn pphpd_dims() -> Dimensions {
    Dimensions::new(&[0, 0, -1, 0, 0, 0, 0, 0, -1, 1], &["dir", "pax"], 0.0)
        .expect("pphpd dimensions are well-formed")
}

/// Look up a catalogue unit by exact symbol.
pub fn lookup(symbol: &str) -> Option<&'static UnitDef> {
    UNITS.get(symbol)
}

/// Named derived units tried, in order, by canonical-SI synthesis.
pub fn preferred_derived() -> [(&'static str, Dimensions); 12] {
    [
        ("N", Dimensions::FORCE),
        ("Pa", Dimensions::PRESSURE),
        ("J", Dimensions::ENERGY),
        ("W", Dimensions::POWER),
        ("C", Dimensions::CHARGE),
        ("V", Dimensions::VOLTAGE),
        ("F", Dimensions::CAPACITANCE),
        ("ohm", Dimensions::RESISTANCE),
        ("S", Dimensions::CONDUCTANCE),
        ("Wb", Dimensions::MAGNETIC_FLUX),
        ("T", Dimensions::FLUX_DENSITY),
        ("H", Dimensions::INDUCTANCE),
    ]
}

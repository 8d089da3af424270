//! Dimensional analysis and unit conversion for physical quantities.
//!
//! Tracks the physical dimensions of every quantity as a vector of
//! integer exponents, parses human-written unit expressions, and
//! converts magnitudes between compatible units via an SI-base
//! representation.
//!
//! # Key Features
//!
//! - **Dimension vectors**: eight basic dimensions (mass, length,
//!   time, temperature, current, substance, luminosity, information)
//!   plus up to four named custom dimensions (`_pax`, `_dir`, ...)
//! - **Unit expressions**: `"kg⋅m/s^2"`, `"N⋅h^2/ft"`, `"MiB"`,
//!   `"s^4⋅A^2/kg⋅m^2"` with metric and binary prefixes
//! - **Affine scales**: degC and degF convert correctly and are
//!   rejected inside compound expressions
//! - **Canonical SI form**: re-expresses any quantity with the
//!   conventional named derived units (N, Pa, J, W, V, ...)
//!
//! # Example
//!
//! ```
//! use dimensional::Quantity;
//!
//! # fn main() -> Result<(), dimensional::UnitError> {
//! let boiling = Quantity::new(100.0, "degC")?;
//! let fahrenheit = boiling.convert("degF")?;
//! assert!((fahrenheit.get().magnitude - 212.0).abs() < 1e-9);
//!
//! let force = Quantity::new(1234.0, "kg⋅m/s^2")?;
//! assert_eq!(force.to_si().get().units, "N");
//! # Ok(())
//! # }
//! ```
//!
//! Every operation is synchronous, pure, and allocation-only; the
//! static tables are read-only, so the library needs no coordination
//! between concurrent callers.

pub mod dimension;
pub mod error;
pub mod format;
pub mod parse;
pub mod quantity;
pub mod si;

mod convert;

// Re-exports
pub use dimension::Dimensions;
pub use error::UnitError;
pub use format::format_units;
pub use parse::{parse_units, ParsedUnit};
pub use quantity::{Quantity, Reading};

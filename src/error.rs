//! Error taxonomy for unit parsing and conversion.
//!
//! A single public error type discriminated by kind. All errors are
//! immediate and terminal for the operation that raised them; the
//! library never catches or retries its own errors.

use thiserror::Error;

/// Errors raised while parsing unit expressions, constructing
/// dimensions, or converting quantities.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    /// Malformed unit expression: more than one `/`, or an empty
    /// sub-unit between separators.
    #[error("invalid unit string `{0}`")]
    InvalidUnitString(String),

    /// A token matched no catalogue entry, no prefix decomposition,
    /// and no `_custom` form.
    #[error("unknown unit `{0}`")]
    UnknownUnit(String),

    /// A `^` suffix whose payload is not a nonzero integer.
    #[error("invalid exponent `{0}`: expected a nonzero integer")]
    InvalidExponent(String),

    /// Malformed exponent-vector / custom-name agreement when
    /// constructing a `Dimensions`.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// An offset-bearing unit (degC, degF) used in a compound
    /// expression or with a power other than 1.
    #[error("offset unit `{0}` is only valid alone with power 1")]
    InvalidOffsetUse(String),

    /// Source and target dimensions differ (offsets ignored).
    #[error("cannot convert `{from}` to `{to}`: dimensions differ")]
    InvalidConversion { from: String, to: String },
}

//! Static SI metadata: the unit catalogue and the prefix tables.

pub mod prefixes;
pub mod units;

pub use prefixes::PrefixDef;
pub use units::UnitDef;

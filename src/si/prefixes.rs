//! Metric and binary prefix tables.
//!
//! Two disjoint classes: metric prefixes are a single character
//! (`q`..`Q`, decimal factors, deliberately no `da`), binary prefixes
//! are two characters (`Ki`..`Yi`, powers of 1024). The disjointness
//! lets the parser try exact match, then one-character metric, then
//! two-character binary without backtracking.

/// A prefix symbol and its multiplicative factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrefixDef {
    pub symbol: &'static str,
    pub factor: f64,
}

const fn prefix(symbol: &'static str, factor: f64) -> PrefixDef {
    PrefixDef { symbol, factor }
}

/// Metric prefixes, single-character only. Both `u` and `µ` denote
/// micro.
pub const METRIC: &[PrefixDef] = &[
    prefix("q", 1e-30),
    prefix("r", 1e-27),
    prefix("y", 1e-24),
    prefix("z", 1e-21),
    prefix("a", 1e-18),
    prefix("f", 1e-15),
    prefix("p", 1e-12),
    prefix("n", 1e-9),
    prefix("u", 1e-6),
    prefix("µ", 1e-6),
    prefix("m", 1e-3),
    prefix("c", 1e-2),
    prefix("d", 1e-1),
    prefix("h", 1e2),
    prefix("k", 1e3),
    prefix("M", 1e6),
    prefix("G", 1e9),
    prefix("T", 1e12),
    prefix("P", 1e15),
    prefix("E", 1e18),
    prefix("Z", 1e21),
    prefix("Y", 1e24),
    prefix("R", 1e27),
    prefix("Q", 1e30),
];

/// Binary prefixes, two-character only. Powers of two are exactly
/// representable in f64 up to well past 2^80.
pub const BINARY: &[PrefixDef] = &[
    prefix("Ki", 1024.0),
    prefix("Mi", 1048576.0),
    prefix("Gi", 1073741824.0),
    prefix("Ti", 1099511627776.0),
    prefix("Pi", 1125899906842624.0),
    prefix("Ei", 1152921504606846976.0),
    prefix("Zi", 1180591620717411303424.0),
    prefix("Yi", 1208925819614629174706176.0),
];

/// Look up a metric prefix by symbol.
pub fn metric(symbol: &str) -> Option<&'static PrefixDef> {
    METRIC.iter().find(|p| p.symbol == symbol)
}

/// Look up a binary prefix by symbol.
pub fn binary(symbol: &str) -> Option<&'static PrefixDef> {
    BINARY.iter().find(|p| p.symbol == symbol)
}

/// Factor of a prefix from either class; 1.0 for `None`.
pub fn factor(symbol: Option<&str>) -> f64 {
    match symbol {
        Some(s) => metric(s).or_else(|| binary(s)).map_or(1.0, |p| p.factor),
        None => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_ladder() {
        assert_eq!(metric("k").unwrap().factor, 1e3);
        assert_eq!(metric("q").unwrap().factor, 1e-30);
        assert_eq!(metric("Q").unwrap().factor, 1e30);
        assert_eq!(metric("u").unwrap().factor, metric("µ").unwrap().factor);
        assert!(metric("da").is_none());
    }

    #[test]
    fn binary_ladder() {
        assert_eq!(binary("Ki").unwrap().factor, 1024.0);
        assert_eq!(binary("Gi").unwrap().factor, (1u64 << 30) as f64);
        assert_eq!(binary("Yi").unwrap().factor, 2f64.powi(80));
        assert!(binary("K").is_none());
    }

    #[test]
    fn classes_are_disjoint() {
        for p in METRIC {
            assert_eq!(p.symbol.chars().count(), 1);
            assert!(binary(p.symbol).is_none());
        }
        for p in BINARY {
            assert_eq!(p.symbol.chars().count(), 2);
            assert!(metric(p.symbol).is_none());
        }
    }
}

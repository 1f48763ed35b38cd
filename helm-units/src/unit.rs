//! Unit representation with conversion factors

use std::fmt;
use std::marker::PhantomData;
use std::ops::Mul;
use serde::Serialize;
use crate::{Dimension, Quantity};

/// A named unit: a fixed scale factor to its dimension's canonical unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(bound = "")]
pub struct Unit<D> {
    /// The unit abbreviation used for display (e.g., "km", "kn")
    symbol: &'static str,
    /// The unit name (e.g., "kilometres", "knots")
    name: &'static str,
    /// Abbreviations accepted by the parser, matched case-sensitively
    aliases: &'static [&'static str],
    /// Size of one unit in the canonical unit (value_canonical = value * factor)
    factor: f64,
    #[serde(skip)]
    dimension: PhantomData<D>,
}

impl<D> Unit<D> {
    /// Create a unit that the parser does not recognize
    pub const fn new(symbol: &'static str, name: &'static str, factor: f64) -> Self {
        Unit {
            symbol,
            name,
            aliases: &[],
            factor,
            dimension: PhantomData,
        }
    }

    /// Builder: set the abbreviations the parser accepts for this unit
    pub const fn with_aliases(self, aliases: &'static [&'static str]) -> Self {
        Unit { aliases, ..self }
    }

    pub const fn symbol(&self) -> &'static str {
        self.symbol
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn aliases(&self) -> &'static [&'static str] {
        self.aliases
    }

    pub const fn factor(&self) -> f64 {
        self.factor
    }

    /// Check whether the parser maps `token` to this unit
    pub fn accepts(&self, token: &str) -> bool {
        self.aliases.contains(&token)
    }

    /// Convert a value in this unit to the canonical unit
    pub fn to_canonical(&self, value: f64) -> f64 {
        value * self.factor
    }

    /// Convert a value in the canonical unit to this unit
    pub fn from_canonical(&self, value: f64) -> f64 {
        value / self.factor
    }
}

impl<D: Dimension> Unit<D> {
    /// Find the unit a parsed abbreviation refers to
    pub fn lookup(token: &str) -> Option<Self> {
        D::UNITS.iter().copied().find(|unit| unit.accepts(token))
    }

    /// Find a unit by its display symbol
    pub fn by_symbol(symbol: &str) -> Option<Self> {
        D::UNITS.iter().copied().find(|unit| unit.symbol == symbol)
    }

    /// Check if this is the canonical unit of its dimension
    pub fn is_canonical(&self) -> bool {
        *self == D::CANONICAL
    }
}

impl<D> fmt::Display for Unit<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol)
    }
}

/// `120.0 * KILOMETRE`
impl<D: Dimension> Mul<Unit<D>> for f64 {
    type Output = Quantity<D>;

    fn mul(self, unit: Unit<D>) -> Quantity<D> {
        Quantity::from_unit(self, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::*;
    use crate::{Length, Velocity};

    #[test]
    fn test_canonical_unit() {
        assert!(METRE.is_canonical());
        assert!(!KILOMETRE.is_canonical());
        assert!(METRE_PER_SECOND.is_canonical());
        assert!(!KNOT.is_canonical());
    }

    #[test]
    fn test_to_canonical() {
        assert_eq!(KILOMETRE.to_canonical(5.0), 5000.0);
        assert_eq!(NAUTICAL_MILE.to_canonical(2.0), 3704.0);
    }

    #[test]
    fn test_from_canonical() {
        assert_eq!(KILOMETRE.from_canonical(5000.0), 5.0);
        assert_eq!(FOOT.from_canonical(0.3048), 1.0);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(Unit::<Length>::lookup("NM"), Some(NAUTICAL_MILE));
        assert_eq!(Unit::<Length>::lookup("nmi"), Some(NAUTICAL_MILE));
        assert_eq!(Unit::<Length>::lookup("nm"), None);
        assert_eq!(Unit::<Length>::lookup("KM"), None);
    }

    #[test]
    fn test_lookup_stays_in_dimension() {
        assert_eq!(Unit::<Velocity>::lookup("kn"), Some(KNOT));
        assert_eq!(Unit::<Length>::lookup("kn"), None);
        assert_eq!(Unit::<Velocity>::lookup("m"), None);
    }

    #[test]
    fn test_lookup_rejects_guesses() {
        assert_eq!(Unit::<Velocity>::lookup("kts"), None);
        assert_eq!(Unit::<Velocity>::lookup("knots"), None);
    }

    #[test]
    fn test_by_symbol() {
        assert_eq!(Unit::<Length>::by_symbol("mi"), Some(MILE));
        assert_eq!(Unit::<Length>::by_symbol("ftm"), Some(FATHOM));
        assert_eq!(Unit::<Velocity>::by_symbol("km/h"), Some(KILOMETRE_PER_HOUR));
    }

    #[test]
    fn test_multiply_builds_quantity() {
        let d = 120.0 * KILOMETRE;
        assert_eq!(d.metres(), 120_000.0);

        let s = 2.0 * KILOMETRE_PER_HOUR;
        approx::assert_relative_eq!(s.kph(), 2.0, max_relative = 1e-12);
    }

    #[test]
    fn test_display() {
        assert_eq!(NAUTICAL_MILE.to_string(), "NM");
        assert_eq!(MILE_PER_HOUR.to_string(), "mph");
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_value(FOOT).unwrap();
        assert_eq!(json["symbol"], "ft");
        assert_eq!(json["name"], "feet");
        assert_eq!(json["aliases"], serde_json::json!(["ft", "'"]));
        assert_eq!(json["factor"], 0.3048);
    }
}

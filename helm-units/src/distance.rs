//! Distance - a length stored in metres

use std::ops::Div;
use std::time::Duration;
use crate::units::{
    FATHOM, FOOT, INCH, KILOMETRE, METRE, MILE, MILLIMETRE, NAUTICAL_MILE, YARD,
};
use crate::{Length, ParseError, Quantity, Speed};

/// A distance in metres
pub type Distance = Quantity<Length>;

/// Parse a distance such as "120km", "79.3NM" or "6'"
///
/// Recognized units: `m`, `km`, `NM`/`nmi`, `mile`/`miles`, `ft`/`'`,
/// `in`/`inch`/`"`.
pub fn parse_distance(s: &str) -> Result<Distance, ParseError> {
    Distance::parse(s)
}

impl Quantity<Length> {
    pub fn metres(self) -> f64 {
        self.canonical()
    }

    /// Same as [`metres`](Self::metres), US spelling
    pub fn meters(self) -> f64 {
        self.canonical()
    }

    pub fn kilometres(self) -> f64 {
        self.in_unit(KILOMETRE)
    }

    pub fn millimetres(self) -> f64 {
        self.in_unit(MILLIMETRE)
    }

    pub fn nautical_miles(self) -> f64 {
        self.in_unit(NAUTICAL_MILE)
    }

    /// Statute miles
    pub fn miles(self) -> f64 {
        self.in_unit(MILE)
    }

    pub fn feet(self) -> f64 {
        self.in_unit(FOOT)
    }

    pub fn inches(self) -> f64 {
        self.in_unit(INCH)
    }

    pub fn yards(self) -> f64 {
        self.in_unit(YARD)
    }

    pub fn fathoms(self) -> f64 {
        self.in_unit(FATHOM)
    }
}

/// Average speed over a leg
impl Div<Duration> for Distance {
    type Output = Speed;

    fn div(self, elapsed: Duration) -> Speed {
        Speed::new(self.in_unit(METRE) / elapsed.as_secs_f64())
    }
}

//! Speed - a velocity stored in metres per second

use std::ops::Mul;
use std::time::Duration;
use crate::units::{KILOMETRE_PER_HOUR, KNOT, MILE_PER_HOUR};
use crate::{Distance, ParseError, Quantity, Velocity};

/// A speed in metres per second
pub type Speed = Quantity<Velocity>;

/// Parse a speed such as "16kn" or "120 km/h"
///
/// Recognized units: `m/s`, `kn`, `km/h`, `mph`/`mi/h`.
pub fn parse_speed(s: &str) -> Result<Speed, ParseError> {
    Speed::parse(s)
}

impl Quantity<Velocity> {
    /// Metres per second
    pub fn mps(self) -> f64 {
        self.canonical()
    }

    /// Kilometres per hour
    pub fn kph(self) -> f64 {
        self.in_unit(KILOMETRE_PER_HOUR)
    }

    pub fn knots(self) -> f64 {
        self.in_unit(KNOT)
    }

    /// Miles per hour
    pub fn mph(self) -> f64 {
        self.in_unit(MILE_PER_HOUR)
    }
}

/// Distance covered at this speed
impl Mul<Duration> for Speed {
    type Output = Distance;

    fn mul(self, elapsed: Duration) -> Distance {
        Distance::new(self.mps() * elapsed.as_secs_f64())
    }
}

//! Helm Units - Distance and Speed Quantities
//!
//! Typed quantities for navigation tools that accept operator input in
//! mixed units. Every quantity is stored in one canonical unit and read
//! back in any other unit of the same dimension.
//!
//! Dimensions:
//! - Distance, stored in metres (m, km, mm, NM, mi, ft, in, yd, ftm)
//! - Speed, stored in metres per second (m/s, kn, km/h, mph)
//!
//! ```
//! use helm_units::prelude::*;
//!
//! let leg = 12.5 * NAUTICAL_MILE;
//! let speed = parse_speed("16kn").unwrap();
//! assert_eq!(leg.metres(), 23_150.0);
//! assert!(speed.knots() > 15.99);
//! ```

mod dimension;
mod unit;
mod quantity;
mod parse;
mod distance;
mod speed;
mod error;
pub mod units;

pub use dimension::{Dimension, Length, Velocity};
pub use unit::Unit;
pub use quantity::{Quantity, Reading};
pub use parse::parse_quantity;
pub use distance::{Distance, parse_distance};
pub use speed::{Speed, parse_speed};
pub use error::{ParseError, ErrorKind};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Distance, Speed, Quantity, Unit, ParseError, ErrorKind};
    pub use crate::{parse_distance, parse_speed};
    pub use crate::units::*;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::*;

    mod roundtrip_tests {
        use super::*;
        use proptest::prelude::*;

        /// Convert out of the canonical unit and back in again
        fn hop<D: Dimension>(q: Quantity<D>, unit: Unit<D>) -> Quantity<D> {
            Quantity::from_unit(q.in_unit(unit), unit)
        }

        fn assert_close(expected: f64, actual: f64) -> Result<(), TestCaseError> {
            let tolerance = 1e-6_f64.max(1e-9 * expected.abs());
            prop_assert!(
                (expected - actual).abs() <= tolerance,
                "expected {}, got {}", expected, actual
            );
            Ok(())
        }

        proptest! {
            #[test]
            fn prop_distance_roundtrip(
                value in -100_000.0..100_000.0f64,
                start in 0..DISTANCE_UNITS.len(),
                path in prop::collection::vec(0..DISTANCE_UNITS.len(), 5),
            ) {
                let d0 = Distance::from_unit(value, DISTANCE_UNITS[start]);
                let d = path.iter().fold(d0, |d, &i| hop(d, DISTANCE_UNITS[i]));

                for unit in DISTANCE_UNITS {
                    assert_close(d0.in_unit(unit), d.in_unit(unit))?;
                }
            }

            #[test]
            fn prop_speed_roundtrip(
                value in -100_000.0..100_000.0f64,
                start in 0..SPEED_UNITS.len(),
                path in prop::collection::vec(0..SPEED_UNITS.len(), 5),
            ) {
                let s0 = Speed::from_unit(value, SPEED_UNITS[start]);
                let s = path.iter().fold(s0, |s, &i| hop(s, SPEED_UNITS[i]));

                for unit in SPEED_UNITS {
                    assert_close(s0.in_unit(unit), s.in_unit(unit))?;
                }
            }

            #[test]
            fn prop_canonical_is_identity(value in proptest::num::f64::ANY) {
                let d = Distance::new(value);
                prop_assert_eq!(d.metres().to_bits(), value.to_bits());
                let s = Speed::new(value);
                prop_assert_eq!(s.mps().to_bits(), value.to_bits());
            }

            #[test]
            fn prop_display_parses_back(value in -1_000.0..1_000.0f64) {
                let d = Distance::new(value);
                let parsed = parse_distance(&d.to_string()).unwrap();
                prop_assert!((parsed.metres() - value).abs() <= 1e-6);

                let s = Speed::new(value);
                let parsed = parse_speed(&s.to_string()).unwrap();
                prop_assert!((parsed.mps() - value).abs() <= 1e-6);
            }
        }
    }

    mod validity_tests {
        use super::*;

        #[test]
        fn test_nan_distance_stays_nan() {
            let d = Distance::new(f64::NAN);
            assert!(!d.is_valid());
            for unit in DISTANCE_UNITS {
                assert!(d.in_unit(unit).is_nan(), "{}", unit);
            }
            assert!(d.meters().is_nan());
            assert!(d.kilometres().is_nan());
            assert!(d.nautical_miles().is_nan());
            assert!(d.miles().is_nan());
            assert!(d.feet().is_nan());
        }

        #[test]
        fn test_nan_speed_stays_nan() {
            let s = f64::NAN * KNOT;
            assert!(!s.is_valid());
            assert!(s.mps().is_nan());
            assert!(s.kph().is_nan());
            assert!(s.knots().is_nan());
            assert!(s.mph().is_nan());
        }

        #[test]
        fn test_negative_and_infinite_are_valid() {
            assert!(Distance::new(-5.0).is_valid());
            assert!(Speed::new(f64::NEG_INFINITY).is_valid());
        }
    }

    mod prelude_tests {
        use crate::prelude::*;

        #[test]
        fn test_prelude_exports() {
            let d: Distance = 1.0 * NAUTICAL_MILE;
            let s: Speed = parse_speed("1 kn").unwrap();
            assert_eq!(d.metres(), 1852.0);
            assert_eq!(s.mps(), KNOT.factor());
            assert_eq!(parse_distance("x").unwrap_err().kind(), ErrorKind::Parse);
        }
    }
}

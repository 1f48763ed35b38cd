//! Unit definitions - distance and speed units used in navigation
//!
//! The factors are exact decimal definitions. Derived speed units are
//! built from the same distance constants so both tables agree.

use crate::Unit;
use crate::{Length, Velocity};

// ========== Raw factors (metres) ==========

pub const METRES_IN_KILOMETRE: f64 = 1000.0;
pub const MILLIMETRE_IN_METRES: f64 = 0.001;
pub const FOOT_IN_METRES: f64 = 0.3048;
pub const YARD_IN_METRES: f64 = 0.9144;
pub const INCH_IN_METRES: f64 = 0.0254;
pub const NAUTICAL_MILE_IN_METRES: f64 = 1852.0;
pub const FATHOM_IN_METRES: f64 = 1.8288;
pub const MILE_IN_METRES: f64 = 1609.344;

pub const SECONDS_IN_HOUR: f64 = 3600.0;

// ========== Length ==========

pub const METRE: Unit<Length> = Unit::new("m", "metres", 1.0).with_aliases(&["m"]);

pub const KILOMETRE: Unit<Length> =
    Unit::new("km", "kilometres", METRES_IN_KILOMETRE).with_aliases(&["km"]);

pub const MILLIMETRE: Unit<Length> = Unit::new("mm", "millimetres", MILLIMETRE_IN_METRES);

pub const NAUTICAL_MILE: Unit<Length> =
    Unit::new("NM", "nautical miles", NAUTICAL_MILE_IN_METRES).with_aliases(&["NM", "nmi"]);

pub const MILE: Unit<Length> =
    Unit::new("mi", "miles", MILE_IN_METRES).with_aliases(&["mile", "miles"]);

pub const FOOT: Unit<Length> = Unit::new("ft", "feet", FOOT_IN_METRES).with_aliases(&["ft", "'"]);

pub const INCH: Unit<Length> =
    Unit::new("in", "inches", INCH_IN_METRES).with_aliases(&["in", "inch", "\""]);

pub const YARD: Unit<Length> = Unit::new("yd", "yards", YARD_IN_METRES);

pub const FATHOM: Unit<Length> = Unit::new("ftm", "fathoms", FATHOM_IN_METRES);

/// All distance units, canonical unit first
pub const DISTANCE_UNITS: [Unit<Length>; 9] = [
    METRE,
    KILOMETRE,
    MILLIMETRE,
    NAUTICAL_MILE,
    MILE,
    FOOT,
    INCH,
    YARD,
    FATHOM,
];

// ========== Velocity ==========

pub const METRE_PER_SECOND: Unit<Velocity> =
    Unit::new("m/s", "metres per second", 1.0).with_aliases(&["m/s"]);

pub const KNOT: Unit<Velocity> =
    Unit::new("kn", "knots", NAUTICAL_MILE_IN_METRES / SECONDS_IN_HOUR).with_aliases(&["kn"]);

pub const KILOMETRE_PER_HOUR: Unit<Velocity> =
    Unit::new("km/h", "kilometres per hour", METRES_IN_KILOMETRE / SECONDS_IN_HOUR)
        .with_aliases(&["km/h"]);

pub const MILE_PER_HOUR: Unit<Velocity> =
    Unit::new("mph", "miles per hour", MILE_IN_METRES / SECONDS_IN_HOUR)
        .with_aliases(&["mph", "mi/h"]);

/// All speed units, canonical unit first
pub const SPEED_UNITS: [Unit<Velocity>; 4] = [
    METRE_PER_SECOND,
    KNOT,
    KILOMETRE_PER_HOUR,
    MILE_PER_HOUR,
];

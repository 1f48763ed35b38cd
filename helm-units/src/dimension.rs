//! Physical dimensions
//!
//! A dimension is a zero-sized marker type. Quantities and units carry it
//! as a type parameter, so a distance can never be added to a speed.

use std::fmt::Debug;
use std::hash::Hash;
use crate::Unit;
use crate::units::{METRE, METRE_PER_SECOND, DISTANCE_UNITS, SPEED_UNITS};

/// A physical dimension with one canonical unit and a table of named units
pub trait Dimension: Copy + Debug + Default + PartialEq + Eq + Hash + 'static {
    /// Human-readable dimension name (e.g., "distance")
    const NAME: &'static str;

    /// The unit every quantity of this dimension is stored in
    const CANONICAL: Unit<Self>;

    /// All known units, canonical unit first
    const UNITS: &'static [Unit<Self>];
}

/// Length [L], stored in metres
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Length;

/// Velocity [L T^-1], stored in metres per second
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Velocity;

impl Dimension for Length {
    const NAME: &'static str = "distance";
    const CANONICAL: Unit<Self> = METRE;
    const UNITS: &'static [Unit<Self>] = &DISTANCE_UNITS;
}

impl Dimension for Velocity {
    const NAME: &'static str = "speed";
    const CANONICAL: Unit<Self> = METRE_PER_SECOND;
    const UNITS: &'static [Unit<Self>] = &SPEED_UNITS;
}

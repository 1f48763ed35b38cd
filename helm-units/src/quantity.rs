//! Quantity type - a value stored in its dimension's canonical unit

use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use crate::{Dimension, ParseError, Unit};

/// Default number of decimals when formatting, as printf's `%f`
const DEFAULT_PRECISION: usize = 6;

/// A physical quantity stored in the canonical unit of `D`
///
/// The unit a quantity was built from is not kept. NaN marks an invalid
/// quantity and propagates through every conversion and operator.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(transparent, bound = "")]
pub struct Quantity<D> {
    value: f64,
    #[serde(skip)]
    dimension: PhantomData<D>,
}

impl<D> Quantity<D> {
    /// Create a quantity from a value already in the canonical unit
    pub const fn new(value: f64) -> Self {
        Quantity {
            value,
            dimension: PhantomData,
        }
    }

    /// The raw value in the canonical unit
    pub const fn canonical(self) -> f64 {
        self.value
    }

    /// False iff the value is NaN
    pub fn is_valid(self) -> bool {
        !self.value.is_nan()
    }

    pub fn abs(self) -> Self {
        Self::new(self.value.abs())
    }
}

impl<D: Dimension> Quantity<D> {
    /// Create a quantity from a value in any unit of the same dimension
    pub fn from_unit(value: f64, unit: Unit<D>) -> Self {
        Self::new(unit.to_canonical(value))
    }

    /// Read the quantity in the given unit
    pub fn in_unit(self, unit: Unit<D>) -> f64 {
        unit.from_canonical(self.value)
    }

    /// Full name of the canonical unit (e.g., "metres")
    pub fn name(self) -> &'static str {
        D::CANONICAL.name()
    }

    /// Abbreviation of the canonical unit (e.g., "m")
    pub fn short(self) -> &'static str {
        D::CANONICAL.symbol()
    }

    /// Format the quantity in another unit, e.g. `"4.320000 NM"`
    pub fn display_in(self, unit: Unit<D>) -> Reading<D> {
        Reading {
            value: self.in_unit(unit),
            unit,
        }
    }

    /// Parse a string such as "120km" or "16 kn"
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        crate::parse::parse_quantity(s)
    }
}

impl<D: Dimension> fmt::Display for Quantity<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(DEFAULT_PRECISION);
        write!(f, "{:.*} {}", precision, self.value, D::CANONICAL.symbol())
    }
}

impl<D: Dimension> FromStr for Quantity<D> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<D> PartialEq for Quantity<D> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<D> PartialOrd for Quantity<D> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

// ========== Arithmetic ==========

impl<D> Add for Quantity<D> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.value + rhs.value)
    }
}

impl<D> Sub for Quantity<D> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.value - rhs.value)
    }
}

impl<D> Neg for Quantity<D> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.value)
    }
}

impl<D> AddAssign for Quantity<D> {
    fn add_assign(&mut self, rhs: Self) {
        self.value += rhs.value;
    }
}

impl<D> SubAssign for Quantity<D> {
    fn sub_assign(&mut self, rhs: Self) {
        self.value -= rhs.value;
    }
}

impl<D> Mul<f64> for Quantity<D> {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.value * rhs)
    }
}

impl<D> Mul<Quantity<D>> for f64 {
    type Output = Quantity<D>;

    fn mul(self, rhs: Quantity<D>) -> Quantity<D> {
        Quantity::new(self * rhs.value)
    }
}

impl<D> Div<f64> for Quantity<D> {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self::new(self.value / rhs)
    }
}

/// Ratio of two quantities of the same dimension
impl<D> Div for Quantity<D> {
    type Output = f64;

    fn div(self, rhs: Self) -> f64 {
        self.value / rhs.value
    }
}

impl<D> Sum for Quantity<D> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self::new(iter.map(|q| q.value).sum())
    }
}

/// A quantity read in a specific unit, for display
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading<D> {
    value: f64,
    unit: Unit<D>,
}

impl<D: Dimension> Reading<D> {
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> Unit<D> {
        self.unit
    }
}

impl<D> fmt::Display for Reading<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(DEFAULT_PRECISION);
        write!(f, "{:.*} {}", precision, self.value, self.unit.symbol())
    }
}

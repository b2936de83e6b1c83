//! This module contains [`Coord`], a bare triple of `f64` values that supports componentwise
//! arithmetic. Both [`RGBColor`] and [`HSLColor`] convert to and from it, which lets shifting,
//! clamping and inverting be written once as math on three numbers instead of once per color type.
//!
//! [`RGBColor`]: ../color/struct.RGBColor.html
//! [`HSLColor`]: ../colors/hslcolor/struct.HSLColor.html

use std::ops::{Add, Mul, Sub};

use num::{Num, NumCast};
use serde_derive::{Deserialize, Serialize};

use crate::error::{ColorError, Result};

/// Any primitive number that can stand in for an `f64` amount. Adjustment functions that accept "a
/// number" take one of these, so `set_lightness(hex, 10)` and `set_lightness(hex, 10.0)` both work.
pub trait Scalar: NumCast + Num + Copy {}

impl<T: NumCast + Num + Copy> Scalar for T {}

/// Coerces a scalar to `f64`. Every primitive number fits in an `f64` (possibly with lost
/// precision), so the NaN branch is unreachable for the built-in types.
pub(crate) fn to_f64<U: Scalar>(value: U) -> f64 {
    num::cast(value).unwrap_or(f64::NAN)
}

/// Lets `value` through only if it's finite. NaN and the infinities have no place on any color
/// axis: they can't be clamped or wrapped into range, and they would leak into hex codes as black.
pub(crate) fn finite(value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ColorError::InvalidNumber(value.to_string()))
    }
}

/// A point in 3D space. The axes are named `x`, `y` and `z`, and a color maps its components onto
/// them in the order of the letters in its name: `HSLColor` puts hue on `x`, saturation on `y` and
/// lightness on `z`.
///
/// # Examples
/// ```
/// # use umber::coord::Coord;
/// let point_1 = Coord{x: 1., y: 8., z: 7.};
/// let point_2 = Coord{x: 7., y: 2., z: 3.};
/// let sum = point_1 + point_2; // the point (8, 10, 10)
/// let diff = point_1 - point_2; // the point (-6, 6, 4)
/// // only scalar multiplication, and only on the right
/// let prod = point_1 * 2u8; // the point (2, 16, 14)
/// assert_eq!(sum, Coord{x: 8., y: 10., z: 10.});
/// assert_eq!(diff, Coord{x: -6., y: 6., z: 4.});
/// assert_eq!(prod, Coord{x: 2., y: 16., z: 14.});
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Coord {
    /// The first axis.
    pub x: f64,
    /// The second axis.
    pub y: f64,
    /// The third axis.
    pub z: f64,
}

impl Add for Coord {
    type Output = Coord;
    fn add(self, rhs: Coord) -> Coord {
        Coord {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl Sub for Coord {
    type Output = Coord;
    fn sub(self, rhs: Coord) -> Coord {
        Coord {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

// (a, b, c) * s = (sa, sb, sc). Not commutative, but that's all anything here needs.
impl<U: Scalar> Mul<U> for Coord {
    type Output = Coord;
    fn mul(self, rhs: U) -> Coord {
        let r = to_f64(rhs);
        Coord {
            x: self.x * r,
            y: self.y * r,
            z: self.z * r,
        }
    }
}

impl Coord {
    /// A coordinate that is zero everywhere except on the `z` axis. Handy for shifting only the
    /// lightness of an HSL color.
    pub fn along_z(z: f64) -> Coord {
        Coord { x: 0., y: 0., z }
    }

    /// A coordinate that is zero everywhere except on the `y` axis.
    pub fn along_y(y: f64) -> Coord {
        Coord { x: 0., y, z: 0. }
    }
}

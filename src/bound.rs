//! This module describes the Bound trait, which describes the range each component of a color space
//! is allowed to take. RGB channels live between 0 and 255, HSL saturation and lightness between 0
//! and 100, and HSL hue is unbounded because it wraps around instead.

use crate::coord::Coord;

/// Describes a color space whose components have explicit limits. Only colors that can be embedded
/// in 3D space can have bounds, hence the `Coord` conversions.
///
/// # Example
/// Shifting lightness past white just gives white.
///
/// ```
/// # use umber::prelude::*;
/// # use umber::coord::Coord;
/// let gray = HSLColor { h: 0., s: 0., l: 50. };
/// let point: Coord = gray.into();
/// let way_too_light = HSLColor::from(HSLColor::clamp_coord(point + Coord::along_z(500.)));
/// assert_eq!(way_too_light.l, 100.);
/// ```
pub trait Bound: Into<Coord> + From<Coord> + Copy {
    /// Returns an array [(min1, max1), (min2, max2), (min3, max3)] that represents the bounds on each
    /// component of the color space, in the order that they appear in the Coord representation. A
    /// component without bounds uses infinities.
    fn bounds() -> [(f64, f64); 3];

    /// Given a Coord, returns a Coord such that each component has been clamped to the correct
    /// bounds. NaN passes through untouched.
    fn clamp_coord(point: Coord) -> Coord {
        let ranges = Self::bounds();
        let mut point_vals = [point.x, point.y, point.z];
        for (component, &(min, max)) in point_vals.iter_mut().zip(ranges.iter()) {
            if *component < min {
                *component = min;
            } else if *component > max {
                *component = max;
            }
        }
        Coord {
            x: point_vals[0],
            y: point_vals[1],
            z: point_vals[2],
        }
    }

    /// Returns a copy of this color with every component clamped into the space's bounds.
    fn clamped(self) -> Self {
        Self::from(Self::clamp_coord(self.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::Bound;
    use crate::color::RGBColor;
    use crate::colors::hslcolor::HSLColor;

    #[test]
    fn test_rgb_bounds() {
        let color = RGBColor {
            r: 12.5,
            g: -40.,
            b: 300.,
        };
        assert_eq!(
            color.clamped(),
            RGBColor {
                r: 12.5,
                g: 0.,
                b: 255.
            }
        );
    }

    #[test]
    fn test_hsl_bounds_leave_hue_alone() {
        let color = HSLColor {
            h: 375.,
            s: -20.,
            l: 110.,
        };
        assert_eq!(
            color.clamped(),
            HSLColor {
                h: 375.,
                s: 0.,
                l: 100.
            }
        );
    }
}

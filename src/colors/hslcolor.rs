//! This file implements HSL, the cylindrical rearrangement of sRGB that web and theme tooling
//! speaks. HSL has every perceptual problem sRGB has, but its axes line up with the knobs people
//! actually want to turn: "same color, lighter" is a move along one axis.
//!
//! The scales follow CSS rather than the unit interval: hue is in degrees, and saturation and
//! lightness are percentages. Converting gray gives a hue of 0, although any hue would do.

use std::fmt;
use std::str::FromStr;

use serde_derive::{Deserialize, Serialize};

use crate::bound::Bound;
use crate::color::RGBColor;
use crate::coord::Coord;
use crate::error::{ColorError, Result};

/// A color in the HSL color space.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HSLColor {
    /// The hue component, in degrees. Ranges from 0 to 360 and wraps around.
    pub h: f64,
    /// The saturation component, as a percentage from 0 to 100.
    pub s: f64,
    /// The lightness component, as a percentage from 0 to 100. Defined as the average of the largest
    /// and smallest RGB channels, which sacrifices accuracy for convenience.
    pub l: f64,
}

impl From<RGBColor> for HSLColor {
    fn from(rgb: RGBColor) -> HSLColor {
        let r = rgb.r / 255.;
        let g = rgb.g / 255.;
        let b = rgb.b / 255.;

        let max_c = r.max(g).max(b);
        let min_c = r.min(g).min(b);
        let lightness = (max_c + min_c) / 2.;

        if max_c == min_c {
            // achromatic: no hue to speak of, and no saturation
            return HSLColor {
                h: 0.,
                s: 0.,
                l: lightness * 100.,
            };
        }

        let d = max_c - min_c;
        let saturation = if lightness > 0.5 {
            d / (2. - max_c - min_c)
        } else {
            d / (max_c + min_c)
        };

        // six sectors of the wheel, two per primary: which one we're in depends on which channel
        // is largest and how the other two compare
        let sector = if max_c == r {
            (g - b) / d + if g < b { 6. } else { 0. }
        } else if max_c == g {
            (b - r) / d + 2.
        } else {
            (r - g) / d + 4.
        };

        HSLColor {
            h: sector / 6. * 360.,
            s: saturation * 100.,
            l: lightness * 100.,
        }
    }
}

/// Maps a hue offset (in turns) onto one channel, given the two anchors `p` (the channel's floor)
/// and `q` (its ceiling).
fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0. {
        t + 1.
    } else if t > 1. {
        t - 1.
    } else {
        t
    };
    if t < 1. / 6. {
        p + (q - p) * 6. * t
    } else if t < 1. / 2. {
        q
    } else if t < 2. / 3. {
        p + (q - p) * (2. / 3. - t) * 6.
    } else {
        p
    }
}

impl From<HSLColor> for RGBColor {
    /// The channels are left unrounded and unclamped: that happens when the result becomes a hex
    /// code.
    fn from(hsl: HSLColor) -> RGBColor {
        let h = hsl.h / 360.;
        let s = hsl.s / 100.;
        let l = hsl.l / 100.;

        if s == 0. {
            return RGBColor {
                r: l * 255.,
                g: l * 255.,
                b: l * 255.,
            };
        }

        let q = if l < 0.5 { l * (1. + s) } else { l + s - l * s };
        let p = 2. * l - q;
        RGBColor {
            r: hue_to_channel(p, q, h + 1. / 3.) * 255.,
            g: hue_to_channel(p, q, h) * 255.,
            b: hue_to_channel(p, q, h - 1. / 3.) * 255.,
        }
    }
}

impl HSLColor {
    /// Parses a `#rrggbb` code straight into HSL.
    ///
    /// # Errors
    /// Returns [`ColorError::InvalidColorFormat`] if the input isn't a 6-digit hex code. There is no
    /// lenient variant: every adjustment built on top of this one reports bad input rather than
    /// guessing.
    pub fn from_hex_code(hex: &str) -> Result<HSLColor> {
        RGBColor::from_hex_code(hex).map(HSLColor::from)
    }

    /// Converts back through RGB and writes a lower-case `#rrggbb` code.
    pub fn to_hex_code(&self) -> String {
        RGBColor::from(*self).to_hex_code()
    }

    /// The hue moved by `degrees` (any sign, any size) and folded back into [0, 360).
    pub fn rotate_hue(self, degrees: f64) -> HSLColor {
        HSLColor {
            h: ((self.h + degrees) % 360. + 360.) % 360.,
            ..self
        }
    }
}

impl From<Coord> for HSLColor {
    fn from(c: Coord) -> HSLColor {
        HSLColor {
            h: c.x,
            s: c.y,
            l: c.z,
        }
    }
}

impl From<HSLColor> for Coord {
    fn from(hsl: HSLColor) -> Coord {
        Coord {
            x: hsl.h,
            y: hsl.s,
            z: hsl.l,
        }
    }
}

impl Bound for HSLColor {
    fn bounds() -> [(f64, f64); 3] {
        [(f64::NEG_INFINITY, f64::INFINITY), (0., 100.), (0., 100.)]
    }
}

impl fmt::Display for HSLColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.to_hex_code())
    }
}

impl FromStr for HSLColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<HSLColor> {
        HSLColor::from_hex_code(s)
    }
}

/// Parses a hex code into HSL.
///
/// # Errors
/// [`ColorError::InvalidColorFormat`] on anything but a 6-digit hex code.
///
/// # Example
/// ```
/// # use umber::colors::hslcolor::hex_to_hsl;
/// let red = hex_to_hsl("#ff0000").unwrap();
/// assert_eq!((red.h, red.s, red.l), (0., 100., 50.));
/// assert!(hex_to_hsl("not-a-color").is_err());
/// ```
pub fn hex_to_hsl(hex: &str) -> Result<HSLColor> {
    HSLColor::from_hex_code(hex)
}

/// Converts raw 0-255 channels to HSL. Agrees exactly with [`hex_to_hsl`] for the same color.
pub fn rgb_to_hsl(r: f64, g: f64, b: f64) -> HSLColor {
    HSLColor::from(RGBColor { r, g, b })
}

/// Converts HSL to unclamped, unrounded 0-255 channels.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> RGBColor {
    RGBColor::from(HSLColor { h, s, l })
}

/// Converts HSL straight to a `#rrggbb` code.
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    HSLColor { h, s, l }.to_hex_code()
}

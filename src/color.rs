//! This file defines [`RGBColor`], the color type every other representation in umber passes
//! through, along with hex code parsing and printing. Hex codes are the lingua franca here: almost
//! every public function takes one and hands one back.
//!
//! There are two ways of reading a hex code. The strict way, [`RGBColor::from_hex_code`], rejects
//! anything that isn't six hex digits with an optional `#`. The lenient way,
//! [`RGBColor::from_hex_code_lenient`], quietly turns garbage into black. The lenient path exists
//! because theme templates written against older tooling relied on it; new code should prefer the
//! strict one.

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use serde_derive::{Deserialize, Serialize};

use crate::bound::Bound;
use crate::coord::Coord;
use crate::error::{ColorError, Result};

lazy_static! {
    static ref HEX_CODE: Regex =
        Regex::new(r"^#?([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})$")
            .expect("hex code pattern is valid");
}

/// Which policy to apply when a hex code doesn't parse.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ParseMode {
    /// Return [`ColorError::InvalidColorFormat`].
    #[default]
    Strict,
    /// Return black.
    Lenient,
}

/// A color in the sRGB space, with each channel on the 0-255 scale. Channels are `f64` rather than
/// `u8` because colors computed from HSL math land between integers and can even overshoot the
/// range slightly: nothing is rounded or clamped until the color is written out as a hex code.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RGBColor {
    /// The red channel. Nominally between 0 and 255.
    pub r: f64,
    /// The green channel. Nominally between 0 and 255.
    pub g: f64,
    /// The blue channel. Nominally between 0 and 255.
    pub b: f64,
}

impl RGBColor {
    /// Black, which is also what lenient parsing produces from bad input.
    pub const BLACK: RGBColor = RGBColor {
        r: 0.,
        g: 0.,
        b: 0.,
    };

    /// White.
    pub const WHITE: RGBColor = RGBColor {
        r: 255.,
        g: 255.,
        b: 255.,
    };

    /// Parses a hex code of the form `#rrggbb` or `rrggbb`, in any case.
    ///
    /// # Errors
    /// Returns [`ColorError::InvalidColorFormat`] on anything else, including 3-digit and 8-digit
    /// codes.
    ///
    /// # Example
    /// ```
    /// # use umber::color::RGBColor;
    /// let color = RGBColor::from_hex_code("#FF5733").unwrap();
    /// assert_eq!((color.r, color.g, color.b), (255., 87., 51.));
    /// assert!(RGBColor::from_hex_code("#f53").is_err());
    /// ```
    pub fn from_hex_code(hex: &str) -> Result<RGBColor> {
        let invalid = || ColorError::InvalidColorFormat(hex.to_string());
        let caps = HEX_CODE.captures(hex).ok_or_else(invalid)?;
        let mut channels = [0.; 3];
        for (channel, cap) in channels.iter_mut().zip(caps.iter().skip(1)) {
            let digits = cap.ok_or_else(invalid)?.as_str();
            *channel = f64::from(u8::from_str_radix(digits, 16).map_err(|_| invalid())?);
        }
        Ok(RGBColor {
            r: channels[0],
            g: channels[1],
            b: channels[2],
        })
    }

    /// Parses a hex code like [`RGBColor::from_hex_code`], but returns black instead of an error
    /// when the input doesn't match.
    pub fn from_hex_code_lenient(hex: &str) -> RGBColor {
        match RGBColor::from_hex_code(hex) {
            Ok(color) => color,
            Err(_) => {
                tracing::debug!(input = hex, "unparseable hex code, substituting black");
                RGBColor::BLACK
            }
        }
    }

    /// Parses a hex code with the given failure policy. In [`ParseMode::Lenient`] this never fails.
    pub fn parse_hex(hex: &str, mode: ParseMode) -> Result<RGBColor> {
        match mode {
            ParseMode::Strict => RGBColor::from_hex_code(hex),
            ParseMode::Lenient => Ok(RGBColor::from_hex_code_lenient(hex)),
        }
    }

    /// Writes this color as a lower-case `#rrggbb` code. Each channel is clamped to 0-255 and
    /// rounded to the nearest integer first.
    pub fn to_hex_code(&self) -> String {
        let [r, g, b] = self.to_u8_channels();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    /// The channels clamped and rounded to bytes, in RGB order.
    pub fn to_u8_channels(&self) -> [u8; 3] {
        let clamped = self.clamped();
        // clamping guarantees 0-255, so the cast can't truncate
        [clamped.r, clamped.g, clamped.b].map(|c| c.round() as u8)
    }

    /// Each channel replaced by 255 minus itself. Applying this twice gives back the original color.
    pub fn inverted(&self) -> RGBColor {
        let white: Coord = RGBColor::WHITE.into();
        RGBColor::from(white - (*self).into())
    }
}

impl From<(u8, u8, u8)> for RGBColor {
    fn from(rgb: (u8, u8, u8)) -> RGBColor {
        let (r, g, b) = rgb;
        RGBColor {
            r: f64::from(r),
            g: f64::from(g),
            b: f64::from(b),
        }
    }
}

impl From<Coord> for RGBColor {
    fn from(c: Coord) -> RGBColor {
        RGBColor {
            r: c.x,
            g: c.y,
            b: c.z,
        }
    }
}

impl From<RGBColor> for Coord {
    fn from(rgb: RGBColor) -> Coord {
        Coord {
            x: rgb.r,
            y: rgb.g,
            z: rgb.b,
        }
    }
}

impl Bound for RGBColor {
    fn bounds() -> [(f64, f64); 3] {
        [(0., 255.), (0., 255.), (0., 255.)]
    }
}

impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.to_hex_code())
    }
}

impl FromStr for RGBColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<RGBColor> {
        RGBColor::from_hex_code(s)
    }
}

/// Reads a hex code into its channels, returning black `(0, 0, 0)` for anything that doesn't parse.
///
/// This keeps the forgiving behavior existing theme templates depend on. Use [`try_hex_to_rgb`] to
/// find out about bad input instead.
pub fn hex_to_rgb(hex: &str) -> RGBColor {
    RGBColor::from_hex_code_lenient(hex)
}

/// Reads a hex code into its channels.
///
/// # Errors
/// [`ColorError::InvalidColorFormat`] if `hex` isn't six hex digits with an optional `#`.
pub fn try_hex_to_rgb(hex: &str) -> Result<RGBColor> {
    RGBColor::from_hex_code(hex)
}

/// Writes three channels as a `#rrggbb` code, clamping each to 0-255 and rounding.
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> String {
    RGBColor { r, g, b }.to_hex_code()
}

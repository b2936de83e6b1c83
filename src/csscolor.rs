//! This file writes colors out in CSS functional notation (`rgb()`, `rgba()`, `hsl()` and `hsla()`)
//! and pulls single components out of hex codes, which is what theme templates mostly want from a
//! color once it has been computed. See
//! [https://www.w3.org/TR/css-color-3/](https://www.w3.org/TR/css-color-3/) for the notation.
//!
//! HSL components are rounded to whole numbers. Alpha is written exactly as given, without rounding
//! or clamping, using the shortest form that reads back to the same number: 1.0 prints as `1`. A NaN
//! or infinite alpha has no CSS spelling and is refused.

use serde_derive::{Deserialize, Serialize};

use crate::color::RGBColor;
use crate::colors::hslcolor::HSLColor;
use crate::coord::{self, Scalar};
use crate::error::Result;

/// The alpha used when a caller doesn't have one in mind: fully opaque.
pub const DEFAULT_ALPHA: f64 = 1.0;

fn rgb_channels(hex: &str) -> Result<[u8; 3]> {
    Ok(RGBColor::from_hex_code(hex)?.to_u8_channels())
}

fn rounded_hsl(hex: &str) -> Result<[i64; 3]> {
    let hsl = HSLColor::from_hex_code(hex)?;
    Ok([hsl.h, hsl.s, hsl.l].map(|c| c.round() as i64))
}

/// Writes a hex color as `rgb(r, g, b)`.
///
/// # Errors
/// [`ColorError::InvalidColorFormat`](crate::error::ColorError::InvalidColorFormat) if `hex`
/// doesn't parse, as with every function here that takes a hex code.
pub fn to_rgb_string(hex: &str) -> Result<String> {
    let [r, g, b] = rgb_channels(hex)?;
    Ok(format!("rgb({}, {}, {})", r, g, b))
}

/// Writes a hex color and an alpha as `rgba(r, g, b, a)`.
///
/// # Example
/// ```
/// # use umber::csscolor::to_rgba_string;
/// assert_eq!(to_rgba_string("#ff5733", 0.5).unwrap(), "rgba(255, 87, 51, 0.5)");
/// ```
pub fn to_rgba_string(hex: &str, alpha: f64) -> Result<String> {
    let [r, g, b] = rgb_channels(hex)?;
    Ok(format!("rgba({}, {}, {}, {})", r, g, b, coord::finite(alpha)?))
}

/// Writes a hex color as `hsl(h, s%, l%)`.
pub fn to_hsl_string(hex: &str) -> Result<String> {
    let [h, s, l] = rounded_hsl(hex)?;
    Ok(format!("hsl({}, {}%, {}%)", h, s, l))
}

/// Writes a hex color and an alpha as `hsla(h, s%, l%, a)`.
pub fn to_hsla_string(hex: &str, alpha: f64) -> Result<String> {
    let [h, s, l] = rounded_hsl(hex)?;
    Ok(format!("hsla({}, {}%, {}%, {})", h, s, l, coord::finite(alpha)?))
}

/// The red channel of a hex color, 0-255.
pub fn get_red(hex: &str) -> Result<u8> {
    Ok(rgb_channels(hex)?[0])
}

/// The green channel of a hex color, 0-255.
pub fn get_green(hex: &str) -> Result<u8> {
    Ok(rgb_channels(hex)?[1])
}

/// The blue channel of a hex color, 0-255.
pub fn get_blue(hex: &str) -> Result<u8> {
    Ok(rgb_channels(hex)?[2])
}

/// The hue of a hex color in whole degrees.
pub fn get_hue(hex: &str) -> Result<i64> {
    Ok(rounded_hsl(hex)?[0])
}

/// The HSL saturation of a hex color in whole percent.
pub fn get_saturation(hex: &str) -> Result<i64> {
    Ok(rounded_hsl(hex)?[1])
}

/// The HSL lightness of a hex color in whole percent.
pub fn get_lightness(hex: &str) -> Result<i64> {
    Ok(rounded_hsl(hex)?[2])
}

/// A hex color paired with an alpha, waiting to be written out as `rgba()` or `hsla()`. Neither
/// field is checked when the pair is made: both are validated when it's rendered, and a finite
/// alpha is passed through as is, even outside [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlphaColor {
    /// The color, as it was given.
    pub hex: String,
    /// The opacity.
    pub alpha: f64,
}

impl AlphaColor {
    /// Writes the pair as `rgba(r, g, b, a)`.
    pub fn to_rgba_string(&self) -> Result<String> {
        to_rgba_string(&self.hex, self.alpha)
    }

    /// Writes the pair as `hsla(h, s%, l%, a)`.
    pub fn to_hsla_string(&self) -> Result<String> {
        to_hsla_string(&self.hex, self.alpha)
    }
}

/// Tags a hex color with an alpha. Any numeric type works; it ends up as an `f64`.
pub fn set_alpha<U: Scalar>(hex: &str, alpha: U) -> AlphaColor {
    AlphaColor {
        hex: hex.to_string(),
        alpha: coord::to_f64(alpha),
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use crate::error::ColorError;

    #[test]
    fn test_rgb_strings() {
        assert_eq!(to_rgb_string("#ff5733").unwrap(), "rgb(255, 87, 51)");
        assert_eq!(to_rgba_string("#ff5733", 0.5).unwrap(), "rgba(255, 87, 51, 0.5)");
        assert_eq!(
            to_rgba_string("#ff5733", DEFAULT_ALPHA).unwrap(),
            "rgba(255, 87, 51, 1)"
        );
        // alpha is never clamped
        assert_eq!(to_rgba_string("000000", 1.75).unwrap(), "rgba(0, 0, 0, 1.75)");
        assert_eq!(to_rgba_string("000000", -0.25).unwrap(), "rgba(0, 0, 0, -0.25)");
    }

    #[test]
    fn test_hsl_strings() {
        assert_eq!(to_hsl_string("#ff5733").unwrap(), "hsl(11, 100%, 60%)");
        assert_eq!(to_hsl_string("#808080").unwrap(), "hsl(0, 0%, 50%)");
        assert_eq!(
            to_hsla_string("#336699", 0.125).unwrap(),
            "hsla(210, 50%, 40%, 0.125)"
        );
    }

    #[test]
    fn test_component_getters() {
        assert_eq!(get_red("#ff5733").unwrap(), 255);
        assert_eq!(get_green("#ff5733").unwrap(), 87);
        assert_eq!(get_blue("#ff5733").unwrap(), 51);
        assert_eq!(get_hue("#ff5733").unwrap(), 11);
        assert_eq!(get_saturation("#ff5733").unwrap(), 100);
        assert_eq!(get_lightness("#ff5733").unwrap(), 60);
        assert_eq!(get_hue("#0000ff").unwrap(), 240);
    }

    #[test]
    fn test_alpha_pairs() {
        let tagged = set_alpha("#ff5733", 0.5f32);
        assert_eq!(
            tagged,
            AlphaColor {
                hex: "#ff5733".to_string(),
                alpha: 0.5
            }
        );
        assert_eq!(tagged.to_rgba_string().unwrap(), "rgba(255, 87, 51, 0.5)");
        assert_eq!(tagged.to_hsla_string().unwrap(), "hsla(11, 100%, 60%, 0.5)");
        assert_eq!(set_alpha("#000000", 2).alpha, 2.);
        // bad hex codes are only noticed once rendered
        let bad = set_alpha("oops", 0.5);
        assert_eq!(
            bad.to_rgba_string(),
            Err(ColorError::InvalidColorFormat("oops".to_string()))
        );
    }

    #[test]
    fn test_non_finite_alpha() {
        assert_eq!(
            to_rgba_string("#ff5733", f64::INFINITY),
            Err(ColorError::InvalidNumber("inf".to_string()))
        );
        assert!(to_hsla_string("#ff5733", f64::NAN).is_err());
        assert!(set_alpha("#ff5733", f64::NAN).to_rgba_string().is_err());
    }

    #[test]
    fn test_bad_input() {
        assert!(to_rgb_string("#12345g").is_err());
        assert!(to_hsla_string("", 1.).is_err());
        assert!(get_red("red").is_err());
        assert!(get_lightness("#1234567").is_err());
    }
}

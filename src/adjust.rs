//! Adjustment operators: nudging lightness and saturation, rotating hue, draining color entirely, and
//! flipping a color to its RGB complement. Everything here takes a hex code and gives back a new
//! one, so a theme template can chain them freely.
//!
//! Out-of-range amounts are never an error. A lightness shift of +1000 just gives white, a hue
//! rotation of -725 degrees is a rotation of -5, and so on: each component is clamped or wrapped on
//! its own. Non-finite amounts are the exception. NaN and the infinities can't be clamped or
//! wrapped into anything meaningful, so they fail with `ColorError::InvalidNumber`.

use crate::bound::Bound;
use crate::color::RGBColor;
use crate::colors::hslcolor::HSLColor;
use crate::coord::{self, Coord, Scalar};
use crate::error::Result;
use crate::material_colors::ThemeMode;

impl HSLColor {
    /// Moves lightness by `amount` percentage points, stopping at 0 and 100.
    pub fn shift_lightness(self, amount: f64) -> HSLColor {
        self.shift(Coord::along_z(amount))
    }

    /// Moves saturation by `amount` percentage points, stopping at 0 and 100.
    pub fn shift_saturation(self, amount: f64) -> HSLColor {
        self.shift(Coord::along_y(amount))
    }

    /// Moves lightness and saturation together. Each is clamped on its own, so pushing one past
    /// its limit doesn't affect the other.
    pub fn shift_lightness_and_saturation(self, lightness: f64, saturation: f64) -> HSLColor {
        self.shift(Coord::along_z(lightness) + Coord::along_y(saturation))
    }

    fn shift(self, delta: Coord) -> HSLColor {
        let point: Coord = self.into();
        HSLColor::from(HSLColor::clamp_coord(point + delta))
    }
}

/// Lightens (positive `amount`) or darkens (negative `amount`) a color by that many percentage
/// points of HSL lightness.
///
/// # Errors
/// [`ColorError::InvalidColorFormat`](crate::error::ColorError::InvalidColorFormat) if `hex`
/// doesn't parse, and [`ColorError::InvalidNumber`](crate::error::ColorError::InvalidNumber) if
/// `amount` is NaN or infinite. The same goes for every function in this module.
///
/// # Example
/// ```
/// # use umber::adjust::adjust_lightness;
/// assert_eq!(adjust_lightness("#808080", 1000.).unwrap(), "#ffffff");
/// assert_eq!(adjust_lightness("#ff0000", -25.).unwrap(), "#800000");
/// ```
pub fn adjust_lightness(hex: &str, amount: f64) -> Result<String> {
    let hsl = HSLColor::from_hex_code(hex)?;
    Ok(hsl.shift_lightness(coord::finite(amount)?).to_hex_code())
}

/// Saturates (positive `amount`) or desaturates (negative `amount`) a color.
pub fn adjust_saturation(hex: &str, amount: f64) -> Result<String> {
    let hsl = HSLColor::from_hex_code(hex)?;
    Ok(hsl.shift_saturation(coord::finite(amount)?).to_hex_code())
}

/// Applies a lightness and a saturation shift in one pass, so the color is only rounded to 8-bit
/// channels once.
pub fn adjust_lightness_and_saturation(
    hex: &str,
    lightness_amount: f64,
    saturation_amount: f64,
) -> Result<String> {
    let hsl = HSLColor::from_hex_code(hex)?;
    Ok(hsl
        .shift_lightness_and_saturation(
            coord::finite(lightness_amount)?,
            coord::finite(saturation_amount)?,
        )
        .to_hex_code())
}

/// Rotates the hue by `degrees`, which may be fractional, negative, or larger than a full turn.
pub fn set_hue(hex: &str, degrees: f64) -> Result<String> {
    let hsl = HSLColor::from_hex_code(hex)?;
    Ok(hsl.rotate_hue(coord::finite(degrees)?).to_hex_code())
}

/// [`adjust_lightness`] for any numeric type.
pub fn set_lightness<U: Scalar>(hex: &str, amount: U) -> Result<String> {
    adjust_lightness(hex, coord::to_f64(amount))
}

/// Shifts lightness by `amount`, in whichever direction pushes the color further toward the extreme
/// it is already on for dark themes, and the opposite way for light themes. In a dark theme light
/// colors get lighter and dark colors darker; a light theme reverses both.
pub fn auto_lightness<U: Scalar>(hex: &str, amount: U, mode: ThemeMode) -> Result<String> {
    let is_light = RGBColor::from_hex_code(hex)?.is_light();
    let direction = match (mode, is_light) {
        (ThemeMode::Dark, true) | (ThemeMode::Light, false) => 1.,
        (ThemeMode::Dark, false) | (ThemeMode::Light, true) => -1.,
    };
    adjust_lightness(hex, coord::to_f64(amount) * direction)
}

/// Drains all saturation from a color, leaving the gray of the same HSL lightness.
pub fn grayscale(hex: &str) -> Result<String> {
    adjust_saturation(hex, -100.)
}

/// Replaces each RGB channel with 255 minus itself. This works on RGB directly, not on HSL.
pub fn invert(hex: &str) -> Result<String> {
    Ok(RGBColor::from_hex_code(hex)?.inverted().to_hex_code())
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use crate::colors::hslcolor::hex_to_hsl;
    use crate::error::ColorError;

    const SAMPLES: [&str; 8] = [
        "#ff5733", "#336699", "#000000", "#ffffff", "#0a7f3c", "#c0ffee", "#7f7f80", "#1c1b1f",
    ];

    fn channels_close(a: &str, b: &str) -> bool {
        let a = RGBColor::from_hex_code(a).unwrap();
        let b = RGBColor::from_hex_code(b).unwrap();
        (a.r - b.r).abs() <= 1. && (a.g - b.g).abs() <= 1. && (a.b - b.b).abs() <= 1.
    }

    #[test]
    fn test_lightness_clamps_to_extremes() {
        for hex in SAMPLES.iter() {
            let lightest = adjust_lightness(hex, 1000.).unwrap();
            let darkest = adjust_lightness(hex, -1000.).unwrap();
            assert_eq!(lightest, "#ffffff");
            assert_eq!(darkest, "#000000");
            assert_eq!(hex_to_hsl(&lightest).unwrap().l, 100.);
            assert_eq!(hex_to_hsl(&darkest).unwrap().l, 0.);
        }
    }

    #[test]
    fn test_small_adjustments() {
        // red at 50% lightness, darkened by 25 points
        assert_eq!(adjust_lightness("#ff0000", -25.).unwrap(), "#800000");
        assert_eq!(adjust_lightness("#ff0000", 25.).unwrap(), "#ff8080");
        // full saturation can't go higher
        assert_eq!(adjust_saturation("#ff0000", 30.).unwrap(), "#ff0000");
        assert_eq!(adjust_saturation("#ff0000", -50.).unwrap(), "#bf4040");
        assert_eq!(set_lightness("#ff0000", -25i32).unwrap(), "#800000");
    }

    #[test]
    fn test_combined_adjustment() {
        assert_eq!(
            adjust_lightness_and_saturation("#ff0000", -25., -50.).unwrap(),
            "#602020"
        );
        // clamping one component leaves the other alone
        let hsl = hex_to_hsl(&adjust_lightness_and_saturation("#336699", 500., -10.).unwrap()).unwrap();
        assert_eq!(hsl.l, 100.);
    }

    #[test]
    fn test_grayscale() {
        assert_eq!(grayscale("#ff0000").unwrap(), "#808080");
        for hex in SAMPLES.iter() {
            let once = grayscale(hex).unwrap();
            assert_eq!(grayscale(&once).unwrap(), once);
            assert_eq!(hex_to_hsl(&once).unwrap().s, 0.);
        }
    }

    #[test]
    fn test_invert() {
        assert_eq!(invert("#ff5733").unwrap(), "#00a8cc");
        assert_eq!(invert("#000000").unwrap(), "#ffffff");
        for hex in SAMPLES.iter() {
            assert_eq!(invert(&invert(hex).unwrap()).unwrap(), *hex);
        }
    }

    #[test]
    fn test_hue_rotation() {
        assert_eq!(set_hue("#ff0000", 120.).unwrap(), "#00ff00");
        assert_eq!(set_hue("#ff0000", -120.).unwrap(), "#0000ff");
        for hex in SAMPLES.iter() {
            assert!(channels_close(&set_hue(hex, 360.).unwrap(), hex));
            assert!(channels_close(&set_hue(hex, -360.).unwrap(), hex));
            assert!(channels_close(&set_hue(hex, 720.).unwrap(), hex));
        }
    }

    #[test]
    fn test_auto_lightness() {
        // white is light: dark mode pushes it further up (stays white), light mode pulls it down
        assert_eq!(auto_lightness("#ffffff", 10, ThemeMode::Dark).unwrap(), "#ffffff");
        assert_eq!(auto_lightness("#ffffff", 12, ThemeMode::Light).unwrap(), "#e0e0e0");
        // red is dark by luminance
        assert_eq!(auto_lightness("#ff0000", 25., ThemeMode::Dark).unwrap(), "#800000");
        assert_eq!(auto_lightness("#ff0000", 25., ThemeMode::Light).unwrap(), "#ff8080");
    }

    #[test]
    fn test_color_sweep() {
        // a few thousand colors spread across the whole 24-bit cube
        for hex in (0..0x100_0000u32).step_by(4099).map(|n| format!("#{:06x}", n)) {
            assert_eq!(adjust_lightness(&hex, 1000.).unwrap(), "#ffffff");
            assert_eq!(adjust_lightness(&hex, -1000.).unwrap(), "#000000");
            let gray = grayscale(&hex).unwrap();
            assert_eq!(grayscale(&gray).unwrap(), gray, "grayscale of {}", hex);
            assert_eq!(invert(&invert(&hex).unwrap()).unwrap(), hex);
            assert!(channels_close(&set_hue(&hex, 360.).unwrap(), &hex), "{} + 360", hex);
            assert!(channels_close(&set_hue(&hex, -360.).unwrap(), &hex), "{} - 360", hex);
        }
    }

    #[test]
    fn test_non_finite_amounts() {
        assert_eq!(
            adjust_lightness("#ff5733", f64::NAN),
            Err(ColorError::InvalidNumber("NaN".to_string()))
        );
        assert_eq!(
            set_hue("#ff5733", f64::INFINITY),
            Err(ColorError::InvalidNumber("inf".to_string()))
        );
        assert!(adjust_saturation("#ff5733", f64::NEG_INFINITY).is_err());
        assert!(adjust_lightness_and_saturation("#ff5733", 10., f64::NAN).is_err());
        assert!(set_lightness("#ff5733", f32::NAN).is_err());
        assert!(auto_lightness("#ff5733", f64::NAN, ThemeMode::Dark).is_err());
        // a bad color is still reported first
        assert_eq!(
            set_hue("#ff57", f64::NAN),
            Err(ColorError::InvalidColorFormat("#ff57".to_string()))
        );
    }

    #[test]
    fn test_invalid_input_propagates() {
        let bad = "not-a-color";
        let expected = Err(ColorError::InvalidColorFormat(bad.to_string()));
        assert_eq!(adjust_lightness(bad, 10.), expected);
        assert_eq!(adjust_saturation(bad, 10.), expected);
        assert_eq!(adjust_lightness_and_saturation(bad, 1., 1.), expected);
        assert_eq!(set_hue(bad, 10.), expected);
        assert_eq!(set_lightness(bad, 10), expected);
        assert_eq!(auto_lightness(bad, 10, ThemeMode::Dark), expected);
        assert_eq!(grayscale(bad), expected);
        assert_eq!(invert(bad), expected);
    }
}

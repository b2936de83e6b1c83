//! Perceptual measurements on colors: WCAG relative luminance, the contrast ratio between two
//! colors, and a quick light/dark classification. The formulas follow WCAG 2.x, including its
//! 0.03928 linearization cutoff (the sRGB standard itself says 0.04045, which makes no difference
//! for 8-bit channels).

use serde_derive::{Deserialize, Serialize};

use crate::color::RGBColor;
use crate::error::Result;

/// Linearizes one gamma-encoded channel on the 0-255 scale.
fn linearize(channel: f64) -> f64 {
    let v = channel / 255.;
    if v <= 0.03928 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

impl RGBColor {
    /// The WCAG relative luminance of this color, between 0 (black) and 1 (white).
    pub fn relative_luminance(&self) -> f64 {
        0.2126 * linearize(self.r) + 0.7152 * linearize(self.g) + 0.0722 * linearize(self.b)
    }

    /// The WCAG contrast ratio between this color and another, between 1 and 21. The order of the
    /// two colors doesn't matter.
    pub fn contrast_ratio(&self, other: &RGBColor) -> f64 {
        let lum1 = self.relative_luminance();
        let lum2 = other.relative_luminance();
        let brightest = lum1.max(lum2);
        let darkest = lum1.min(lum2);
        (brightest + 0.05) / (darkest + 0.05)
    }

    /// Whether this color counts as light, meaning its relative luminance is above one half. This is
    /// a rough cut, not a WCAG threshold: plenty of colors people would call light fall below it.
    pub fn is_light(&self) -> bool {
        self.relative_luminance() > 0.5
    }
}

/// The WCAG contrast levels a pair of colors can be checked against.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContrastLevel {
    /// AA for large text and UI components: 3:1.
    AaLarge,
    /// AA for normal text: 4.5:1.
    Aa,
    /// AAA for normal text: 7:1.
    Aaa,
}

impl ContrastLevel {
    /// The minimum contrast ratio this level requires.
    pub fn min_ratio(self) -> f64 {
        match self {
            ContrastLevel::AaLarge => 3.0,
            ContrastLevel::Aa => 4.5,
            ContrastLevel::Aaa => 7.0,
        }
    }
}

/// Whether a contrast ratio is enough for the given level.
pub fn meets_contrast(ratio: f64, level: ContrastLevel) -> bool {
    ratio >= level.min_ratio()
}

/// The relative luminance of a hex color.
///
/// # Errors
/// [`ColorError::InvalidColorFormat`](crate::error::ColorError::InvalidColorFormat) if `hex` doesn't
/// parse.
pub fn get_luminance(hex: &str) -> Result<f64> {
    Ok(RGBColor::from_hex_code(hex)?.relative_luminance())
}

/// The contrast ratio between two hex colors.
///
/// # Example
/// ```
/// # use umber::contrast::get_contrast_ratio;
/// let ratio = get_contrast_ratio("#ffffff", "#000000").unwrap();
/// assert!((ratio - 21.).abs() < 0.01);
/// ```
pub fn get_contrast_ratio(hex1: &str, hex2: &str) -> Result<f64> {
    let c1 = RGBColor::from_hex_code(hex1)?;
    let c2 = RGBColor::from_hex_code(hex2)?;
    Ok(c1.contrast_ratio(&c2))
}

/// Whether a hex color counts as light. See [`RGBColor::is_light`].
pub fn is_light_color(hex: &str) -> Result<bool> {
    Ok(RGBColor::from_hex_code(hex)?.is_light())
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use crate::error::ColorError;
    use float_cmp::approx_eq;
    use maplit::hashmap;

    #[test]
    fn test_luminance_extremes() {
        assert!(approx_eq!(f64, get_luminance("#ffffff").unwrap(), 1.0, epsilon = 1e-12));
        assert_eq!(get_luminance("#000000").unwrap(), 0.0);
    }

    #[test]
    fn test_known_contrast_ratios() {
        // reference values from the WebAIM contrast checker
        let against_white = hashmap! {
            "#000000" => 21.0,
            "#767676" => 4.54,
            "#ff0000" => 4.0,
            "#1e293b" => 14.63,
            "#ffffff" => 1.0,
        };
        for (hex, expected) in against_white {
            let ratio = get_contrast_ratio(hex, "#ffffff").unwrap();
            assert!(
                approx_eq!(f64, ratio, expected, epsilon = 0.05),
                "{} against white: {}",
                hex,
                ratio
            );
        }
    }

    #[test]
    fn test_contrast_is_symmetric() {
        let colors = ["#ff5733", "#336699", "#000000", "#fefefe", "#0a7f3c"];
        for a in colors.iter() {
            for b in colors.iter() {
                assert_eq!(
                    get_contrast_ratio(a, b).unwrap(),
                    get_contrast_ratio(b, a).unwrap()
                );
            }
            assert_eq!(get_contrast_ratio(a, a).unwrap(), 1.0);
        }
    }

    #[test]
    fn test_contrast_sweep() {
        let sweep: Vec<String> = (0..0x100_0000u32)
            .step_by(4099)
            .map(|n| format!("#{:06x}", n))
            .collect();
        for pair in sweep.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            let ratio = get_contrast_ratio(a, b).unwrap();
            assert_eq!(ratio, get_contrast_ratio(b, a).unwrap());
            assert!((1.0..=21.0).contains(&ratio), "{} vs {}: {}", a, b, ratio);
        }
    }

    #[test]
    fn test_light_classification() {
        assert!(is_light_color("#ffffff").unwrap());
        assert!(is_light_color("#ffff00").unwrap());
        assert!(!is_light_color("#000000").unwrap());
        // mid gray is below the 0.5 luminance line even though it looks middling
        assert!(!is_light_color("#808080").unwrap());
        assert!(!is_light_color("#ff0000").unwrap());
    }

    #[test]
    fn test_contrast_levels() {
        assert!(meets_contrast(4.5, ContrastLevel::Aa));
        assert!(!meets_contrast(4.49, ContrastLevel::Aa));
        assert!(meets_contrast(3.2, ContrastLevel::AaLarge));
        assert!(!meets_contrast(6.9, ContrastLevel::Aaa));
    }

    #[test]
    fn test_bad_input() {
        assert_eq!(
            get_luminance("#12345"),
            Err(ColorError::InvalidColorFormat("#12345".to_string()))
        );
        assert!(get_contrast_ratio("#ffffff", "white").is_err());
        assert!(is_light_color("").is_err());
    }
}

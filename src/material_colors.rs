//! This file derives the supporting tones of a Material-style theme from a single color: the
//! "on" color drawn on top of it, a softer "container" tone, and a ladder of surface variants. The
//! fallback grays are the Material 3 baseline on-surface colors.

use serde_derive::{Deserialize, Serialize};

use crate::color::RGBColor;
use crate::colors::hslcolor::HSLColor;
use crate::contrast::ContrastLevel;
use crate::coord::Coord;
use crate::error::Result;

/// Whether a palette is being built for a light or a dark theme.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Dark content on light surfaces.
    #[default]
    Light,
    /// Light content on dark surfaces.
    Dark,
}

impl ThemeMode {
    /// Maps an `is_dark_mode` flag onto a mode.
    pub fn from_dark_flag(is_dark: bool) -> ThemeMode {
        if is_dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    /// Whether this is [`ThemeMode::Dark`].
    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }
}

/// How [`generate_on_color_with`] picks a foreground. The default is the WCAG AA normal-text
/// threshold with the Material 3 on-surface grays as fallbacks.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OnColorPolicy {
    /// The contrast ratio pure black or white has to reach before it's used.
    pub min_contrast: f64,
    /// Used on light backgrounds when black doesn't reach `min_contrast`.
    pub dark_fallback: RGBColor,
    /// Used on dark backgrounds when white doesn't reach `min_contrast`.
    pub light_fallback: RGBColor,
}

impl Default for OnColorPolicy {
    fn default() -> OnColorPolicy {
        OnColorPolicy {
            min_contrast: ContrastLevel::Aa.min_ratio(),
            dark_fallback: RGBColor::from((0x1c, 0x1b, 0x1f)),
            light_fallback: RGBColor::from((0xe6, 0xe1, 0xe5)),
        }
    }
}

/// Picks a readable text or icon color for use on top of `base`: black on light colors and white on
/// dark ones, falling back to a soft gray if the pure color somehow doesn't reach 4.5:1.
///
/// The mode is accepted for symmetry with the other generators but doesn't change the result.
///
/// # Errors
/// [`ColorError::InvalidColorFormat`](crate::error::ColorError::InvalidColorFormat) if `base`
/// doesn't parse.
///
/// # Example
/// ```
/// # use umber::material_colors::{generate_on_color, ThemeMode};
/// assert_eq!(generate_on_color("#ffffff", ThemeMode::Light).unwrap(), "#000000");
/// assert_eq!(generate_on_color("#000000", ThemeMode::Light).unwrap(), "#ffffff");
/// ```
pub fn generate_on_color(base: &str, mode: ThemeMode) -> Result<String> {
    generate_on_color_with(base, mode, &OnColorPolicy::default())
}

/// [`generate_on_color`] with a custom threshold and fallbacks. Only one candidate is tried per
/// background: there is no search for the closest passing tone.
pub fn generate_on_color_with(
    base: &str,
    _mode: ThemeMode,
    policy: &OnColorPolicy,
) -> Result<String> {
    let base = RGBColor::from_hex_code(base)?;
    let (candidate, fallback) = if base.is_light() {
        (RGBColor::BLACK, policy.dark_fallback)
    } else {
        (RGBColor::WHITE, policy.light_fallback)
    };
    let ratio = base.contrast_ratio(&candidate);
    if ratio >= policy.min_contrast {
        Ok(candidate.to_hex_code())
    } else {
        tracing::trace!(ratio, "on-color candidate below threshold, using fallback");
        Ok(fallback.to_hex_code())
    }
}

impl HSLColor {
    /// The container tone of this color. Dark themes get a deep, slightly more saturated tone with
    /// lightness between 10 and 30; light themes get a pale, slightly muted one between 75 and 90.
    pub fn container(self, mode: ThemeMode) -> HSLColor {
        match mode {
            ThemeMode::Dark => HSLColor {
                l: (self.l - 20.).min(30.).max(10.),
                s: (self.s + 10.).min(100.),
                ..self
            },
            ThemeMode::Light => HSLColor {
                l: (self.l + 30.).max(75.).min(90.),
                s: (self.s - 10.).max(0.),
                ..self
            },
        }
    }

    /// The surface variant `step` levels away from this color: 3 points lighter per step in dark
    /// themes, 2 points darker per step in light themes. Only the far end is clamped.
    pub fn surface_variant(self, step: i32, mode: ThemeMode) -> HSLColor {
        let per_step = match mode {
            ThemeMode::Dark => Coord::along_z(3.),
            ThemeMode::Light => Coord::along_z(-2.),
        };
        let point: Coord = self.into();
        let moved = HSLColor::from(point + per_step * step);
        let l = match mode {
            ThemeMode::Dark => moved.l.min(100.),
            ThemeMode::Light => moved.l.max(0.),
        };
        HSLColor { l, ..moved }
    }
}

/// The container tone for `base`. See [`HSLColor::container`].
pub fn generate_container_color(base: &str, mode: ThemeMode) -> Result<String> {
    Ok(HSLColor::from_hex_code(base)?.container(mode).to_hex_code())
}

/// The surface tone `step` levels away from `background`. See [`HSLColor::surface_variant`].
pub fn generate_surface_variant(background: &str, step: i32, mode: ThemeMode) -> Result<String> {
    Ok(HSLColor::from_hex_code(background)?
        .surface_variant(step, mode)
        .to_hex_code())
}

//! Named filters, for template engines that refer to color operations by name and pass their
//! arguments around as text. A filter is parsed once from its name and optional argument, then
//! applied to as many colors as needed.
//!
//! ```
//! # use umber::filter::{Filter, FilterOutput};
//! # use umber::material_colors::ThemeMode;
//! let filter: Filter = "set_lightness:-25".parse().unwrap();
//! let out = filter.apply("#ff0000", ThemeMode::Dark).unwrap();
//! assert_eq!(out, FilterOutput::Color("#800000".to_string()));
//! ```

use std::fmt;
use std::str::FromStr;

use crate::adjust;
use crate::csscolor::{self, AlphaColor, DEFAULT_ALPHA};
use crate::error::{ColorError, Result};
use crate::material_colors::ThemeMode;

/// A color operation together with its argument, if it takes one.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Filter {
    /// Pair the color with an opacity.
    SetAlpha(f64),
    /// Rotate the hue by this many degrees.
    SetHue(f64),
    /// Shift lightness by this many points.
    SetLightness(f64),
    /// Shift lightness by this many points, in the direction the theme mode calls for.
    AutoLightness(f64),
    /// Remove all saturation.
    Grayscale,
    /// Take the RGB complement.
    Invert,
    /// Write as `rgb()`.
    ToRgbString,
    /// Write as `rgba()` with this alpha.
    ToRgbaString(f64),
    /// Write as `hsl()`.
    ToHslString,
    /// Write as `hsla()` with this alpha.
    ToHslaString(f64),
    /// Extract the red channel.
    Red,
    /// Extract the green channel.
    Green,
    /// Extract the blue channel.
    Blue,
    /// Extract the rounded hue.
    Hue,
    /// Extract the rounded saturation.
    Saturation,
    /// Extract the rounded lightness.
    Lightness,
}

/// What applying a filter produces.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterOutput {
    /// A new hex color.
    Color(String),
    /// A hex color tagged with an alpha.
    Alpha(AlphaColor),
    /// A CSS color string.
    Text(String),
    /// A single color component.
    Integer(i64),
}

impl fmt::Display for FilterOutput {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FilterOutput::Color(hex) | FilterOutput::Text(hex) => f.write_str(hex),
            FilterOutput::Alpha(tagged) => write!(f, "{} {}", tagged.hex, tagged.alpha),
            FilterOutput::Integer(n) => write!(f, "{}", n),
        }
    }
}

/// Reads a numeric filter argument. Surrounding whitespace is ignored; anything else that isn't a
/// finite number is an error, including the `NaN` and `inf` spellings `f64` would otherwise accept.
fn parse_number(arg: &str) -> Result<f64> {
    arg.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ColorError::InvalidNumber(arg.to_string()))
}

fn required(name: &'static str, arg: Option<&str>) -> Result<f64> {
    parse_number(arg.ok_or(ColorError::MissingArgument(name))?)
}

fn alpha_or_default(arg: Option<&str>) -> Result<f64> {
    arg.map_or(Ok(DEFAULT_ALPHA), parse_number)
}

impl Filter {
    /// Looks up a filter by name. Filters that need a number take it from `arg`; the alpha of
    /// `to_rgba_string` and `to_hsla_string` defaults to 1. Arguments given to filters that take
    /// none are ignored.
    ///
    /// # Errors
    /// [`ColorError::UnknownFilter`] for an unrecognized name, [`ColorError::MissingArgument`] when
    /// a required number is absent, and [`ColorError::InvalidNumber`] when it doesn't parse.
    pub fn parse(name: &str, arg: Option<&str>) -> Result<Filter> {
        let filter = match name {
            "set_alpha" => Filter::SetAlpha(required("set_alpha", arg)?),
            "set_hue" => Filter::SetHue(required("set_hue", arg)?),
            "set_lightness" => Filter::SetLightness(required("set_lightness", arg)?),
            "auto_lightness" => Filter::AutoLightness(required("auto_lightness", arg)?),
            "grayscale" => Filter::Grayscale,
            "invert" => Filter::Invert,
            "to_rgb_string" => Filter::ToRgbString,
            "to_rgba_string" => Filter::ToRgbaString(alpha_or_default(arg)?),
            "to_hsl_string" => Filter::ToHslString,
            "to_hsla_string" => Filter::ToHslaString(alpha_or_default(arg)?),
            "get_red" => Filter::Red,
            "get_green" => Filter::Green,
            "get_blue" => Filter::Blue,
            "get_hue" => Filter::Hue,
            "get_saturation" => Filter::Saturation,
            "get_lightness" => Filter::Lightness,
            _ => return Err(ColorError::UnknownFilter(name.to_string())),
        };
        Ok(filter)
    }

    /// Applies the filter to a hex color. Only `auto_lightness` looks at `mode`.
    ///
    /// # Errors
    /// [`ColorError::InvalidColorFormat`] if `hex` doesn't parse. `set_alpha` is the exception: it
    /// doesn't read the color, so a bad one only surfaces when the pair is rendered.
    pub fn apply(&self, hex: &str, mode: ThemeMode) -> Result<FilterOutput> {
        tracing::trace!(filter = ?self, input = hex, "applying color filter");
        let output = match *self {
            Filter::SetAlpha(alpha) => FilterOutput::Alpha(csscolor::set_alpha(hex, alpha)),
            Filter::SetHue(degrees) => FilterOutput::Color(adjust::set_hue(hex, degrees)?),
            Filter::SetLightness(amount) => {
                FilterOutput::Color(adjust::set_lightness(hex, amount)?)
            }
            Filter::AutoLightness(amount) => {
                FilterOutput::Color(adjust::auto_lightness(hex, amount, mode)?)
            }
            Filter::Grayscale => FilterOutput::Color(adjust::grayscale(hex)?),
            Filter::Invert => FilterOutput::Color(adjust::invert(hex)?),
            Filter::ToRgbString => FilterOutput::Text(csscolor::to_rgb_string(hex)?),
            Filter::ToRgbaString(alpha) => {
                FilterOutput::Text(csscolor::to_rgba_string(hex, alpha)?)
            }
            Filter::ToHslString => FilterOutput::Text(csscolor::to_hsl_string(hex)?),
            Filter::ToHslaString(alpha) => {
                FilterOutput::Text(csscolor::to_hsla_string(hex, alpha)?)
            }
            Filter::Red => FilterOutput::Integer(i64::from(csscolor::get_red(hex)?)),
            Filter::Green => FilterOutput::Integer(i64::from(csscolor::get_green(hex)?)),
            Filter::Blue => FilterOutput::Integer(i64::from(csscolor::get_blue(hex)?)),
            Filter::Hue => FilterOutput::Integer(csscolor::get_hue(hex)?),
            Filter::Saturation => FilterOutput::Integer(csscolor::get_saturation(hex)?),
            Filter::Lightness => FilterOutput::Integer(csscolor::get_lightness(hex)?),
        };
        Ok(output)
    }
}

impl FromStr for Filter {
    type Err = ColorError;

    /// Parses `name` or `name:argument`, e.g. `grayscale` or `set_hue:-30`.
    fn from_str(s: &str) -> Result<Filter> {
        match s.split_once(':') {
            Some((name, arg)) => Filter::parse(name.trim(), Some(arg)),
            None => Filter::parse(s.trim(), None),
        }
    }
}

//! This module brings the most common umber functionality under a single namespace, to prevent
//! excessive imports: both color types, the error type, the theme mode, the [`Bound`] trait, and
//! every hex-in, hex-out function. The filter machinery and the [`Coord`](crate::coord::Coord)
//! plumbing are left out.

pub use crate::adjust::{
    adjust_lightness, adjust_lightness_and_saturation, adjust_saturation, auto_lightness,
    grayscale, invert, set_hue, set_lightness,
};
pub use crate::bound::Bound;
pub use crate::color::{hex_to_rgb, rgb_to_hex, try_hex_to_rgb, ParseMode, RGBColor};
pub use crate::colors::hslcolor::{hex_to_hsl, hsl_to_hex, hsl_to_rgb, rgb_to_hsl, HSLColor};
pub use crate::contrast::{get_contrast_ratio, get_luminance, is_light_color, ContrastLevel};
pub use crate::csscolor::{
    get_blue, get_green, get_hue, get_lightness, get_red, get_saturation, set_alpha,
    to_hsl_string, to_hsla_string, to_rgb_string, to_rgba_string, AlphaColor,
};
pub use crate::error::{ColorError, Result};
pub use crate::material_colors::{
    generate_container_color, generate_on_color, generate_surface_variant, ThemeMode,
};

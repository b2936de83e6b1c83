//! umber is a small library for the color arithmetic that goes into building a theme from a seed
//! color. It reads and writes hex codes, moves between RGB and HSL, measures WCAG luminance and
//! contrast, and derives related tones: lighter and darker shades, muted and saturated ones, rotated
//! hues, readable "on" colors, Material-style containers and surface variants.
//!
//! Every operation is a pure function. The hex-based functions return [`Result`](error::Result) and
//! fail with [`ColorError::InvalidColorFormat`](error::ColorError::InvalidColorFormat) on anything
//! that isn't six hex digits, with one exception: [`color::hex_to_rgb`] keeps the old habit of
//! reading garbage as black.
//!
//! ```
//! use umber::prelude::*;
//!
//! let seed = "#6750a4";
//! let container = generate_container_color(seed, ThemeMode::Dark).unwrap();
//! let on_container = generate_on_color(&container, ThemeMode::Dark).unwrap();
//! assert!(get_contrast_ratio(&container, &on_container).unwrap() >= 4.5);
//! ```

#![doc(html_root_url = "https://docs.rs/umber/0.1.0")]
#![deny(missing_docs)]

pub mod adjust;
pub mod bound;
pub mod color;
pub mod colors;
pub mod contrast;
pub mod coord;
pub mod csscolor;
pub mod error;
pub mod filter;
pub mod material_colors;
pub mod prelude;

//! This module contains the color types other than the base [`RGBColor`]. For now that is only
//! HSL, the space most theme adjustments are expressed in. Each type is re-exported here.
//!
//! [`RGBColor`]: ../color/struct.RGBColor.html
pub mod hslcolor;

pub use self::hslcolor::HSLColor;

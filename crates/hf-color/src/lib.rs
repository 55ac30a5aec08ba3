// SPDX-License-Identifier: MIT
//
// hf-color — color parsing and conversion for hue-forge.
//
// Parses user-supplied color strings (hex, `rgb()`, `hsl()`) into a single
// immutable `Color` value and exposes the views the palette generator and
// the shell need: HSL triples, hex strings, Lab brighten/darken, sRGB
// interpolation and WCAG relative luminance. The `ansi` module encodes
// colors as truecolor SGR sequences for swatch rendering.
//
// Conversions are delegated to the `palette` crate; nothing in this crate
// hand-rolls gamma curves or HSL sector math.

pub mod ansi;
pub mod color;
pub mod error;

pub use color::{Color, Hsl, gradient, normalize_hue};
pub use error::ColorError;

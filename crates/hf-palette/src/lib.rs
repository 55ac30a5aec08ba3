//! # hf-palette — color-theory palette engine
//!
//! Derives six related palettes from a single base color. One input color
//! produces the whole set; there is no other state, so the same color always
//! yields the same palettes.
//!
//! # Architecture
//!
//! ```text
//! color string
//!     │
//!     ▼
//! hf_color::Color::parse   (hex / rgb() / hsl())
//!     │
//!     ▼
//! harmony.rs:   HSL rules (triadic, analogous, tetradic, pastel, complement)
//!     │
//!     ▼
//! generator.rs: gradients + rules → PaletteSet (six palettes, fixed order)
//!     │
//!     ▼
//! contrast.rs:  black/white label per swatch (used by renderers)
//! ```
//!
//! # Palettes
//!
//! | Kind          | Colors | Rule                                              |
//! |---------------|--------|---------------------------------------------------|
//! | Monochromatic | 5      | gradient brighten(1) → darken(2)                  |
//! | Complementary | 5      | gradient hue+180° → base                          |
//! | Triadic       | 3      | hue +0/120/240°, lightness 0.6/0.4/0.6            |
//! | Analogous     | 5      | hue −30/0/+30/+60/+90°                            |
//! | Tetradic      | 4      | hue +0/90/180/270°                                |
//! | Pastel        | 5      | base hue, saturation 0.4, lightness 0.85 → 0.65   |

// Mathematical code uses small integer-to-float casts (loop indices).
#![allow(clippy::cast_precision_loss)]

pub mod contrast;
pub mod generator;
pub mod harmony;
pub mod options;

pub use generator::{Generator, Palette, PaletteSet, generate, generate_from};
pub use harmony::PaletteKind;
pub use options::{ConfigError, GeneratorOptions};

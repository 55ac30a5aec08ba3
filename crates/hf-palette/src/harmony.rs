//! Color-harmony rules — pure HSL math.
//!
//! Each discrete rule takes the base color's HSL triple and produces an
//! ordered list of HSL triples. Hue offsets always wrap into [0, 360) and
//! saturation/lightness always pass through [`Hsl::new`], so no rule can
//! emit an invalid triple even with out-of-range parameters.
//!
//! The two gradient palettes (monochromatic, complementary) interpolate
//! between two anchor colors instead; their anchors are built here too.

use hf_color::Hsl;
use serde::Serialize;

/// Hue offsets of the triadic palette, in output order.
pub const TRIADIC_OFFSETS: [f32; 3] = [0.0, 120.0, 240.0];

/// Hue offsets of the analogous palette, in output order.
pub const ANALOGOUS_OFFSETS: [f32; 5] = [-30.0, 0.0, 30.0, 60.0, 90.0];

/// Hue offsets of the tetradic palette, in output order.
pub const TETRADIC_OFFSETS: [f32; 4] = [0.0, 90.0, 180.0, 270.0];

/// Lightness the triadic palette alternates around.
pub const TRIADIC_CENTER: f32 = 0.5;

/// Number of pastel swatches.
pub const PASTEL_COUNT: usize = 5;

/// The palettes produced for every base color, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaletteKind {
    /// Gradient from a brightened to a darkened base (5 colors).
    Monochromatic,
    /// Gradient from the 180° complement back to the base (5 colors).
    Complementary,
    /// 120° spacing with alternating lightness (3 colors).
    Triadic,
    /// Neighbors from −30° to +90° (5 colors).
    Analogous,
    /// 90° spacing (4 colors).
    Tetradic,
    /// Base hue, low saturation, light-to-medium ramp (5 colors).
    Pastel,
}

impl PaletteKind {
    /// Machine-readable name of this palette.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Monochromatic => "monochromatic",
            Self::Complementary => "complementary",
            Self::Triadic => "triadic",
            Self::Analogous => "analogous",
            Self::Tetradic => "tetradic",
            Self::Pastel => "pastel",
        }
    }

    /// Display title of this palette.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Monochromatic => "Monochromatic",
            Self::Complementary => "Complementary",
            Self::Triadic => "Triadic",
            Self::Analogous => "Analogous",
            Self::Tetradic => "Tetradic",
            Self::Pastel => "Pastel",
        }
    }

    /// Parse a palette kind from its name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        Self::all().iter().find(|k| k.name() == lower).copied()
    }

    /// All palette kinds, in output order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Monochromatic,
            Self::Complementary,
            Self::Triadic,
            Self::Analogous,
            Self::Tetradic,
            Self::Pastel,
        ]
    }

    /// Position of this kind in [`PaletteKind::all`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Rotate `base` by each offset, keeping saturation and lightness.
fn rotations(base: Hsl, offsets: &[f32]) -> Vec<Hsl> {
    offsets.iter().map(|&offset| base.rotate(offset)).collect()
}

/// Triadic: offsets {0, 120, 240}, lightness `0.5 + nudge` on even
/// indices and `0.5 - nudge` on odd ones.
#[must_use]
pub fn triadic(base: Hsl, nudge: f32) -> Vec<Hsl> {
    TRIADIC_OFFSETS
        .iter()
        .enumerate()
        .map(|(i, &offset)| {
            let lightness = if i % 2 == 0 {
                TRIADIC_CENTER + nudge
            } else {
                TRIADIC_CENTER - nudge
            };
            base.rotate(offset).with_lightness(lightness)
        })
        .collect()
}

/// Analogous: offsets {−30, 0, +30, +60, +90}.
#[must_use]
pub fn analogous(base: Hsl) -> Vec<Hsl> {
    rotations(base, &ANALOGOUS_OFFSETS)
}

/// Tetradic: offsets {0, 90, 180, 270}.
#[must_use]
pub fn tetradic(base: Hsl) -> Vec<Hsl> {
    rotations(base, &TETRADIC_OFFSETS)
}

/// Pastel: base hue at fixed `saturation`, lightness stepping down from
/// `start` by `step`.
#[must_use]
pub fn pastel(base: Hsl, saturation: f32, start: f32, step: f32) -> Vec<Hsl> {
    (0..PASTEL_COUNT)
        .map(|i| Hsl::new(base.hue, saturation, (-step).mul_add(i as f32, start)))
        .collect()
}

/// Complement anchor: hue rotated 180°, same saturation and lightness.
#[inline]
#[must_use]
pub fn complement(base: Hsl) -> Hsl {
    base.rotate(180.0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Palette generation — the bridge from one base color to six palettes.
//!
//! Takes a parsed base [`Color`], reads its HSL triple, and runs every rule
//! in [`harmony`] plus the two gradient palettes. The result is a
//! [`PaletteSet`]: plain, immutable data that callers render, serialize or
//! compare. Generation is a pure function of the base color and the
//! [`GeneratorOptions`]; calling it twice yields identical output.
//!
//! [`harmony`]: crate::harmony

use hf_color::{Color, ColorError, Hsl, gradient};
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::harmony::{self, PaletteKind};
use crate::options::GeneratorOptions;

// ---------------------------------------------------------------------------
// Palette / PaletteSet
// ---------------------------------------------------------------------------

/// One ordered sequence of colors produced by a single rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Palette {
    kind: PaletteKind,
    #[serde(serialize_with = "serialize_hex_list")]
    colors: Vec<Color>,
}

impl Palette {
    /// Which rule produced this palette.
    #[must_use]
    pub const fn kind(&self) -> PaletteKind {
        self.kind
    }

    /// The colors, in designed order.
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// The colors as canonical `#rrggbb` strings.
    #[must_use]
    pub fn hex(&self) -> Vec<String> {
        self.colors.iter().map(|c| c.to_hex()).collect()
    }

    /// Color at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// All palettes derived from one base color, in [`PaletteKind::all`] order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaletteSet {
    #[serde(serialize_with = "serialize_hex")]
    base: Color,
    palettes: Vec<Palette>,
}

impl PaletteSet {
    /// The base color the set was generated from.
    #[must_use]
    pub const fn base(&self) -> Color {
        self.base
    }

    /// All palettes, in fixed order.
    #[must_use]
    pub fn palettes(&self) -> &[Palette] {
        &self.palettes
    }

    /// The palette produced by `kind`.
    #[must_use]
    pub fn get(&self, kind: PaletteKind) -> &Palette {
        &self.palettes[kind.index()]
    }

    /// Iterate over the palettes in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Palette> {
        self.palettes.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }

    /// Plain structured form: one list of hex strings per palette.
    #[must_use]
    pub fn to_lists(&self) -> Vec<Vec<String>> {
        self.palettes.iter().map(Palette::hex).collect()
    }

    /// Pretty-printed JSON of the whole set.
    ///
    /// # Errors
    ///
    /// Propagates serializer failures (none are expected for this type).
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl<'a> IntoIterator for &'a PaletteSet {
    type Item = &'a Palette;
    type IntoIter = std::slice::Iter<'a, Palette>;

    fn into_iter(self) -> Self::IntoIter {
        self.palettes.iter()
    }
}

fn serialize_hex<S: Serializer>(color: &Color, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&color.to_hex())
}

fn serialize_hex_list<S: Serializer>(colors: &[Color], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(colors.iter().map(|c| c.to_hex()))
}

// ---------------------------------------------------------------------------
// Generator
// ---------------------------------------------------------------------------

/// Palette generator with a fixed set of options.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Generator {
    options: GeneratorOptions,
}

impl Generator {
    #[must_use]
    pub const fn new(options: GeneratorOptions) -> Self {
        Self { options }
    }

    /// Parse `input` and generate all palettes from it.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidColorInput`] if `input` is not a color.
    /// Nothing is generated in that case.
    pub fn generate(&self, input: &str) -> Result<PaletteSet, ColorError> {
        let base = Color::parse(input)?;
        Ok(self.generate_from(base))
    }

    /// Generate all palettes from an already parsed base color.
    #[must_use]
    pub fn generate_from(&self, base: Color) -> PaletteSet {
        let palettes = PaletteKind::all()
            .iter()
            .map(|&kind| self.palette(kind, base))
            .collect();
        debug!(base = %base, "generated palette set");
        PaletteSet { base, palettes }
    }

    /// Generate a single palette.
    #[must_use]
    pub fn palette(&self, kind: PaletteKind, base: Color) -> Palette {
        let opts = &self.options;
        let hsl = base.hsl();
        let colors = match kind {
            PaletteKind::Monochromatic => gradient(
                base.brighten(opts.brighten),
                base.darken(opts.darken),
                opts.steps(),
            ),
            PaletteKind::Complementary => gradient(
                Color::from_hsl(harmony::complement(hsl)),
                base,
                opts.steps(),
            ),
            PaletteKind::Triadic => to_colors(&harmony::triadic(hsl, opts.triadic_nudge)),
            PaletteKind::Analogous => to_colors(&harmony::analogous(hsl)),
            PaletteKind::Tetradic => to_colors(&harmony::tetradic(hsl)),
            PaletteKind::Pastel => to_colors(&harmony::pastel(
                hsl,
                opts.pastel_saturation,
                opts.pastel_lightness,
                opts.pastel_step,
            )),
        };
        Palette { kind, colors }
    }
}

fn to_colors(hsls: &[Hsl]) -> Vec<Color> {
    hsls.iter().copied().map(Color::from_hsl).collect()
}

/// Generate all palettes from a color string with default options.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorInput`] if `input` is not a color.
pub fn generate(input: &str) -> Result<PaletteSet, ColorError> {
    Generator::default().generate(input)
}

/// Generate all palettes from a parsed color with default options.
#[must_use]
pub fn generate_from(base: Color) -> PaletteSet {
    Generator::default().generate_from(base)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

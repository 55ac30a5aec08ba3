// SPDX-License-Identifier: MIT
//
// hf-color color system — sRGB values with HSL and Lab views.
//
// Single-character variable names (r, g, b, h, s, l, t) are the standard
// mathematical convention in color science.
#![allow(clippy::many_single_char_names)]
//
// A `Color` is stored as gamma-encoded sRGB with channels in 0.0–1.0. Every
// other representation is a view computed on demand:
//
//   hex string ↔ sRGB ↔ HSL       (palette generation, hue rotation)
//                sRGB ↔ CIE Lab   (brighten / darken)
//                sRGB → linear    (relative luminance)
//
// The channel math (HSL ↔ RGB, Lab, sRGB transfer function, 8-bit rounding)
// is delegated to the `palette` crate. This module owns parsing, clamping,
// hue wrapping and the handful of operations the palette generator needs.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use palette::{FromColor, Lab, LinSrgb, Srgb};
use regex::Regex;

use crate::error::ColorError;

/// Lab lightness units moved per 1.0 of `brighten`/`darken` amount.
pub const LAB_STEP: f32 = 18.0;

// ─── Hsl ─────────────────────────────────────────────────────────────────────

/// A normalized hue/saturation/lightness triple.
///
/// - `hue`: degrees in [0, 360)
/// - `saturation`: 0.0 to 1.0
/// - `lightness`: 0.0 to 1.0
///
/// Construct through [`Hsl::new`], which wraps the hue and clamps the other
/// two channels, so a value of this type is always a valid HSL color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

impl Hsl {
    /// Create a normalized HSL triple.
    ///
    /// Non-finite hues become 0°, NaN saturation/lightness become 0.0.
    #[must_use]
    pub fn new(hue: f32, saturation: f32, lightness: f32) -> Self {
        Self {
            hue: normalize_hue(hue),
            saturation: clamp_unit(saturation),
            lightness: clamp_unit(lightness),
        }
    }

    /// Rotate the hue by `degrees` (wraps around 360°, never negative).
    #[inline]
    #[must_use]
    pub fn rotate(self, degrees: f32) -> Self {
        Self::new(self.hue + degrees, self.saturation, self.lightness)
    }

    /// Replace the lightness (clamped to 0.0–1.0).
    #[inline]
    #[must_use]
    pub fn with_lightness(self, lightness: f32) -> Self {
        Self::new(self.hue, self.saturation, lightness)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({:.1}, {:.1}%, {:.1}%)",
            self.hue,
            self.saturation * 100.0,
            self.lightness * 100.0
        )
    }
}

// ─── Color ───────────────────────────────────────────────────────────────────

/// An opaque color value, stored as gamma-encoded sRGB.
///
/// Two colors are equal when they render to the same `#rrggbb` hex string,
/// which is the canonical form used for display and comparison.
///
/// # Examples
///
/// ```
/// use hf_color::Color;
///
/// let base = Color::parse("#6CE68D").unwrap();
/// assert_eq!(base.to_hex(), "#6ce68d");
///
/// let complement = Color::from_hsl(base.hsl().rotate(180.0));
/// let darker = base.darken(1.0);
/// let midway = base.mix(&complement, 0.5);
/// # let _ = (darker, midway);
/// ```
#[derive(Clone, Copy)]
pub struct Color {
    /// Red channel, 0.0 to 1.0.
    pub r: f32,
    /// Green channel, 0.0 to 1.0.
    pub g: f32,
    /// Blue channel, 0.0 to 1.0.
    pub b: f32,
}

impl Color {
    pub const BLACK: Self = Self { r: 0.0, g: 0.0, b: 0.0 };
    pub const WHITE: Self = Self { r: 1.0, g: 1.0, b: 1.0 };

    // ─── Constructors ────────────────────────────────────────────────────

    /// Create a color from sRGB values (clamped to 0.0–1.0).
    #[must_use]
    pub fn srgb(r: f32, g: f32, b: f32) -> Self {
        Self {
            r: clamp_unit(r),
            g: clamp_unit(g),
            b: clamp_unit(b),
        }
    }

    /// Create a color from 8-bit sRGB values (0 to 255).
    #[must_use]
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        let rgb: Srgb<f32> = Srgb::new(r, g, b).into_format();
        Self::from_srgb(rgb)
    }

    /// Create a color from a normalized HSL triple.
    #[must_use]
    pub fn from_hsl(hsl: Hsl) -> Self {
        let hsl = palette::Hsl::new(hsl.hue, hsl.saturation, hsl.lightness);
        let rgb: Srgb<f32> = Srgb::from_color(hsl);
        Self::from_srgb(rgb)
    }

    /// Create a color from a hex string.
    ///
    /// Supports `#RGB` and `#RRGGBB`, with or without the `#`.
    /// Returns `None` if the string is not a valid hex color.
    #[must_use]
    pub fn hex(s: &str) -> Option<Self> {
        parse_hex(s)
    }

    /// Parse any supported color notation.
    ///
    /// Accepts hex (`#RGB`, `#RRGGBB`), `rgb(r, g, b)` with 0–255 channels
    /// and `hsl(h, s%, l%)`. Surrounding whitespace is ignored and matching
    /// is case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidColorInput`] when the string matches none
    /// of the supported notations or a channel is out of range.
    pub fn parse(s: &str) -> Result<Self, ColorError> {
        let trimmed = s.trim();
        parse_hex(trimmed)
            .or_else(|| parse_rgb_fn(trimmed))
            .or_else(|| parse_hsl_fn(trimmed))
            .ok_or_else(|| ColorError::InvalidColorInput {
                input: s.to_string(),
            })
    }

    // ─── Views ───────────────────────────────────────────────────────────

    /// The HSL view of this color.
    ///
    /// Achromatic colors (grays) report a hue of 0°.
    #[must_use]
    pub fn hsl(self) -> Hsl {
        let hsl: palette::Hsl = palette::Hsl::from_color(self.to_srgb());
        Hsl::new(
            hsl.hue.into_positive_degrees(),
            hsl.saturation,
            hsl.lightness,
        )
    }

    /// Convert to 8-bit sRGB with correct rounding.
    #[must_use]
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        let rgb: Srgb<u8> = self.to_srgb().into_format();
        (rgb.red, rgb.green, rgb.blue)
    }

    /// Convert to the canonical lowercase `#rrggbb` string.
    #[must_use]
    pub fn to_hex(self) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Relative luminance per WCAG 2.1, in [0.0, 1.0].
    ///
    ///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
    #[must_use]
    pub fn relative_luminance(self) -> f32 {
        let lin: LinSrgb<f32> = self.to_srgb().into_linear();
        0.2126f32.mul_add(lin.red, 0.7152f32.mul_add(lin.green, 0.0722 * lin.blue))
    }

    // ─── Operations ──────────────────────────────────────────────────────

    /// Raise CIE Lab lightness by `amount * LAB_STEP` (clamped to 0–100).
    ///
    /// Lightness moves in a perceptual space, so the hue family is kept
    /// while chroma follows implicitly. Results are clamped back into sRGB.
    #[must_use]
    pub fn brighten(self, amount: f32) -> Self {
        let mut lab: Lab = Lab::from_color(self.to_srgb());
        lab.l = LAB_STEP.mul_add(amount, lab.l).clamp(0.0, 100.0);
        let rgb: Srgb<f32> = Srgb::from_color(lab);
        Self::from_srgb(rgb)
    }

    /// Lower CIE Lab lightness by `amount * LAB_STEP`.
    #[inline]
    #[must_use]
    pub fn darken(self, amount: f32) -> Self {
        self.brighten(-amount)
    }

    /// Linear interpolation in sRGB space.
    ///
    /// `t` = 0.0 returns `self`, `t` = 1.0 returns `other`.
    #[must_use]
    pub fn mix(self, other: &Self, t: f32) -> Self {
        let t = clamp_unit(t);
        Self::srgb(
            (other.r - self.r).mul_add(t, self.r),
            (other.g - self.g).mul_add(t, self.g),
            (other.b - self.b).mul_add(t, self.b),
        )
    }

    // ─── palette interop ─────────────────────────────────────────────────

    #[inline]
    fn to_srgb(self) -> Srgb<f32> {
        Srgb::new(self.r, self.g, self.b)
    }

    #[inline]
    fn from_srgb(rgb: Srgb<f32>) -> Self {
        Self::srgb(rgb.red, rgb.green, rgb.blue)
    }
}

/// Sample `steps` evenly spaced colors from `from` to `to`, both inclusive.
///
/// Zero steps yields an empty vector; one step yields just `from`.
#[must_use]
pub fn gradient(from: Color, to: Color, steps: usize) -> Vec<Color> {
    match steps {
        0 => Vec::new(),
        1 => vec![from],
        n => {
            let last = (n - 1) as f32;
            (0..n).map(|i| from.mix(&to, i as f32 / last)).collect()
        }
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({})", self.to_hex())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.to_rgb8() == other.to_rgb8()
    }
}

impl Eq for Color {}

impl Default for Color {
    /// Default is black.
    fn default() -> Self {
        Self::BLACK
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ─── Math Helpers ────────────────────────────────────────────────────────────

/// Normalize a hue angle to the range [0, 360).
///
/// Non-finite input maps to 0°.
#[inline]
#[must_use]
pub fn normalize_hue(h: f32) -> f32 {
    if !h.is_finite() {
        return 0.0;
    }
    let h = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if h >= 360.0 { 0.0 } else { h }
}

/// Clamp to [0, 1], mapping NaN to 0.
#[inline]
fn clamp_unit(v: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

// ─── Parsing ─────────────────────────────────────────────────────────────────

/// Parse a hex color string into a Color.
fn parse_hex(s: &str) -> Option<Color> {
    let s = s.strip_prefix('#').unwrap_or(s);
    let bytes = s.as_bytes();

    match bytes.len() {
        // #RGB
        3 => {
            let r = parse_hex_digit(bytes[0])?;
            let g = parse_hex_digit(bytes[1])?;
            let b = parse_hex_digit(bytes[2])?;
            Some(Color::rgb8(r << 4 | r, g << 4 | g, b << 4 | b))
        }
        // #RRGGBB
        6 => {
            let r = parse_hex_byte(&bytes[0..2])?;
            let g = parse_hex_byte(&bytes[2..4])?;
            let b = parse_hex_byte(&bytes[4..6])?;
            Some(Color::rgb8(r, g, b))
        }
        _ => None,
    }
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

/// Parse `rgb(r, g, b)` with 0–255 integer channels.
fn parse_rgb_fn(s: &str) -> Option<Color> {
    static RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"(?i)^rgb\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*\)$")
            .expect("valid regex")
    });

    let caps = RGB_RE.captures(s)?;
    let r = caps[1].parse::<u8>().ok()?;
    let g = caps[2].parse::<u8>().ok()?;
    let b = caps[3].parse::<u8>().ok()?;
    Some(Color::rgb8(r, g, b))
}

/// Parse `hsl(h, s%, l%)`. The hue may carry a `deg` suffix and wraps;
/// saturation and lightness must lie within 0–100%.
fn parse_hsl_fn(s: &str) -> Option<Color> {
    static HSL_RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(
            r"(?i)^hsl\(\s*(-?\d+(?:\.\d+)?)(?:deg)?\s*,\s*(\d+(?:\.\d+)?)%\s*,\s*(\d+(?:\.\d+)?)%\s*\)$",
        )
        .expect("valid regex")
    });

    let caps = HSL_RE.captures(s)?;
    let h = caps[1].parse::<f32>().ok()?;
    let sat = caps[2].parse::<f32>().ok()?;
    let light = caps[3].parse::<f32>().ok()?;
    if sat > 100.0 || light > 100.0 {
        return None;
    }
    Some(Color::from_hsl(Hsl::new(h, sat / 100.0, light / 100.0)))
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // Helper: check that two f32 values are approximately equal.
    fn approx_eq(a: f32, b: f32, epsilon: f32) -> bool {
        (a - b).abs() < epsilon
    }

    // ── Hue normalization ────────────────────────────────────────────────

    #[test]
    fn hue_wraps_positive_overflow() {
        assert_eq!(normalize_hue(350.0 + 270.0), 260.0);
        assert_eq!(normalize_hue(720.0), 0.0);
    }

    #[test]
    fn hue_wraps_negative() {
        assert_eq!(normalize_hue(10.0 - 30.0), 340.0);
        assert_eq!(normalize_hue(-720.0), 0.0);
    }

    #[test]
    fn hue_tiny_negative_stays_below_360() {
        let h = normalize_hue(-1e-7);
        assert!((0.0..360.0).contains(&h), "Hue out of range: {h}");
    }

    #[test]
    fn hue_non_finite_is_zero() {
        assert_eq!(normalize_hue(f32::NAN), 0.0);
        assert_eq!(normalize_hue(f32::INFINITY), 0.0);
    }

    // ── Hsl ──────────────────────────────────────────────────────────────

    #[test]
    fn hsl_new_clamps() {
        let hsl = Hsl::new(-90.0, 1.5, -0.2);
        assert_eq!(hsl.hue, 270.0);
        assert_eq!(hsl.saturation, 1.0);
        assert_eq!(hsl.lightness, 0.0);
    }

    #[test]
    fn hsl_nan_channels_become_zero() {
        let hsl = Hsl::new(0.0, f32::NAN, f32::NAN);
        assert_eq!(hsl.saturation, 0.0);
        assert_eq!(hsl.lightness, 0.0);
    }

    #[test]
    fn hsl_rotate_wraps() {
        let hsl = Hsl::new(350.0, 0.5, 0.5).rotate(270.0);
        assert_eq!(hsl.hue, 260.0);
        let hsl = Hsl::new(10.0, 0.5, 0.5).rotate(-30.0);
        assert_eq!(hsl.hue, 340.0);
    }

    #[test]
    fn hsl_display() {
        let hsl = Hsl::new(120.0, 0.5, 0.25);
        assert_eq!(hsl.to_string(), "hsl(120.0, 50.0%, 25.0%)");
    }

    // ── HSL conversion ───────────────────────────────────────────────────

    #[test]
    fn hsl_primaries() {
        assert_eq!(Color::from_hsl(Hsl::new(0.0, 1.0, 0.5)).to_hex(), "#ff0000");
        assert_eq!(Color::from_hsl(Hsl::new(120.0, 1.0, 0.5)).to_hex(), "#00ff00");
        assert_eq!(Color::from_hsl(Hsl::new(240.0, 1.0, 0.5)).to_hex(), "#0000ff");
    }

    #[test]
    fn hsl_view_of_known_color() {
        let hsl = Color::hex("#6ce68d").unwrap().hsl();
        assert!(approx_eq(hsl.hue, 136.23, 0.05), "hue: {}", hsl.hue);
        assert!(approx_eq(hsl.saturation, 0.7093, 0.001), "sat: {}", hsl.saturation);
        assert!(approx_eq(hsl.lightness, 0.6627, 0.001), "light: {}", hsl.lightness);
    }

    #[test]
    fn hsl_view_of_gray_has_zero_saturation_and_hue() {
        let hsl = Color::hex("#808080").unwrap().hsl();
        assert!(approx_eq(hsl.saturation, 0.0, 1e-6));
        assert_eq!(hsl.hue, 0.0);
    }

    #[test]
    fn hsl_roundtrip_through_hex() {
        for hex in ["#845ec2", "#6ce68d", "#123456", "#fedcba"] {
            let color = Color::hex(hex).unwrap();
            assert_eq!(Color::from_hsl(color.hsl()).to_hex(), hex);
        }
    }

    // ── Hex Parsing ──────────────────────────────────────────────────────

    #[test]
    fn hex_parsing_rrggbb() {
        let color = Color::hex("#ff8000").unwrap();
        assert_eq!(color.to_rgb8(), (255, 128, 0));
    }

    #[test]
    fn hex_parsing_short() {
        let color = Color::hex("#f80").unwrap();
        assert_eq!(color.to_rgb8(), (255, 136, 0));
    }

    #[test]
    fn hex_parsing_no_hash_and_uppercase() {
        let color = Color::hex("6CE68D").unwrap();
        assert_eq!(color.to_hex(), "#6ce68d");
    }

    #[test]
    fn hex_parsing_invalid() {
        assert!(Color::hex("xyz").is_none());
        assert!(Color::hex("#12345").is_none());
        assert!(Color::hex("#gg0000").is_none());
        assert!(Color::hex("").is_none());
    }

    // ── Color::parse ─────────────────────────────────────────────────────

    #[test]
    fn parse_trims_whitespace() {
        assert_eq!(Color::parse("  #00ff00 ").unwrap().to_hex(), "#00ff00");
    }

    #[test]
    fn parse_rgb_function() {
        let color = Color::parse("rgb(108, 230, 141)").unwrap();
        assert_eq!(color.to_hex(), "#6ce68d");
        assert_eq!(Color::parse("RGB(0,0,0)").unwrap(), Color::BLACK);
    }

    #[test]
    fn parse_rgb_out_of_range() {
        assert!(Color::parse("rgb(256, 0, 0)").is_err());
    }

    #[test]
    fn parse_hsl_function() {
        assert_eq!(Color::parse("hsl(0, 100%, 50%)").unwrap().to_hex(), "#ff0000");
        assert_eq!(Color::parse("hsl(480deg, 100%, 50%)").unwrap().to_hex(), "#00ff00");
    }

    #[test]
    fn parse_hsl_out_of_range() {
        assert!(Color::parse("hsl(0, 120%, 50%)").is_err());
    }

    #[test]
    fn parse_invalid_reports_input() {
        let err = Color::parse("not-a-color").unwrap_err();
        assert_eq!(
            err,
            ColorError::InvalidColorInput {
                input: "not-a-color".into()
            }
        );
    }

    #[test]
    fn from_str_matches_parse() {
        let color: Color = "#845EC2".parse().unwrap();
        assert_eq!(color.to_hex(), "#845ec2");
    }

    // ── Luminance ────────────────────────────────────────────────────────

    #[test]
    fn luminance_extremes() {
        assert!(approx_eq(Color::BLACK.relative_luminance(), 0.0, 0.001));
        assert!(approx_eq(Color::WHITE.relative_luminance(), 1.0, 0.001));
    }

    #[test]
    fn luminance_pure_green() {
        let green = Color::srgb(0.0, 1.0, 0.0);
        assert!(approx_eq(green.relative_luminance(), 0.7152, 0.01));
    }

    #[test]
    fn luminance_mid_gray() {
        let lum = Color::srgb(0.5, 0.5, 0.5).relative_luminance();
        // sRGB 0.5 linearizes to ~0.214
        assert!(lum > 0.15 && lum < 0.30, "Mid-gray luminance: {lum}");
    }

    // ── Operations ───────────────────────────────────────────────────────

    #[test]
    fn brighten_raises_luminance() {
        let base = Color::hex("#845ec2").unwrap();
        assert!(base.brighten(1.0).relative_luminance() > base.relative_luminance());
    }

    #[test]
    fn darken_lowers_luminance() {
        let base = Color::hex("#845ec2").unwrap();
        assert!(base.darken(2.0).relative_luminance() < base.relative_luminance());
    }

    #[test]
    fn darken_clamps_to_black() {
        assert_eq!(Color::hex("#333333").unwrap().darken(10.0), Color::BLACK);
    }

    #[test]
    fn brighten_clamps_to_white() {
        assert_eq!(Color::hex("#cccccc").unwrap().brighten(10.0), Color::WHITE);
    }

    #[test]
    fn mix_endpoints() {
        let a = Color::hex("#ff0000").unwrap();
        let b = Color::hex("#0000ff").unwrap();
        assert_eq!(a.mix(&b, 0.0), a);
        assert_eq!(a.mix(&b, 1.0), b);
        assert_eq!(a.mix(&b, 0.5).to_hex(), "#800080");
    }

    #[test]
    fn mix_clamps_t() {
        let a = Color::BLACK;
        let b = Color::WHITE;
        assert_eq!(a.mix(&b, 2.0), b);
        assert_eq!(a.mix(&b, -1.0), a);
    }

    #[test]
    fn gradient_sizes() {
        let a = Color::BLACK;
        let b = Color::WHITE;
        assert!(gradient(a, b, 0).is_empty());
        assert_eq!(gradient(a, b, 1), vec![a]);
        let ramp = gradient(a, b, 5);
        assert_eq!(ramp.len(), 5);
        assert_eq!(ramp[0], a);
        assert_eq!(ramp[4], b);
        assert_eq!(ramp[2].to_hex(), "#808080");
    }

    #[test]
    fn color_display_hex() {
        assert_eq!(Color::WHITE.to_string(), "#ffffff");
        assert_eq!(format!("{:?}", Color::BLACK), "Color(#000000)");
    }
}

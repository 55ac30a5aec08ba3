//! Label legibility for rendered swatches.
//!
//! A swatch shows its own hex value, so the label needs a foreground that
//! reads against the swatch. The decision is a single threshold on WCAG
//! relative luminance: brighter than 0.5 gets black text, anything else
//! gets white. The threshold and polarity are fixed; renderers that compare
//! screenshots depend on them.

use hf_color::Color;

/// Luminance above which a swatch gets black text.
pub const LEGIBILITY_THRESHOLD: f32 = 0.5;

/// Pick black or white text for a swatch of color `background`.
#[must_use]
pub fn text_color_for(background: Color) -> Color {
    if background.relative_luminance() > LEGIBILITY_THRESHOLD {
        Color::BLACK
    } else {
        Color::WHITE
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // ── text_color_for ──────────────────────────────────────────────

    #[test]
    fn white_swatch_gets_black_text() {
        let bg = Color::parse("#FFFFFF").unwrap();
        assert_eq!(text_color_for(bg), Color::BLACK);
    }

    #[test]
    fn black_swatch_gets_white_text() {
        let bg = Color::parse("#000000").unwrap();
        assert_eq!(text_color_for(bg), Color::WHITE);
    }

    #[test]
    fn mid_gray_gets_white_text() {
        // #808080 linearizes to ~0.216, well under the threshold.
        let bg = Color::parse("#808080").unwrap();
        assert_eq!(text_color_for(bg), Color::WHITE);
    }

    #[test]
    fn pure_green_gets_black_text() {
        // Green alone contributes 0.7152.
        let bg = Color::parse("#00ff00").unwrap();
        assert_eq!(text_color_for(bg), Color::BLACK);
    }

    #[test]
    fn pure_red_gets_white_text() {
        let bg = Color::parse("#ff0000").unwrap();
        assert_eq!(text_color_for(bg), Color::WHITE);
    }
}

// SPDX-License-Identifier: MIT
//
// ANSI escape sequence generation for swatch rendering.
//
// Pure functions that write SGR sequences to any `impl Write`. No state and
// no decisions about when to emit; callers decide whether color output is
// wanted at all. Colors are always sent as 24-bit `TrueColor` because a
// swatch that is quantized to the 256-color cube no longer shows the value
// printed on it.
//
// All functions return `io::Result` propagated from the underlying writer.
use std::io::{self, Write};

use crate::color::Color;

bitflags::bitflags! {
    /// Text attributes stored as a compact bitfield.
    ///
    /// These map directly to SGR parameters. Combine with bitwise OR:
    ///
    /// ```
    /// use hf_color::ansi::Attr;
    ///
    /// let style = Attr::BOLD | Attr::UNDERLINE;
    /// assert!(style.contains(Attr::BOLD));
    /// assert!(!Attr::BOLD.contains(Attr::UNDERLINE));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct Attr: u8 {
        /// SGR 1 — increased intensity.
        const BOLD      = 1 << 0;
        /// SGR 4 — single underline.
        const UNDERLINE = 1 << 1;
    }
}

// ─── Colors ──────────────────────────────────────────────────────────────────

/// Set the foreground (text) color as 24-bit RGB.
pub fn fg(w: &mut impl Write, color: Color) -> io::Result<()> {
    let (r, g, b) = color.to_rgb8();
    write!(w, "\x1b[38;2;{r};{g};{b}m")
}

/// Set the background color as 24-bit RGB.
pub fn bg(w: &mut impl Write, color: Color) -> io::Result<()> {
    let (r, g, b) = color.to_rgb8();
    write!(w, "\x1b[48;2;{r};{g};{b}m")
}

/// Reset all SGR attributes to terminal defaults (SGR 0).
#[inline]
pub fn reset(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[0m")
}

// ─── Text Attributes ─────────────────────────────────────────────────────────

/// Emit SGR codes for text attributes as a single CSI sequence.
///
/// Multiple attributes are semicolon-separated: `\x1b[1;4m` for
/// bold + underline. Does nothing if no attributes are set.
pub fn attrs(w: &mut impl Write, attr: Attr) -> io::Result<()> {
    if attr.is_empty() {
        return Ok(());
    }

    let codes: Vec<&str> = [
        (Attr::BOLD, "1"),
        (Attr::UNDERLINE, "4"),
    ]
    .into_iter()
    .filter(|(flag, _)| attr.contains(*flag))
    .map(|(_, code)| code)
    .collect();

    write!(w, "\x1b[{}m", codes.join(";"))
}

/// Write `text` on a `background` swatch with `foreground` text, then reset.
pub fn paint(
    w: &mut impl Write,
    text: &str,
    foreground: Color,
    background: Color,
    attr: Attr,
) -> io::Result<()> {
    bg(w, background)?;
    fg(w, foreground)?;
    attrs(w, attr)?;
    w.write_all(text.as_bytes())?;
    reset(w)
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper: run an ANSI function and return its output as a string.
    fn emit<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn fg_truecolor() {
        let c = Color::rgb8(255, 128, 0);
        assert_eq!(emit(|w| fg(w, c)), "\x1b[38;2;255;128;0m");
    }

    #[test]
    fn bg_truecolor() {
        let c = Color::rgb8(0, 64, 255);
        assert_eq!(emit(|w| bg(w, c)), "\x1b[48;2;0;64;255m");
    }

    #[test]
    fn reset_sequence() {
        assert_eq!(emit(|w| reset(w)), "\x1b[0m");
    }

    #[test]
    fn attrs_empty_emits_nothing() {
        assert_eq!(emit(|w| attrs(w, Attr::empty())), "");
    }

    #[test]
    fn attrs_single() {
        assert_eq!(emit(|w| attrs(w, Attr::BOLD)), "\x1b[1m");
    }

    #[test]
    fn attrs_combined_in_sgr_order() {
        assert_eq!(emit(|w| attrs(w, Attr::UNDERLINE | Attr::BOLD)), "\x1b[1;4m");
    }

    #[test]
    fn paint_wraps_text() {
        let out = emit(|w| paint(w, " #ffffff ", Color::BLACK, Color::WHITE, Attr::BOLD));
        assert_eq!(
            out,
            "\x1b[48;2;255;255;255m\x1b[38;2;0;0;0m\x1b[1m #ffffff \x1b[0m"
        );
    }
}

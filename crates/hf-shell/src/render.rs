//! Palette rendering for the terminal.
//!
//! One line per palette: position, padded title, then one swatch per color.
//! A swatch is its own hex value printed on its own color, with black or
//! white text picked by [`text_color_for`]. With color disabled the same
//! layout is printed as plain text, so output piped to a file lines up
//! identically.
//!
//! The swatch of the last successful copy is bracketed (and bold/underlined
//! in color mode) until its notice expires.

use std::io::{self, Write};

use hf_color::Color;
use hf_color::ansi::{self, Attr};
use hf_palette::contrast::text_color_for;
use hf_palette::{PaletteKind, PaletteSet};
use unicode_width::UnicodeWidthStr;

use crate::command::Swatch;
use crate::feedback::CopyNotice;

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

/// Pad `s` with spaces to `width` display columns.
fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    let mut out = String::with_capacity(s.len() + width.saturating_sub(w));
    out.push_str(s);
    out.extend(std::iter::repeat_n(' ', width.saturating_sub(w)));
    out
}

fn title_width() -> usize {
    PaletteKind::all()
        .iter()
        .map(|k| UnicodeWidthStr::width(k.title()))
        .max()
        .unwrap_or(0)
}

/// Text shown on one swatch; the copied one is bracketed.
fn swatch_label(color: Color, marked: bool) -> String {
    if marked {
        format!("[{}]", color.to_hex())
    } else {
        format!(" {} ", color.to_hex())
    }
}

fn write_swatch(w: &mut impl Write, color: Color, marked: bool, painted: bool) -> io::Result<()> {
    let label = swatch_label(color, marked);
    if !painted {
        return w.write_all(label.as_bytes());
    }
    let attr = if marked {
        Attr::BOLD | Attr::UNDERLINE
    } else {
        Attr::empty()
    };
    ansi::paint(w, &label, text_color_for(color), color, attr)
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Write the base color line and every palette.
///
/// # Errors
///
/// Propagates any error from the writer.
pub fn write_set(
    w: &mut impl Write,
    set: &PaletteSet,
    highlight: Option<Swatch>,
    painted: bool,
) -> io::Result<()> {
    let width = title_width();

    write!(w, "{}  ", pad_right("Base", width + 3))?;
    write_swatch(w, set.base(), false, painted)?;
    writeln!(w)?;

    for (n, palette) in set.iter().enumerate() {
        let title = pad_right(palette.kind().title(), width);
        write!(w, "{}. {title}  ", n + 1)?;
        for (i, &color) in palette.colors().iter().enumerate() {
            let marked =
                highlight.is_some_and(|s| s.kind == palette.kind() && s.index == i);
            write_swatch(w, color, marked, painted)?;
        }
        writeln!(w)?;
    }
    Ok(())
}

/// Render a palette set, marking `highlight` and ending with the copy
/// notice's status line, if any.
#[must_use]
pub fn render(
    set: &PaletteSet,
    highlight: Option<Swatch>,
    notice: Option<&CopyNotice>,
    painted: bool,
) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_set(&mut buf, set, highlight, painted);
    let mut out = String::from_utf8_lossy(&buf).into_owned();
    if let Some(notice) = notice {
        out.push_str(&notice.status_line());
        out.push('\n');
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

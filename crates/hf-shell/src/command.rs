//! Shell commands — one line of user input at the `hue>` prompt.
//!
//! # Supported commands
//!
//! | Command                     | Action                                    |
//! |-----------------------------|-------------------------------------------|
//! | `gen <color>` / `g <color>` | Generate palettes from a base color       |
//! | `<color>`                   | Same as `gen <color>`                     |
//! | `copy <palette> <n>`        | Copy swatch `n` of a palette to clipboard |
//! | `copy <palette>:<n>`        | Same, compact form                        |
//! | `set [args]`                | Read or change options (see [`options`])  |
//! | `show`                      | Re-render the current palettes            |
//! | `help` / `?`                | List commands                             |
//! | `quit` / `q` / `exit`       | Leave the shell                           |
//!
//! Palettes are addressed by 1-based position (`3`) or by name
//! (`triadic`, case-insensitive). Swatches are 1-based.
//!
//! Generation only happens on an explicit `gen` or a bare color line.
//!
//! [`options`]: crate::options

use std::fmt;
use std::str::FromStr;

use hf_color::Color;
use hf_palette::{PaletteKind, PaletteSet};

use crate::options::{SetDirective, parse_set};

// ---------------------------------------------------------------------------
// Swatch references
// ---------------------------------------------------------------------------

/// How the user named a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteRef {
    /// 0-indexed position (the user typed it 1-based).
    Index(usize),
    /// A palette name such as `triadic`.
    Kind(PaletteKind),
}

impl PaletteRef {
    /// Resolve to a palette kind, if the position exists.
    #[must_use]
    pub fn kind(self) -> Option<PaletteKind> {
        match self {
            Self::Index(i) => PaletteKind::all().get(i).copied(),
            Self::Kind(kind) => Some(kind),
        }
    }
}

impl FromStr for PaletteRef {
    type Err = SwatchRefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(n) = s.parse::<usize>() {
            return match n.checked_sub(1) {
                Some(i) => Ok(Self::Index(i)),
                None => Err(SwatchRefError::ZeroIndex),
            };
        }
        PaletteKind::from_name(s)
            .map(Self::Kind)
            .ok_or_else(|| SwatchRefError::UnknownPalette(s.to_string()))
    }
}

/// One swatch in a palette set: palette plus 0-indexed position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwatchRef {
    pub palette: PaletteRef,
    pub index: usize,
}

/// A [`SwatchRef`] resolved against a concrete palette set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swatch {
    pub kind: PaletteKind,
    pub index: usize,
    pub color: Color,
}

impl SwatchRef {
    /// Parse from separate palette and swatch words (`triadic`, `2`).
    ///
    /// # Errors
    ///
    /// Returns a [`SwatchRefError`] describing the first bad word.
    pub fn from_parts(palette: &str, swatch: &str) -> Result<Self, SwatchRefError> {
        let palette = palette.parse()?;
        let n: usize = swatch
            .parse()
            .map_err(|_| SwatchRefError::BadSwatch(swatch.to_string()))?;
        let index = n.checked_sub(1).ok_or(SwatchRefError::ZeroIndex)?;
        Ok(Self { palette, index })
    }

    /// Look the swatch up in `set`.
    #[must_use]
    pub fn resolve(&self, set: &PaletteSet) -> Option<Swatch> {
        let kind = self.palette.kind()?;
        let color = set.get(kind).get(self.index)?;
        Some(Swatch {
            kind,
            index: self.index,
            color,
        })
    }
}

impl FromStr for SwatchRef {
    type Err = SwatchRefError;

    /// Parse `palette:n` or `palette n`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (palette, swatch) = s
            .split_once(':')
            .or_else(|| s.split_once(char::is_whitespace))
            .ok_or_else(|| SwatchRefError::Malformed(s.to_string()))?;
        Self::from_parts(palette.trim(), swatch.trim())
    }
}

/// Why a swatch reference could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SwatchRefError {
    #[error("expected <palette>:<n>, got {0:?}")]
    Malformed(String),
    #[error("unknown palette {0:?}")]
    UnknownPalette(String),
    #[error("bad swatch number {0:?}")]
    BadSwatch(String),
    #[error("positions start at 1")]
    ZeroIndex,
}

impl fmt::Display for Swatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.kind.title(), self.index + 1, self.color)
    }
}

// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Generate palettes from this color string.
    Generate(String),

    /// Copy one swatch to the clipboard.
    Copy(SwatchRef),

    /// `set ...` — option directives.
    Set(Vec<SetDirective>),

    /// Re-render the current palettes.
    Show,

    /// List commands.
    Help,

    /// Leave the shell.
    Quit,

    /// Unusable input — carries an explanation for the user.
    Unknown(String),
}

impl Command {
    /// Parse one input line.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Self::Unknown(String::new());
        }

        let (cmd, arg) = trimmed
            .find(char::is_whitespace)
            .map_or((trimmed, ""), |pos| {
                (&trimmed[..pos], trimmed[pos..].trim_start())
            });

        match cmd {
            "gen" | "g" | "generate" => {
                if arg.is_empty() {
                    Self::Unknown("gen needs a color, e.g. gen #845EC2".into())
                } else {
                    Self::Generate(arg.to_string())
                }
            }
            "copy" | "c" | "cp" => match arg.parse::<SwatchRef>() {
                Ok(swatch) => Self::Copy(swatch),
                Err(e) => Self::Unknown(e.to_string()),
            },
            "set" | "se" => Self::Set(parse_set(arg)),
            "show" | "ls" => Self::Show,
            "help" | "?" | "h" => Self::Help,
            "quit" | "q" | "exit" => Self::Quit,
            // Anything else is taken as a color; `rgb(1, 2, 3)` contains
            // spaces, so the whole line is kept.
            _ => Self::Generate(trimmed.to_string()),
        }
    }
}

/// Help text listing every command.
pub const HELP: &str = "\
commands:
  <color> | gen <color>    generate palettes (#rrggbb, #rgb, rgb(), hsl())
  copy <palette> <n>       copy swatch n (palette by number or name)
  set [option[=value]...]  show or change options (set all lists them)
  show                     redraw the current palettes
  help                     this text
  quit                     leave";

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Interactive session — the state behind the `hue>` prompt.
//!
//! A [`Session`] owns the shell settings, the palettes currently on screen,
//! the copy notice, and a clipboard. Each input line goes through
//! [`Session::handle`], which returns the text to print.
//!
//! Invalid input never disturbs the current palettes: a bad color leaves
//! the previous set in place, and a failed copy only produces a notice.

use std::time::Instant;

use hf_color::ColorError;
use hf_palette::{Generator, PaletteSet};
use thiserror::Error;
use tracing::{info, warn};

use crate::clipboard::Clipboard;
use crate::command::{Command, HELP, SwatchRef};
use crate::feedback::{CopyNotice, CopyOutcome, Feedback};
use crate::options::{SetDirective, ShellSettings};
use crate::render;

/// Why a copy could not be attempted at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CopyError {
    #[error("nothing to copy yet; enter a color first")]
    NothingGenerated,
    #[error("no such swatch")]
    NoSuchSwatch,
}

/// What the shell should do after one line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Reply {
    /// Text to print (may be empty).
    pub output: String,
    /// Leave the shell.
    pub quit: bool,
}

impl Reply {
    fn text(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            quit: false,
        }
    }
}

pub struct Session<C: Clipboard> {
    settings: ShellSettings,
    current: Option<PaletteSet>,
    feedback: Feedback,
    clipboard: C,
}

impl<C: Clipboard> Session<C> {
    #[must_use]
    pub fn new(settings: ShellSettings, clipboard: C) -> Self {
        Self {
            settings,
            current: None,
            feedback: Feedback::new(),
            clipboard,
        }
    }

    #[must_use]
    pub const fn current(&self) -> Option<&PaletteSet> {
        self.current.as_ref()
    }

    #[must_use]
    pub const fn clipboard(&self) -> &C {
        &self.clipboard
    }

    /// Generate palettes from `input` with the current options and make
    /// them current.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidColorInput`] for unparseable input; the
    /// previous palettes stay current.
    pub fn generate(&mut self, input: &str) -> Result<&PaletteSet, ColorError> {
        let set = Generator::new(self.settings.generator).generate(input)?;
        self.feedback.clear();
        Ok(&*self.current.insert(set))
    }

    /// Copy one swatch's hex value to the clipboard.
    ///
    /// A clipboard failure is not an error here: it is reported through the
    /// returned notice, which is also what the next render shows.
    ///
    /// # Errors
    ///
    /// Returns a [`CopyError`] when there is nothing generated yet or the
    /// swatch does not exist.
    pub fn copy(&mut self, target: SwatchRef, now: Instant) -> Result<CopyNotice, CopyError> {
        let set = self.current.as_ref().ok_or(CopyError::NothingGenerated)?;
        let swatch = target.resolve(set).ok_or(CopyError::NoSuchSwatch)?;
        let hex = swatch.color.to_hex();

        let outcome = match self.clipboard.set_text(&hex) {
            Ok(()) => {
                info!(hex = %hex, palette = swatch.kind.name(), index = swatch.index, "copied swatch");
                CopyOutcome::Copied
            }
            Err(e) => {
                warn!(error = %e, hex = %hex, "copy failed");
                CopyOutcome::Failed(e.to_string())
            }
        };

        let notice = CopyNotice::new(swatch, outcome, now);
        self.feedback.show(notice.clone());
        Ok(notice)
    }

    /// Render the current palettes as they look at `now`.
    #[must_use]
    pub fn render(&mut self, now: Instant) -> Option<String> {
        let highlight = self.feedback.highlighted(now);
        let notice = self.feedback.current(now).cloned();
        let set = self.current.as_ref()?;
        Some(render::render(
            set,
            highlight,
            notice.as_ref(),
            self.settings.color,
        ))
    }

    /// Run one line of input.
    pub fn handle(&mut self, line: &str, now: Instant) -> Reply {
        match Command::parse(line) {
            Command::Generate(input) => match self.generate(&input) {
                Ok(_) => self.show(now),
                Err(e) => Reply::text(e.to_string()),
            },
            Command::Copy(target) => match self.copy(target, now) {
                Ok(_) => self.show(now),
                Err(e) => Reply::text(e.to_string()),
            },
            Command::Set(directives) => Reply::text(self.set(&directives)),
            Command::Show => self.show(now),
            Command::Help => Reply::text(HELP),
            Command::Quit => Reply {
                output: String::new(),
                quit: true,
            },
            Command::Unknown(message) => Reply::text(message),
        }
    }

    fn show(&mut self, now: Instant) -> Reply {
        Reply::text(
            self.render(now)
                .unwrap_or_else(|| "no palettes yet; enter a color".to_string()),
        )
    }

    /// Apply directives in order, stopping at the first error.
    fn set(&mut self, directives: &[SetDirective]) -> String {
        let mut lines = Vec::new();
        for directive in directives {
            match self.settings.apply(directive) {
                Ok(Some(text)) => lines.push(text),
                Ok(None) => {}
                Err(e) => {
                    lines.push(e.to_string());
                    break;
                }
            }
        }
        lines.join("\n")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

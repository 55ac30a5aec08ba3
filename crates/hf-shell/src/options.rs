//! Shell options — the `set` system.
//!
//! Parses `set` directives and applies them to [`ShellSettings`]: the
//! palette [`GeneratorOptions`] plus display flags. New values take effect
//! on the next generation; the palettes on screen are not recomputed.
//!
//! # Supported syntax
//!
//! | Syntax          | Effect                        |
//! |-----------------|-------------------------------|
//! | `set option`    | Enable boolean / show numeric |
//! | `set nooption`  | Disable boolean               |
//! | `set option!`   | Toggle boolean                |
//! | `set option?`   | Query current value           |
//! | `set option=N`  | Assign numeric value          |
//! | `set`           | Show changed options          |
//! | `set all`       | Show all options              |
//!
//! # Option names
//!
//! | Full name     | Abbrev | Type    | Default |
//! |---------------|--------|---------|---------|
//! | `brighten`    | `br`   | number  | 1       |
//! | `darken`      | `dk`   | number  | 2       |
//! | `steps`       | `st`   | integer | 5       |
//! | `nudge`       | `tn`   | number  | 0.1     |
//! | `pastelsat`   | `ps`   | number  | 0.4     |
//! | `pastellight` | `pl`   | number  | 0.85    |
//! | `pastelstep`  | `pst`  | number  | 0.05    |
//! | `color`       | `co`   | bool    | true    |
//!
//! `steps` is capped at 64; larger values are rejected.

use hf_palette::GeneratorOptions;
use hf_palette::options::MAX_GRADIENT_STEPS;
use thiserror::Error;

/// A parsed `set` directive.
///
/// Produced by [`parse_set`]. Names are kept as typed; they are resolved
/// when the directive is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetDirective {
    /// `set option` — enable a boolean option.
    On(String),

    /// `set nooption` — disable a boolean option.
    Off(String),

    /// `set option!` — toggle a boolean option.
    Toggle(String),

    /// `set option?` — query the current value.
    Query(String),

    /// `set option=value` — assign a value.
    Assign(String, String),

    /// `set` with no arguments — show changed options.
    ShowChanged,

    /// `set all` — show all options.
    ShowAll,
}

/// Every option the shell knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionName {
    Brighten,
    Darken,
    Steps,
    Nudge,
    PastelSaturation,
    PastelLightness,
    PastelStep,
    Color,
}

impl OptionName {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Brighten => "brighten",
            Self::Darken => "darken",
            Self::Steps => "steps",
            Self::Nudge => "nudge",
            Self::PastelSaturation => "pastelsat",
            Self::PastelLightness => "pastellight",
            Self::PastelStep => "pastelstep",
            Self::Color => "color",
        }
    }

    #[must_use]
    pub const fn abbrev(self) -> &'static str {
        match self {
            Self::Brighten => "br",
            Self::Darken => "dk",
            Self::Steps => "st",
            Self::Nudge => "tn",
            Self::PastelSaturation => "ps",
            Self::PastelLightness => "pl",
            Self::PastelStep => "pst",
            Self::Color => "co",
        }
    }

    /// Resolve a full name or abbreviation.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all()
            .iter()
            .find(|o| o.name() == name || o.abbrev() == name)
            .copied()
    }

    /// All options, in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Brighten,
            Self::Darken,
            Self::Steps,
            Self::Nudge,
            Self::PastelSaturation,
            Self::PastelLightness,
            Self::PastelStep,
            Self::Color,
        ]
    }

    #[must_use]
    pub const fn is_bool(self) -> bool {
        matches!(self, Self::Color)
    }
}

/// Returns `true` if `name` is a known boolean option (full name or abbreviation).
#[must_use]
pub fn is_bool_option(name: &str) -> bool {
    OptionName::from_name(name).is_some_and(OptionName::is_bool)
}

/// Returns `true` if `name` is a known numeric option (full name or abbreviation).
#[must_use]
pub fn is_numeric_option(name: &str) -> bool {
    OptionName::from_name(name).is_some_and(|o| !o.is_bool())
}

/// Parse the full `set` arguments string into directives.
///
/// Multiple space-separated arguments are supported (e.g., `set nocolor darken=3`).
/// An empty argument string produces [`SetDirective::ShowChanged`].
#[must_use]
pub fn parse_set(args: &str) -> Vec<SetDirective> {
    let trimmed = args.trim();
    if trimmed.is_empty() {
        return vec![SetDirective::ShowChanged];
    }
    trimmed.split_whitespace().map(parse_set_arg).collect()
}

/// Parse a single `set` argument into a directive.
#[must_use]
pub fn parse_set_arg(arg: &str) -> SetDirective {
    if arg == "all" {
        return SetDirective::ShowAll;
    }

    if let Some((name, value)) = arg.split_once('=') {
        return SetDirective::Assign(name.to_string(), value.to_string());
    }

    if let Some(name) = arg.strip_suffix('?') {
        return SetDirective::Query(name.to_string());
    }

    if let Some(name) = arg.strip_suffix('!') {
        return SetDirective::Toggle(name.to_string());
    }

    // `no` prefix only counts when the rest is a boolean option.
    if let Some(name) = arg.strip_prefix("no") {
        if is_bool_option(name) {
            return SetDirective::Off(name.to_string());
        }
    }

    if is_numeric_option(arg) {
        return SetDirective::Query(arg.to_string());
    }

    SetDirective::On(arg.to_string())
}

/// Format a boolean option for display (`set` output).
///
/// Returns `"name"` when true, `"noname"` when false.
#[must_use]
pub fn format_bool(name: &str, value: bool) -> String {
    if value {
        name.to_string()
    } else {
        format!("no{name}")
    }
}

// ---------------------------------------------------------------------------
// Applying directives
// ---------------------------------------------------------------------------

/// Why a directive could not be applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionError {
    #[error("unknown option: {0}")]
    UnknownOption(String),
    #[error("invalid value for {name}: {value:?}")]
    InvalidValue { name: String, value: String },
    #[error("{0} is not a boolean option")]
    NotBoolean(String),
    #[error("{0} is a boolean option; use {0} or no{0}")]
    NotNumeric(String),
}

/// Everything `set` can change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShellSettings {
    pub generator: GeneratorOptions,
    /// Paint swatches with ANSI truecolor.
    pub color: bool,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            generator: GeneratorOptions::default(),
            color: true,
        }
    }
}

impl ShellSettings {
    /// Apply one directive. Queries and listings return the text to show.
    ///
    /// # Errors
    ///
    /// Returns an [`OptionError`] for unknown names, bad values, or a
    /// boolean operation on a numeric option (and vice versa).
    pub fn apply(&mut self, directive: &SetDirective) -> Result<Option<String>, OptionError> {
        match directive {
            SetDirective::On(name) => self.set_bool(name, |_| true).map(|()| None),
            SetDirective::Off(name) => self.set_bool(name, |_| false).map(|()| None),
            SetDirective::Toggle(name) => self.set_bool(name, |v| !v).map(|()| None),
            SetDirective::Query(name) => {
                let option = resolve(name)?;
                Ok(Some(self.format(option)))
            }
            SetDirective::Assign(name, value) => {
                let option = resolve(name)?;
                self.assign(option, value).map(|()| None)
            }
            SetDirective::ShowChanged => {
                let defaults = Self::default();
                let changed: Vec<String> = OptionName::all()
                    .iter()
                    .filter(|&&o| self.format(o) != defaults.format(o))
                    .map(|&o| self.format(o))
                    .collect();
                Ok(Some(changed.join("  ")))
            }
            SetDirective::ShowAll => {
                let all: Vec<String> = OptionName::all().iter().map(|&o| self.format(o)).collect();
                Ok(Some(all.join("  ")))
            }
        }
    }

    /// Display form of one option (`darken=2`, `nocolor`).
    #[must_use]
    pub fn format(&self, option: OptionName) -> String {
        let g = &self.generator;
        let value = match option {
            OptionName::Color => return format_bool(option.name(), self.color),
            OptionName::Steps => g.gradient_steps.to_string(),
            OptionName::Brighten => g.brighten.to_string(),
            OptionName::Darken => g.darken.to_string(),
            OptionName::Nudge => g.triadic_nudge.to_string(),
            OptionName::PastelSaturation => g.pastel_saturation.to_string(),
            OptionName::PastelLightness => g.pastel_lightness.to_string(),
            OptionName::PastelStep => g.pastel_step.to_string(),
        };
        format!("{}={value}", option.name())
    }

    fn set_bool(&mut self, name: &str, f: impl FnOnce(bool) -> bool) -> Result<(), OptionError> {
        match resolve(name)? {
            OptionName::Color => {
                self.color = f(self.color);
                Ok(())
            }
            other => Err(OptionError::NotBoolean(other.name().to_string())),
        }
    }

    fn assign(&mut self, option: OptionName, value: &str) -> Result<(), OptionError> {
        let invalid = || OptionError::InvalidValue {
            name: option.name().to_string(),
            value: value.to_string(),
        };
        let g = &mut self.generator;
        let slot = match option {
            OptionName::Color => return Err(OptionError::NotNumeric(option.name().to_string())),
            OptionName::Steps => {
                let steps: usize = value.parse().map_err(|_| invalid())?;
                if steps > MAX_GRADIENT_STEPS {
                    return Err(invalid());
                }
                g.gradient_steps = steps;
                return Ok(());
            }
            OptionName::Brighten => &mut g.brighten,
            OptionName::Darken => &mut g.darken,
            OptionName::Nudge => &mut g.triadic_nudge,
            OptionName::PastelSaturation => &mut g.pastel_saturation,
            OptionName::PastelLightness => &mut g.pastel_lightness,
            OptionName::PastelStep => &mut g.pastel_step,
        };
        let parsed: f32 = value.parse().map_err(|_| invalid())?;
        if !parsed.is_finite() {
            return Err(invalid());
        }
        *slot = parsed;
        Ok(())
    }
}

fn resolve(name: &str) -> Result<OptionName, OptionError> {
    OptionName::from_name(name).ok_or_else(|| OptionError::UnknownOption(name.to_string()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

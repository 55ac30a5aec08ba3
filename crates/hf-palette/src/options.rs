//! Generator options — the tunable constants of the palette rules.
//!
//! Defaults reproduce the standard palettes exactly. Every field can be
//! overridden from a JSON config file (any subset of fields) or at runtime
//! through the shell's `set` command. Values are not validated on load:
//! the harmony rules clamp whatever they are given, so an extreme option
//! degrades a palette instead of producing an invalid color.
//!
//! ```json
//! { "darken": 3.0, "pastel_saturation": 0.3 }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Smallest gradient length; a gradient needs both of its anchors.
pub const MIN_GRADIENT_STEPS: usize = 2;

/// Largest gradient length accepted from config or the shell.
pub const MAX_GRADIENT_STEPS: usize = 64;

/// Error surfaced when a config file cannot be read or parsed.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure (for example, a missing file or bad permissions).
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The file is not a JSON object of known option fields.
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// `gradient_steps` is larger than [`MAX_GRADIENT_STEPS`].
    #[error("gradient_steps must be at most {max}, got {0}", max = MAX_GRADIENT_STEPS)]
    TooManySteps(usize),
}

/// Tunable parameters of the palette generator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorOptions {
    /// Lab brighten amount for the light end of the monochromatic gradient.
    pub brighten: f32,
    /// Lab darken amount for the dark end of the monochromatic gradient.
    pub darken: f32,
    /// Samples taken along each gradient palette (at least 2 are used).
    pub gradient_steps: usize,
    /// Lightness offset from 0.5 applied to triadic colors.
    pub triadic_nudge: f32,
    /// Fixed saturation of the pastel palette.
    pub pastel_saturation: f32,
    /// Lightness of the first pastel color.
    pub pastel_lightness: f32,
    /// Lightness decrease between consecutive pastel colors.
    pub pastel_step: f32,
}

impl GeneratorOptions {
    /// Parse options from a JSON string. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields,
    /// and [`ConfigError::TooManySteps`] for an oversized gradient.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let opts: Self = serde_json::from_str(json)?;
        if opts.gradient_steps > MAX_GRADIENT_STEPS {
            return Err(ConfigError::TooManySteps(opts.gradient_steps));
        }
        Ok(opts)
    }

    /// Load options from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Parse`] if its contents are not valid options.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Gradient length actually sampled.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.gradient_steps.clamp(MIN_GRADIENT_STEPS, MAX_GRADIENT_STEPS)
    }
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            brighten: 1.0,
            darken: 2.0,
            gradient_steps: 5,
            triadic_nudge: 0.1,
            pastel_saturation: 0.4,
            pastel_lightness: 0.85,
            pastel_step: 0.05,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_object_is_default() {
        let opts = GeneratorOptions::from_json_str("{}").unwrap();
        assert_eq!(opts, GeneratorOptions::default());
    }

    #[test]
    fn partial_override() {
        let opts = GeneratorOptions::from_json_str(r#"{ "darken": 3.0, "gradient_steps": 7 }"#)
            .unwrap();
        assert_eq!(opts.darken, 3.0);
        assert_eq!(opts.gradient_steps, 7);
        assert_eq!(opts.brighten, 1.0);
        assert_eq!(opts.pastel_saturation, 0.4);
    }

    #[test]
    fn unknown_field_rejected() {
        let err = GeneratorOptions::from_json_str(r#"{ "dark": 3.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn malformed_json_rejected() {
        assert!(GeneratorOptions::from_json_str("darken = 3").is_err());
    }

    #[test]
    fn steps_never_below_two() {
        let opts = GeneratorOptions {
            gradient_steps: 0,
            ..GeneratorOptions::default()
        };
        assert_eq!(opts.steps(), 2);
    }

    #[test]
    fn steps_never_above_max() {
        let opts = GeneratorOptions {
            gradient_steps: usize::MAX,
            ..GeneratorOptions::default()
        };
        assert_eq!(opts.steps(), MAX_GRADIENT_STEPS);
    }

    #[test]
    fn oversized_steps_rejected_on_load() {
        let err = GeneratorOptions::from_json_str(r#"{ "gradient_steps": 65 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::TooManySteps(65)));
        let opts = GeneratorOptions::from_json_str(r#"{ "gradient_steps": 64 }"#).unwrap();
        assert_eq!(opts.steps(), 64);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = GeneratorOptions::load(Path::new("/nonexistent/hue-forge.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn load_from_file() {
        let path = std::env::temp_dir().join(format!("hf-options-{}.json", std::process::id()));
        fs::write(&path, r#"{ "pastel_step": 0.1 }"#).unwrap();
        let opts = GeneratorOptions::load(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(opts.pastel_step, 0.1);
    }
}

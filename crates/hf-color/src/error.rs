// SPDX-License-Identifier: MIT
//
// Color parsing errors.

use thiserror::Error;

/// Error surfaced when a color string cannot be turned into a [`Color`].
///
/// [`Color`]: crate::color::Color
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The string matches no supported color notation, or a channel is out
    /// of range.
    #[error("invalid color input: {input:?}")]
    InvalidColorInput { input: String },
}

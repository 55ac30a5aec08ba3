//! # hf-shell — interactive front end for hue-forge
//!
//! This crate turns the palette engine into something a person can drive
//! from a terminal:
//!
//! - **[`command`]** — parsing of one input line (`gen`, `copy`, `set`, ...)
//! - **[`options`]** — `set` directives over the generator options
//! - **[`clipboard`]** — the [`Clipboard`] trait and the system clipboard
//! - **[`feedback`]** — the "Copied!" notice and its 2-second timer
//! - **[`render`]** — truecolor swatches with legible hex labels
//! - **[`session`]** — the state machine tying them together

pub mod clipboard;
pub mod command;
pub mod feedback;
pub mod options;
pub mod render;
pub mod session;

pub use clipboard::{Clipboard, ClipboardError, MemoryClipboard, SystemClipboard};
pub use command::{Command, Swatch, SwatchRef};
pub use options::ShellSettings;
pub use session::{Reply, Session};

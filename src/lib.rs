//! # Tinge - ANSI string styling with themes and inline markup
//!
//! Tinge decorates plain text with ANSI escape sequences and lets you name
//! aggregate styles ("themes") that expand to one or more base styles. It
//! provides:
//!
//! - 23 built-in styles: text attributes, foreground and background colors
//! - 256-color support via the `color[N]` / `bg_color[N]` token forms
//! - User themes with eager validation and cycle detection
//! - Inline markup expansion: `<red>text</red>`, nesting included
//! - Automatic terminal detection with an injectable capability probe
//! - Text utilities: [`clean`]/[`strip`] escape removal and [`center`]
//!
//! ## Core Concepts
//!
//! - [`Paint`]: the stateful wrapper holding a string and its styling
//! - [`Theme`]: named style aliases, installed per instance
//! - [`OutputMode`]: Auto (probe the terminal), Term (force on), Text
//!   (force off)
//! - [`StyleError`]: every failure the styling pipeline can produce
//!
//! ## Quick Start
//!
//! ```rust
//! use tinge::{OutputMode, Paint, Theme};
//!
//! let mut p = Paint::with_output("Some bold red text", OutputMode::Term);
//! assert_eq!(
//!     p.red()?.bold()?.to_string(),
//!     "\x1b[1m\x1b[31mSome bold red text\x1b[0m\x1b[0m",
//! );
//!
//! // themes alias one or more base styles
//! let mut p = Paint::with_output("Error...", OutputMode::Term);
//! p.set_theme(Theme::new().add("error", "red"))?;
//! assert_eq!(p.apply("error")?.as_str(), "\x1b[31mError...\x1b[0m");
//!
//! // markup expands recursively through the same pipeline
//! let styled = p.colorize_to("before <red>some text</red>")?;
//! assert_eq!(styled, "before \x1b[31msome text\x1b[0m");
//! # Ok::<(), tinge::StyleError>(())
//! ```
//!
//! Styling is skipped entirely when the output is not a capable terminal;
//! construct with [`Paint::new`] for automatic detection, or inject your
//! own check with [`set_support_probe`].

mod markup;
mod output;
mod paint;
pub mod style;
pub mod text;
pub mod theme;

pub use output::{set_support_probe, OutputMode};
pub use paint::{paint, Paint};
pub use style::{is_valid_style_name, style_names, EscapeTemplate, StyleError};
pub use text::{center, clean, strip, DEFAULT_CENTER_WIDTH};
pub use theme::{StyleSpec, Theme};

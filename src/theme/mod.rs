//! User-defined theme aliases.
//!
//! This module provides:
//!
//! - [`Theme`]: a validated collection of named style aliases
//! - [`StyleSpec`]: one alias target, a single token or a sequence

#[allow(clippy::module_inception)]
mod theme;

pub use theme::{StyleSpec, Theme};

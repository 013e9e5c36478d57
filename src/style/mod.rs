//! Style primitives: the built-in table, token resolution, and errors.
//!
//! This module provides:
//!
//! - [`EscapeTemplate`]: the escape-sequence wrapper for one attribute
//! - [`StyleError`]: errors from resolution and theme validation
//! - [`style_names`]: the names of all built-in styles
//! - [`is_valid_style_name`]: the identifier grammar for theme aliases

mod error;
pub(crate) mod name;
pub(crate) mod resolve;
pub(crate) mod table;

pub use error::StyleError;
pub use name::is_valid_style_name;
pub use table::{style_names, EscapeTemplate};

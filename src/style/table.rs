//! The built-in style table.
//!
//! Maps canonical style names to their escape-sequence templates. The table
//! is fixed at startup and never mutated; user-defined aliases live in
//! [`Theme`](crate::Theme) instead.

use std::borrow::Cow;
use std::collections::HashMap;

use once_cell::sync::Lazy;

/// The sequence that deactivates all attributes.
pub(crate) const RESET: &str = "\x1b[0m";

/// A template that wraps text with one terminal attribute.
///
/// Wrapping produces `<sequence><text>\x1b[0m`, byte-for-byte what terminals
/// expect and what [`clean`](crate::clean) strips back out.
///
/// # Example
///
/// ```rust
/// use tinge::style_names;
///
/// // every built-in template round-trips through clean()
/// for name in style_names() {
///     let mut p = tinge::Paint::with_output("x", tinge::OutputMode::Term);
///     p.apply(name).unwrap();
///     assert_eq!(tinge::clean(p.as_str()), "x");
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EscapeTemplate {
    sequence: Cow<'static, str>,
}

impl EscapeTemplate {
    pub(crate) const fn literal(sequence: &'static str) -> Self {
        Self {
            sequence: Cow::Borrowed(sequence),
        }
    }

    /// Builds a 256-color template: `select` is 38 for foreground, 48 for
    /// background.
    pub(crate) fn indexed(select: u8, index: u8) -> Self {
        Self {
            sequence: Cow::Owned(format!("\x1b[{};5;{}m", select, index)),
        }
    }

    /// The activation sequence, e.g. `"\x1b[31m"` for `red`.
    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    /// Wraps `text` between the activation sequence and the reset sequence.
    pub fn wrap(&self, text: &str) -> String {
        format!("{}{}{}", self.sequence, text, RESET)
    }
}

// italic and blink may not work depending on the terminal
const LITERAL_STYLES: &[(&str, EscapeTemplate)] = &[
    // text attributes
    ("bold", EscapeTemplate::literal("\x1b[1m")),
    ("dark", EscapeTemplate::literal("\x1b[2m")),
    ("italic", EscapeTemplate::literal("\x1b[3m")),
    ("underline", EscapeTemplate::literal("\x1b[4m")),
    ("blink", EscapeTemplate::literal("\x1b[5m")),
    ("reverse", EscapeTemplate::literal("\x1b[7m")),
    ("concealed", EscapeTemplate::literal("\x1b[8m")),
    // foreground colors
    ("black", EscapeTemplate::literal("\x1b[30m")),
    ("red", EscapeTemplate::literal("\x1b[31m")),
    ("green", EscapeTemplate::literal("\x1b[32m")),
    ("yellow", EscapeTemplate::literal("\x1b[33m")),
    ("blue", EscapeTemplate::literal("\x1b[34m")),
    ("magenta", EscapeTemplate::literal("\x1b[35m")),
    ("cyan", EscapeTemplate::literal("\x1b[36m")),
    ("white", EscapeTemplate::literal("\x1b[37m")),
    // background colors
    ("bg_black", EscapeTemplate::literal("\x1b[40m")),
    ("bg_red", EscapeTemplate::literal("\x1b[41m")),
    ("bg_green", EscapeTemplate::literal("\x1b[42m")),
    ("bg_yellow", EscapeTemplate::literal("\x1b[43m")),
    ("bg_blue", EscapeTemplate::literal("\x1b[44m")),
    ("bg_magenta", EscapeTemplate::literal("\x1b[45m")),
    ("bg_cyan", EscapeTemplate::literal("\x1b[46m")),
    ("bg_white", EscapeTemplate::literal("\x1b[47m")),
];

static TABLE: Lazy<HashMap<&'static str, &'static EscapeTemplate>> = Lazy::new(|| {
    LITERAL_STYLES
        .iter()
        .map(|(name, template)| (*name, template))
        .collect()
});

/// Looks up a literal style by its canonical (lowercase) name.
pub(crate) fn lookup(name: &str) -> Option<&'static EscapeTemplate> {
    TABLE.get(name).copied()
}

/// Iterates over the names of all built-in styles.
pub fn style_names() -> impl Iterator<Item = &'static str> {
    LITERAL_STYLES.iter().map(|(name, _)| *name)
}

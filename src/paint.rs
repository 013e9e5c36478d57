//! The stateful styled-string wrapper.

use std::fmt;

use crate::markup;
use crate::output::OutputMode;
use crate::style::resolve::resolve;
use crate::style::StyleError;
use crate::text;
use crate::theme::Theme;

/// Generates one named wrapper per built-in style, each delegating to
/// [`Paint::apply`].
macro_rules! style_methods {
    ($($name:ident),* $(,)?) => {
        $(
            #[doc = concat!("Applies the `", stringify!($name), "` style to the held text.")]
            pub fn $name(&mut self) -> Result<&mut Self, StyleError> {
                self.apply(stringify!($name))
            }
        )*
    };
}

/// A string plus the styling applied to it so far.
///
/// `Paint` holds the original text and the current (possibly wrapped)
/// text. Styling calls wrap the current text and return `&mut Self`, so
/// calls chain; each successive style becomes the outermost escape
/// sequence. [`reset`](Paint::reset) restores the original.
///
/// # Example
///
/// ```rust
/// use tinge::{Paint, OutputMode};
///
/// let mut p = Paint::with_output("foo", OutputMode::Term);
/// p.red()?.bold()?;
/// assert_eq!(p.to_string(), "\x1b[1m\x1b[31mfoo\x1b[0m\x1b[0m");
///
/// p.reset();
/// assert_eq!(p.as_str(), "foo");
/// # Ok::<(), tinge::StyleError>(())
/// ```
///
/// With a theme:
///
/// ```rust
/// use tinge::{Paint, OutputMode, Theme};
///
/// let mut p = Paint::with_output("Warning...", OutputMode::Term);
/// p.set_theme(Theme::new().add("warning", ["bg_yellow", "white"]))?;
/// let styled = p.apply_to("warning", "Warning...")?;
/// assert_eq!(styled, "\x1b[37m\x1b[43mWarning...\x1b[0m\x1b[0m");
/// # Ok::<(), tinge::StyleError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Paint {
    initial: String,
    current: String,
    theme: Theme,
    mode: OutputMode,
}

/// Shorthand for [`Paint::new`].
pub fn paint(text: impl Into<String>) -> Paint {
    Paint::new(text)
}

impl Paint {
    /// Wraps `text` with automatic terminal detection.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_output(text, OutputMode::Auto)
    }

    /// Wraps `text` with an explicit output mode.
    pub fn with_output(text: impl Into<String>, mode: OutputMode) -> Self {
        let text = text.into();
        Self {
            current: text.clone(),
            initial: text,
            theme: Theme::new(),
            mode,
        }
    }

    /// Replaces the held text, discarding any applied styling.
    ///
    /// Theme and output mode are kept, so one instance can be reused for
    /// many strings.
    pub fn set_text(&mut self, text: impl Into<String>) -> &mut Self {
        let text = text.into();
        self.current.clone_from(&text);
        self.initial = text;
        self
    }

    /// The current text, with whatever styling has been applied.
    pub fn as_str(&self) -> &str {
        &self.current
    }

    /// The output mode this instance styles under.
    pub fn output_mode(&self) -> OutputMode {
        self.mode
    }

    /// Changes the output mode for subsequent styling calls.
    pub fn set_output_mode(&mut self, mode: OutputMode) -> &mut Self {
        self.mode = mode;
        self
    }

    /// The active theme.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Validates and installs `theme`, replacing the previous one.
    ///
    /// The whole theme is rejected on the first invalid alias name or
    /// recursive reference; the previous theme stays installed in that
    /// case.
    ///
    /// # Errors
    ///
    /// [`StyleError::InvalidStyleName`] or
    /// [`StyleError::RecursiveStyleReference`].
    pub fn set_theme(&mut self, theme: Theme) -> Result<&mut Self, StyleError> {
        let theme = theme.canonicalized();
        theme.validate()?;
        self.theme = theme;
        Ok(self)
    }

    /// Wraps `text` with the styles `style` resolves to.
    ///
    /// The capability check runs first: when styling is disabled the text
    /// comes back unchanged and the style name is not even resolved.
    fn stylize(&self, style: &str, text: &str) -> Result<String, StyleError> {
        if !self.mode.should_use_color() {
            return Ok(text.to_string());
        }
        let templates = resolve(style, &self.theme)?;
        let mut styled = text.to_string();
        for template in &templates {
            styled = template.wrap(&styled);
        }
        Ok(styled)
    }

    /// Applies a style to the held text.
    ///
    /// `style` may name a built-in style, an indexed color
    /// (`color[N]` / `bg_color[N]`), or a theme alias; matching is
    /// case-insensitive.
    ///
    /// # Errors
    ///
    /// [`StyleError::UnknownStyle`] or [`StyleError::InvalidColorIndex`].
    pub fn apply(&mut self, style: &str) -> Result<&mut Self, StyleError> {
        self.current = self.stylize(style, &self.current)?;
        Ok(self)
    }

    /// Applies a style to `text` without touching the held state.
    pub fn apply_to(&self, style: &str, text: &str) -> Result<String, StyleError> {
        self.stylize(style, text)
    }

    /// Applies a foreground color; equivalent to [`apply`](Paint::apply).
    pub fn fg(&mut self, color: &str) -> Result<&mut Self, StyleError> {
        self.apply(color)
    }

    /// Applies a background color by prefixing `bg_`.
    pub fn bg(&mut self, color: &str) -> Result<&mut Self, StyleError> {
        self.apply(&format!("bg_{}", color))
    }

    /// Alias for [`bg`](Paint::bg).
    pub fn highlight(&mut self, color: &str) -> Result<&mut Self, StyleError> {
        self.bg(color)
    }

    /// Restores the held text to its unstyled original.
    pub fn reset(&mut self) -> &mut Self {
        self.current.clone_from(&self.initial);
        self
    }

    /// Calls `f` with the current text and returns `self` for further
    /// chaining. Handy for asserting or logging mid-chain.
    pub fn tap(&mut self, f: impl FnOnce(&str)) -> &mut Self {
        f(&self.current);
        self
    }

    /// Strips color sequences from the held text. See [`clean`](crate::clean).
    pub fn clean(&mut self) -> &mut Self {
        self.current = text::clean(&self.current);
        self
    }

    /// Alias for [`clean`](Paint::clean).
    pub fn strip(&mut self) -> &mut Self {
        self.clean()
    }

    /// Centers the held text to `width` columns and re-seeds the original,
    /// so a later [`reset`](Paint::reset) keeps the centered form. See
    /// [`center`](crate::center).
    pub fn center(&mut self, width: usize) -> &mut Self {
        let centered = text::center(&self.current, width);
        self.set_text(centered)
    }

    /// [`center`](Paint::center) with the default width of 80.
    pub fn center_default(&mut self) -> &mut Self {
        self.center(text::DEFAULT_CENTER_WIDTH)
    }

    /// Expands `<name>…</name>` markup in the held text.
    ///
    /// Inner tags resolve before outer ones, and tag names go through the
    /// same resolution as [`apply`](Paint::apply), so theme aliases work
    /// as tags and see this instance's theme.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tinge::{Paint, OutputMode};
    ///
    /// let mut p = Paint::with_output("<red>hi</red>", OutputMode::Term);
    /// assert_eq!(p.colorize()?.as_str(), "\x1b[31mhi\x1b[0m");
    /// # Ok::<(), tinge::StyleError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// [`StyleError::UnknownStyle`] for a tag naming no style.
    pub fn colorize(&mut self) -> Result<&mut Self, StyleError> {
        self.current = self.colorize_text(&self.current)?;
        Ok(self)
    }

    /// Expands markup in `text` without touching the held state.
    pub fn colorize_to(&self, text: &str) -> Result<String, StyleError> {
        self.colorize_text(text)
    }

    fn colorize_text(&self, text: &str) -> Result<String, StyleError> {
        let mut out = String::with_capacity(text.len());
        let mut rest = text;
        while let Some(tag) = markup::find_tag(rest) {
            out.push_str(&rest[..tag.start]);
            let inner = self.colorize_text(tag.inner)?;
            out.push_str(&self.stylize(tag.name, &inner)?);
            rest = &rest[tag.end..];
        }
        out.push_str(rest);
        Ok(out)
    }

    style_methods! {
        bold, dark, italic, underline, blink, reverse, concealed,
        black, red, green, yellow, blue, magenta, cyan, white,
        bg_black, bg_red, bg_green, bg_yellow, bg_blue, bg_magenta,
        bg_cyan, bg_white,
    }
}

impl fmt::Display for Paint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.current)
    }
}

impl From<&str> for Paint {
    fn from(text: &str) -> Self {
        Paint::new(text)
    }
}

impl From<String> for Paint {
    fn from(text: String) -> Self {
        Paint::new(text)
    }
}

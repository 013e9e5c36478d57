//! User-defined style aliases.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::style::name::is_valid_style_name;
use crate::style::table;
use crate::style::StyleError;

/// One theme entry: a single style token or an ordered sequence of tokens.
///
/// Members may name built-in styles, indexed colors, or other aliases.
/// The untagged serde representation accepts both JSON shapes:
/// `"red"` and `["bg_yellow", "white"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleSpec {
    Single(String),
    Sequence(Vec<String>),
}

impl StyleSpec {
    /// The member tokens in application order.
    pub fn tokens(&self) -> &[String] {
        match self {
            StyleSpec::Single(token) => std::slice::from_ref(token),
            StyleSpec::Sequence(tokens) => tokens,
        }
    }
}

impl<'a> From<&'a str> for StyleSpec {
    fn from(token: &'a str) -> Self {
        StyleSpec::Single(token.to_string())
    }
}

impl From<String> for StyleSpec {
    fn from(token: String) -> Self {
        StyleSpec::Single(token)
    }
}

impl From<Vec<String>> for StyleSpec {
    fn from(tokens: Vec<String>) -> Self {
        StyleSpec::Sequence(tokens)
    }
}

impl<'a> From<Vec<&'a str>> for StyleSpec {
    fn from(tokens: Vec<&'a str>) -> Self {
        StyleSpec::Sequence(tokens.iter().map(|t| t.to_string()).collect())
    }
}

impl<'a, const N: usize> From<[&'a str; N]> for StyleSpec {
    fn from(tokens: [&'a str; N]) -> Self {
        StyleSpec::Sequence(tokens.iter().map(|t| t.to_string()).collect())
    }
}

/// A collection of user-defined style aliases.
///
/// Aliases expand to one or more style tokens when resolved; a token may in
/// turn name another alias. Installing a theme into a
/// [`Paint`](crate::Paint) via `set_theme` validates every alias name and
/// rejects any alias whose expansion would revisit itself.
///
/// # Example
///
/// ```rust
/// use tinge::Theme;
///
/// let theme = Theme::new()
///     .add("error", "red")
///     .add("warning", ["bg_yellow", "white"])
///     .add("alert", ["warning", "bold"]);
///
/// assert!(theme.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Theme {
    entries: HashMap<String, StyleSpec>,
}

impl Theme {
    /// Creates an empty theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an alias, returning the updated theme for chaining.
    ///
    /// Names are stored in lowercase canonical form; adding the same name
    /// twice replaces the earlier entry. Validation happens when the theme
    /// is installed, not here.
    pub fn add<V: Into<StyleSpec>>(mut self, name: &str, spec: V) -> Self {
        self.entries.insert(name.to_ascii_lowercase(), spec.into());
        self
    }

    /// Returns true if the theme defines `name`.
    pub fn has(&self, name: &str) -> bool {
        self.entries.contains_key(&name.to_ascii_lowercase())
    }

    /// Returns true if the theme defines no aliases.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of aliases in the theme.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Looks up an alias by canonical (lowercase) name.
    pub(crate) fn get(&self, name: &str) -> Option<&StyleSpec> {
        self.entries.get(name)
    }

    /// Rebuilds the theme with all alias names lowercased.
    ///
    /// Themes built through [`add`](Theme::add) are already canonical; this
    /// matters for themes deserialized from config files.
    pub(crate) fn canonicalized(self) -> Self {
        Self {
            entries: self
                .entries
                .into_iter()
                .map(|(name, spec)| (name.to_ascii_lowercase(), spec))
                .collect(),
        }
    }

    /// Validates every alias name and checks for recursive references.
    ///
    /// Members that hit the built-in table terminate expansion there, so an
    /// alias shadowing a built-in name is inert rather than recursive.
    /// Members unknown to both the table and the theme are accepted here
    /// and surface as [`StyleError::UnknownStyle`] at resolve time.
    pub fn validate(&self) -> Result<(), StyleError> {
        for name in self.entries.keys() {
            if !is_valid_style_name(name) {
                return Err(StyleError::InvalidStyleName { name: name.clone() });
            }
        }
        for name in self.entries.keys() {
            let mut path = Vec::new();
            self.check_recursion(name, &mut path)?;
        }
        Ok(())
    }

    fn check_recursion(&self, name: &str, path: &mut Vec<String>) -> Result<(), StyleError> {
        let Some(spec) = self.entries.get(name) else {
            return Ok(());
        };
        path.push(name.to_string());
        for member in spec.tokens() {
            let member = member.to_ascii_lowercase();
            if table::lookup(&member).is_some() {
                // built-in styles always win over aliases
                continue;
            }
            if self.entries.contains_key(&member) {
                if path.iter().any(|seen| *seen == member) {
                    return Err(StyleError::RecursiveStyleReference);
                }
                self.check_recursion(&member, path)?;
            }
        }
        path.pop();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_has() {
        let theme = Theme::new().add("error", "red");
        assert!(theme.has("error"));
        assert!(theme.has("ERROR"));
        assert!(!theme.has("warning"));
        assert_eq!(theme.len(), 1);
    }

    #[test]
    fn test_names_stored_lowercase() {
        let theme = Theme::new().add("Error", "red");
        assert!(theme.get("error").is_some());
        assert!(theme.get("Error").is_none());
    }

    #[test]
    fn test_spec_tokens() {
        let single = StyleSpec::from("red");
        assert_eq!(single.tokens(), ["red".to_string()].as_slice());

        let sequence = StyleSpec::from(["bg_yellow", "white"]);
        assert_eq!(
            sequence.tokens(),
            ["bg_yellow".to_string(), "white".to_string()].as_slice()
        );
    }

    #[test]
    fn test_validate_accepts_valid_theme() {
        let theme = Theme::new()
            .add("error", "red")
            .add("warning", ["bg_yellow", "white"])
            .add("alert", ["warning", "bold"]);
        assert!(theme.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_name() {
        let theme = Theme::new().add("foo-bar", "red");
        let err = theme.validate().unwrap_err();
        assert_eq!(err.to_string(), "foo-bar is not a valid style name");
    }

    #[test]
    fn test_validate_rejects_direct_recursion() {
        let theme = Theme::new().add("foo", ["foo"]);
        assert_eq!(
            theme.validate().unwrap_err(),
            StyleError::RecursiveStyleReference
        );
    }

    #[test]
    fn test_validate_rejects_transitive_recursion() {
        let theme = Theme::new().add("a", "b").add("b", ["bold", "a"]);
        assert_eq!(
            theme.validate().unwrap_err(),
            StyleError::RecursiveStyleReference
        );
    }

    #[test]
    fn test_shadowing_alias_is_not_recursive() {
        // "white" resolves to the built-in style, never to the alias
        let theme = Theme::new().add("white", "white");
        assert!(theme.validate().is_ok());
    }

    #[test]
    fn test_unknown_members_pass_validation() {
        let theme = Theme::new().add("odd", "salmon");
        assert!(theme.validate().is_ok());
    }

    #[test]
    fn test_deserializes_from_json() {
        let theme: Theme =
            serde_json::from_str(r#"{"error": "red", "warning": ["bg_yellow", "white"]}"#)
                .unwrap();
        assert_eq!(theme.get("error"), Some(&StyleSpec::from("red")));
        assert_eq!(
            theme.get("warning"),
            Some(&StyleSpec::from(["bg_yellow", "white"]))
        );
    }

    #[test]
    fn test_canonicalized_lowercases_deserialized_keys() {
        let theme: Theme = serde_json::from_str(r#"{"Error": "red"}"#).unwrap();
        assert!(theme.get("error").is_none());
        let theme = theme.canonicalized();
        assert!(theme.get("error").is_some());
    }
}

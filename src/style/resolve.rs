//! Style-token resolution.
//!
//! Turns one style token into the ordered list of escape templates the
//! applicator folds over the text. Priority order: indexed-color syntax,
//! then the built-in table, then the active theme. A theme alias that
//! shares a built-in name is never reached, so user themes cannot override
//! the built-in styles.

use super::error::StyleError;
use super::table::{self, EscapeTemplate};
use crate::theme::Theme;

/// Resolves `token` against the built-in table and `theme`.
///
/// Theme entries expand depth-first in member order, so the returned list
/// for `{alert: [warning, bold], warning: [bg_yellow, white]}` is
/// `[bg_yellow, white, bold]`. The applicator wraps left-to-right, which
/// makes a theme sequence byte-identical to issuing the same styles as
/// successive calls.
pub(crate) fn resolve(token: &str, theme: &Theme) -> Result<Vec<EscapeTemplate>, StyleError> {
    let mut templates = Vec::new();
    resolve_into(token, theme, &mut templates)?;
    Ok(templates)
}

fn resolve_into(
    token: &str,
    theme: &Theme,
    out: &mut Vec<EscapeTemplate>,
) -> Result<(), StyleError> {
    let name = token.to_ascii_lowercase();

    if let Some(template) = indexed_color(&name)? {
        out.push(template);
        return Ok(());
    }

    if let Some(template) = table::lookup(&name) {
        out.push(template.clone());
        return Ok(());
    }

    if let Some(spec) = theme.get(&name) {
        for member in spec.tokens() {
            resolve_into(member, theme, out)?;
        }
        return Ok(());
    }

    Err(StyleError::UnknownStyle {
        name: token.to_string(),
    })
}

/// Parses the `color[N]` / `bg_color[N]` forms.
///
/// Returns `Ok(None)` when `name` is not shaped like an indexed color at
/// all, and `InvalidColorIndex` when it is but `N` is not an integer in
/// `0..=255`.
fn indexed_color(name: &str) -> Result<Option<EscapeTemplate>, StyleError> {
    let (select, rest) = if let Some(rest) = name.strip_prefix("bg_color[") {
        (48, rest)
    } else if let Some(rest) = name.strip_prefix("color[") {
        (38, rest)
    } else {
        return Ok(None);
    };

    let Some(digits) = rest.strip_suffix(']') else {
        return Ok(None);
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(StyleError::InvalidColorIndex {
            index: digits.to_string(),
        });
    }
    match digits.parse::<u64>() {
        Ok(index) if index <= 255 => Ok(Some(EscapeTemplate::indexed(select, index as u8))),
        _ => Err(StyleError::InvalidColorIndex {
            index: digits.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequences(token: &str, theme: &Theme) -> Vec<String> {
        resolve(token, theme)
            .unwrap()
            .iter()
            .map(|t| t.sequence().to_string())
            .collect()
    }

    #[test]
    fn test_resolves_literal_style() {
        let theme = Theme::new();
        assert_eq!(sequences("red", &theme), vec!["\x1b[31m"]);
    }

    #[test]
    fn test_resolution_is_case_insensitive() {
        let theme = Theme::new();
        assert_eq!(sequences("RED", &theme), sequences("red", &theme));
    }

    #[test]
    fn test_unknown_style_keeps_original_case() {
        let err = resolve("Salmon", &Theme::new()).unwrap_err();
        assert_eq!(
            err,
            StyleError::UnknownStyle {
                name: "Salmon".to_string()
            }
        );
        assert_eq!(err.to_string(), "Invalid style Salmon");
    }

    #[test]
    fn test_resolves_indexed_colors() {
        let theme = Theme::new();
        assert_eq!(sequences("color[3]", &theme), vec!["\x1b[38;5;3m"]);
        assert_eq!(sequences("bg_color[196]", &theme), vec!["\x1b[48;5;196m"]);
    }

    #[test]
    fn test_rejects_out_of_range_index() {
        let err = resolve("color[256]", &Theme::new()).unwrap_err();
        assert_eq!(
            err,
            StyleError::InvalidColorIndex {
                index: "256".to_string()
            }
        );
    }

    #[test]
    fn test_rejects_non_numeric_index() {
        let err = resolve("color[abc]", &Theme::new()).unwrap_err();
        assert_eq!(
            err,
            StyleError::InvalidColorIndex {
                index: "abc".to_string()
            }
        );
    }

    #[test]
    fn test_unclosed_bracket_is_unknown_style() {
        let err = resolve("color[3", &Theme::new()).unwrap_err();
        assert!(matches!(err, StyleError::UnknownStyle { .. }));
    }

    #[test]
    fn test_theme_alias_expands_in_order() {
        let theme = Theme::new().add("warning", ["bg_yellow", "white"]);
        assert_eq!(sequences("warning", &theme), vec!["\x1b[43m", "\x1b[37m"]);
    }

    #[test]
    fn test_nested_aliases_flatten_depth_first() {
        let theme = Theme::new()
            .add("warning", ["bg_yellow", "white"])
            .add("alert", ["warning", "bold"]);
        assert_eq!(
            sequences("alert", &theme),
            vec!["\x1b[43m", "\x1b[37m", "\x1b[1m"]
        );
    }

    #[test]
    fn test_literal_wins_over_theme_alias() {
        let theme = Theme::new().add("white", "red");
        assert_eq!(sequences("white", &theme), vec!["\x1b[37m"]);
    }

    #[test]
    fn test_indexed_color_inside_theme() {
        let theme = Theme::new().add("hot", "color[196]");
        assert_eq!(sequences("hot", &theme), vec!["\x1b[38;5;196m"]);
    }

    #[test]
    fn test_unknown_alias_member_surfaces() {
        let theme = Theme::new().add("odd", "salmon");
        let err = resolve("odd", &theme).unwrap_err();
        assert_eq!(err.to_string(), "Invalid style salmon");
    }
}

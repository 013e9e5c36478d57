//! Styling errors.

/// Error returned when a style cannot be resolved or a theme is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    /// The token names no literal style, indexed color, or theme alias.
    /// Carries the token exactly as the caller supplied it.
    UnknownStyle { name: String },
    /// A theme alias is not a valid style identifier.
    InvalidStyleName { name: String },
    /// A theme alias references itself, directly or transitively.
    RecursiveStyleReference,
    /// A 256-color index is non-numeric or outside `0..=255`.
    InvalidColorIndex { index: String },
}

impl std::fmt::Display for StyleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StyleError::UnknownStyle { name } => {
                write!(f, "Invalid style {}", name)
            }
            StyleError::InvalidStyleName { name } => {
                write!(f, "{} is not a valid style name", name)
            }
            StyleError::RecursiveStyleReference => {
                write!(f, "User style cannot reference itself.")
            }
            StyleError::InvalidColorIndex { index } => {
                write!(f, "Invalid color index {}", index)
            }
        }
    }
}

impl std::error::Error for StyleError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_style_display() {
        let err = StyleError::UnknownStyle {
            name: "foo".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid style foo");
    }

    #[test]
    fn test_invalid_style_name_display() {
        let err = StyleError::InvalidStyleName {
            name: "foo-bar".to_string(),
        };
        assert_eq!(err.to_string(), "foo-bar is not a valid style name");
    }

    #[test]
    fn test_recursive_reference_display() {
        let err = StyleError::RecursiveStyleReference;
        assert_eq!(err.to_string(), "User style cannot reference itself.");
    }

    #[test]
    fn test_invalid_color_index_display() {
        let err = StyleError::InvalidColorIndex {
            index: "256".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid color index 256");
    }
}

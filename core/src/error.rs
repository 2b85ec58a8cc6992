use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while decoding theme values or loading theme files.
///
/// The variants fall into two groups with different propagation rules:
///
/// ## Hard failures
/// Abort the load of the file that produced them. The registry logs them
/// and moves on to the next file in the directory.
/// - [`EmptyColor`], [`InvalidColorLength`], [`InvalidColorDigits`]
/// - [`FileNotFound`], [`Io`]
/// - [`MissingThemeName`]
/// - [`RegistryAlreadyInitialized`] (only from [`init_global`](crate::registry::init_global))
///
/// ## Structural issues
/// Logged and recorded on the [`LoadedTheme`](crate::loader::LoadedTheme),
/// but the loader keeps going with whatever it managed to read.
/// - [`XmlParse`], [`MissingRootTag`]
///
/// [`EmptyColor`]: ThemeError::EmptyColor
/// [`InvalidColorLength`]: ThemeError::InvalidColorLength
/// [`InvalidColorDigits`]: ThemeError::InvalidColorDigits
/// [`FileNotFound`]: ThemeError::FileNotFound
/// [`Io`]: ThemeError::Io
/// [`MissingThemeName`]: ThemeError::MissingThemeName
/// [`RegistryAlreadyInitialized`]: ThemeError::RegistryAlreadyInitialized
/// [`XmlParse`]: ThemeError::XmlParse
/// [`MissingRootTag`]: ThemeError::MissingRootTag
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("Empty color")]
    EmptyColor,

    #[error("Invalid color (bad length, \"{value}\" - must be 6 or 8)")]
    InvalidColorLength { value: String },

    #[error("Invalid color (non-hex digits in \"{value}\")")]
    InvalidColorDigits { value: String },

    #[error("The WindowTheme could not be found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Failed to read theme file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("XML parsing error in {}: {reason}", path.display())]
    XmlParse { path: PathBuf, reason: String },

    #[error("Missing <WindowTheme> tag in {}", path.display())]
    MissingRootTag { path: PathBuf },

    #[error(
        "WindowTheme in {} is missing a name. Please use <WindowTheme name=\"THEME_NAME\">",
        path.display()
    )]
    MissingThemeName { path: PathBuf },

    #[error("Window theme registry already initialized")]
    RegistryAlreadyInitialized,
}

impl ThemeError {
    /// Whether this error stops the current file from being registered.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            ThemeError::XmlParse { .. } | ThemeError::MissingRootTag { .. }
        )
    }
}

/// Result type alias for theme operations
pub type ThemeResult<T> = Result<T, ThemeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_issues_are_not_fatal() {
        let path = PathBuf::from("retro.xml");
        assert!(
            !ThemeError::XmlParse {
                path: path.clone(),
                reason: "unexpected end".to_string()
            }
            .is_fatal()
        );
        assert!(!ThemeError::MissingRootTag { path: path.clone() }.is_fatal());
        assert!(ThemeError::MissingThemeName { path }.is_fatal());
        assert!(ThemeError::EmptyColor.is_fatal());
    }

    #[test]
    fn test_color_length_message_names_value() {
        let error = ThemeError::InvalidColorLength {
            value: "ABC".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("\"ABC\""));
        assert!(message.contains("6 or 8"));
    }
}

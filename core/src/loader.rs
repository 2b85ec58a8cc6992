use crate::color::Rgba;
use crate::element;
use crate::error::{ThemeError, ThemeResult};
use crate::types::{StyleElement, Theme};
use crate::xml::{self, XmlElement};
use std::fs;
use std::path::{Path, PathBuf};

/// Root tag every theme file must use.
pub const ROOT_TAG: &str = "WindowTheme";

/// A theme read on a best-effort basis.
///
/// `issues` lists structural problems that were logged but did not stop the
/// load (malformed XML, missing root tag). An empty list means the file was
/// read cleanly.
#[derive(Debug)]
pub struct LoadedTheme {
    pub theme: Theme,
    pub issues: Vec<ThemeError>,
}

impl LoadedTheme {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Reads theme description files into [`Theme`] records.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThemeLoader;

impl ThemeLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load one theme file from disk.
    ///
    /// Structural issues are logged here. Hard failures are only returned,
    /// logging them is up to the caller.
    pub fn load(&self, path: &Path) -> ThemeResult<LoadedTheme> {
        if !path.exists() {
            return Err(ThemeError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let bytes = fs::read(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let content = String::from_utf8_lossy(&bytes);

        self.load_str(&content, path)
    }

    /// Parse theme XML that has already been read. `origin` is only used for
    /// error reporting.
    pub fn load_str(&self, content: &str, origin: &Path) -> ThemeResult<LoadedTheme> {
        let mut issues = Vec::new();
        let parsed = xml::parse(content);

        if let Some(reason) = parsed.error {
            log::error!("XML parsing error in {}:\n    {reason}", origin.display());
            issues.push(ThemeError::XmlParse {
                path: origin.to_path_buf(),
                reason,
            });
        }

        let root = parsed.document.child(ROOT_TAG);
        if root.is_none() {
            log::error!("Missing <{ROOT_TAG}> tag in {}", origin.display());
            issues.push(ThemeError::MissingRootTag {
                path: origin.to_path_buf(),
            });
        }

        let named_root = root.and_then(|r| {
            r.attribute("name")
                .filter(|name| !name.is_empty())
                .map(|name| (r, name))
        });
        let Some((root, name)) = named_root else {
            return Err(ThemeError::MissingThemeName {
                path: origin.to_path_buf(),
            });
        };

        let theme = build_theme(root, name)?;

        Ok(LoadedTheme { theme, issues })
    }
}

fn build_theme(root: &XmlElement, name: &str) -> ThemeResult<Theme> {
    let mut theme = Theme {
        name: name.to_string(),
        ..Theme::default()
    };

    if let Some(text_default) = root.child("text-default") {
        if let Some(hex) = text_default.child_text("color") {
            theme.default_text.color = Some(Rgba::decode(hex)?);
        }
        if let Some(path) = text_default.child_text("path") {
            theme.default_text.path = Some(path.to_string());
        }
    }

    // option_list falls back to the default text color unless it sets its own
    theme.option_list.color = theme.default_text.color;

    let Some(window) = root.child("window") else {
        return Ok(theme);
    };

    if let Some(hex) = window.child("spacer").and_then(|s| s.child_text("color")) {
        theme.spacer_color = Some(Rgba::decode(hex)?);
    }
    if let Some(path) = window.child("arrow").and_then(|a| a.child_text("path")) {
        theme.arrow_path = Some(path.to_string());
    }

    let regions: [(&str, &mut StyleElement); 6] = [
        ("background", &mut theme.background),
        ("title", &mut theme.title),
        ("footer", &mut theme.footer),
        ("button", &mut theme.button),
        ("option_list", &mut theme.option_list),
        ("switch", &mut theme.switch_control),
    ];
    for (tag, target) in regions {
        if let Some(node) = window.child(tag) {
            element::extract(node, target)?;
        }
    }

    Ok(theme)
}

/// Every regular file directly inside `dir`, in directory order.
///
/// A missing or unreadable directory yields no entries.
pub fn theme_files(dir: &Path) -> Vec<PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("Failed to read themes directory '{}': {e}", dir.display());
            return Vec::new();
        }
    };

    entries
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry.path()),
            Err(e) => {
                log::warn!("Failed to read directory entry in '{}': {e}", dir.display());
                None
            }
        })
        .filter(|path| path.is_file())
        .collect()
}

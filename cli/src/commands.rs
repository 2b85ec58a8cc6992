use std::path::Path;
use wintheme::{LoadedTheme, Rgba, StyleElement, Theme, ThemeLoader, ThemeRegistry, ThemeResult};

/// One theme name per line, the active one marked with `*`.
pub fn render_list(registry: &ThemeRegistry) -> String {
    let active = registry.active_name();
    let mut out = String::new();
    for name in registry.theme_names() {
        let marker = if name == active { '*' } else { ' ' };
        out.push_str(&format!("{marker} {name}\n"));
    }
    out
}

fn color(value: Option<Rgba>) -> String {
    value.map_or_else(|| "-".to_string(), |c| c.to_string())
}

fn text(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}

fn render_element(out: &mut String, name: &str, element: &StyleElement) {
    out.push_str(&format!("  {name}:\n"));
    out.push_str(&format!("    color:         {}\n", color(element.color)));
    out.push_str(&format!("    color_focused: {}\n", color(element.color_focused)));
    out.push_str(&format!("    path:          {}\n", text(element.path.as_deref())));
    out.push_str(&format!("    path_focused:  {}\n", text(element.path_focused.as_deref())));
    out.push_str(&format!("    path_selected: {}\n", text(element.path_selected.as_deref())));
    out.push_str(&format!("    alignment:     {}\n", element.alignment));
}

/// Human readable dump of every field in a theme.
pub fn render_theme(theme: &Theme) -> String {
    let mut out = String::new();
    out.push_str(&format!("WindowTheme: {}\n", theme.name));
    out.push_str("  text-default:\n");
    out.push_str(&format!("    color: {}\n", color(theme.default_text.color)));
    out.push_str(&format!("    path:  {}\n", text(theme.default_text.path.as_deref())));
    out.push_str(&format!("  spacer color: {}\n", color(theme.spacer_color)));
    out.push_str(&format!("  arrow path:   {}\n", text(theme.arrow_path.as_deref())));
    for (name, element) in theme.regions() {
        render_element(&mut out, name, element);
    }
    out
}

/// Load a single file the same way the registry would and report the result.
pub fn check_file(path: &Path) -> ThemeResult<LoadedTheme> {
    ThemeLoader::new().load(path)
}

pub fn render_check(path: &Path, result: &ThemeResult<LoadedTheme>) -> String {
    let mut out = String::new();
    match result {
        Ok(loaded) if loaded.is_clean() => {
            out.push_str(&format!("OK: {} defines theme '{}'\n", path.display(), loaded.theme.name));
        }
        Ok(loaded) => {
            out.push_str(&format!(
                "WARN: {} defines theme '{}' with {} issue(s):\n",
                path.display(),
                loaded.theme.name,
                loaded.issues.len()
            ));
            for issue in &loaded.issues {
                out.push_str(&format!("  - {issue}\n"));
            }
        }
        Err(e) => {
            out.push_str(&format!("ERROR: {e}\n"));
        }
    }
    out
}

use claims::*;
use std::fs;
use std::path::Path;
use wintheme::{Alignment, RegistrySettings, Rgba, ThemeRegistry};

fn settings_for(dir: &Path, window_theme: &str) -> RegistrySettings {
    RegistrySettings {
        window_theme: window_theme.to_string(),
        themes_dir: Some(dir.to_path_buf()),
    }
}

#[test]
fn test_configured_theme_becomes_active() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("retro.xml"),
        r#"<?xml version="1.0"?>
        <WindowTheme name="retro">
            <window>
                <background><color>112233</color></background>
            </window>
        </WindowTheme>"#,
    )
    .unwrap();

    let registry = ThemeRegistry::load(&settings_for(dir.path(), "retro"));

    let active = registry.active_theme();
    assert_eq!(active.name, "retro");
    assert_eq!(active.background.color, Some(Rgba(0x112233FF)));
}

#[test]
fn test_default_always_listed() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.xml"), r#"<WindowTheme name="a"/>"#).unwrap();
    fs::write(dir.path().join("b"), r#"<WindowTheme name="b"/>"#).unwrap();

    let registry = ThemeRegistry::load(&settings_for(dir.path(), "default"));

    let names = registry.theme_names();
    assert!(names.contains(&"default".to_string()));
    assert!(names.contains(&"a".to_string()));
    assert!(names.contains(&"b".to_string()));
}

#[test]
fn test_missing_directory_keeps_builtin_default() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");

    let registry = ThemeRegistry::load(&settings_for(&missing, "retro"));

    assert_eq!(registry.theme_names(), vec!["default".to_string()]);
    assert_eq!(registry.active_name(), "default");
}

#[test]
fn test_nameless_file_adds_nothing() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("nameless.xml"),
        "<WindowTheme><window><title><color>112233</color></title></window></WindowTheme>",
    )
    .unwrap();

    let mut registry = ThemeRegistry::new();
    let report = registry.scan_and_load(dir.path());

    assert!(report.loaded.is_empty());
    assert_eq!(report.failed.len(), 1);
    assert_eq!(registry.theme_names(), vec!["default".to_string()]);
}

#[test]
fn test_failed_switch_leaves_active_and_names_untouched() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("retro.xml"), r#"<WindowTheme name="retro"/>"#).unwrap();

    let mut registry = ThemeRegistry::load(&settings_for(dir.path(), "retro"));
    let names_before = registry.theme_names();

    assert!(!registry.set_theme("nonexistent"));
    assert_eq!(registry.active_name(), "retro");
    assert_eq!(registry.theme_names(), names_before);
    assert!(!registry.theme_names().iter().any(String::is_empty));
}

#[test]
fn test_option_list_color_defaulting() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("inherit.xml"),
        r#"<WindowTheme name="inherit">
            <text-default><color>777777</color></text-default>
            <window><option_list><path>list.png</path></option_list></window>
        </WindowTheme>"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("explicit.xml"),
        r#"<WindowTheme name="explicit">
            <text-default><color>777777</color></text-default>
            <window><option_list><color>00FF00</color></option_list></window>
        </WindowTheme>"#,
    )
    .unwrap();

    let mut registry = ThemeRegistry::new();
    registry.scan_and_load(dir.path());

    let inherit = assert_some!(registry.theme("inherit"));
    assert_eq!(inherit.option_list.color, inherit.default_text.color);
    assert_eq!(inherit.option_list.color, Some(Rgba(0x777777FF)));

    let explicit = assert_some!(registry.theme("explicit"));
    assert_eq!(explicit.option_list.color, Some(Rgba(0x00FF00FF)));
}

#[test]
fn test_malformed_file_registers_partial_theme() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("broken.xml"),
        r#"<WindowTheme name="broken"><window><footer><alignment>left</alignment></footer>"#,
    )
    .unwrap();

    let mut registry = ThemeRegistry::new();
    let report = registry.scan_and_load(dir.path());

    assert_eq!(report.loaded, vec!["broken".to_string()]);
    let broken = assert_some!(registry.theme("broken"));
    assert_eq!(broken.footer.alignment, Alignment::Left);
}

#[test]
fn test_default_theme_can_always_be_selected() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("retro.xml"), r#"<WindowTheme name="retro"/>"#).unwrap();

    let mut registry = ThemeRegistry::load(&settings_for(dir.path(), "retro"));
    assert!(registry.set_theme("default"));
    assert_eq!(registry.active_theme().background.color, Some(Rgba(0x444444FF)));
}

#[test]
fn test_bundled_sample_theme_loads_cleanly() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../themes/retro.xml");

    let loaded = assert_ok!(wintheme::ThemeLoader::new().load(&path));

    assert!(loaded.is_clean());
    let theme = loaded.theme;
    assert_eq!(theme.name, "retro");
    assert_eq!(theme.background.color, Some(Rgba(0x112233FF)));
    assert_eq!(theme.title.alignment, Alignment::Left);
    assert_eq!(theme.option_list.color, Some(Rgba(0xE0E0E0FF)));
    assert_eq!(theme.button.color_focused, Some(Rgba(0xFFCC00FF)));
    assert_eq!(theme.switch_control.alignment, Alignment::Center);
}

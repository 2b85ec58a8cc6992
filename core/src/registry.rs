use crate::error::{ThemeError, ThemeResult};
use crate::loader::{self, ThemeLoader};
use crate::settings::RegistrySettings;
use crate::types::Theme;
use once_cell::sync::OnceCell;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

// Process-wide registry for callers that don't thread their own instance through
static GLOBAL_REGISTRY: OnceCell<RwLock<ThemeRegistry>> = OnceCell::new();

/// Result of scanning a themes directory.
#[derive(Debug, Default)]
pub struct ScanReport {
    /// Names registered by this scan, in load order.
    pub loaded: Vec<String>,
    /// Files that could not be loaded.
    pub failed: Vec<(PathBuf, ThemeError)>,
}

/// Owns every loaded theme and tracks the active one.
///
/// The built-in `"default"` theme is inserted on construction and there is no
/// way to remove it, so [`active_theme`](Self::active_theme) always has
/// something valid to return. Themes are immutable once registered and are
/// handed out as shared [`Arc`] snapshots.
#[derive(Debug)]
pub struct ThemeRegistry {
    themes: BTreeMap<String, Arc<Theme>>,
    active: Arc<Theme>,
    loader: ThemeLoader,
}

impl ThemeRegistry {
    /// Registry holding only the built-in default theme, which is active.
    pub fn new() -> Self {
        let mut themes = BTreeMap::new();
        let default = Arc::new(Theme::builtin_default());
        themes.insert(default.name.clone(), Arc::clone(&default));

        Self {
            themes,
            active: default,
            loader: ThemeLoader::new(),
        }
    }

    /// Full startup sequence: seed the default, scan the themes directory,
    /// then activate the configured theme or fall back to `"default"`.
    pub fn load(settings: &RegistrySettings) -> Self {
        let mut registry = Self::new();

        match settings.resolved_themes_dir() {
            Some(dir) => {
                let report = registry.scan_and_load(&dir);
                log::info!(
                    "Loaded {} window theme(s) from {} ({} failed)",
                    report.loaded.len(),
                    dir.display(),
                    report.failed.len()
                );
            }
            None => log::warn!("Could not determine the themes directory, using built-in theme only"),
        }

        if !registry.set_theme(&settings.window_theme) {
            log::warn!(
                "Configured window theme '{}' not found, falling back to '{}'",
                settings.window_theme,
                Theme::DEFAULT_NAME
            );
            registry.set_theme(Theme::DEFAULT_NAME);
        }

        registry
    }

    /// Insert the hardcoded default theme under `"default"`.
    pub fn generate_default(&mut self) {
        self.insert(Theme::builtin_default());
    }

    /// Load every regular file in `dir` (non-recursive) as a theme.
    ///
    /// Failures are logged and collected; they never stop the scan.
    pub fn scan_and_load(&mut self, dir: &Path) -> ScanReport {
        let mut report = ScanReport::default();

        for path in loader::theme_files(dir) {
            match self.load_file(&path) {
                Ok(name) => report.loaded.push(name),
                Err(e) => report.failed.push((path, e)),
            }
        }

        report
    }

    /// Load a single theme file and register it. Returns the registered name.
    ///
    /// A theme with the same name as an existing one replaces it. Failures
    /// are logged here once and returned.
    pub fn load_file(&mut self, path: &Path) -> ThemeResult<String> {
        let loaded = self.loader.load(path).inspect_err(|e| match e {
            ThemeError::FileNotFound { .. } => log::warn!("{e}"),
            _ => log::error!("Skipping window theme {}: {e}", path.display()),
        })?;
        if !loaded.is_clean() {
            log::warn!(
                "Window theme '{}' loaded with {} issue(s) from {}",
                loaded.theme.name,
                loaded.issues.len(),
                path.display()
            );
        }
        Ok(self.insert(loaded.theme))
    }

    fn insert(&mut self, theme: Theme) -> String {
        let name = theme.name.clone();
        if self.themes.contains_key(&name) {
            log::debug!("Window theme '{name}' replaces an earlier definition");
        } else {
            log::debug!("Registered window theme '{name}'");
        }
        self.themes.insert(name.clone(), Arc::new(theme));
        name
    }

    /// Names of all registered themes, sorted.
    pub fn theme_names(&self) -> Vec<String> {
        self.themes.keys().cloned().collect()
    }

    pub fn theme(&self, name: &str) -> Option<Arc<Theme>> {
        self.themes.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.themes.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// Make `name` the active theme.
    ///
    /// Returns `false` and leaves the active theme alone when no theme with a
    /// non-empty name is registered under `name`.
    pub fn set_theme(&mut self, name: &str) -> bool {
        match self.themes.get(name) {
            Some(theme) if !theme.name.is_empty() => {
                self.active = Arc::clone(theme);
                log::info!("Switched to window theme: {name}");
                true
            }
            _ => false,
        }
    }

    pub fn active_theme(&self) -> Arc<Theme> {
        Arc::clone(&self.active)
    }

    pub fn active_name(&self) -> &str {
        &self.active.name
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the process-wide registry from explicit settings.
///
/// Must be called before the first [`global`] access; fails if the registry
/// already exists.
pub fn init_global(settings: &RegistrySettings) -> ThemeResult<()> {
    GLOBAL_REGISTRY
        .set(RwLock::new(ThemeRegistry::load(settings)))
        .map_err(|_| ThemeError::RegistryAlreadyInitialized)?;

    log::info!("Global window theme registry initialized");
    Ok(())
}

/// The process-wide registry, built with default settings on first access if
/// [`init_global`] was never called.
pub fn global() -> &'static RwLock<ThemeRegistry> {
    GLOBAL_REGISTRY.get_or_init(|| {
        log::info!("Initializing global window theme registry with default settings");
        RwLock::new(ThemeRegistry::load(&RegistrySettings::default()))
    })
}

/// Snapshot of the active theme in the global registry.
pub fn current_theme() -> Arc<Theme> {
    match global().read() {
        Ok(registry) => registry.active_theme(),
        Err(poisoned) => {
            log::warn!("Window theme registry lock poisoned, reading anyway");
            poisoned.into_inner().active_theme()
        }
    }
}

/// Switch the active theme of the global registry.
pub fn switch_theme(name: &str) -> bool {
    match global().write() {
        Ok(mut registry) => registry.set_theme(name),
        Err(poisoned) => {
            log::warn!("Window theme registry lock poisoned, switching anyway");
            poisoned.into_inner().set_theme(name)
        }
    }
}

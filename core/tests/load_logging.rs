use log::{Level, Log, Metadata, Record};
use std::fs;
use std::sync::Mutex;
use wintheme::ThemeRegistry;

struct CapturingLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for CapturingLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut records) = self.records.lock() {
            records.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CapturingLogger = CapturingLogger {
    records: Mutex::new(Vec::new()),
};

fn problems_mentioning(needle: &str) -> usize {
    LOGGER
        .records
        .lock()
        .unwrap()
        .iter()
        .filter(|(level, message)| *level <= Level::Warn && message.contains(needle))
        .count()
}

// The logger is global per test binary, so everything runs in one test
#[test]
fn test_each_failed_file_is_logged_once() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(log::LevelFilter::Trace);

    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("nameless.xml"), "<WindowTheme/>").unwrap();
    fs::write(
        dir.path().join("badcolor.xml"),
        r#"<WindowTheme name="bad"><text-default><color>XYZ</color></text-default></WindowTheme>"#,
    )
    .unwrap();

    let mut registry = ThemeRegistry::new();
    let report = registry.scan_and_load(dir.path());
    assert_eq!(report.failed.len(), 2);

    let missing = dir.path().join("missing.xml");
    assert!(registry.load_file(&missing).is_err());

    assert_eq!(problems_mentioning("nameless.xml"), 1);
    assert_eq!(problems_mentioning("badcolor.xml"), 1);
    assert_eq!(problems_mentioning("missing.xml"), 1);
}

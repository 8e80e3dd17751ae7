use day_probability::config::{ConfigError, Settings};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn settings_load_from_toml_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "ceiling = 100\ndefault_selection = 96\nshow_chart = false\nexport_file_name = \"out.csv\""
    )
    .unwrap();

    let settings = Settings::from_file(file.path()).unwrap();
    assert_eq!(settings.ceiling, 100);
    assert_eq!(settings.default_selection, 96);
    assert!(!settings.show_chart);
    assert_eq!(settings.export_file_name, "out.csv");
}

#[test]
fn malformed_toml_reports_the_path() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "ceiling = \"lots\"").unwrap();

    let err = Settings::from_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains(&file.path().display().to_string()));
}

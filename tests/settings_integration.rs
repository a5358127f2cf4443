//! Integration tests for settings files.

use std::fs;

use nextbday_config::{DayUnit, PerSize, Settings, SizeClass, TitleAlignment};
use tempfile::TempDir;

#[tokio::test]
async fn settings_load_from_json5_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nextbday.json5");

    fs::write(
        &path,
        r##"
        {
            // Settings for nextbday
            title: "Birthdays",
            title_alignment: "left",
            background_color: "#003459",
            date_replacements: { "0": "today", "1": "tomorrow" },
            day_unit: { small: "d", default: [" day", " days"] },
            entries_per_size: { small: 4, default: 6 },
            widget_padding: 12,
        }
        "##,
    )
    .unwrap();

    let settings = Settings::load_from(&path).unwrap();

    assert_eq!(settings.title, "Birthdays");
    assert_eq!(settings.title_alignment, TitleAlignment::Left);
    assert_eq!(settings.date_replacement(1), Some("tomorrow"));

    let small = settings.resolve(SizeClass::Small);
    assert_eq!(small.entries, 4);
    assert_eq!(small.day_unit, DayUnit::from("d"));
    assert_eq!(small.padding, 12.0);

    let large = settings.resolve(SizeClass::Large);
    assert_eq!(large.entries, 6);
    assert_eq!(large.day_unit.for_days(1), " day");
    assert_eq!(large.day_unit.for_days(3), " days");
    // untouched tables keep their defaults
    assert_eq!(large.title_size, 26.0);
}

#[tokio::test]
async fn settings_save_and_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.json");

    let original = Settings {
        title: "Upcoming".to_string(),
        background_color: "#FFD60A".to_string(),
        entries_per_size: PerSize::from_entries([("medium", 3), ("default", 7)]),
        ..Settings::default()
    };

    original.save_to(&path).unwrap();
    let loaded = Settings::load_from(&path).unwrap();

    assert_eq!(loaded.title, original.title);
    assert_eq!(loaded.background_color, original.background_color);
    assert_eq!(loaded.resolve(SizeClass::Medium).entries, 3);
    assert_eq!(loaded.resolve(SizeClass::ExtraLarge).entries, 7);

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["title"], "Upcoming");
}

#[tokio::test]
async fn settings_with_invalid_color_are_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nextbday.json5");
    fs::write(&path, r#"{ background_color: "navy" }"#).unwrap();

    assert!(Settings::load_from(&path).is_err());
}

#[tokio::test]
async fn missing_settings_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    assert!(Settings::load_from(dir.path().join("absent.json5")).is_err());
}

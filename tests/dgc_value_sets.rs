use hcert_toolkit::dgc::proto::{ValueSet, ValueSetItem, ValueSets};
use hcert_toolkit::dgc::value_sets::{self, MergedValueSets};

fn item(key: &str, text: &str) -> ValueSetItem {
    ValueSetItem {
        key: key.to_string(),
        display_text: text.to_string(),
    }
}

fn sets_with_tg(items: Vec<ValueSetItem>) -> ValueSets {
    ValueSets {
        tg: Some(ValueSet { items }),
        ..Default::default()
    }
}

#[test]
fn base_language_fills_bare_keys() {
    let mut merged = MergedValueSets::new();
    let sets = sets_with_tg(vec![item("840539006", "COVID-19")]);

    value_sets::merge_language(&mut merged, &sets, "en", true);

    assert_eq!(merged["tg"]["840539006"], "COVID-19");
}

#[test]
fn translations_are_added_only_when_they_differ() {
    let mut merged = MergedValueSets::new();
    value_sets::merge_language(
        &mut merged,
        &sets_with_tg(vec![item("840539006", "COVID-19"), item("123", "Measles")]),
        "en",
        true,
    );
    value_sets::merge_language(
        &mut merged,
        &sets_with_tg(vec![item("840539006", "COVID-19"), item("123", "Masern")]),
        "de",
        false,
    );

    let tg = &merged["tg"];
    // Identical German text adds nothing.
    assert!(!tg.contains_key("840539006[de]"));
    // Differing text is stored under the suffixed key.
    assert_eq!(tg["123[de]"], "Masern");
    assert_eq!(tg["123"], "Measles");
}

#[test]
fn all_seven_categories_are_merged() {
    let mut merged = MergedValueSets::new();
    let sets = ValueSets {
        tg: Some(ValueSet { items: vec![item("a", "1")] }),
        vp: Some(ValueSet { items: vec![item("b", "2")] }),
        ma: Some(ValueSet { items: vec![item("c", "3")] }),
        mp: Some(ValueSet { items: vec![item("d", "4")] }),
        tc_tt: Some(ValueSet { items: vec![item("e", "5")] }),
        tc_ma: Some(ValueSet { items: vec![item("f", "6")] }),
        tc_tr: Some(ValueSet { items: vec![item("g", "7")] }),
    };

    value_sets::merge_language(&mut merged, &sets, "en", true);

    let categories: Vec<&str> = merged.keys().map(String::as_str).collect();
    let mut expected = vec!["tg", "vp", "ma", "mp", "tcTt", "tcMa", "tcTr"];
    expected.sort_unstable();
    assert_eq!(categories, expected);
}

#[test]
fn reads_export_from_archive() {
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    let mut writer = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));
    writer
        .start_file("export.bin", SimpleFileOptions::default())
        .unwrap();
    writer.write_all(&[0x0a, 0x00]).unwrap();
    let archive = writer.finish().unwrap().into_inner();

    assert_eq!(value_sets::read_export(&archive).unwrap(), [0x0a, 0x00]);
}

#[test]
fn rejects_archive_without_export() {
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    let mut writer = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));
    writer
        .start_file("other.bin", SimpleFileOptions::default())
        .unwrap();
    writer.write_all(b"x").unwrap();
    let archive = writer.finish().unwrap().into_inner();

    assert!(value_sets::read_export(&archive).is_err());
}

#[test]
fn value_set_url_is_per_language() {
    assert_eq!(
        value_sets::value_set_url("https://example.org/version/v1/ehn-dgc", "de"),
        "https://example.org/version/v1/ehn-dgc/de/value-sets"
    );
}

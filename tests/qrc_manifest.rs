use hcert_toolkit::output::{render_qrc, write_qrc};

#[test]
fn renders_sorted_file_list() {
    let files = vec![
        "bbb.pem".to_string(),
        "aaa.pem".to_string(),
        "ccc.pem".to_string(),
    ];
    let qrc = render_qrc("/org.kde.khealthcertificate/eu-dgc/certs", &files);

    assert!(qrc.starts_with("<!--"));
    assert!(qrc.contains("SPDX-License-Identifier: CC0-1.0"));
    assert!(qrc.contains("<qresource prefix=\"/org.kde.khealthcertificate/eu-dgc/certs\">"));

    let aaa = qrc.find("<file>aaa.pem</file>").unwrap();
    let bbb = qrc.find("<file>bbb.pem</file>").unwrap();
    let ccc = qrc.find("<file>ccc.pem</file>").unwrap();
    assert!(aaa < bbb && bbb < ccc);

    assert!(qrc.ends_with("</RCC>\n"));
}

#[test]
fn deduplicates_file_names() {
    let files = vec!["same.jwk".to_string(), "same.jwk".to_string()];
    let qrc = render_qrc("/org.kde.khealthcertificate/shc/certs", &files);
    assert_eq!(qrc.matches("<file>same.jwk</file>").count(), 1);
}

#[test]
fn empty_manifest_still_has_structure() {
    let qrc = render_qrc("/org.kde.khealthcertificate/icao/certs", &[]);
    assert!(qrc.contains("<RCC>"));
    assert!(qrc.contains("</qresource>"));
    assert!(!qrc.contains("<file>"));
}

#[test]
fn writes_manifest_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("certs.qrc");
    let files = vec!["key.xml".to_string()];

    write_qrc(&path, "/org.kde.khealthcertificate/nl-coronacheck/keys", &files).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("<file>key.xml</file>"));
}

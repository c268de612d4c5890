use hcert_toolkit::dgc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TRUST_LIST_JSON: &str = r#"{"certificates":[
    {"kid":"dY8vnVdP1do=","rawData":"MIIBkTCB","country":"DE"},
    {"kid":"s9GiGPGGPmo=","rawData":"MIICmzCC","country":"AT"}
]}"#;

#[test]
fn strips_signature_line_before_json() {
    let body = format!("c2lnbmF0dXJlLWJ5dGVz\n{}", TRUST_LIST_JSON);
    let entries = dgc::parse_trust_list(&body).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].kid, "dY8vnVdP1do=");
    assert_eq!(entries[1].country.as_deref(), Some("AT"));
}

#[test]
fn rejects_body_without_json() {
    assert!(dgc::parse_trust_list("no json here").is_err());
}

#[test]
fn decode_entry_rejects_bad_base64() {
    let entry = dgc::TrustListEntry {
        kid: "dY8vnVdP1do=".to_string(),
        raw_data: "not base64!!!".to_string(),
        country: None,
    };
    assert!(dgc::decode_entry(&entry).is_err());
}

#[test]
fn decode_entry_rejects_non_certificate_payload() {
    // Valid base64, but not a DER certificate.
    let entry = dgc::TrustListEntry {
        kid: "dY8vnVdP1do=".to_string(),
        raw_data: "aGVsbG8gd29ybGQ=".to_string(),
        country: None,
    };
    assert!(dgc::decode_entry(&entry).is_err());
}

#[test]
fn pem_output_wraps_der_payload() {
    let pem = dgc::to_pem(&[0x30, 0x82, 0x01, 0x00]);
    assert!(pem.starts_with("-----BEGIN CERTIFICATE-----"));
    assert!(pem.trim_end().ends_with("-----END CERTIFICATE-----"));
}

#[tokio::test]
async fn fetches_and_parses_trust_list() {
    let server = MockServer::start().await;
    let body = format!("c2lnbmF0dXJl\n{}", TRUST_LIST_JSON);
    Mock::given(method("GET"))
        .and(path("/trustList/DSC/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    let client = reqwest::Client::new();
    let url = format!("{}/trustList/DSC/", server.uri());
    let entries = dgc::fetch_trust_list(&client, &url).await.unwrap();
    assert_eq!(entries.len(), 2);
}

#[tokio::test]
async fn fetch_fails_on_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = reqwest::Client::new();
    let url = format!("{}/trustList/DSC/", server.uri());
    assert!(dgc::fetch_trust_list(&client, &url).await.is_err());
}

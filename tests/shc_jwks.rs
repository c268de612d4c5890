use hcert_toolkit::shc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn jwks_url_normalizes_trailing_slash() {
    assert_eq!(
        shc::jwks_url("https://example.org/creds/"),
        "https://example.org/creds/.well-known/jwks.json"
    );
    assert_eq!(
        shc::jwks_url("https://example.org/creds"),
        "https://example.org/creds/.well-known/jwks.json"
    );
}

#[tokio::test]
async fn fetches_issuer_keys() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/.well-known/jwks.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "keys": [
                {
                    "kid": "3Kfdg-XwP-7gXyywtUfUADwBumDOPKMQx-iELL11W9s",
                    "kty": "EC",
                    "crv": "P-256",
                    "use": "sig",
                    "alg": "ES256",
                    "x": "11XvRWy1I2S0EyJlyf_bWfw_TQ5CJJNLw78bHXNxcgw",
                    "y": "eZXwxvO1hvCY0KucrPfKo7yAyMT6Ajc3N7OkAB6VYy8"
                }
            ]
        })))
        .mount(&server)
        .await;

    let client = reqwest::Client::new();
    let keys = shc::fetch_issuer_keys(&client, &server.uri())
        .await
        .unwrap()
        .expect("issuer publishes keys");

    assert_eq!(keys.len(), 1);
    assert_eq!(keys[0].kid, "3Kfdg-XwP-7gXyywtUfUADwBumDOPKMQx-iELL11W9s");

    // The key is passed through verbatim.
    let parsed: serde_json::Value = serde_json::from_str(&keys[0].json).unwrap();
    assert_eq!(parsed["alg"], "ES256");
}

#[tokio::test]
async fn keys_without_kid_are_skipped() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/.well-known/jwks.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "keys": [
                {"kty": "EC", "crv": "P-256"},
                {"kid": "../escape", "kty": "EC"},
                {"kid": "usable", "kty": "EC"}
            ]
        })))
        .mount(&server)
        .await;

    let client = reqwest::Client::new();
    let keys = shc::fetch_issuer_keys(&client, &server.uri())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(keys.len(), 1);
    assert_eq!(keys[0].kid, "usable");
}

#[tokio::test]
async fn missing_jwks_means_no_keys() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = reqwest::Client::new();
    let keys = shc::fetch_issuer_keys(&client, &server.uri()).await.unwrap();
    assert!(keys.is_none());
}

#[tokio::test]
async fn server_errors_are_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = reqwest::Client::new();
    assert!(shc::fetch_issuer_keys(&client, &server.uri()).await.is_err());
}

#[tokio::test]
async fn reads_vci_directory() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/vci-issuers.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "participating_issuers": [
                {"iss": "https://example.org/a", "name": "Issuer A"},
                {"iss": "https://example.org/b", "name": "Issuer B"}
            ]
        })))
        .mount(&server)
        .await;

    let client = reqwest::Client::new();
    let url = format!("{}/vci-issuers.json", server.uri());
    let issuers = shc::fetch_vci_issuers(&client, &url).await.unwrap();
    assert_eq!(issuers, ["https://example.org/a", "https://example.org/b"]);
}

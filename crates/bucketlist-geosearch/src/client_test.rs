use super::*;

fn test_client(base_url: &str) -> GeosearchClient {
    GeosearchClient::with_base_url(30, "bucketlist-test/0.1", base_url)
        .expect("client construction should not fail")
}

fn query_value(url: &Url, key: &str) -> Option<String> {
    url.query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

#[test]
fn build_url_carries_coordinate() {
    let client = test_client("https://en.wikipedia.org/w/api.php");
    let url = client.build_url(Coordinate::new(51.5, -0.125));
    assert_eq!(query_value(&url, "ggscoord").as_deref(), Some("51.5|-0.125"));
    assert!(
        url.as_str().contains("ggscoord=51.5%7C-0.125"),
        "pipe should be percent-encoded: {url}"
    );
}

#[test]
fn build_url_uses_fixed_radius_and_limit() {
    let client = test_client("https://en.wikipedia.org/w/api.php");
    let url = client.build_url(Coordinate::new(0.0, 0.0));
    assert_eq!(query_value(&url, "generator").as_deref(), Some("geosearch"));
    assert_eq!(query_value(&url, "ggsradius").as_deref(), Some("10000"));
    assert_eq!(query_value(&url, "ggslimit").as_deref(), Some("50"));
    assert_eq!(query_value(&url, "wbptterms").as_deref(), Some("description"));
    assert_eq!(query_value(&url, "format").as_deref(), Some("json"));
}

#[test]
fn build_url_keeps_base_path() {
    let client = test_client("http://127.0.0.1:8080/w/api.php");
    let url = client.build_url(Coordinate::new(1.0, 2.0));
    assert_eq!(url.path(), "/w/api.php");
    assert_eq!(url.host_str(), Some("127.0.0.1"));
}

#[test]
fn invalid_base_url_is_rejected() {
    let result = GeosearchClient::with_base_url(30, "ua", "not a url");
    assert!(matches!(
        result,
        Err(GeosearchError::InvalidBaseUrl { ref url, .. }) if url == "not a url"
    ));
}

#[test]
fn check_api_error_surfaces_error_envelope() {
    let body = serde_json::json!({
        "error": { "code": "badvalue", "info": "Unrecognized value for parameter \"ggscoord\"." }
    });
    let err = GeosearchClient::check_api_error(&body).expect_err("envelope should fail");
    assert!(matches!(
        err,
        GeosearchError::Api { ref code, ref info } if code == "badvalue" && info.contains("ggscoord")
    ));
}

#[test]
fn check_api_error_passes_regular_body() {
    let body = serde_json::json!({ "query": { "pages": {} } });
    assert!(GeosearchClient::check_api_error(&body).is_ok());
    assert!(GeosearchClient::check_api_error(&serde_json::json!([])).is_ok());
}

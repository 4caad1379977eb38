//! End-to-end resolver tests against a mock IPFS gateway.
//!
//! The gateway base is pointed at a wiremock server so `ipfs://` and
//! `template-ipfs://` URLs are fetched over real HTTP through `HttpFetcher`.

use std::time::Duration;

mod common;

use asset_resolver::{
    fetch::{FetchError, HttpFetcher, MAX_METADATA_BYTES},
    resolver::{ResolveError, Resolver},
};
use common::{HELLO_ADDRESS, HELLO_RAW_V1};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn resolver_for(server: &MockServer) -> Resolver<HttpFetcher> {
    let fetcher = HttpFetcher::new(Duration::from_secs(5)).unwrap();
    Resolver::new(format!("{}/ipfs/", server.uri()), fetcher)
}

#[tokio::test]
async fn ipfs_arc3_metadata_image_is_rewritten_to_gateway() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ipfs/bafymeta/metadata.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "name": "Asset",
            "image": "ipfs://bafy2img/img.png"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resolver = resolver_for(&server);
    let out = resolver
        .resolve_protocol("ipfs://bafymeta/metadata.json#arc3", "")
        .await
        .unwrap();

    assert_eq!(out, format!("{}/ipfs/bafy2img/img.png", server.uri()));
}

#[tokio::test]
async fn template_fetches_derived_cid_once() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/ipfs/{HELLO_RAW_V1}/")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "image": "https://cdn.example/hello.png"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resolver = resolver_for(&server);
    let out = resolver
        .resolve_protocol("template-ipfs://{ipfscid:1:raw:reserve:sha2-256}/", HELLO_ADDRESS)
        .await
        .unwrap();

    assert_eq!(out, "https://cdn.example/hello.png");
}

#[tokio::test]
async fn rejected_template_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let resolver = resolver_for(&server);
    for url in [
        "template-ipfs://{ipfscid:1:raw:reserve}/",
        "template-ipfs://{ipfscid:1:raw:reserve:sha3-256}/",
    ] {
        assert_eq!(resolver.resolve_protocol(url, HELLO_ADDRESS).await.unwrap(), url);
    }
}

#[tokio::test]
async fn non_json_metadata_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ipfs/bafymeta"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let resolver = resolver_for(&server);
    let err = resolver
        .resolve_protocol("ipfs://bafymeta#arc3", "")
        .await
        .unwrap_err();

    assert!(matches!(err, ResolveError::Fetch(FetchError::Decode { .. })));
}

#[tokio::test]
async fn oversized_metadata_is_an_error() {
    let server = MockServer::start().await;
    let mut body = String::from("{\"image\": \"");
    body.push_str(&"a".repeat(MAX_METADATA_BYTES));
    body.push_str("\"}");
    Mock::given(method("GET"))
        .and(path("/ipfs/bafybig/meta.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    let resolver = resolver_for(&server);
    let err = resolver
        .resolve_protocol("ipfs://bafybig/meta.json#arc3", "")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ResolveError::Fetch(FetchError::TooLarge { limit: MAX_METADATA_BYTES, .. })
    ));
}

#[tokio::test]
async fn missing_metadata_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let resolver = resolver_for(&server);
    let err = resolver
        .resolve_protocol("ipfs://bafygone/meta.json#arc3", "")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ResolveError::Fetch(FetchError::Status { status: 404, .. })
    ));
}

#[tokio::test]
async fn unreachable_host_is_an_error() {
    let resolver = Resolver::new(
        "https://gw.invalid/ipfs/",
        HttpFetcher::new(Duration::from_secs(2)).unwrap(),
    );
    // Port 9 (discard) on localhost is not expected to serve HTTP.
    let err = resolver
        .resolve_protocol("http://127.0.0.1:9/meta.json#arc3", "")
        .await
        .unwrap_err();

    assert!(matches!(err, ResolveError::Fetch(FetchError::Http { .. })));
}

use anyhow::Result;
use httpmock::prelude::*;
use klagen_content::{
    fetch_homepage, ContentError, ContentSource, SanityClient, SanityConfig, HOMEPAGE_QUERY,
};
use serde_json::json;
use url::Url;

fn test_config() -> SanityConfig {
    SanityConfig {
        project_id: "demo".to_string(),
        dataset: "production".to_string(),
        api_version: "2024-06-01".to_string(),
        use_cdn: true,
    }
}

fn test_client(server: &MockServer) -> SanityClient {
    SanityClient::with_base_url(
        test_config(),
        Url::parse(&server.base_url()).expect("mock server URL"),
    )
}

#[tokio::test]
async fn test_queries_the_content_api_and_unwraps_the_result() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v2024-06-01/data/query/production")
            .query_param("query", HOMEPAGE_QUERY);
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({ "result": { "heroTitle": "Halo" } }));
    });

    let client = test_client(&server);
    let value = client.fetch(HOMEPAGE_QUERY).await?;

    mock.assert();
    assert_eq!(value, Some(json!({ "heroTitle": "Halo" })));
    Ok(())
}

#[tokio::test]
async fn test_null_result_means_no_document() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/v2024-06-01/data/query/production");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({ "result": null }));
    });

    let client = test_client(&server);
    let value = client.fetch(HOMEPAGE_QUERY).await?;

    mock.assert();
    assert_eq!(value, None);
    Ok(())
}

#[tokio::test]
async fn test_http_errors_surface_as_api_errors() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/v2024-06-01/data/query/production");
        then.status(500);
    });

    let client = test_client(&server);
    let err = client.fetch(HOMEPAGE_QUERY).await.unwrap_err();

    mock.assert();
    assert!(matches!(err, ContentError::Api(_)));
}

#[tokio::test]
async fn test_end_to_end_fetch_and_normalize() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v2024-06-01/data/query/production")
            .query_param("query", HOMEPAGE_QUERY);
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({
                "result": {
                    "heroTitle": "Selamat Datang",
                    "funFactTags": ["Matematika"],
                    "heroImage": { "asset": { "_ref": "image-abc123-800x600-png" } }
                }
            }));
    });

    let client = test_client(&server);
    let homepage = fetch_homepage(&client).await?;

    mock.assert();
    assert_eq!(homepage.hero_title, "Selamat Datang");
    assert_eq!(homepage.fun_fact_tags, vec!["Matematika"]);
    assert_eq!(
        homepage.hero_image.as_ref().and_then(|image| image.asset_ref()),
        Some("image-abc123-800x600-png")
    );
    // Fields the document does not set come from the defaults.
    assert_eq!(homepage.announcement_title, "Pengumuman");
    Ok(())
}

#[tokio::test]
async fn test_end_to_end_missing_document_yields_defaults() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/v2024-06-01/data/query/production");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({ "result": null }));
    });

    let client = test_client(&server);
    let homepage = fetch_homepage(&client).await?;

    mock.assert();
    assert_eq!(homepage.hero_title, "Selamat Datang di SDN Klagen 1");
    Ok(())
}

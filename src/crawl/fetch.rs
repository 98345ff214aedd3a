// src/crawl/fetch.rs
// =============================================================================
// Loads the root page whose links are going to be checked.
//
// Anything other than a 200 response is fatal: without the page there are
// no links to crawl.
// =============================================================================

use reqwest::{Client, StatusCode};
use tracing::info;

use super::probe::get_request;
use crate::error::{HummError, Result};
use crate::links::{detach, AbsoluteUrl};

// Fetches `url` and returns the HTML body
//
// Credentials on `url` are sent as basic auth. Error messages only ever
// contain the credential-free form of the URL.
pub async fn fetch_page(client: &Client, url: &AbsoluteUrl) -> Result<String> {
    let display_url = detach(url).to_string();
    info!("fetching root page {}", display_url);

    let response = get_request(client, url)
        .send()
        .await
        .map_err(|e| HummError::RootFetch {
            url: display_url.clone(),
            source: e.without_url(),
        })?;

    if response.status() != StatusCode::OK {
        return Err(HummError::RootStatus {
            url: display_url,
            status: response.status().as_u16(),
        });
    }

    response.text().await.map_err(|e| HummError::RootFetch {
        url: display_url,
        source: e.without_url(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client() -> Client {
        Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_fetch_page_returns_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<a href=\"/about\">About</a>"))
            .mount(&server)
            .await;

        let url = AbsoluteUrl::parse(&server.uri()).unwrap();
        let body = fetch_page(&client(), &url).await.unwrap();
        assert!(body.contains("/about"));
    }

    #[tokio::test]
    async fn test_fetch_page_rejects_non_200() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let url = AbsoluteUrl::parse(&server.uri()).unwrap();
        let err = fetch_page(&client(), &url).await.unwrap_err();
        assert!(matches!(err, HummError::RootStatus { status: 503, .. }));
    }

    #[tokio::test]
    async fn test_fetch_error_hides_credentials() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let url = AbsoluteUrl::parse(&server.uri())
            .unwrap()
            .with_credentials(Some(crate::links::Credentials::new("admin", "secret")));
        let err = fetch_page(&client(), &url).await.unwrap_err();

        assert!(!err.to_string().contains("secret"));
    }
}

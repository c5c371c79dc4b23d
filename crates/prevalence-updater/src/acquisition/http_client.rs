//! Async HTTP client wrapping reqwest.
//!
//! One GET per run, bounded by a timeout. No retries and no caching: a failed
//! fetch means "no new data", never a failed run.

use crate::error::{UpdateError, UpdateResult};
use std::time::Duration;
use tracing::{debug, warn};

/// Response from an HTTP GET request.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// Original requested URL.
    pub url: String,
    /// Final URL after redirects.
    pub final_url: String,
    /// HTTP status code.
    pub status: u16,
    /// Response body as text.
    pub body: String,
}

/// HTTP client used to pull the source page.
#[derive(Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpClient {
    /// Create a client whose requests are bounded by `timeout`.
    pub fn new(timeout: Duration) -> Self {
        let ua = concat!(
            "prevalence-updater/",
            env!("CARGO_PKG_VERSION"),
            " (+report-data refresh)"
        );

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(5))
            .user_agent(ua)
            .build()
            .unwrap_or_default();

        Self { client, timeout }
    }

    /// Perform a single GET request.
    ///
    /// Transport errors, timeouts and non-2xx statuses are all errors.
    pub async fn get(&self, url: &str) -> UpdateResult<HttpResponse> {
        let r = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await?;

        let status = r.status();
        let final_url = r.url().to_string();
        if !status.is_success() {
            return Err(UpdateError::Status {
                status: status.as_u16(),
                url: final_url,
            });
        }

        let body = r.text().await?;

        Ok(HttpResponse {
            url: url.to_string(),
            final_url,
            status: status.as_u16(),
            body,
        })
    }

    /// Fetch the page markup, or an empty string if anything goes wrong.
    ///
    /// The failure is logged as a warning; callers treat empty markup as
    /// "keep the existing data".
    pub async fn fetch_markup(&self, url: &str) -> String {
        match self.get(url).await {
            Ok(resp) => {
                debug!(
                    "GET {} -> {} via {} ({} bytes)",
                    resp.url,
                    resp.status,
                    resp.final_url,
                    resp.body.len()
                );
                resp.body
            }
            Err(e) => {
                warn!("failed to fetch {url}: {e}");
                String::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_client_creation() {
        let client = HttpClient::new(Duration::from_secs(30));
        assert_eq!(client.timeout, Duration::from_secs(30));
    }

    #[tokio::test]
    async fn test_fetch_markup_swallows_connection_errors() {
        // Port 9 (discard) on localhost is not expected to accept HTTP.
        let client = HttpClient::new(Duration::from_millis(500));
        let body = client.fetch_markup("http://127.0.0.1:9/").await;
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_get_rejects_unsupported_scheme() {
        let client = HttpClient::new(Duration::from_millis(500));
        let err = client.get("ftp://example.com/file").await.unwrap_err();
        assert!(matches!(err, UpdateError::Http(_)));
    }

    #[tokio::test]
    async fn test_get_reports_request_and_final_url() {
        use wiremock::matchers::{method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/old"))
            .respond_with(
                ResponseTemplate::new(301).insert_header("location", "/new"),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/new"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<p>moved</p>"))
            .mount(&server)
            .await;

        let client = HttpClient::new(Duration::from_secs(5));
        let requested = format!("{}/old", server.uri());
        let resp = client.get(&requested).await.unwrap();
        assert_eq!(resp.url, requested);
        assert_eq!(resp.final_url, format!("{}/new", server.uri()));
        assert_eq!(resp.status, 200);
        assert_eq!(client.fetch_markup(&requested).await, "<p>moved</p>");
    }

    #[tokio::test]
    async fn test_get_rejects_non_success_status() {
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(wiremock::matchers::any())
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = HttpClient::new(Duration::from_secs(5));
        let err = client.get(&server.uri()).await.unwrap_err();
        assert!(matches!(err, UpdateError::Status { status: 503, .. }));
        assert!(client.fetch_markup(&server.uri()).await.is_empty());
    }
}

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::core::requester::Requester;

// HttpRequester implementation for Requester
pub struct HttpRequester {
    client: reqwest::Client,
}

impl HttpRequester {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder().user_agent("fxrate/0.1").build()?;
        Ok(HttpRequester { client })
    }
}

#[async_trait]
impl Requester for HttpRequester {
    async fn get(&self, url: &str, params: &[(&str, String)]) -> Result<Value> {
        debug!("Requesting {}", url);

        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(|e| anyhow!("Request error: {} for URL: {}", e, url))?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "HTTP error: {} for URL: {}",
                response.status(),
                url
            ));
        }

        let text = response.text().await?;
        serde_json::from_str(&text)
            .map_err(|e| anyhow!("Failed to parse JSON response from {}: {}", url, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_successful_get_returns_parsed_json() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/convert"))
            .and(query_param("q", "USD_EUR"))
            .and(query_param("apiKey", "spam"))
            .and(query_param("compact", "ultra"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"USD_EUR": 0.92}"#))
            .mount(&mock_server)
            .await;

        let requester = HttpRequester::new().unwrap();
        let url = format!("{}/convert", mock_server.uri());
        let params = [
            ("q", "USD_EUR".to_string()),
            ("apiKey", "spam".to_string()),
            ("compact", "ultra".to_string()),
        ];

        let data = requester.get(&url, &params).await.unwrap();
        assert_eq!(data["USD_EUR"], 0.92);
    }

    #[tokio::test]
    async fn test_error_status_fails() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/convert"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let requester = HttpRequester::new().unwrap();
        let url = format!("{}/convert", mock_server.uri());

        let result = requester.get(&url, &[]).await;
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .starts_with("HTTP error: 500 Internal Server Error")
        );
    }

    #[tokio::test]
    async fn test_malformed_body_fails() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/convert"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let requester = HttpRequester::new().unwrap();
        let url = format!("{}/convert", mock_server.uri());

        let result = requester.get(&url, &[]).await;
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to parse JSON response")
        );
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_fails() {
        // Nothing listens on this port.
        let requester = HttpRequester::new().unwrap();

        let result = requester.get("http://127.0.0.1:9/convert", &[]).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().starts_with("Request error:"));
    }
}

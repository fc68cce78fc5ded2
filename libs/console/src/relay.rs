use anyhow::{anyhow, ensure, Context};
use entity::prelude::*;
use reqwest::Client;

pub static DEFAULT_RELAY_URL: &str = "http://localhost:5000";

static GENERATE: &str = "api/generate";

pub trait Relay {
    fn generate(
        &self,
        request: GenerationRequest,
    ) -> impl std::future::Future<Output = anyhow::Result<String>> + Send;
}

#[derive(Debug, Clone)]
pub struct RelayClient {
    base_url: String,
    client: Client,
}

impl RelayClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }
}

impl Relay for RelayClient {
    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> anyhow::Result<String> {
        let response = self
            .client
            .post(format!("{}/{}", self.base_url, GENERATE))
            .json(&request)
            .send()
            .await
            .context("failed to reach relay")?;

        let status_code = response.status();
        let body = response
            .json::<GenerationResult>()
            .await
            .context("failed to parse relay response")?;

        let result = body
            .into_result()
            .map_err(|e| anyhow!("status code: {}, error: {}", status_code, e))?;
        ensure!(status_code.is_success(), "status code: {}", status_code);

        Ok(result)
    }
}

#[cfg(test)]
mod test {
    use axum::{http::StatusCode, routing::post, Json, Router};
    use serde_json::Value;
    use tokio::net::TcpListener;

    use super::*;

    async fn spawn_relay(status: StatusCode, body: &'static str) -> String {
        let router = Router::new().route(
            "/api/generate",
            post(move |Json(_): Json<Value>| async move { (status, body) }),
        );
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, router).await });
        format!("http://{}/", address)
    }

    #[tokio::test]
    async fn test_generate() {
        // Arrange
        let base_url =
            spawn_relay(StatusCode::OK, r##"{"result":"# Blueprint"}"##).await;
        let relay = RelayClient::new(&base_url);

        // Act
        let result = relay.generate(GenerationRequest::new("X")).await;

        // Assert
        assert_eq!(result.unwrap(), "# Blueprint");
    }

    #[tokio::test]
    async fn test_error_body_is_an_error() {
        let base_url = spawn_relay(
            StatusCode::INTERNAL_SERVER_ERROR,
            r#"{"error":"Failed to generate requirements"}"#,
        )
        .await;
        let relay = RelayClient::new(&base_url);

        let result = relay.generate(GenerationRequest::new("X")).await;

        assert!(result.unwrap_err().to_string().contains("500"));
    }

    #[tokio::test]
    async fn test_unparsable_body_is_an_error() {
        let base_url = spawn_relay(StatusCode::BAD_GATEWAY, "<html>").await;
        let relay = RelayClient::new(&base_url);

        let result = relay.generate(GenerationRequest::new("X")).await;

        assert!(result.is_err());
    }
}

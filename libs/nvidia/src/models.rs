use anyhow::{ensure, Context};
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE},
    Client,
};
use serde::Serialize;
use tracing::debug;

pub mod chat_completion;

pub static DEFAULT_BASE_URL: &str = "https://integrate.api.nvidia.com/v1";

/// Client for an OpenAI-compatible inference endpoint.
#[derive(Debug, Clone)]
pub struct Models {
    base_url: String,
    client: Client,
}

impl Models {
    pub fn new(base_url: &str, token: &str) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        let mut authorization =
            HeaderValue::from_str(format!("Bearer {}", token).as_str())
                .context("api key is not a valid header value")?;
        authorization.set_sensitive(true);
        headers.insert(AUTHORIZATION, authorization);

        let client = reqwest::ClientBuilder::new()
            .default_headers(headers)
            .build()
            .context("failed to build http client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn string_response<R: Serialize>(
        &self,
        request: &R,
        path: &str,
    ) -> anyhow::Result<String> {
        let body =
            serde_json::to_vec(request).context("failed to serialize body")?;
        let url = format!("{}/{}", self.base_url, path);
        debug!(task = "send", url = url.as_str());

        let response = self.client.post(url).body(body).send().await?;

        let status_code = response.status();
        let text = response.text().await;

        ensure!(
            status_code.is_success(),
            "status code: {}, response: {:?}",
            status_code,
            text
        );

        Ok(text?)
    }
}

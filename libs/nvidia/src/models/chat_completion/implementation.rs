use anyhow::Context;

use crate::models::Models;

use super::{
    ChatCompletion, ChatCompletionRequest, ChatCompletionResponse,
    CHAT_COMPLETIONS,
};

impl ChatCompletion for Models {
    async fn chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> anyhow::Result<ChatCompletionResponse> {
        let text = self.string_response(&request, CHAT_COMPLETIONS).await?;

        let response =
            serde_json::from_str(&text).context("failed to parse response")?;

        Ok(response)
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use axum::{
        http::{header::AUTHORIZATION, HeaderMap, StatusCode},
        routing::post,
        Json, Router,
    };
    use serde_json::Value;
    use tokio::{net::TcpListener, sync::Mutex};

    use super::*;
    use crate::models::chat_completion::{Message, LLAMA_3_1_70B_INSTRUCT};

    type Seen = Arc<Mutex<Vec<(Option<String>, Value)>>>;

    async fn spawn_provider(status: StatusCode, body: &'static str) -> (String, Seen) {
        let seen: Seen = Arc::new(Mutex::new(Vec::new()));
        let router = Router::new().route(
            "/v1/chat/completions",
            post({
                let seen = seen.clone();
                move |headers: HeaderMap, Json(payload): Json<Value>| {
                    let seen = seen.clone();
                    async move {
                        let authorization = headers
                            .get(AUTHORIZATION)
                            .and_then(|value| value.to_str().ok())
                            .map(str::to_string);
                        seen.lock().await.push((authorization, payload));
                        (status, body)
                    }
                }
            }),
        );

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, router).await });

        (format!("http://{}/v1", address), seen)
    }

    fn request() -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: LLAMA_3_1_70B_INSTRUCT.to_string(),
            messages: vec![Message::system("plan"), Message::user("idea")],
            temperature: 0.25,
            top_p: 0.75,
            max_tokens: 1024,
            stream: false,
        }
    }

    #[tokio::test]
    async fn test_chat_completion() {
        // Arrange
        let (base_url, seen) = spawn_provider(
            StatusCode::OK,
            r##"{"choices":[{"message":{"role":"assistant","content":"# Blueprint"}}]}"##,
        )
        .await;
        let models = Models::new(&base_url, "nvapi-test").unwrap();

        // Act
        let response = models.chat_completion(request()).await.unwrap();

        // Assert
        assert_eq!(response.first_content(), Some("# Blueprint"));
        let seen = seen.lock().await;
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0.as_deref(), Some("Bearer nvapi-test"));
        assert_eq!(seen[0].1["model"], "meta/llama-3.1-70b-instruct");
        assert_eq!(seen[0].1["stream"], false);
        assert_eq!(seen[0].1["messages"][1]["content"], "idea");
    }

    #[tokio::test]
    async fn test_error_status_is_an_error() {
        let (base_url, _) =
            spawn_provider(StatusCode::UNAUTHORIZED, r#"{"error":"bad key"}"#)
                .await;
        let models = Models::new(&base_url, "nvapi-test").unwrap();

        let response = models.chat_completion(request()).await;

        assert!(response.is_err());
    }

    #[tokio::test]
    async fn test_malformed_body_is_an_error() {
        let (base_url, _) = spawn_provider(StatusCode::OK, "not json").await;
        let models = Models::new(&base_url, "nvapi-test").unwrap();

        let response = models.chat_completion(request()).await;

        assert!(response.is_err());
    }

    #[tokio::test]
    async fn test_unreachable_provider_is_an_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        drop(listener);
        let models =
            Models::new(&format!("http://{}/v1", address), "nvapi-test")
                .unwrap();

        let response = models.chat_completion(request()).await;

        assert!(response.is_err());
    }
}

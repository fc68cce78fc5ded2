use anyhow::Context;
use entity::prelude::*;
use nvidia::models::chat_completion::{
    ChatCompletion, ChatCompletionRequest, Message,
};
use tracing::warn;

use crate::Provider;

use super::Agent;

/// Turns a raw product idea into a markdown requirements document.
pub struct BlueprintAgent<C> {
    client: C,
    provider: Provider,
}

impl<C> BlueprintAgent<C> {
    pub fn new(client: C, provider: Provider) -> Self {
        Self { client, provider }
    }

    /// The provider request for `request`. Identical inputs always produce
    /// identical requests.
    pub fn chat_request(&self, request: &GenerationRequest) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.provider.model.clone(),
            messages: vec![
                Message::system(system_prompt(request)),
                Message::user(format!(
                    r#"Here is the raw idea: "{}""#,
                    request.idea
                )),
            ],
            temperature: self.provider.temperature,
            top_p: self.provider.top_p,
            max_tokens: self.provider.max_tokens,
            stream: false,
        }
    }
}

fn system_prompt(request: &GenerationRequest) -> String {
    format!(
        r#"You are a Senior Product Manager and Tech Lead.
Turn vague product ideas into professional, actionable requirements.

Answer in Markdown using exactly this outline:
# Project Name

## 1. Problem Statement
(What problem is being solved and for whom)

## 2. Core Features (MVP)
- Feature: Description

## 3. Tech Stack Recommendation
- Frontend: ...
- Backend: ...
- Database: ...

## 4. Future Roadmap
(What to build after launch)

Tone: professional, concise, actionable.
Context: The user wants a {} for {} with {} details."#,
        request.platform, request.audience, request.depth
    )
}

impl<C> Agent for BlueprintAgent<C>
where
    C: ChatCompletion + Send + Sync,
{
    type Item = anyhow::Result<String>;

    async fn prompt(self, request: &GenerationRequest) -> Self::Item {
        let response = self
            .client
            .chat_completion(self.chat_request(request))
            .await
            .context("failed to request chat completion")?;

        if response.is_truncated() {
            warn!(task = "generate", "completion stopped at the token limit");
        }

        Ok(response
            .first_content()
            .unwrap_or(NO_RESPONSE_GENERATED)
            .to_string())
    }
}

#[cfg(test)]
mod test {
    use nvidia::models::chat_completion::{ChatCompletionResponse, Role};

    use super::*;

    struct Unused;

    impl ChatCompletion for Unused {
        async fn chat_completion(
            &self,
            _request: ChatCompletionRequest,
        ) -> anyhow::Result<ChatCompletionResponse> {
            anyhow::bail!("not called")
        }
    }

    fn request() -> GenerationRequest {
        GenerationRequest {
            idea: "A drone delivery system for medical supplies".to_string(),
            platform: PlatformType::MobileApp,
            depth: AnalysisDepth::TechnicalSpec,
            audience: Audience::Enterprise,
        }
    }

    #[test]
    fn test_chat_request_embeds_all_inputs() {
        // Arrange
        let agent = BlueprintAgent::new(Unused, Provider::default());

        // Act
        let chat = agent.chat_request(&request());

        // Assert
        assert_eq!(chat.messages.len(), 2);
        assert_eq!(chat.messages[0].role, Role::System);
        assert!(chat.messages[0].content.ends_with(
            "The user wants a Mobile App for Enterprise with Technical Spec details."
        ));
        assert_eq!(chat.messages[1].role, Role::User);
        assert_eq!(
            chat.messages[1].content,
            r#"Here is the raw idea: "A drone delivery system for medical supplies""#
        );
    }

    #[test]
    fn test_chat_request_uses_provider_settings() {
        let provider = Provider {
            model: "meta/llama-3.1-8b-instruct".to_string(),
            temperature: 0.5,
            top_p: 0.9,
            max_tokens: 512,
        };
        let agent = BlueprintAgent::new(Unused, provider);

        let chat = agent.chat_request(&request());

        assert_eq!(chat.model, "meta/llama-3.1-8b-instruct");
        assert_eq!(chat.temperature, 0.5);
        assert_eq!(chat.top_p, 0.9);
        assert_eq!(chat.max_tokens, 512);
        assert!(!chat.stream);
    }

    #[test]
    fn test_chat_request_is_deterministic() {
        let agent = BlueprintAgent::new(Unused, Provider::default());

        assert_eq!(agent.chat_request(&request()), agent.chat_request(&request()));
    }
}

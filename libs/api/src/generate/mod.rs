use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use entity::prelude::*;
use nvidia::models::chat_completion::ChatCompletion;
use tracing::{info, warn};

use crate::{
    agent::{blueprint::BlueprintAgent, Agent},
    response::{ApiResponse, IntoApiResponse},
    ApiError, ApiState,
};

/// Generate a product blueprint from a raw idea
#[utoipa::path(
    post,
    path = "/api/generate",
    request_body = GenerationRequest,
    responses(
        (status = 200, description = "Blueprint generated", body = GenerationResult),
        (status = 400, description = "Empty idea or malformed body", body = GenerationResult),
        (status = 500, description = "Provider failure", body = GenerationResult)
    )
)]
pub async fn post_generate<C>(
    State(state): State<ApiState<C>>,
    payload: Result<Json<GenerationRequest>, JsonRejection>,
) -> ApiResponse<Json<GenerationResult>>
where
    C: ChatCompletion + Clone + Send + Sync + 'static,
{
    let Json(request) = payload.map_err(|e| {
        warn!(task = "generate", error = e.body_text());
        ApiError::from_code("400-002")
    })?;

    if !request.has_idea() {
        return Err(ApiError::from_code("400-001"));
    }

    info!(
        task = "generate",
        idea = preview(&request.idea),
        platform = %request.platform,
        depth = %request.depth,
        audience = %request.audience,
    );

    let agent = BlueprintAgent::new(
        state.client.clone(),
        state.config.provider.clone(),
    );
    let result = agent.prompt(&request).await.into_response("500-001")?;

    Ok(Json(GenerationResult::success(result)))
}

fn preview(idea: &str) -> String {
    let mut preview = idea.chars().take(20).collect::<String>();
    if preview.len() < idea.len() {
        preview.push_str("...");
    }
    preview
}

use std::sync::Arc;

use anyhow::Context;
use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use entity::prelude::*;
use nvidia::models::chat_completion::{ChatCompletion, LLAMA_3_1_70B_INSTRUCT};
use serde::Deserialize;
use toml::{map::Map, Value};
use tower_http::cors::CorsLayer;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod agent;
pub mod generate;
pub mod healthz;
pub mod not_found;
mod response;

#[derive(Debug)]
pub enum ApiError {
    ClientError(String),
    NotFound(String),
    ServerError(String),
}

#[derive(Clone, Debug)]
pub struct ApiState<C> {
    client: C,
    config: Arc<Config>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub provider: Provider,
    pub cors: Cors,
}

/// Model and sampling parameters sent with every completion request.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Provider {
    pub model: String,
    pub temperature: f32,
    pub top_p: f32,
    pub max_tokens: u32,
}

impl Default for Provider {
    fn default() -> Self {
        Self {
            model: LLAMA_3_1_70B_INSTRUCT.to_string(),
            temperature: 0.2,
            top_p: 0.7,
            max_tokens: 1024,
        }
    }
}

/// Empty `allow_origins` accepts any origin.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Cors {
    pub allow_origins: Vec<String>,
}

impl Config {
    pub fn from_toml(config: Map<String, Value>) -> anyhow::Result<Self> {
        Value::Table(config)
            .try_into()
            .context("failed to parse config")
    }

    /// Reads `config_name` from the config directory, falling back to the
    /// defaults when the file does not exist.
    pub fn load(config_name: &str) -> anyhow::Result<Self> {
        let path = util::config_dir().join(config_name);
        if !path.exists() {
            info!(task = "load config", path = %path.display(), "not found, using defaults");
            return Ok(Self::default());
        }

        Self::from_toml(util::load_config_from(&path)?)
    }

    fn cors_layer(&self) -> anyhow::Result<CorsLayer> {
        if self.cors.allow_origins.is_empty() {
            return Ok(CorsLayer::permissive());
        }

        let origins = self
            .cors
            .allow_origins
            .iter()
            .map(|origin| {
                origin
                    .parse::<HeaderValue>()
                    .with_context(|| format!("invalid cors origin: {}", origin))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(CorsLayer::permissive().allow_origin(origins))
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(generate::post_generate, healthz::get_health),
    components(schemas(
        GenerationRequest,
        GenerationResult,
        PlatformType,
        AnalysisDepth,
        Audience
    )),
    tags(
        (name = "blueprint", description = "Idea to product blueprint relay")
    )
)]
struct ApiDoc;

pub fn serve<C>(client: C, config: Config) -> anyhow::Result<Router>
where
    C: ChatCompletion + Clone + Send + Sync + 'static,
{
    info!(task = "start api serving", model = config.provider.model.as_str());

    let cors = config.cors_layer()?;
    let state = ApiState {
        client,
        config: Arc::new(config),
    };

    let generate_router = Router::new()
        .route("/generate", post(generate::post_generate::<C>))
        .fallback(not_found::get_404)
        .with_state(state);

    let router = Router::new()
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", ApiDoc::openapi()),
        )
        .route("/healthz", get(healthz::get_health))
        .nest("/api", generate_router)
        .fallback(not_found::get_404)
        .layer(cors);

    Ok(router)
}

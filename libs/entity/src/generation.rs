use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::selection::{AnalysisDepth, Audience, PlatformType};

/// Placeholder returned when the provider answers without any completion.
pub static NO_RESPONSE_GENERATED: &str = "No response generated.";

/// One idea-to-blueprint request. Omitted fields take their defaults, so a
/// body without `idea`, or with a null one, deserializes with an empty idea.
#[derive(
    Debug, Default, PartialEq, Clone, Serialize, Deserialize, ToSchema,
)]
#[serde(default)]
pub struct GenerationRequest {
    #[serde(deserialize_with = "null_as_empty")]
    pub idea: String,
    #[serde(rename = "type")]
    pub platform: PlatformType,
    pub depth: AnalysisDepth,
    pub audience: Audience,
}

impl GenerationRequest {
    pub fn new(idea: impl Into<String>) -> Self {
        Self {
            idea: idea.into(),
            ..Default::default()
        }
    }

    pub fn has_idea(&self) -> bool {
        !self.idea.trim().is_empty()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Relay response body: exactly one of `result` or `error`.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum GenerationResult {
    Success { result: String },
    Failure { error: String },
}

impl GenerationResult {
    pub fn success(result: impl Into<String>) -> Self {
        Self::Success {
            result: result.into(),
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self::Failure {
            error: error.into(),
        }
    }

    pub fn into_result(self) -> Result<String, String> {
        match self {
            GenerationResult::Success { result } => Ok(result),
            GenerationResult::Failure { error } => Err(error),
        }
    }
}

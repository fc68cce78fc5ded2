use std::str::FromStr;

use entity::prelude::*;
use strum::IntoEnumIterator;

use crate::ConsoleError;

/// An input the user can focus.
#[derive(
    Debug,
    PartialEq,
    Eq,
    Clone,
    Copy,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum Field {
    Type,
    Depth,
    Audience,
    Idea,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct FormState {
    pub idea: String,
    pub platform: PlatformType,
    pub depth: AnalysisDepth,
    pub audience: Audience,
}

impl FormState {
    /// False while the idea is blank; submitting is disabled.
    pub fn is_ready(&self) -> bool {
        !self.idea.trim().is_empty()
    }

    pub fn set(&mut self, field: Field, value: &str) -> Result<(), ConsoleError> {
        let invalid = || ConsoleError::InvalidOption {
            field,
            value: value.to_string(),
        };

        match field {
            Field::Type => {
                self.platform = PlatformType::from_str(value).map_err(|_| invalid())?
            }
            Field::Depth => {
                self.depth = AnalysisDepth::from_str(value).map_err(|_| invalid())?
            }
            Field::Audience => {
                self.audience = Audience::from_str(value).map_err(|_| invalid())?
            }
            Field::Idea => self.idea = value.to_string(),
        }

        Ok(())
    }

    pub fn request(&self) -> GenerationRequest {
        GenerationRequest {
            idea: self.idea.clone(),
            platform: self.platform,
            depth: self.depth,
            audience: self.audience,
        }
    }
}

/// Choices offered for a selection field; the idea is free text.
pub fn options(field: Field) -> Vec<String> {
    match field {
        Field::Type => PlatformType::iter().map(|o| o.to_string()).collect(),
        Field::Depth => AnalysisDepth::iter().map(|o| o.to_string()).collect(),
        Field::Audience => Audience::iter().map(|o| o.to_string()).collect(),
        Field::Idea => Vec::new(),
    }
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Where the product will live.
#[derive(
    Debug,
    Default,
    PartialEq,
    Eq,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    ToSchema,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum PlatformType {
    #[default]
    #[serde(rename = "Web App")]
    #[strum(serialize = "Web App")]
    WebApp,
    #[serde(rename = "Mobile App")]
    #[strum(serialize = "Mobile App")]
    MobileApp,
    #[serde(rename = "SaaS Platform")]
    #[strum(serialize = "SaaS Platform")]
    SaasPlatform,
}

/// How detailed the generated blueprint should be.
#[derive(
    Debug,
    Default,
    PartialEq,
    Eq,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    ToSchema,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum AnalysisDepth {
    #[default]
    #[serde(rename = "Detailed")]
    #[strum(serialize = "Detailed")]
    Detailed,
    #[serde(rename = "MVP Only")]
    #[strum(serialize = "MVP Only")]
    MvpOnly,
    #[serde(rename = "Technical Spec")]
    #[strum(serialize = "Technical Spec")]
    TechnicalSpec,
}

#[derive(
    Debug,
    Default,
    PartialEq,
    Eq,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    ToSchema,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum Audience {
    #[default]
    #[serde(rename = "Startups")]
    #[strum(serialize = "Startups")]
    Startups,
    #[serde(rename = "Enterprise")]
    #[strum(serialize = "Enterprise")]
    Enterprise,
    #[serde(rename = "Developers")]
    #[strum(serialize = "Developers")]
    Developers,
}

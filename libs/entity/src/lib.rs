pub mod generation;
pub mod selection;

pub mod prelude {
    pub use crate::generation::{
        GenerationRequest, GenerationResult, NO_RESPONSE_GENERATED,
    };
    pub use crate::selection::{AnalysisDepth, Audience, PlatformType};
}

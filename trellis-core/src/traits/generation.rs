use crate::config::GenerationConfig;
use crate::errors::TrellisResult;

/// External answer generation service.
///
/// The condensed context and the configured generation parameters are
/// passed through unmodified; failures surface as
/// `ProviderError::GenerationUnavailable`.
pub trait IAnswerGenerator: Send + Sync {
    fn generate(&self, context: &str, params: &GenerationConfig) -> TrellisResult<String>;
}

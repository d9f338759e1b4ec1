use serde::{Deserialize, Serialize};

use super::{defaults, invalid};
use crate::errors::TrellisResult;

/// Parameters handed to the external generation service, unmodified.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub max_new_tokens: usize,
    pub temperature: f64,
    pub top_k: usize,
    pub top_p: f64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_new_tokens: defaults::DEFAULT_MAX_NEW_TOKENS,
            temperature: defaults::DEFAULT_TEMPERATURE,
            top_k: defaults::DEFAULT_GENERATION_TOP_K,
            top_p: defaults::DEFAULT_GENERATION_TOP_P,
        }
    }
}

impl GenerationConfig {
    pub fn validate(&self) -> TrellisResult<()> {
        if self.max_new_tokens == 0 {
            return Err(invalid("generation.max_new_tokens", "must be non-zero").into());
        }
        if self.temperature < 0.0 {
            return Err(invalid("generation.temperature", "must be >= 0").into());
        }
        if !(0.0..=1.0).contains(&self.top_p) {
            return Err(invalid("generation.top_p", "must be in [0, 1]").into());
        }
        Ok(())
    }
}

/// Configuration loading and validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config field '{field}': {reason}")]
    Invalid { field: String, reason: String },

    #[error("failed to read config file '{path}': {reason}")]
    Io { path: String, reason: String },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

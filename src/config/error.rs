use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read pleasantness config '{0}'")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("Failed to parse pleasantness config '{0}'")]
    Parse(PathBuf, #[source] serde_yaml::Error),

    #[error("Failed to parse pleasantness config")]
    ParseStr(#[from] serde_yaml::Error),
}

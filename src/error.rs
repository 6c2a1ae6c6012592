use std::path::PathBuf;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("configuration file not found in '{0}'")]
    NotFound(PathBuf),
    #[error("invalid configuration: {0}")]
    Invalid(String),
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssignError {
    #[error("class size must be at least 1, got {0}")]
    InvalidCapacity(i64),
    #[error("course '{course}' has no usable name to derive a class code from")]
    EmptyNameDerivation { course: Uuid, name: Option<String> },
    #[error("course '{course}' ran out of class sequence numbers")]
    SequenceExhausted { course: Uuid },
}

#[derive(Debug, Error)]
pub enum BackendError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

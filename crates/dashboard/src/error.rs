use skillpath_core::error::CoreError;
use skillpath_data::RepositoryError;

/// Service-level error type.
///
/// Wraps [`CoreError`] for domain failures and [`RepositoryError`] for data
/// access failures.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("Micro lesson not found: {0}")]
    LessonNotFound(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Invalid configuration read from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} has invalid value '{value}': {reason}")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },

    #[error("{var} must be set when {context}")]
    Missing {
        var: &'static str,
        context: &'static str,
    },

    #[error(transparent)]
    Core(#[from] CoreError),
}

use contracts::domain::common::{AggregateId, AggregateRoot};
use contracts::shared::maintenance::DateError;
use thiserror::Error;

/// Ошибки сервисного слоя
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },

    #[error("validation failed: {0}")]
    Validation(String),

    #[error(transparent)]
    InvalidDate(#[from] DateError),
}

impl ServiceError {
    pub fn not_found<A: AggregateRoot>(id: A::Id) -> Self {
        ServiceError::NotFound {
            entity: A::element_name(),
            id: id.as_string(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ServiceError::Validation(message.into())
    }
}

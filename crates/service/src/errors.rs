use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    /// The bare message without the variant prefix, suitable for API payloads.
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(m) | Self::NotFound(m) => m,
        }
    }
}

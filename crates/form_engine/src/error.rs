//! Error types for engine operations

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// The one refusal surfaced to users: a template keeps at least one step
    #[error("Cannot delete the last step. A form must have at least one step.")]
    LastStep,

    #[error("Form model error: {0}")]
    FormModel(#[from] form_model::FormModelError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;

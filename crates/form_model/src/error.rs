//! Error types for form model operations

use crate::StepId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormModelError {
    #[error("Unknown element type: {0}")]
    UnknownElementType(String),

    #[error("Template has no steps")]
    EmptyTemplate,

    #[error("Step {step_id} has order {found}, expected {expected}")]
    OrderMismatch {
        step_id: StepId,
        expected: u32,
        found: u32,
    },

    #[error("Duplicate identifier: {0}")]
    DuplicateId(String),

    #[error("Cannot remove the last step of a template")]
    LastStep,
}

pub type Result<T> = std::result::Result<T, FormModelError>;

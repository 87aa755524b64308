//! Structured results of engine operations

use chrono::{DateTime, Utc};
use form_model::TemplateId;
use serde::Serialize;

/// Whether an operation changed the document.
///
/// Lookups that find nothing are routine and report `Unchanged` rather than
/// an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Outcome {
    Applied,
    Unchanged,
}

impl Outcome {
    pub fn is_applied(self) -> bool {
        self == Outcome::Applied
    }
}

impl From<bool> for Outcome {
    fn from(applied: bool) -> Self {
        if applied {
            Outcome::Applied
        } else {
            Outcome::Unchanged
        }
    }
}

/// Returned by a save: the caller decides where to persist `json` and how to
/// tell the user about it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveReport {
    pub template_id: TemplateId,
    pub saved_at: DateTime<Utc>,
    pub json: String,
}

impl SaveReport {
    /// Short confirmation suitable for a toast or status bar
    pub fn message(&self) -> String {
        format!("Template {} saved at {}", self.template_id, self.saved_at.to_rfc3339())
    }
}
